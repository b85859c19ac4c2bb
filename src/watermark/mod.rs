pub(crate) mod builder;
pub(crate) mod evaluator;
pub(crate) mod slot;
