pub(crate) mod opcode;
pub(crate) mod opts;
pub(crate) mod puzzle;
