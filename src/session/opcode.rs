use std::fmt;
use std::str::FromStr;

use crate::foundation::error::TracemarkError;

/// Block opcodes served by [`crate::PuzzleSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Opcode {
    #[serde(rename = "puzzle_convertpainttowatermark")]
    ConvertPaintToWatermark,
    #[serde(rename = "puzzle_showwatermark")]
    ShowWatermark,
    #[serde(rename = "puzzle_hidewatermark")]
    HideWatermark,
    #[serde(rename = "puzzle_ispaintsameaswatermark")]
    IsPaintSameAsWatermark,
    #[serde(rename = "puzzle_attemptcount")]
    AttemptCount,
    #[serde(rename = "puzzle_stepinterval")]
    StepInterval,
    #[serde(rename = "puzzle_setresolved")]
    SetResolved,
    /// Takes a `TRACKER` string argument; see [`crate::PuzzleSession::set_sprite_tracker`].
    #[serde(rename = "puzzle_setspritetracker")]
    SetSpriteTracker,
}

impl Opcode {
    pub const ALL: [Opcode; 8] = [
        Opcode::ConvertPaintToWatermark,
        Opcode::ShowWatermark,
        Opcode::HideWatermark,
        Opcode::IsPaintSameAsWatermark,
        Opcode::AttemptCount,
        Opcode::StepInterval,
        Opcode::SetResolved,
        Opcode::SetSpriteTracker,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Opcode::ConvertPaintToWatermark => "puzzle_convertpainttowatermark",
            Opcode::ShowWatermark => "puzzle_showwatermark",
            Opcode::HideWatermark => "puzzle_hidewatermark",
            Opcode::IsPaintSameAsWatermark => "puzzle_ispaintsameaswatermark",
            Opcode::AttemptCount => "puzzle_attemptcount",
            Opcode::StepInterval => "puzzle_stepinterval",
            Opcode::SetResolved => "puzzle_setresolved",
            Opcode::SetSpriteTracker => "puzzle_setspritetracker",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Opcode {
    type Err = TracemarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| TracemarkError::validation(format!("unknown opcode '{s}'")))
    }
}

/// Value reported back to the block runtime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum BlockValue {
    /// Command blocks report nothing.
    None,
    Bool(bool),
    Number(f64),
}
