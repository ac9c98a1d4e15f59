use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    #[error("Face '{face}' is out of range (valid: 0..=5)")]
    FaceOutOfRange { face: u8 },

    #[error("Level '{level}' is out of range (valid: 0..=30)")]
    LevelOutOfRange { level: u8 },

    #[error("Child position '{pos}' is out of range (valid: 0..=3)")]
    ChildPositionOutOfRange { pos: u8 },

    #[error("Token '{token}' is not a valid CellId token")]
    InvalidToken { token: String },

    #[error("Point must be a non-zero vector")]
    ZeroVector,

    #[error("Value '{raw:#018x}' is not a valid CellId")]
    InvalidCellId { raw: u64 },
}
