use thiserror::Error;

use crate::costs::{Cost, EditOp};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{op} cost must be non-negative, got {value}")]
    NegativeCost { op: EditOp, value: Cost },
}
