//! Error types for the fix pipeline.

use serde::Serialize;
use thiserror::Error;

/// Why a request produced no fixes. None of these are faults; the provider
/// reports them as an empty fix list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoFixReason {
    #[error("no enclosing method, local function, lambda or anonymous method")]
    NoEnclosingContainer,
    #[error("await expression has no operand")]
    MalformedAwaitOperand,
    #[error("enclosing member cannot be marked async")]
    UnsupportedContainerKind,
    #[error("enclosing container is already async")]
    AlreadyAsync,
    #[error("no await expression at the requested location")]
    NotAnAwait,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FixError {
    #[error("fix request was cancelled")]
    Cancelled,
    #[error("no fix: {0}")]
    NoFix(#[from] NoFixReason),
}

impl FixError {
    pub fn no_fix_reason(&self) -> Option<NoFixReason> {
        match self {
            FixError::NoFix(reason) => Some(*reason),
            FixError::Cancelled => None,
        }
    }
}
