//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

/// Errors of the index-addressed tree API.
///
/// The name-keyed operations report plain success/failure instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no family member at index {0:?}")]
    UnknownMember(Index),

    #[error("the root member cannot be removed: {0}")]
    RootNotRemovable(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
