//! Application-level errors

use thiserror::Error;

/// Application errors carry the notices shown to the user.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("Member name is required.")]
    MissingMemberName,

    #[error("Parent not found in the family tree. Please check the name.")]
    ParentNotFound(String),

    #[error("Member not found in the family tree. Please check the name.")]
    MemberNotFound(String),

    #[error("no family tree yet: enter a root member first")]
    NoTree,

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
