//! Application layer: the session a front end drives
//!
//! This layer turns raw user input into tree operations and user-facing notices.

pub mod error;
pub mod error_ext;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use session::Session;
