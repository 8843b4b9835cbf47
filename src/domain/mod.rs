//! Domain layer: the family tree and its outlines
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod render;
pub mod tree;

pub use arena::{FamilyArena, Individual, MemberNode};
pub use error::{DomainError, DomainResult};
pub use generational_arena::Index;
pub use render::OutlineStyle;
pub use tree::FamilyTree;
