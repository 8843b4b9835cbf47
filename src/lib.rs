//! Build, prune and render a family tree.
//!
//! The [`domain::FamilyTree`] is the whole core: a rooted tree of named
//! individuals with add, delete, find and render. Everything else is a front
//! end driving it through [`application::Session`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
