//! Interactive session over one family tree.
//!
//! The session is what a front end talks to: it trims raw field input,
//! rejects empty required fields, forwards to the tree and turns the tree's
//! yes/no answers into notices. It also remembers the outline currently on
//! display so it can be written out as a snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::FamilyTree;
use crate::infrastructure::traits::FileSystem;

pub struct Session {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
    tree: Option<FamilyTree>,
    displayed: String,
}

impl Session {
    /// Create a session without a tree; call [`Session::start`] first.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self {
            fs,
            settings,
            tree: None,
            displayed: String::new(),
        }
    }

    /// Start (or start over) with a fresh tree rooted at the given person.
    ///
    /// On missing input the current tree, if any, is kept.
    #[instrument(level = "debug", skip(self))]
    pub fn start(&mut self, name: &str, birthdate: &str) -> ApplicationResult<&FamilyTree> {
        let (name, birthdate) = (name.trim(), birthdate.trim());
        if name.is_empty() || birthdate.is_empty() {
            return Err(ApplicationError::MissingFields);
        }
        if self.tree.is_some() {
            info!("discarding current tree");
        }
        self.displayed.clear();
        Ok(&*self.tree.insert(FamilyTree::new(name, birthdate)))
    }

    pub fn tree(&self) -> Option<&FamilyTree> {
        self.tree.as_ref()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn add_member(
        &mut self,
        parent_name: &str,
        child_name: &str,
        child_birthdate: &str,
    ) -> ApplicationResult<()> {
        let (parent_name, child_name, child_birthdate) =
            (parent_name.trim(), child_name.trim(), child_birthdate.trim());
        if parent_name.is_empty() || child_name.is_empty() || child_birthdate.is_empty() {
            return Err(ApplicationError::MissingFields);
        }

        let tree = self.tree.as_mut().ok_or(ApplicationError::NoTree)?;
        if tree.add_child(parent_name, child_name, child_birthdate) {
            Ok(())
        } else {
            Err(ApplicationError::ParentNotFound(parent_name.to_string()))
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete_member(&mut self, name: &str) -> ApplicationResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApplicationError::MissingMemberName);
        }

        let tree = self.tree.as_mut().ok_or(ApplicationError::NoTree)?;
        if tree.delete_member(name) {
            Ok(())
        } else {
            Err(ApplicationError::MemberNotFound(name.to_string()))
        }
    }

    /// Render the tree in the configured style and put it on display.
    pub fn visualize(&mut self) -> ApplicationResult<&str> {
        let tree = self.tree.as_ref().ok_or(ApplicationError::NoTree)?;
        self.displayed = tree.outline(self.settings.outline_style);
        Ok(&self.displayed)
    }

    /// The outline last produced by [`Session::visualize`], empty after a start.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Write what is currently on display to `path`, or to the configured
    /// snapshot location. Returns the path written.
    ///
    /// This is a picture of the display, not a save file: nothing reads it back.
    #[instrument(level = "debug", skip(self))]
    pub fn save_snapshot(&self, path: Option<&Path>) -> ApplicationResult<PathBuf> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => self.settings.snapshot_path(),
        };
        if self.fs.exists(&path) {
            debug!("overwriting {}", path.display());
        }
        self.fs
            .ensure_parent(&path)
            .with_path_context("create snapshot directory", &path)?;
        self.fs
            .write(&path, &self.displayed)
            .with_path_context("write snapshot", &path)?;
        info!("snapshot saved to {}", path.display());
        Ok(path)
    }
}
