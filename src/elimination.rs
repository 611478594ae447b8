//! Proposals eliminated outside this tool.
//!
//! Another stage marks a proposal as eliminated by creating a file named
//! after its tag in the elimination directory. The selection loop does not
//! consult this registry; runs only report how many proposals carry a marker.

use std::path::{Path, PathBuf};

use crate::types::Tag;

#[derive(Debug, Clone)]
pub struct EliminationRegistry {
    dir: PathBuf,
}

impl EliminationRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_eliminated(&self, tag: &Tag) -> bool {
        self.dir.join(tag.as_str()).exists()
    }

    /// Tags from `tags` that carry an elimination marker.
    pub fn eliminated<'a>(&self, tags: impl IntoIterator<Item = &'a Tag>) -> Vec<&'a Tag> {
        tags.into_iter().filter(|t| self.is_eliminated(t)).collect()
    }
}
