//! The path → content mapping and its merge rules.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use thiserror::Error;

/// Two entries mapped to the same path.
///
/// The trees this preprocessor combines are constructed over disjoint
/// extension sets, so a collision is an invariant violation rather than a
/// case to resolve.
#[derive(Debug, Error)]
#[error("path collision: {path}")]
pub struct PathCollision {
    /// The colliding relative path.
    pub path: Utf8PathBuf,
}

/// Filesystem errors while reading or writing a tree.
#[derive(Debug, Error)]
pub enum FileTreeError {
    /// A filesystem operation failed.
    #[error("io error at {path}: {source}")]
    Io {
        /// The path the operation touched.
        path: Utf8PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A path on disk was not valid UTF-8.
    #[error("non-UTF-8 path: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the offending path.
        path: String,
    },
}

/// An ordered mapping from relative file path to text content.
///
/// Paths are unique; inserting twice through [`FileTree::insert`] replaces the
/// earlier content, while [`FileTree::insert_new`] treats a duplicate as a
/// collision. Iteration order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    entries: IndexMap<Utf8PathBuf, String>,
}

impl FileTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any previous content at that path.
    pub fn insert(&mut self, path: impl Into<Utf8PathBuf>, content: impl Into<String>) {
        self.entries.insert(path.into(), content.into());
    }

    /// Inserts an entry, failing if the path is already present.
    pub fn insert_new(
        &mut self,
        path: impl Into<Utf8PathBuf>,
        content: impl Into<String>,
    ) -> Result<(), PathCollision> {
        let path = path.into();
        if self.entries.contains_key(&path) {
            return Err(PathCollision { path });
        }
        self.entries.insert(path, content.into());
        Ok(())
    }

    /// Returns the content at `path`, if present.
    pub fn get(&self, path: impl AsRef<Utf8Path>) -> Option<&str> {
        self.entries.get(path.as_ref()).map(String::as_str)
    }

    /// Returns whether `path` is present.
    pub fn contains(&self, path: impl AsRef<Utf8Path>) -> bool {
        self.entries.contains_key(path.as_ref())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Utf8Path, &str)> {
        self.entries
            .iter()
            .map(|(path, content)| (path.as_path(), content.as_str()))
    }

    /// Iterates paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &Utf8Path> {
        self.entries.keys().map(Utf8PathBuf::as_path)
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&Utf8Path, &str) -> bool) {
        self.entries
            .retain(|path, content| keep(path.as_path(), content.as_str()));
    }

    /// Disjoint union with `other`.
    pub fn merge(mut self, other: FileTree) -> Result<FileTree, PathCollision> {
        for (path, content) in other.entries {
            self.insert_new(path, content)?;
        }
        Ok(self)
    }
}

impl FromIterator<(Utf8PathBuf, String)> for FileTree {
    fn from_iter<I: IntoIterator<Item = (Utf8PathBuf, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FileTree {
    type Item = (Utf8PathBuf, String);
    type IntoIter = indexmap::map::IntoIter<Utf8PathBuf, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
