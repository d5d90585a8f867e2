//! Reading a tree from disk and writing one back.

use crate::tree::{FileTree, FileTreeError};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use walkdir::WalkDir;

impl FileTree {
    /// Reads every regular file under `root` into a tree keyed by relative
    /// path.
    ///
    /// Entries are visited in sorted order so two reads of the same directory
    /// produce identical trees. Content must be UTF-8 text.
    pub fn read_dir(root: impl AsRef<Utf8Path>) -> Result<FileTree, FileTreeError> {
        let root = root.as_ref();
        let mut tree = FileTree::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| FileTreeError::Io {
                path: root.to_owned(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = Utf8PathBuf::try_from(entry.path().to_owned()).map_err(|e| {
                FileTreeError::NonUtf8Path {
                    path: e.into_path_buf().to_string_lossy().into_owned(),
                }
            })?;
            let relative = path.strip_prefix(root).unwrap_or(&path).to_owned();

            let content = fs::read_to_string(&path).map_err(|source| FileTreeError::Io {
                path: path.clone(),
                source,
            })?;
            tree.insert(relative, content);
        }

        Ok(tree)
    }

    /// Writes every entry under `root`, creating parent directories as
    /// needed.
    pub fn write_dir(&self, root: impl AsRef<Utf8Path>) -> Result<(), FileTreeError> {
        let root = root.as_ref();

        for (relative, content) in self.iter() {
            let path = root.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| FileTreeError::Io {
                    path: parent.to_owned(),
                    source,
                })?;
            }
            fs::write(&path, content).map_err(|source| FileTreeError::Io { path, source })?;
        }

        Ok(())
    }
}
