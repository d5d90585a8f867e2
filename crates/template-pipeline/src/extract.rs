//! The stylesheet extraction pass.

use crate::classify::stylesheet_path;
use camino::{Utf8Path, Utf8PathBuf};
use file_tree::FileTree;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use style_extract::extract_stylesheet;

/// The set of final (`.css`) paths for which extraction found at least one
/// style block.
///
/// Built in one pass by [`extract_styles`] and read-only afterwards; the
/// composer consults it but never mutates it.
#[derive(Debug, Default)]
pub struct EmittedStyles {
    paths: FxHashSet<Utf8PathBuf>,
}

impl EmittedStyles {
    fn insert(&mut self, path: Utf8PathBuf) {
        self.paths.insert(path);
    }

    /// Whether `path` (a final, renamed stylesheet path) was emitted.
    pub fn contains(&self, path: impl AsRef<Utf8Path>) -> bool {
        self.paths.contains(path.as_ref())
    }

    /// Number of emitted stylesheet paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns whether no stylesheet was emitted.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// The result of the extraction pass: the raw stylesheet tree (pre-rename
/// paths, content possibly empty) plus the emitted-path set.
#[derive(Debug)]
pub struct StyleExtraction {
    /// Stylesheet content keyed by the *source* (`.gjs`) path.
    pub styles: FileTree,
    /// Final paths that produced at least one block.
    pub emitted: EmittedStyles,
}

/// Extracts stylesheets from every `.gjs` file in the input snapshot.
///
/// Runs against the original, pre-rewrite text: rewriting may alter literal
/// content inside templates, so extraction must not depend on it. Files with
/// no style block still map to an entry (empty content) so the composer's
/// pruning stages see them; only files with at least one block join the
/// emitted set, recorded under their final `.css` path.
pub fn extract_styles(tree: &FileTree) -> StyleExtraction {
    let sources: Vec<_> = tree
        .iter()
        .filter(|(path, _)| path.extension() == Some("gjs"))
        .collect();

    let extracted: Vec<(Utf8PathBuf, Option<String>)> = sources
        .par_iter()
        .map(|&(path, content)| (path.to_owned(), extract_stylesheet(content)))
        .collect();

    let mut styles = FileTree::new();
    let mut emitted = EmittedStyles::default();
    for (path, stylesheet) in extracted {
        match stylesheet {
            Some(content) => {
                emitted.insert(stylesheet_path(&path));
                styles.insert(path, content);
            }
            None => styles.insert(path, String::new()),
        }
    }

    StyleExtraction { styles, emitted }
}
