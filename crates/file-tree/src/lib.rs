//! Ordered in-memory file trees.
//!
//! A [`FileTree`] is an immutable-by-convention snapshot of a directory: an
//! ordered mapping from relative UTF-8 path to text content. The preprocessor
//! derives several trees from one input snapshot and reconciles them, so the
//! mapping preserves insertion order to keep every derived tree reproducible.

mod io;
mod tree;

pub use tree::{FileTree, FileTreeError, PathCollision};
