//! Pipeline errors.

use camino::Utf8PathBuf;
use file_tree::PathCollision;
use template_rewrite::RewriteError;
use thiserror::Error;

/// Errors that abort a pipeline invocation.
///
/// A single file's rewrite failure aborts the whole invocation; there is no
/// partial output. Collisions should be unreachable given the disjoint
/// extension-mapping rules and indicate an invariant violation.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The rewrite collaborator rejected a file.
    #[error("failed to rewrite {path}: {source}")]
    Rewrite {
        /// The file that failed, relative to the tree root.
        path: Utf8PathBuf,
        /// The collaborator's error, unmodified.
        #[source]
        source: RewriteError,
    },

    /// Two output entries mapped to the same path.
    #[error(transparent)]
    PathCollision(#[from] PathCollision),
}
