//! Read, preprocess, write.

use crate::cli::Args;
use file_tree::{FileTree, FileTreeError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;
use template_pipeline::{PipelineError, Preprocessor};
use thiserror::Error;

/// Patterns skipped regardless of user configuration.
const DEFAULT_IGNORES: &[&str] = &["**/node_modules/**", "**/dist/**", "**/.git/**"];

/// Top-level run errors.
#[derive(Debug, Error)]
pub enum RunError {
    /// A user-supplied glob pattern did not parse.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// Reading the input tree or writing the output tree failed.
    #[error(transparent)]
    Tree(#[from] FileTreeError),

    /// The preprocessing pipeline failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// What one run did.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Files read from the input tree (after ignores).
    pub input_files: usize,
    /// Entries in the output tree.
    pub output_files: usize,
    /// Stylesheets extracted during this run.
    pub stylesheets: usize,
    /// Output paths in tree order.
    pub paths: Vec<String>,
    /// Whether the output tree was written to disk.
    pub written: bool,
}

impl RunSummary {
    /// Human-readable one-line summary.
    pub fn format(&self) -> String {
        format!(
            "{} files in, {} files out ({} stylesheet{} extracted){}",
            self.input_files,
            self.output_files,
            self.stylesheets,
            if self.stylesheets == 1 { "" } else { "s" },
            if self.written { "" } else { " [dry run]" },
        )
    }
}

/// Runs one preprocessing pass over the input directory.
pub fn run(args: &Args) -> Result<RunSummary, RunError> {
    let ignore_set = build_ignore_set(&args.ignore)?;

    let mut tree = FileTree::read_dir(&args.input)?;
    tree.retain(|path, _| !ignore_set.is_match(path.as_str()));
    let input_files = tree.len();
    let input_stylesheets = count_stylesheets(&tree);

    let preprocessor = Preprocessor::embedded(args.template_compiler.clone());
    let output = preprocessor.process(&tree)?;

    if !args.list {
        output.write_dir(&args.out_dir)?;
    }

    Ok(RunSummary {
        input_files,
        output_files: output.len(),
        stylesheets: count_stylesheets(&output) - input_stylesheets,
        paths: output.paths().map(|p| p.to_string()).collect(),
        written: !args.list,
    })
}

fn count_stylesheets(tree: &FileTree) -> usize {
    tree.paths()
        .filter(|path| path.extension() == Some("css"))
        .count()
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, RunError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| RunError::InvalidGlob(e.to_string()))?;
        builder.add(glob);
    }
    for pattern in DEFAULT_IGNORES {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder
        .build()
        .map_err(|e| RunError::InvalidGlob(e.to_string()))
}
