//! The collaborator seam: trait, output, and error types.

use crate::config::RewriteConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The byte range of one template body in the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateToken {
    /// Byte offset of the first body byte.
    pub start: usize,
    /// Byte offset one past the last body byte.
    pub end: usize,
}

/// What a rewrite produced for one file.
#[derive(Debug, Clone, Default)]
pub struct RewriteOutput {
    /// The transformed source text.
    pub output: String,
    /// Source-map data, when the collaborator supports it and the config
    /// asked for it.
    pub source_map: Option<String>,
    /// Template body positions, when the config asked for them.
    pub tokens: Vec<TemplateToken>,
}

/// Rewrite failures.
///
/// These are authoring errors in the source being rewritten. They propagate
/// to the caller unmodified; the pipeline defines no recovery or retry for
/// them.
#[derive(Debug, Clone, Error)]
pub enum RewriteError {
    /// A `<template>` was opened but never closed.
    #[error("unclosed <{tag}> starting at byte {offset}")]
    UnclosedTemplateTag {
        /// The configured tag name.
        tag: String,
        /// Byte offset of the opening tag.
        offset: usize,
    },

    /// A tagged template literal was opened but never closed.
    #[error("unterminated {identifier}`...` template starting at byte {offset}")]
    UnterminatedLiteral {
        /// The configured tag identifier.
        identifier: String,
        /// Byte offset of the opening backtick.
        offset: usize,
    },
}

/// A template rewrite collaborator.
///
/// Pure function over (source text, configuration): no I/O, no shared state,
/// so implementations can be invoked from parallel per-file passes.
pub trait TemplateRewriter: Send + Sync {
    /// Rewrites every embedded template in `source` into the intermediate
    /// call form.
    fn rewrite(&self, source: &str, config: &RewriteConfig) -> Result<RewriteOutput, RewriteError>;
}
