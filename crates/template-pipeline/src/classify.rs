//! Extension classification and the final-extension rename table.
//!
//! The processing set is `**/*.{js,gjs,ts,gts}`; everything else is left
//! untouched and joins no derived tree. Matching is case-sensitive and total:
//! every function here is defined for every path.

use camino::{Utf8Path, Utf8PathBuf};

/// Which rewrite configuration variant applies to a matched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceVariant {
    /// Inline `<template>` blocks (`.gjs`, `.gts`).
    TemplateTag,
    /// Tagged template literals (`.js`, `.ts`).
    TemplateLiteral,
}

/// Classifies a path, returning `None` for files outside the processing set.
pub fn classify(path: &Utf8Path) -> Option<SourceVariant> {
    match path.extension()? {
        "gjs" | "gts" => Some(SourceVariant::TemplateTag),
        "js" | "ts" => Some(SourceVariant::TemplateLiteral),
        _ => None,
    }
}

/// Maps a source path to its final output path.
///
/// Tag-carrying extensions rename to their plain sibling (`.gjs → .js`,
/// `.gts → .ts`); everything else passes through unchanged.
pub fn output_path(path: &Utf8Path) -> Utf8PathBuf {
    match path.extension() {
        Some("gjs") => path.with_extension("js"),
        Some("gts") => path.with_extension("ts"),
        _ => path.to_owned(),
    }
}

/// Maps a tag-variant source path to its stylesheet path (same stem,
/// `.css`); everything else passes through unchanged.
pub fn stylesheet_path(path: &Utf8Path) -> Utf8PathBuf {
    match path.extension() {
        Some("gjs") | Some("gts") => path.with_extension("css"),
        _ => path.to_owned(),
    }
}
