//! Extraction of embedded `<style>` blocks from component source text.
//!
//! Blocks are matched against the *original* source, before any template
//! rewriting, so extraction never depends on what a rewrite did to literal
//! content inside templates. Matching is case-sensitive, non-greedy, spans
//! newlines, and supports no attributes on the opening tag.

use regex::Regex;
use std::sync::LazyLock;

static STYLE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<style>(.*?)</style>").unwrap());

/// Returns the inner content of every `<style>` block, in document order.
pub fn style_blocks(source: &str) -> Vec<&str> {
    STYLE_BLOCK_RE
        .captures_iter(source)
        .map(|captures| captures.get(1).map_or("", |m| m.as_str()))
        .collect()
}

/// Joins all `<style>` blocks with a blank line.
///
/// Returns `None` when the source contains no block at all. A source whose
/// blocks are all whitespace still returns `Some` — the caller's pruning
/// rules, not extraction, decide what happens to whitespace-only output.
pub fn extract_stylesheet(source: &str) -> Option<String> {
    let blocks = style_blocks(source);
    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n\n"))
    }
}
