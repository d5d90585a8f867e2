//! Three-stage reconciliation of the derived trees.

use crate::classify::{output_path, stylesheet_path};
use crate::error::PipelineError;
use crate::extract::StyleExtraction;
use file_tree::FileTree;

/// Reconciles the rewritten-source tree with the extraction result and
/// merges them into the output tree.
///
/// Stages run in order:
/// 1. whitespace prune — drop stylesheet entries whose content trims to
///    empty, checked on the extractor's pre-rename paths;
/// 2. rename — surviving stylesheet paths to `.css`;
/// 3. emitted prune — drop any renamed path absent from the emitted set.
///    Stage 1 should already subsume this given the extractor's invariant,
///    but the emitted set is authoritative and is checked by final renamed
///    path, so both stay.
///
/// The source tree is renamed per classifier rules and the two trees are
/// merged as a union over disjoint path sets; a collision is an invariant
/// violation.
pub fn compose(
    rewritten: FileTree,
    extraction: StyleExtraction,
) -> Result<FileTree, PipelineError> {
    let StyleExtraction { mut styles, emitted } = extraction;

    styles.retain(|_, content| !content.trim().is_empty());

    let mut renamed_styles = FileTree::new();
    for (path, content) in styles {
        renamed_styles.insert_new(stylesheet_path(&path), content)?;
    }

    renamed_styles.retain(|path, _| emitted.contains(path));

    let mut renamed_sources = FileTree::new();
    for (path, content) in rewritten {
        renamed_sources.insert_new(output_path(&path), content)?;
    }

    Ok(renamed_sources.merge(renamed_styles)?)
}
