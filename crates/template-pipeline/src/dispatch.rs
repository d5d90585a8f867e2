//! Per-file rewrite dispatch.

use crate::classify::{classify, SourceVariant};
use crate::error::PipelineError;
use camino::Utf8PathBuf;
use file_tree::FileTree;
use rayon::prelude::*;
use template_rewrite::{MarkerVariant, RewriteConfig, TemplateRewriter};

/// Runs the rewrite collaborator over every matched file in the tree.
///
/// Each matched file gets a fresh config: the variant chosen by the
/// classifier plus the per-file fields (relative path, collaborator
/// locator). Unmatched files keep their original content and path. The pass
/// is parallel per file; output order equals input order.
pub fn rewrite_sources<R: TemplateRewriter>(
    tree: &FileTree,
    rewriter: &R,
    locator: &(dyn Fn() -> Utf8PathBuf + Send + Sync),
) -> Result<FileTree, PipelineError> {
    let entries: Vec<_> = tree.iter().collect();

    let rewritten: Vec<(Utf8PathBuf, String)> = entries
        .par_iter()
        .map(|&(path, content)| {
            let Some(variant) = classify(path) else {
                return Ok((path.to_owned(), content.to_owned()));
            };

            let marker = match variant {
                SourceVariant::TemplateTag => MarkerVariant::tag(),
                SourceVariant::TemplateLiteral => MarkerVariant::literal(),
            };
            let config = RewriteConfig::new(marker, path.to_owned(), locator());

            let result =
                rewriter
                    .rewrite(content, &config)
                    .map_err(|source| PipelineError::Rewrite {
                        path: path.to_owned(),
                        source,
                    })?;
            Ok((path.to_owned(), result.output))
        })
        .collect::<Result<_, PipelineError>>()?;

    Ok(rewritten.into_iter().collect())
}
