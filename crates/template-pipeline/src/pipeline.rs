//! The pipeline entry point.

use crate::compose::compose;
use crate::dispatch::rewrite_sources;
use crate::error::PipelineError;
use crate::extract::extract_styles;
use camino::Utf8PathBuf;
use file_tree::FileTree;
use template_rewrite::{EmbeddedRewriter, TemplateRewriter};

/// The embedded-template preprocessor.
///
/// Holds the rewrite collaborator and the collaborator-locator function (how
/// the host resolves the template compiler at runtime) — the single external
/// dependency injected at construction. [`Preprocessor::process`] is a pure,
/// synchronous, single-shot transformation: it either produces a complete
/// output tree or fails.
pub struct Preprocessor<R> {
    rewriter: R,
    locator: Box<dyn Fn() -> Utf8PathBuf + Send + Sync>,
}

impl Preprocessor<EmbeddedRewriter> {
    /// A preprocessor using the built-in reference collaborator and a fixed
    /// template-compiler path.
    pub fn embedded(template_compiler: impl Into<Utf8PathBuf>) -> Self {
        let path = template_compiler.into();
        Self::new(EmbeddedRewriter, move || path.clone())
    }
}

impl<R: TemplateRewriter> Preprocessor<R> {
    /// Builds a preprocessor around a collaborator and its locator.
    pub fn new(
        rewriter: R,
        locator: impl Fn() -> Utf8PathBuf + Send + Sync + 'static,
    ) -> Self {
        Self {
            rewriter,
            locator: Box::new(locator),
        }
    }

    /// Transforms one input snapshot into the output tree.
    ///
    /// The rewrite and extraction passes both read the input snapshot and are
    /// independent of each other; extraction completes in full before any
    /// pruning decision is made in composition.
    pub fn process(&self, tree: &FileTree) -> Result<FileTree, PipelineError> {
        let rewritten = rewrite_sources(tree, &self.rewriter, &*self.locator)?;
        let extraction = extract_styles(tree);
        compose(rewritten, extraction)
    }
}
