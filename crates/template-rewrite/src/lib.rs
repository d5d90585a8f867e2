//! Embedded-template rewriting: configuration, the collaborator seam, and a
//! built-in reference collaborator.
//!
//! The preprocessor turns tagged template strings and inline `<template>`
//! tags into an intermediate call form that downstream tooling can analyze
//! statically:
//!
//! ```text
//! const A = <template>Hello</template>;
//! // becomes
//! const A = [__GLIMMER_TEMPLATE(`Hello`, { strictMode: true })];
//! ```
//!
//! The actual text transformation is behind the [`TemplateRewriter`] trait so
//! a host can plug in a full template compiler. [`EmbeddedRewriter`] is the
//! built-in implementation used by the CLI and tests.
//!
//! # Example
//!
//! ```
//! use template_rewrite::{EmbeddedRewriter, MarkerVariant, RewriteConfig, TemplateRewriter};
//!
//! let config = RewriteConfig::new(
//!     MarkerVariant::tag(),
//!     "components/greeting.gjs",
//!     "ember-source/dist/ember-template-compiler",
//! );
//! let result = EmbeddedRewriter
//!     .rewrite("const A = <template>Hello</template>;", &config)
//!     .unwrap();
//! assert!(result.output.contains("__GLIMMER_TEMPLATE"));
//! ```

mod config;
mod embedded;
mod rewriter;

pub use config::{
    MarkerVariant, RewriteConfig, TEMPLATE_LITERAL_IDENTIFIER, TEMPLATE_LITERAL_MODULE_SPECIFIER,
    TEMPLATE_LOCALS_EXPORT_PATH, TEMPLATE_TAG_NAME, TEMPLATE_TAG_PLACEHOLDER,
};
pub use embedded::EmbeddedRewriter;
pub use rewriter::{RewriteError, RewriteOutput, TemplateRewriter, TemplateToken};
