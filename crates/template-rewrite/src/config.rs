//! Per-file rewrite configuration.

use camino::Utf8PathBuf;

/// Tag name marking inline templates in tag-variant sources.
pub const TEMPLATE_TAG_NAME: &str = "template";

/// Call-form placeholder a rewritten inline template is wrapped in.
pub const TEMPLATE_TAG_PLACEHOLDER: &str = "__GLIMMER_TEMPLATE";

/// Identifier of the tagged-template marker in literal-variant sources.
pub const TEMPLATE_LITERAL_IDENTIFIER: &str = "hbs";

/// Module the literal marker must be imported from.
pub const TEMPLATE_LITERAL_MODULE_SPECIFIER: &str = "ember-template-imports";

/// Export used to resolve template-local bindings inside the collaborator.
pub const TEMPLATE_LOCALS_EXPORT_PATH: &str = "_GlimmerSyntax.getTemplateLocals";

/// How embedded templates are marked in a given file.
///
/// Exactly one variant applies per file, chosen by extension. Carrying the
/// variant as an enum keeps dispatch explicit instead of merging fields into
/// a shared config shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerVariant {
    /// Inline `<template>` blocks (`.gjs`/`.gts`).
    Tag {
        /// Tag name delimiting a template body.
        template_tag: String,
        /// Placeholder the rewritten call form is named after.
        template_tag_replacement: String,
    },
    /// Tagged template strings (`.js`/`.ts`).
    Literal {
        /// Identifier of the template tag function.
        import_identifier: String,
        /// Module specifier the identifier must be imported from.
        import_path: String,
    },
}

impl MarkerVariant {
    /// Tag variant with the standard marker names.
    pub fn tag() -> Self {
        Self::Tag {
            template_tag: TEMPLATE_TAG_NAME.to_string(),
            template_tag_replacement: TEMPLATE_TAG_PLACEHOLDER.to_string(),
        }
    }

    /// Literal variant with the standard identifier and module specifier.
    pub fn literal() -> Self {
        Self::Literal {
            import_identifier: TEMPLATE_LITERAL_IDENTIFIER.to_string(),
            import_path: TEMPLATE_LITERAL_MODULE_SPECIFIER.to_string(),
        }
    }
}

/// The full configuration handed to a [`TemplateRewriter`] for one file.
///
/// [`TemplateRewriter`]: crate::TemplateRewriter
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Which marker syntax applies to this file.
    pub marker: MarkerVariant,
    /// Export path used to resolve template-local bindings.
    pub template_locals_export_path: String,
    /// Whether the collaborator should produce source-map data.
    pub include_source_maps: bool,
    /// Whether the collaborator should report template token positions.
    pub include_template_tokens: bool,
    /// Path of the file being rewritten, relative to the tree root.
    pub relative_path: Utf8PathBuf,
    /// Where the host resolves the template compiler at runtime.
    pub template_locals_require_path: Utf8PathBuf,
}

impl RewriteConfig {
    /// Builds a config with the standard export path and both metadata flags
    /// enabled.
    pub fn new(
        marker: MarkerVariant,
        relative_path: impl Into<Utf8PathBuf>,
        template_locals_require_path: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            marker,
            template_locals_export_path: TEMPLATE_LOCALS_EXPORT_PATH.to_string(),
            include_source_maps: true,
            include_template_tokens: true,
            relative_path: relative_path.into(),
            template_locals_require_path: template_locals_require_path.into(),
        }
    }
}
