//! Built-in reference collaborator.
//!
//! Rewrites marker syntax into the intermediate call form without running a
//! template compiler: no scope capture, no source maps. Hosts that need
//! those plug a full compiler in behind [`TemplateRewriter`].

use crate::config::{MarkerVariant, RewriteConfig};
use crate::rewriter::{RewriteError, RewriteOutput, TemplateRewriter, TemplateToken};

/// The built-in embedded-template rewriter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRewriter;

impl TemplateRewriter for EmbeddedRewriter {
    fn rewrite(&self, source: &str, config: &RewriteConfig) -> Result<RewriteOutput, RewriteError> {
        match &config.marker {
            MarkerVariant::Tag {
                template_tag,
                template_tag_replacement,
            } => rewrite_template_tags(source, template_tag, template_tag_replacement, config),
            MarkerVariant::Literal {
                import_identifier,
                import_path,
            } => rewrite_tagged_literals(source, import_identifier, import_path, config),
        }
    }
}

/// Rewrites every `<template>…</template>` block into
/// `[<placeholder>(`…`, { strictMode: true })]`.
fn rewrite_template_tags(
    source: &str,
    tag: &str,
    placeholder: &str,
    config: &RewriteConfig,
) -> Result<RewriteOutput, RewriteError> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let mut output = String::with_capacity(source.len());
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(found) = source[cursor..].find(&open) {
        let tag_start = cursor + found;
        let body_start = tag_start + open.len();

        let body_len =
            source[body_start..]
                .find(&close)
                .ok_or_else(|| RewriteError::UnclosedTemplateTag {
                    tag: tag.to_string(),
                    offset: tag_start,
                })?;
        let body_end = body_start + body_len;

        output.push_str(&source[cursor..tag_start]);
        output.push('[');
        output.push_str(placeholder);
        output.push_str("(`");
        output.push_str(&escape_template_literal(&source[body_start..body_end]));
        output.push_str("`, { strictMode: true })]");

        if config.include_template_tokens {
            tokens.push(TemplateToken {
                start: body_start,
                end: body_end,
            });
        }

        cursor = body_end + close.len();
    }
    output.push_str(&source[cursor..]);

    Ok(RewriteOutput {
        output,
        source_map: None,
        tokens,
    })
}

/// Rewrites every `<identifier>`-tagged template literal into
/// `<identifier>(`…`, { strictMode: true })`.
///
/// Literal markers only count when the file imports the configured module
/// specifier; a file that merely mentions the identifier is left alone.
fn rewrite_tagged_literals(
    source: &str,
    identifier: &str,
    import_path: &str,
    config: &RewriteConfig,
) -> Result<RewriteOutput, RewriteError> {
    if !imports_module(source, import_path) {
        return Ok(RewriteOutput {
            output: source.to_string(),
            source_map: None,
            tokens: Vec::new(),
        });
    }

    let mut output = String::with_capacity(source.len());
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(found) = source[cursor..].find(identifier) {
        let ident_start = cursor + found;
        let ident_end = ident_start + identifier.len();

        let bounded = has_word_boundary_before(source, ident_start)
            && source[ident_end..].starts_with('`');
        if !bounded {
            output.push_str(&source[cursor..ident_end]);
            cursor = ident_end;
            continue;
        }

        let body_start = ident_end + 1;
        let body_len = find_literal_end(&source[body_start..]).ok_or_else(|| {
            RewriteError::UnterminatedLiteral {
                identifier: identifier.to_string(),
                offset: ident_end,
            }
        })?;
        let body_end = body_start + body_len;

        output.push_str(&source[cursor..ident_start]);
        output.push_str(identifier);
        output.push_str("(`");
        output.push_str(&source[body_start..body_end]);
        output.push_str("`, { strictMode: true })");

        if config.include_template_tokens {
            tokens.push(TemplateToken {
                start: body_start,
                end: body_end,
            });
        }

        cursor = body_end + 1;
    }
    output.push_str(&source[cursor..]);

    Ok(RewriteOutput {
        output,
        source_map: None,
        tokens,
    })
}

/// Escapes a raw template body so it survives inside a backtick literal.
fn escape_template_literal(body: &str) -> String {
    let mut escaped = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => escaped.push_str("\\$"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

/// Whether the byte before `offset` cannot be part of an identifier.
fn has_word_boundary_before(source: &str, offset: usize) -> bool {
    source[..offset]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_ascii_alphanumeric() && c != '_' && c != '$')
}

/// Finds the unescaped closing backtick, returning the body length.
fn find_literal_end(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Whether the source references `module` as a quoted specifier.
fn imports_module(source: &str, module: &str) -> bool {
    source.contains(&format!("'{module}'")) || source.contains(&format!("\"{module}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tag_config() -> RewriteConfig {
        RewriteConfig::new(MarkerVariant::tag(), "foo.gjs", "compiler")
    }

    fn literal_config() -> RewriteConfig {
        RewriteConfig::new(MarkerVariant::literal(), "foo.js", "compiler")
    }

    #[test]
    fn test_tag_rewrite() {
        let source = "const A = <template><Greeting /></template>;";
        let result = EmbeddedRewriter.rewrite(source, &tag_config()).unwrap();
        assert_eq!(
            result.output,
            "const A = [__GLIMMER_TEMPLATE(`<Greeting />`, { strictMode: true })];"
        );
    }

    #[test]
    fn test_tag_rewrite_multiple_blocks() {
        let source = "<template>a</template>\nclass C { <template>b</template> }";
        let result = EmbeddedRewriter.rewrite(source, &tag_config()).unwrap();
        assert_eq!(
            result.output,
            "[__GLIMMER_TEMPLATE(`a`, { strictMode: true })]\nclass C { [__GLIMMER_TEMPLATE(`b`, { strictMode: true })] }"
        );
    }

    #[test]
    fn test_tag_body_is_escaped() {
        let source = "<template>`${x}` \\n</template>";
        let result = EmbeddedRewriter.rewrite(source, &tag_config()).unwrap();
        assert_eq!(
            result.output,
            "[__GLIMMER_TEMPLATE(`\\`\\${x}\\` \\\\n`, { strictMode: true })]"
        );
    }

    #[test]
    fn test_tag_tokens_cover_body() {
        let source = "x <template>abc</template>";
        let result = EmbeddedRewriter.rewrite(source, &tag_config()).unwrap();
        assert_eq!(result.tokens, vec![TemplateToken { start: 12, end: 15 }]);
        assert_eq!(&source[12..15], "abc");
    }

    #[test]
    fn test_tag_tokens_respect_flag() {
        let mut config = tag_config();
        config.include_template_tokens = false;
        let result = EmbeddedRewriter
            .rewrite("<template>abc</template>", &config)
            .unwrap();
        assert!(result.tokens.is_empty());
    }

    #[test]
    fn test_tag_unclosed_propagates() {
        let err = EmbeddedRewriter
            .rewrite("ok\n<template>never closed", &tag_config())
            .unwrap_err();
        assert!(matches!(
            err,
            RewriteError::UnclosedTemplateTag { offset: 3, .. }
        ));
    }

    #[test]
    fn test_custom_tag_and_placeholder() {
        let config = RewriteConfig::new(
            MarkerVariant::Tag {
                template_tag: "tpl".to_string(),
                template_tag_replacement: "__TPL".to_string(),
            },
            "foo.gjs",
            "compiler",
        );
        let result = EmbeddedRewriter.rewrite("<tpl>x</tpl>", &config).unwrap();
        assert_eq!(result.output, "[__TPL(`x`, { strictMode: true })]");
    }

    #[test]
    fn test_literal_rewrite() {
        let source = "import { hbs } from 'ember-template-imports';\nconst A = hbs`<Greeting />`;";
        let result = EmbeddedRewriter.rewrite(source, &literal_config()).unwrap();
        assert_eq!(
            result.output,
            "import { hbs } from 'ember-template-imports';\nconst A = hbs(`<Greeting />`, { strictMode: true });"
        );
        assert_eq!(result.tokens.len(), 1);
    }

    #[test]
    fn test_literal_without_import_is_untouched() {
        let source = "const A = hbs`<Greeting />`;";
        let result = EmbeddedRewriter.rewrite(source, &literal_config()).unwrap();
        assert_eq!(result.output, source);
        assert!(result.tokens.is_empty());
    }

    #[test]
    fn test_literal_requires_word_boundary() {
        let source = "import 'ember-template-imports';\nconst A = thbs`x`;";
        let result = EmbeddedRewriter.rewrite(source, &literal_config()).unwrap();
        assert_eq!(result.output, source);
    }

    #[test]
    fn test_literal_escaped_backtick_stays_in_body() {
        let source = "import 'ember-template-imports';\nhbs`a \\` b`;";
        let result = EmbeddedRewriter.rewrite(source, &literal_config()).unwrap();
        assert_eq!(
            result.output,
            "import 'ember-template-imports';\nhbs(`a \\` b`, { strictMode: true });"
        );
    }

    #[test]
    fn test_literal_unterminated_propagates() {
        let source = "import 'ember-template-imports';\nhbs`never closed";
        let err = EmbeddedRewriter
            .rewrite(source, &literal_config())
            .unwrap_err();
        assert!(matches!(err, RewriteError::UnterminatedLiteral { .. }));
    }
}
