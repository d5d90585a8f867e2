//! End-to-end pipeline tests over in-memory trees.
//!
//! These exercise the full rewrite → extract → compose path with the
//! built-in collaborator: extension renaming, stylesheet emission and
//! pruning, pass-through of out-of-glob files, and failure atomicity.

use file_tree::FileTree;
use pretty_assertions::assert_eq;
use template_pipeline::{PipelineError, Preprocessor};

fn tree(entries: &[(&str, &str)]) -> FileTree {
    let mut tree = FileTree::new();
    for (path, content) in entries {
        tree.insert(*path, *content);
    }
    tree
}

fn process(entries: &[(&str, &str)]) -> Result<FileTree, PipelineError> {
    Preprocessor::embedded("ember-source/dist/ember-template-compiler").process(&tree(entries))
}

#[test]
fn test_extension_mapping_is_deterministic() {
    let out = process(&[
        ("a.js", ""),
        ("b.ts", ""),
        ("c.gjs", ""),
        ("d.gts", ""),
        ("e.md", "# notes"),
    ])
    .unwrap();

    let paths: Vec<_> = out.paths().map(|p| p.as_str()).collect();
    assert_eq!(paths, vec!["a.js", "b.ts", "c.js", "d.ts", "e.md"]);
}

#[test]
fn test_unmatched_files_are_identical_pass_throughs() {
    let content = "<template>looks like a template but is not processed</template>";
    let out = process(&[("snippet.hbs", content)]).unwrap();
    assert_eq!(out.get("snippet.hbs"), Some(content));
}

#[test]
fn test_tag_file_with_styles() {
    let out = process(&[(
        "foo.gjs",
        "<template>Hi</template>\n<style>.a{color:red}</style>\n<style>.b{color:blue}</style>",
    )])
    .unwrap();

    assert_eq!(
        out.get("foo.js"),
        Some("[__GLIMMER_TEMPLATE(`Hi`, { strictMode: true })]\n<style>.a{color:red}</style>\n<style>.b{color:blue}</style>")
    );
    assert_eq!(out.get("foo.css"), Some(".a{color:red}\n\n.b{color:blue}"));
    assert_eq!(out.len(), 2);
}

#[test]
fn test_tag_file_without_styles() {
    let out = process(&[("bar.gjs", "<template>Hi</template>")]).unwrap();

    assert!(out.contains("bar.js"));
    assert!(!out.contains("bar.css"));
    assert_eq!(out.len(), 1);
}

#[test]
fn test_gts_never_produces_css() {
    let out = process(&[("baz.gts", "<template>Hi</template>\n<style>.a{}</style>")]).unwrap();

    assert!(out.contains("baz.ts"));
    assert!(!out.contains("baz.css"));
    assert_eq!(out.len(), 1);
}

#[test]
fn test_literal_files_never_produce_css() {
    let out = process(&[
        ("a.js", "const css = '<style>.a{}</style>';"),
        ("b.ts", "// <style>.b{}</style>"),
    ])
    .unwrap();

    assert!(!out.contains("a.css"));
    assert!(!out.contains("b.css"));
    assert_eq!(out.len(), 2);
}

#[test]
fn test_whitespace_only_styles_are_pruned() {
    let out = process(&[("ws.gjs", "<template>x</template><style>  \n\t</style>")]).unwrap();

    assert!(out.contains("ws.js"));
    assert!(!out.contains("ws.css"));
}

#[test]
fn test_literal_rewrite_end_to_end() {
    let out = process(&[(
        "comp.js",
        "import { hbs } from 'ember-template-imports';\nexport default hbs`<Greeting />`;",
    )])
    .unwrap();

    assert_eq!(
        out.get("comp.js"),
        Some("import { hbs } from 'ember-template-imports';\nexport default hbs(`<Greeting />`, { strictMode: true });")
    );
}

#[test]
fn test_rewrite_failure_aborts_the_invocation() {
    let err = process(&[
        ("good.gjs", "<template>fine</template>"),
        ("bad.gjs", "<template>never closed"),
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        PipelineError::Rewrite { path, .. } if path == "bad.gjs"
    ));
}

#[test]
fn test_rename_collision_is_an_invariant_violation() {
    let err = process(&[("foo.gjs", ""), ("foo.js", "")]).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::PathCollision(collision) if collision.path == "foo.js"
    ));
}

#[test]
fn test_nested_paths_keep_their_directories() {
    let out = process(&[(
        "app/components/card.gjs",
        "<template>c</template><style>.card{}</style>",
    )])
    .unwrap();

    assert!(out.contains("app/components/card.js"));
    assert_eq!(out.get("app/components/card.css"), Some(".card{}"));
}

#[test]
fn test_composed_tree_snapshot() {
    let out = process(&[
        (
            "foo.gjs",
            "<template>Hi</template>\n<style>.card { color: red; }</style>\n",
        ),
        ("util.js", "export const x = 1;\n"),
    ])
    .unwrap();

    let mut rendered = String::new();
    for (path, content) in out.iter() {
        rendered.push_str(&format!("=== {path} ===\n{content}\n"));
    }

    insta::assert_snapshot!(rendered, @r"
    === foo.js ===
    [__GLIMMER_TEMPLATE(`Hi`, { strictMode: true })]
    <style>.card { color: red; }</style>

    === util.js ===
    export const x = 1;

    === foo.css ===
    .card { color: red; }
    ");
}
