//! The tree transformation and composition pipeline.
//!
//! One input snapshot produces two derived trees with different lifecycles:
//! the rewritten-source tree (every matched file run through the template
//! rewrite collaborator) and the extracted-stylesheet tree (style blocks
//! pulled from tag-variant sources). The composer prunes empty and
//! unemitted stylesheet entries, renames both trees to their final
//! extensions, and merges them into one output tree with disjoint paths.
//!
//! # Example
//!
//! ```
//! use file_tree::FileTree;
//! use template_pipeline::Preprocessor;
//!
//! let mut tree = FileTree::new();
//! tree.insert(
//!     "foo.gjs",
//!     "<template>Hi</template>\n<style>.a{color:red}</style>",
//! );
//!
//! let preprocessor = Preprocessor::embedded("ember-source/dist/ember-template-compiler");
//! let output = preprocessor.process(&tree).unwrap();
//! assert!(output.contains("foo.js"));
//! assert_eq!(output.get("foo.css"), Some(".a{color:red}"));
//! ```

mod classify;
mod compose;
mod dispatch;
mod error;
mod extract;
mod pipeline;

pub use classify::{classify, output_path, stylesheet_path, SourceVariant};
pub use compose::compose;
pub use dispatch::rewrite_sources;
pub use error::PipelineError;
pub use extract::{extract_styles, EmittedStyles, StyleExtraction};
pub use pipeline::Preprocessor;
