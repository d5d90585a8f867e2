//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Embedded-template preprocessor for source trees.
#[derive(Debug, Parser)]
#[command(name = "template-imports-rs")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory containing the source tree
    #[arg(default_value = ".")]
    pub input: Utf8PathBuf,

    /// Directory the output tree is written into
    #[arg(long = "out-dir", default_value = "dist")]
    pub out_dir: Utf8PathBuf,

    /// Module path used to resolve the template compiler at runtime
    #[arg(
        long = "template-compiler",
        default_value = "ember-source/dist/ember-template-compiler"
    )]
    pub template_compiler: Utf8PathBuf,

    /// Glob patterns to ignore
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Output format for the summary
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Print output paths without writing anything
    #[arg(long)]
    pub list: bool,
}

/// Summary format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}
