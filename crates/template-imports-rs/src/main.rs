//! template-imports-rs: embedded-template preprocessor for source trees.

mod cli;
mod run;

use clap::Parser;
use cli::{Args, OutputFormat};
use miette::Result;

fn main() -> Result<()> {
    let args = Args::parse();

    match run::run(&args) {
        Ok(summary) => {
            match args.output {
                OutputFormat::Human => {
                    if args.list {
                        for path in &summary.paths {
                            println!("{}", path);
                        }
                    }
                    println!("{}", summary.format());
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&summary)
                        .unwrap_or_else(|_| "{}".to_string());
                    println!("{}", json);
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
