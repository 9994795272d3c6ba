//! Sitegrade CLI binary entry point.
//! Resolves configuration, runs the analyzers, and prints the report.

mod cli;
mod config;
mod markup;
mod models;
mod output;
mod report;
mod script;
mod stylesheet;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Analyze {
            root,
            script,
            markup,
            stylesheet,
            output,
        } => {
            let eff = config::resolve_effective(
                root.as_deref(),
                script.as_deref(),
                markup.as_deref(),
                stylesheet.as_deref(),
                output.as_deref(),
            );
            // Friendly note if no sitegrade config was found
            if !eff.config_found && eff.output != "json" {
                eprintln!(
                    "{} {}",
                    crate::utils::note_prefix(),
                    "No sitegrade.toml found; using defaults."
                );
            }
            match report::run_analysis(&eff.root, &eff.files) {
                Some(report) => {
                    output::print_report(&report, &eff.output);
                    if report.summary.errors > 0 {
                        std::process::exit(1);
                    }
                }
                None => {
                    eprintln!(
                        "{} {}",
                        crate::utils::error_prefix(),
                        format!(
                            "No source files found under {} (looked for {}, {}, {})",
                            eff.root.to_string_lossy(),
                            eff.files.script,
                            eff.files.markup,
                            eff.files.stylesheet
                        )
                    );
                    std::process::exit(2);
                }
            }
        }
    }
}
