//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sitegrade",
    version,
    about = "Sitegrade — static quality analysis for small web apps",
    long_about = "Sitegrade — a tiny, fast CLI that scans a web app's script, markup, and stylesheet text and reports metrics, heuristic issues, and a 0-100 score with a letter grade.\n\nConfiguration precedence: CLI > sitegrade.toml > defaults.",
    after_help = "Examples:\n  sitegrade analyze\n  sitegrade analyze --root ./webapp --output json\n  sitegrade analyze --script main.js --markup home.html",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current sitegrade version."
    )]
    Version,
    /// Analyze the tracked source files
    #[command(
        about = "Run the analysis",
        long_about = "Read the configured script, markup, and stylesheet files, compute metrics and heuristic issues, and print a scored report. Any error-severity finding fails the invocation.",
        after_help = "Examples:\n  sitegrade analyze --root ./webapp\n  sitegrade analyze --output json"
    )]
    Analyze {
        #[arg(long, help = "Project root (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Script file name (default: app.js)")]
        script: Option<String>,
        #[arg(long, help = "Markup file name (default: index.html)")]
        markup: Option<String>,
        #[arg(long, help = "Stylesheet file name (default: style.css)")]
        stylesheet: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
