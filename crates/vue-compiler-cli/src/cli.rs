//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Compile Vue template ASTs and print the generated render data
#[derive(Parser, Debug, Clone)]
#[command(name = "vue-compile")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON template files or directories containing them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interpolation delimiters, comma separated (e.g. `${,}`)
    #[arg(long)]
    pub delimiters: Option<String>,

    /// Transform modules to enable (default: class, style, model)
    #[arg(long, value_delimiter = ',')]
    pub modules: Vec<String>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub output: OutputFormat,

    /// Exit with a failure code when warnings were produced
    #[arg(long)]
    pub fail_on_warning: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// One JSON object per line
    Json,
}
