//! vue-compile - compile Vue template ASTs from the command line.
//!
//! The binary reads templates that an HTML parser already turned into JSON
//! trees, runs them through the compiler modules, and prints the render
//! data generated for every element together with any warnings.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod output;

pub use cli::{Args, OutputFormat};
pub use config::Config;
pub use error::{CliError, CliResult};
