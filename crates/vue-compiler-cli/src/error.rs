//! Errors raised while loading configuration and input files.

use std::path::PathBuf;

/// A fatal CLI error.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(vue_compile::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    #[diagnostic(code(vue_compile::json))]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown module `{0}`")]
    #[diagnostic(
        code(vue_compile::unknown_module),
        help("available modules are: class, style, model")
    )]
    UnknownModule(String),

    #[error("invalid delimiters `{0}`")]
    #[diagnostic(
        code(vue_compile::delimiters),
        help("pass the opening and closing delimiter separated by a comma, e.g. `${{,}}`")
    )]
    InvalidDelimiters(String),
}

/// Result alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
