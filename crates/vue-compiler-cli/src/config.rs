//! Configuration loading and management.

use crate::cli::Args;
use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vue_diagnostics::WarnHandler;
use vue_template_compiler::modules::find_module;
use vue_template_compiler::{CompilerOptions, Delimiters, Module, WEB_MODULES};

/// Contents of a `--config` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    /// Opening and closing interpolation delimiters.
    #[serde(default)]
    pub delimiters: Option<[String; 2]>,
    /// Names of the transform modules to enable, in order.
    #[serde(default)]
    pub modules: Option<Vec<String>>,
}

impl ConfigFile {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&source).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Files and directories to compile.
    pub inputs: Vec<PathBuf>,
    /// Transform modules, in registration order.
    pub modules: Vec<Module>,
    /// Custom interpolation delimiters.
    pub delimiters: Option<Delimiters>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            modules: WEB_MODULES.to_vec(),
            delimiters: None,
        }
    }
}

impl Config {
    /// Load configuration from CLI arguments and the optional config file.
    ///
    /// Command-line flags take precedence over the file.
    pub fn load(args: &Args) -> CliResult<Self> {
        let file = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let module_names = if args.modules.is_empty() {
            file.modules
        } else {
            Some(args.modules.clone())
        };
        let modules = match module_names {
            Some(names) => resolve_modules(&names)?,
            None => WEB_MODULES.to_vec(),
        };

        let delimiters = match &args.delimiters {
            Some(raw) => Some(parse_delimiters(raw)?),
            None => file.delimiters.map(|[open, close]| (open, close)),
        };

        tracing::debug!(
            modules = ?modules.iter().map(|m| m.name).collect::<Vec<_>>(),
            delimiters = ?delimiters,
            "loaded configuration"
        );

        Ok(Self {
            inputs: args.paths.clone(),
            modules,
            delimiters,
        })
    }

    /// Compiler options for one compilation, reporting to `warn`.
    pub fn compiler_options(&self, warn: Arc<dyn WarnHandler>) -> CompilerOptions {
        let options = CompilerOptions::new()
            .with_modules(self.modules.clone())
            .with_warn(warn);
        match &self.delimiters {
            Some((open, close)) => options.with_delimiters(open.clone(), close.clone()),
            None => options,
        }
    }
}

fn resolve_modules(names: &[String]) -> CliResult<Vec<Module>> {
    names
        .iter()
        .map(|name| {
            let name = name.trim();
            find_module(name).ok_or_else(|| CliError::UnknownModule(name.to_string()))
        })
        .collect()
}

fn parse_delimiters(raw: &str) -> CliResult<Delimiters> {
    match raw.split_once(',') {
        Some((open, close)) if !open.is_empty() && !close.is_empty() => {
            Ok((open.to_string(), close.to_string()))
        }
        _ => Err(CliError::InvalidDelimiters(raw.to_string())),
    }
}
