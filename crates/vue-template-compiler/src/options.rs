//! Compiler options.

use crate::modules::{gen_static_keys, Module, WEB_MODULES};
use crate::text_parser::Delimiters;
use std::fmt;
use std::sync::Arc;
use vue_diagnostics::{Diagnostic, TracingWarnHandler, WarnHandler};

/// Options shared by every pass of one compilation.
#[derive(Clone)]
pub struct CompilerOptions {
    /// Registered transform modules, in execution order.
    pub modules: Vec<Module>,
    /// Custom interpolation delimiters.
    pub delimiters: Option<Delimiters>,
    /// Diagnostics sink.
    pub warn: Arc<dyn WarnHandler>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CompilerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilerOptions")
            .field(
                "modules",
                &self.modules.iter().map(|m| m.name).collect::<Vec<_>>(),
            )
            .field("delimiters", &self.delimiters)
            .finish_non_exhaustive()
    }
}

impl CompilerOptions {
    /// Options with the web module set and the tracing warn handler.
    pub fn new() -> Self {
        Self {
            modules: WEB_MODULES.to_vec(),
            delimiters: None,
            warn: Arc::new(TracingWarnHandler),
        }
    }

    /// Replace the module list.
    pub fn with_modules(mut self, modules: Vec<Module>) -> Self {
        self.modules = modules;
        self
    }

    /// Use custom interpolation delimiters.
    pub fn with_delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.delimiters = Some((open.into(), close.into()));
        self
    }

    /// Replace the diagnostics sink.
    pub fn with_warn(mut self, warn: Arc<dyn WarnHandler>) -> Self {
        self.warn = warn;
        self
    }

    /// Report a diagnostic.
    pub fn warn(&self, diagnostic: Diagnostic) {
        self.warn.warn(diagnostic);
    }

    /// Comma-joined static keys of the registered modules.
    pub fn static_keys(&self) -> String {
        gen_static_keys(&self.modules)
    }
}
