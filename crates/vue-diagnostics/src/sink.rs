//! Warning sinks.

use crate::Diagnostic;
use std::sync::{Mutex, PoisonError};

/// Receives non-fatal diagnostics.
///
/// Implementations must never panic; callers rely on warnings being
/// side-effect only.
pub trait WarnHandler: Send + Sync {
    /// Report one diagnostic.
    fn warn(&self, diagnostic: Diagnostic);
}

/// Default sink: forwards every diagnostic to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarnHandler;

impl WarnHandler for TracingWarnHandler {
    fn warn(&self, diagnostic: Diagnostic) {
        let tag = diagnostic.tag.as_deref().unwrap_or("");
        let attr = diagnostic.attr.as_deref().unwrap_or("");
        tracing::warn!(code = %diagnostic.code, tag, attr, "{}", diagnostic.message);
    }
}

/// Sink that keeps every diagnostic it receives.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Take the collected diagnostics, leaving the collector empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(
            &mut *self
                .diagnostics
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WarnHandler for DiagnosticCollector {
    fn warn(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
