//! Vue compiler diagnostics.
//!
//! Nothing in the compiler core or the render helpers is fatal. Malformed but
//! tolerable input is reported as a [`Diagnostic`] through a [`WarnHandler`]
//! and processing continues as if the offending construct were absent.

pub mod sink;

pub use sink::{DiagnosticCollector, TracingWarnHandler, WarnHandler};

use smol_str::SmolStr;
use std::fmt;

/// A diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// The diagnostic message.
    pub message: String,
    /// Tag of the element the diagnostic is about, if any.
    pub tag: Option<SmolStr>,
    /// Attribute the diagnostic is about, if any.
    pub attr: Option<SmolStr>,
    /// The diagnostic code.
    pub code: DiagnosticCode,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>, code: DiagnosticCode) -> Self {
        Self {
            message: message.into(),
            tag: None,
            attr: None,
            code,
        }
    }

    /// Attach the element tag this diagnostic refers to.
    pub fn with_tag(mut self, tag: impl Into<SmolStr>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach the attribute this diagnostic refers to.
    pub fn with_attr(mut self, attr: impl Into<SmolStr>) -> Self {
        self.attr = Some(attr.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "<{}>: {}", tag, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticCode {
    // Compile time
    /// `{{ }}` interpolation inside a static attribute value.
    InterpolationInAttribute,
    /// Unparseable `v-for` expression.
    InvalidVFor,
    /// `v-else` / `v-else-if` without a preceding `v-if`.
    OrphanElse,
    /// Text dropped between two branches of a conditional chain.
    TextBetweenBranches,
    /// `v-on` object syntax used with modifiers.
    InvalidListenerModifiers,
    /// `v-bind` object syntax without a value.
    MissingBindValue,

    // Render time
    /// `v-on` object syntax with a non-object value.
    ListenerNotObject,
    /// `v-bind` object syntax with a non-object value.
    BindNotObject,
}

impl DiagnosticCode {
    /// Get the code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InterpolationInAttribute => "interpolation-in-attribute",
            Self::InvalidVFor => "invalid-v-for",
            Self::OrphanElse => "orphan-else",
            Self::TextBetweenBranches => "text-between-branches",
            Self::InvalidListenerModifiers => "invalid-listener-modifiers",
            Self::MissingBindValue => "missing-bind-value",
            Self::ListenerNotObject => "listener-not-object",
            Self::BindNotObject => "bind-not-object",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
