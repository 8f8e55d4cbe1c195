//! Shared utilities for the Vue compiler workspace.
//!
//! This crate holds the thread-safe memo [`Cache`] and the cached case
//! conversions built on top of it, plus the attribute rules needed both
//! when compiling and when rendering.

pub mod attrs;
pub mod cache;
pub mod util;

pub use attrs::must_use_prop;
pub use cache::Cache;
pub use util::{camelize, capitalize, hyphenate};
