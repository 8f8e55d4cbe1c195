//! Render data generation for compiled Vue templates.
//!
//! This crate turns the metadata the template compiler attached to an
//! element into the data object literal passed to `_c(tag, data, children)`
//! by a render function. Module fragments come from the registered
//! [`Module::gen_data`](vue_template_compiler::Module) hooks; object-syntax
//! `v-bind` / `v-on` wrap the literal in the `_b` / `_g` runtime helpers.

pub mod context;
pub mod data;
pub mod events;
pub mod helpers;

pub use context::CodegenState;
pub use data::{gen_data, gen_directives, gen_element_data, gen_props};
pub use events::{gen_handler, gen_handlers};
