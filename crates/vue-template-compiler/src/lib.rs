//! Vue template compiler core.
//!
//! This crate takes an element tree produced by an HTML parser and runs the
//! directive-compilation pipeline over it: pluggable transform modules
//! (`class`, `style`, and the dynamic-type `v-model` expansion), structural
//! directives (`v-for`, `v-if` chains, `v-once`), attribute and listener
//! processing, and the static-subtree optimizer.
//!
//! Non-fatal problems are reported through the [`CompilerOptions::warn`]
//! sink; compilation itself never fails.

pub mod ast;
pub mod helpers;
pub mod modules;
pub mod optimizer;
pub mod options;
pub mod pipeline;
pub mod platform;
pub mod process;
pub mod text_parser;

pub use ast::*;
pub use modules::{GenDataFn, Module, WEB_MODULES};
pub use options::CompilerOptions;
pub use pipeline::{process_node, process_tree};
pub use text_parser::{parse_text, Delimiters};

/// Run the module pipeline and the optimizer over the tree rooted at `root`.
///
/// Returns the id of the (possibly replaced) root.
pub fn compile(arena: &mut AstArena, root: NodeId, options: &CompilerOptions) -> NodeId {
    let root = process_tree(arena, root, options);
    optimizer::optimize(arena, root, options);
    tracing::debug!(nodes = arena.len(), "compiled template tree");
    root
}
