//! Transform module registry.
//!
//! A [`Module`] bundles up to three optional hooks:
//!
//! - `pre_transform_node` runs before structural processing and may replace
//!   the element by returning a new id,
//! - `transform_node` mutates the element during element processing,
//! - `gen_data` emits `key:value,` fragments for the render data object.
//!
//! `static_keys` lists the render data fields the module produces that never
//! change between renders.

pub mod class;
pub mod model;
pub mod style;

use crate::ast::{AstArena, AstElement, NodeId};
use crate::options::CompilerOptions;
use std::fmt;

/// Replaces an element before structural processing. `None` keeps it.
pub type PreTransformFn = fn(&mut AstArena, NodeId, &CompilerOptions) -> Option<NodeId>;

/// Mutates an element in place.
pub type TransformFn = fn(&mut AstElement, &CompilerOptions);

/// Emits a render data fragment.
pub type GenDataFn = fn(&AstElement) -> String;

/// A registered transform module.
#[derive(Clone, Copy)]
pub struct Module {
    /// Module name, used by configuration.
    pub name: &'static str,
    /// Render data fields that may be cached across renders.
    pub static_keys: &'static [&'static str],
    /// Hook run before structural processing.
    pub pre_transform_node: Option<PreTransformFn>,
    /// Hook run during element processing.
    pub transform_node: Option<TransformFn>,
    /// Render data fragment generator.
    pub gen_data: Option<GenDataFn>,
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("static_keys", &self.static_keys)
            .field("pre_transform_node", &self.pre_transform_node.is_some())
            .field("transform_node", &self.transform_node.is_some())
            .field("gen_data", &self.gen_data.is_some())
            .finish()
    }
}

/// The web platform modules, in registration order.
pub static WEB_MODULES: [Module; 3] = [class::MODULE, style::MODULE, model::MODULE];

/// Look up a web module by name.
pub fn find_module(name: &str) -> Option<Module> {
    WEB_MODULES.iter().find(|m| m.name == name).copied()
}

/// Comma-joined static keys of `modules`, in registration order.
pub fn gen_static_keys(modules: &[Module]) -> String {
    modules
        .iter()
        .flat_map(|m| m.static_keys.iter().copied())
        .collect::<Vec<_>>()
        .join(",")
}

/// The `gen_data` hooks of `modules`, in registration order.
pub fn data_gen_fns(modules: &[Module]) -> Vec<GenDataFn> {
    modules.iter().filter_map(|m| m.gen_data).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_static_keys_list() {
        assert_eq!(gen_static_keys(&WEB_MODULES), "staticClass,staticStyle");
        assert_eq!(gen_static_keys(&[]), "");
    }

    #[test]
    fn test_hook_slots() {
        assert_eq!(data_gen_fns(&WEB_MODULES).len(), 2);
        let model = find_module("model").unwrap();
        assert!(model.pre_transform_node.is_some());
        assert!(model.transform_node.is_none());
        assert!(find_module("unknown").is_none());
    }
}
