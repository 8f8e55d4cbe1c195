//! Static subtree detection.
//!
//! Marks elements whose rendered output can never change so that code
//! generation can hoist them out of the render function.

use crate::ast::{AstArena, AstChild, NodeId};
use crate::options::CompilerOptions;
use crate::platform::{is_builtin_tag, is_reserved_tag};
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use vue_shared::Cache;

const BASE_STATIC_KEYS: &str = "type,tag,attrsList,attrsMap,plain,parent,children,attrs,start,end,rawAttrsMap";

type StaticKeySet = Arc<FxHashSet<String>>;

static STATIC_KEYS_CACHE: Lazy<Cache<String, StaticKeySet>> = Lazy::new(Cache::new);

/// Build the set of keys that may be present on a static element.
///
/// Cached by the comma-joined module keys.
pub fn gen_static_keys_cached(module_keys: &str) -> StaticKeySet {
    STATIC_KEYS_CACHE.compute_or_fetch(module_keys, |keys| {
        let mut set: FxHashSet<String> = BASE_STATIC_KEYS.split(',').map(String::from).collect();
        set.extend(
            keys.split(',')
                .filter(|k| !k.is_empty())
                .map(String::from),
        );
        Arc::new(set)
    })
}

/// Mark static elements and static roots below `root`.
pub fn optimize(arena: &mut AstArena, root: NodeId, options: &CompilerOptions) {
    let keys = gen_static_keys_cached(&options.static_keys());
    mark_static(arena, root, &keys);
    mark_static_roots(arena, root);
}

/// Check if a single element is static, ignoring its children.
pub fn is_static(arena: &AstArena, id: NodeId, static_keys: &FxHashSet<String>) -> bool {
    let el = &arena[id];
    !el.has_bindings
        && el.if_.is_none()
        && el.for_.is_none()
        && !is_builtin_tag(&el.tag)
        && is_reserved_tag(&el.tag)
        && !is_direct_child_of_template_for(arena, id)
        && el
            .populated_keys()
            .into_iter()
            .all(|key| static_keys.contains(key))
}

fn is_direct_child_of_template_for(arena: &AstArena, id: NodeId) -> bool {
    for ancestor in arena.ancestors(id) {
        let el = &arena[ancestor];
        if el.tag != "template" {
            return false;
        }
        if el.for_.is_some() {
            return true;
        }
    }
    false
}

fn mark_static(arena: &mut AstArena, id: NodeId, static_keys: &FxHashSet<String>) {
    let mut is_static_node = is_static(arena, id, static_keys);
    arena[id].static_ = is_static_node;

    // Components may rely on their children changing.
    let tag = &arena[id].tag;
    if !is_reserved_tag(tag) && tag != "slot" && !arena[id].attrs_map.contains_key("inline-template") {
        return;
    }

    let children: Vec<NodeId> = arena.element_children(id).collect();
    for child in children {
        mark_static(arena, child, static_keys);
        if !arena[child].static_ {
            is_static_node = false;
        }
    }
    if arena[id]
        .children
        .iter()
        .any(|c| matches!(c, AstChild::Expression { .. }))
    {
        is_static_node = false;
    }

    let branches: Vec<NodeId> = arena[id]
        .if_conditions
        .iter()
        .skip(1)
        .map(|c| c.block)
        .collect();
    for block in branches {
        mark_static(arena, block, static_keys);
        if !arena[block].static_ {
            is_static_node = false;
        }
    }
    arena[id].static_ = is_static_node;
}

fn mark_static_roots(arena: &mut AstArena, id: NodeId) {
    let el = &arena[id];
    let only_text = el.children.len() == 1 && matches!(el.children[0], AstChild::Text(_));
    if el.static_ && !el.children.is_empty() && !only_text {
        arena[id].static_root = true;
        return;
    }
    arena[id].static_root = false;

    let children: Vec<NodeId> = arena.element_children(id).collect();
    for child in children {
        mark_static_roots(arena, child);
    }
    let branches: Vec<NodeId> = arena[id]
        .if_conditions
        .iter()
        .skip(1)
        .map(|c| c.block)
        .collect();
    for block in branches {
        mark_static_roots(arena, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AstAttr;
    use crate::pipeline::process_tree;

    fn build(arena: &mut AstArena, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = arena.create_element(
            tag,
            attrs.iter().map(|(n, v)| AstAttr::new(*n, *v)).collect(),
            Some(parent),
        );
        arena[parent].children.push(AstChild::Element(id));
        id
    }

    fn compile(arena: &mut AstArena, root: NodeId) -> NodeId {
        let options = CompilerOptions::new();
        let root = process_tree(arena, root, &options);
        optimize(arena, root, &options);
        root
    }

    #[test]
    fn test_static_keys_include_module_keys() {
        let keys = gen_static_keys_cached("staticClass,staticStyle");
        assert!(keys.contains("staticClass"));
        assert!(keys.contains("plain"));
        assert!(!keys.contains("classBinding"));
    }

    #[test]
    fn test_fully_static_tree_is_static_root() {
        let mut arena = AstArena::new();
        let root = arena.create_element("div", vec![AstAttr::new("class", "box")], None);
        let p = build(&mut arena, root, "p", &[("id", "x")]);
        arena[p].children.push(AstChild::Text("hello".into()));

        let root = compile(&mut arena, root);

        assert!(arena[root].static_);
        assert!(arena[root].static_root);
        assert!(arena[p].static_);
        assert!(!arena[p].static_root);
    }

    #[test]
    fn test_binding_makes_ancestors_dynamic() {
        let mut arena = AstArena::new();
        let root = arena.create_element("div", vec![], None);
        let stat = build(&mut arena, root, "p", &[]);
        build(&mut arena, stat, "span", &[]);
        build(&mut arena, root, "p", &[(":class", "c")]);

        let root = compile(&mut arena, root);

        assert!(!arena[root].static_);
        assert!(!arena[root].static_root);
        assert!(arena[stat].static_root);
    }

    #[test]
    fn test_interpolation_is_dynamic() {
        let mut arena = AstArena::new();
        let root = arena.create_element("p", vec![], None);
        arena[root].children.push(AstChild::Text("{{ msg }}".into()));

        let root = compile(&mut arena, root);
        assert!(!arena[root].static_);
    }

    #[test]
    fn test_components_are_never_static() {
        let mut arena = AstArena::new();
        let root = arena.create_element("my-widget", vec![], None);
        let root = compile(&mut arena, root);
        assert!(!arena[root].static_);
    }

    #[test]
    fn test_conditional_is_dynamic() {
        let mut arena = AstArena::new();
        let root = arena.create_element("div", vec![], None);
        let head = build(&mut arena, root, "p", &[("v-if", "ok")]);
        let other = build(&mut arena, root, "p", &[("v-else", "")]);

        let root = compile(&mut arena, root);

        assert!(!arena[head].static_);
        assert!(!arena[root].static_);
        assert!(!arena[other].static_root);
    }

    #[test]
    fn test_child_of_template_for_is_dynamic() {
        let mut arena = AstArena::new();
        let root = arena.create_element("div", vec![], None);
        let tpl = build(&mut arena, root, "template", &[("v-for", "x in xs")]);
        let li = build(&mut arena, tpl, "li", &[]);

        compile(&mut arena, root);

        assert!(!arena[li].static_);
    }
}
