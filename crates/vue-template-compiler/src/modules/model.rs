//! `v-model` on `<input>` with a dynamic `type`.
//!
//! The input's runtime behaviour depends on its type, which is only known at
//! render time. The element is expanded into three mutually exclusive
//! branches:
//!
//! ```text
//! <input v-if="(T)==='checkbox'" type="checkbox" v-model="x">
//! <input v-else-if="(T)==='radio'" type="radio" v-model="x">
//! <input v-else :type="T" v-model="x">
//! ```
//!
//! Only the head branch keeps `v-for`, so the chain is produced once per
//! iteration rather than three times.

use super::Module;
use crate::ast::{AstArena, AstChild, IfCondition, NodeId, NodeState};
use crate::helpers::{add_raw_attr, get_and_remove_attr, get_binding_attr};
use crate::options::CompilerOptions;
use crate::process::{add_if_condition, process_element, process_for};

/// The model module.
pub const MODULE: Module = Module {
    name: "model",
    static_keys: &[],
    pre_transform_node: Some(pre_transform_node),
    transform_node: None,
    gen_data: None,
};

/// Expand a `v-model` input with a dynamic type into a conditional chain.
///
/// Returns the head of the chain, or `None` when the element is left as is.
pub fn pre_transform_node(
    arena: &mut AstArena,
    id: NodeId,
    options: &CompilerOptions,
) -> Option<NodeId> {
    let el = &mut arena[id];
    if el.tag != "input" || el.is_processed() {
        return None;
    }
    let present = |name: &str| el.attrs_map.get(name).is_some_and(|v| !v.is_empty());
    if !present("v-model") {
        return None;
    }

    let has_bound_type = present(":type") || present("v-bind:type");
    let has_static_type = present("type");
    let spread = el.attrs_map.get("v-bind").filter(|v| !v.is_empty()).cloned();

    let mut type_binding = None;
    if has_bound_type {
        type_binding = get_binding_attr(el, "type", true);
    }
    if !has_static_type && type_binding.is_none() {
        type_binding = spread.map(|s| format!("({s}).type"));
    }
    let type_binding = type_binding?;

    let if_condition = get_and_remove_attr(el, "v-if", true);
    let if_condition_extra = if_condition
        .as_ref()
        .map(|c| format!("&&({c})"))
        .unwrap_or_default();
    let has_else = get_and_remove_attr(el, "v-else", true).is_some();
    let else_if_condition = get_and_remove_attr(el, "v-else-if", true);
    let children = std::mem::take(&mut el.children);
    let tag = el.tag.clone();

    // 1. checkbox
    let branch0 = arena.clone_element(id);
    process_for(&mut arena[branch0], options);
    add_raw_attr(&mut arena[branch0], "type", "checkbox");
    process_element(arena, branch0, options);
    let checkbox = format!("({type_binding})==='checkbox'{if_condition_extra}");
    {
        let head = &mut arena[branch0];
        head.state = NodeState::Processed;
        head.if_ = Some(checkbox.clone());
        add_if_condition(
            head,
            IfCondition {
                exp: Some(checkbox),
                block: branch0,
            },
        );
    }

    // 2. radio
    let branch1 = arena.clone_element(id);
    get_and_remove_attr(&mut arena[branch1], "v-for", true);
    add_raw_attr(&mut arena[branch1], "type", "radio");
    process_element(arena, branch1, options);
    add_if_condition(
        &mut arena[branch0],
        IfCondition {
            exp: Some(format!("({type_binding})==='radio'{if_condition_extra}")),
            block: branch1,
        },
    );

    // 3. other
    let branch2 = arena.clone_element(id);
    get_and_remove_attr(&mut arena[branch2], "v-for", true);
    add_raw_attr(&mut arena[branch2], ":type", type_binding.clone());
    process_element(arena, branch2, options);
    add_if_condition(
        &mut arena[branch0],
        IfCondition {
            exp: if_condition,
            block: branch2,
        },
    );

    // `v-else` wins over a conflicting `v-else-if`.
    if has_else {
        arena[branch0].else_ = true;
    } else if let Some(exp) = else_if_condition {
        arena[branch0].else_if = Some(exp);
    }

    for child in &children {
        if let AstChild::Element(child_id) = child {
            arena[*child_id].parent = Some(branch0);
        }
    }
    arena[branch0].children = children;

    tracing::debug!(tag = %tag, type_binding = %type_binding, "expanded dynamic v-model type");
    Some(branch0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AstAttr;
    use pretty_assertions::assert_eq;

    fn input(arena: &mut AstArena, attrs: &[(&str, &str)]) -> NodeId {
        arena.create_element(
            "input",
            attrs.iter().map(|(n, v)| AstAttr::new(*n, *v)).collect(),
            None,
        )
    }

    fn conditions(arena: &AstArena, head: NodeId) -> Vec<Option<String>> {
        arena[head].if_conditions.iter().map(|c| c.exp.clone()).collect()
    }

    #[test]
    fn test_no_model_is_noop() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[(":type", "t")]);
        assert_eq!(pre_transform_node(&mut arena, id, &CompilerOptions::new()), None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_static_type_is_noop() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[("v-model", "x"), ("type", "text")]);
        assert_eq!(pre_transform_node(&mut arena, id, &CompilerOptions::new()), None);
    }

    #[test]
    fn test_other_tags_are_noop() {
        let mut arena = AstArena::new();
        let id = arena.create_element(
            "select",
            vec![AstAttr::new("v-model", "x"), AstAttr::new(":type", "t")],
            None,
        );
        assert_eq!(pre_transform_node(&mut arena, id, &CompilerOptions::new()), None);
    }

    #[test]
    fn test_bound_type_expands_to_three_branches() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[("v-model", "x"), (":type", "E")]);
        let head = pre_transform_node(&mut arena, id, &CompilerOptions::new()).unwrap();

        assert_ne!(head, id);
        assert_eq!(arena[head].if_.as_deref(), Some("(E)==='checkbox'"));
        assert_eq!(
            conditions(&arena, head),
            vec![
                Some("(E)==='checkbox'".to_string()),
                Some("(E)==='radio'".to_string()),
                None,
            ]
        );
        assert!(arena[head].is_processed());
        assert_eq!(arena[head].if_conditions[0].block, head);

        let radio = arena[head].if_conditions[1].block;
        let other = arena[head].if_conditions[2].block;
        assert!(arena[radio].if_conditions.is_empty());
        assert!(arena[other].if_conditions.is_empty());

        assert_eq!(arena[head].attrs, vec![AstAttr::new("type", "\"checkbox\"")]);
        assert_eq!(arena[radio].attrs, vec![AstAttr::new("type", "\"radio\"")]);
        assert_eq!(arena[other].attrs, vec![AstAttr::new("type", "E")]);
        assert_eq!(arena[head].directives[0].name, "model");
    }

    #[test]
    fn test_spread_type() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[("v-model", "x"), ("v-bind", "$attrs")]);
        let head = pre_transform_node(&mut arena, id, &CompilerOptions::new()).unwrap();
        assert_eq!(arena[head].if_.as_deref(), Some("($attrs).type==='checkbox'"));
    }

    #[test]
    fn test_existing_if_is_merged() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[("v-model", "x"), (":type", "t"), ("v-if", "show")]);
        let head = pre_transform_node(&mut arena, id, &CompilerOptions::new()).unwrap();
        assert_eq!(
            conditions(&arena, head),
            vec![
                Some("(t)==='checkbox'&&(show)".to_string()),
                Some("(t)==='radio'&&(show)".to_string()),
                Some("show".to_string()),
            ]
        );
    }

    #[test]
    fn test_for_stays_on_head_only() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[("v-for", "f in fields"), ("v-model", "f.value"), (":type", "f.type")]);
        let head = pre_transform_node(&mut arena, id, &CompilerOptions::new()).unwrap();

        assert_eq!(arena[head].for_.as_ref().map(|f| f.for_exp.as_str()), Some("fields"));
        for cond in &arena[head].if_conditions[1..] {
            let branch = &arena[cond.block];
            assert!(branch.for_.is_none());
            assert!(!branch.attrs_list.iter().any(|a| a.name == "v-for"));
        }
    }

    #[test]
    fn test_else_marks_head() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[("v-model", "x"), (":type", "t"), ("v-else", "")]);
        let head = pre_transform_node(&mut arena, id, &CompilerOptions::new()).unwrap();
        assert!(arena[head].else_);
        assert_eq!(arena[head].else_if, None);
    }

    #[test]
    fn test_else_if_carried_to_head() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[("v-model", "x"), (":type", "t"), ("v-else-if", "other")]);
        let head = pre_transform_node(&mut arena, id, &CompilerOptions::new()).unwrap();
        assert_eq!(arena[head].else_if.as_deref(), Some("other"));
        assert!(!arena[head].else_);
    }

    #[test]
    fn test_else_wins_over_else_if() {
        let mut arena = AstArena::new();
        let id = input(
            &mut arena,
            &[("v-model", "x"), (":type", "t"), ("v-else", ""), ("v-else-if", "other")],
        );
        let head = pre_transform_node(&mut arena, id, &CompilerOptions::new()).unwrap();
        assert!(arena[head].else_);
        assert_eq!(arena[head].else_if, None);
    }

    #[test]
    fn test_processed_head_is_not_expanded_again() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[("v-model", "x"), (":type", "t")]);
        let options = CompilerOptions::new();
        let head = pre_transform_node(&mut arena, id, &options).unwrap();
        let created = arena.len();

        assert_eq!(pre_transform_node(&mut arena, head, &options), None);
        assert_eq!(arena.len(), created);
        assert_eq!(arena[head].if_conditions.len(), 3);
    }

    #[test]
    fn test_branch_attr_lists_are_independent() {
        let mut arena = AstArena::new();
        let id = input(&mut arena, &[("v-model", "x"), (":type", "t"), ("class", "field")]);
        let head = pre_transform_node(&mut arena, id, &CompilerOptions::new()).unwrap();
        let radio = arena[head].if_conditions[1].block;

        arena[radio].attrs_list.clear();
        assert!(!arena[head].attrs_list.is_empty());
        assert_eq!(arena[radio].static_class.as_deref(), Some("\"field\""));
        assert_eq!(arena[head].static_class.as_deref(), Some("\"field\""));
    }
}
