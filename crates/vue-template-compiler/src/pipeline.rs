//! Tree driver: runs the module pipeline over an element tree.
//!
//! For each element, pre-transforms run first and may replace it. Unless the
//! (possibly replaced) element is already processed, its structural
//! directives and the generic element pass follow. Children are then walked
//! and `v-else` / `v-else-if` elements are folded into the preceding `v-if`
//! chain instead of staying in the child list.

use crate::ast::{AstArena, AstChild, IfCondition, NodeId, NodeState};
use crate::options::CompilerOptions;
use crate::process::{add_if_condition, process_element, process_for, process_if, process_once};
use crate::text_parser::parse_text;
use vue_diagnostics::{Diagnostic, DiagnosticCode};

/// Run the pipeline over one element, returning the id that should take its
/// place in the parent's child list.
pub fn process_node(arena: &mut AstArena, id: NodeId, options: &CompilerOptions) -> NodeId {
    let mut current = id;
    for pre_transform in options.modules.iter().filter_map(|m| m.pre_transform_node) {
        if let Some(replacement) = pre_transform(arena, current, options) {
            current = replacement;
        }
    }

    if !arena[current].is_processed() {
        process_for(&mut arena[current], options);
        process_if(arena, current);
        process_once(&mut arena[current]);
        process_element(arena, current, options);
        arena[current].state = NodeState::Processed;
    }
    current
}

/// Run the pipeline over `root` and all of its descendants.
pub fn process_tree(arena: &mut AstArena, root: NodeId, options: &CompilerOptions) -> NodeId {
    let root = process_node(arena, root, options);

    let children = std::mem::take(&mut arena[root].children);
    let mut processed: Vec<AstChild> = Vec::with_capacity(children.len());
    for child in children {
        match child {
            AstChild::Element(child_id) => {
                arena[child_id].parent = Some(root);
                let child_id = process_tree(arena, child_id, options);
                let el = &arena[child_id];
                if el.else_ || el.else_if.is_some() {
                    attach_to_chain(arena, &mut processed, child_id, options);
                } else {
                    processed.push(AstChild::Element(child_id));
                }
            }
            AstChild::Text(text) => match parse_text(&text, options.delimiters.as_ref()) {
                Some(parsed) => processed.push(AstChild::Expression {
                    expression: parsed.expression,
                    text,
                }),
                None => processed.push(AstChild::Text(text)),
            },
            expression @ AstChild::Expression { .. } => processed.push(expression),
        }
    }
    arena[root].children = processed;
    root
}

/// Attach an else branch to the nearest preceding `v-if` sibling.
///
/// Text between the two is dropped; non-whitespace text is reported.
fn attach_to_chain(
    arena: &mut AstArena,
    siblings: &mut Vec<AstChild>,
    branch: NodeId,
    options: &CompilerOptions,
) {
    let branch_tag = arena[branch].tag.clone();
    while let Some(last) = siblings.last() {
        match last {
            AstChild::Element(prev) => {
                let prev = *prev;
                if arena[prev].if_.is_some() {
                    let exp = arena[branch].else_if.clone();
                    tracing::debug!(
                        head = %arena[prev].tag,
                        branch = %branch_tag,
                        "attached conditional branch"
                    );
                    add_if_condition(&mut arena[prev], IfCondition { exp, block: branch });
                    return;
                }
                break;
            }
            AstChild::Text(text) | AstChild::Expression { text, .. } => {
                if !text.trim().is_empty() {
                    options.warn(
                        Diagnostic::warning(
                            format!(
                                "text \"{}\" between v-if and v-else(-if) will be ignored.",
                                text.trim()
                            ),
                            DiagnosticCode::TextBetweenBranches,
                        )
                        .with_tag(branch_tag.clone()),
                    );
                }
                siblings.pop();
            }
        }
    }

    let directive = if arena[branch].else_ { "v-else" } else { "v-else-if" };
    options.warn(
        Diagnostic::warning(
            format!("{directive} used on element <{branch_tag}> without corresponding v-if."),
            DiagnosticCode::OrphanElse,
        )
        .with_tag(branch_tag)
        .with_attr(directive),
    );
}
