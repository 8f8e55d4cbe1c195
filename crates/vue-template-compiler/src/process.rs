//! Per-element processing: structural directives (`v-for`, `v-if`,
//! `v-once`) and the generic element pass (`key`, `ref`, module transforms,
//! remaining attributes).

use crate::ast::{AstArena, AstDirective, AstElement, ForParseResult, IfCondition, NodeId, WrapData};
use crate::helpers::{
    add_attr, add_directive, add_handler, add_prop, get_and_remove_attr, get_binding_attr,
    to_js_string,
};
use crate::platform::must_use_prop;
use once_cell::sync::Lazy;
use regex::Regex;
use smol_str::SmolStr;
use vue_diagnostics::{Diagnostic, DiagnosticCode};
use vue_shared::{camelize, hyphenate};

use crate::options::CompilerOptions;

static FOR_ALIAS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(.*?)\s+(?:in|of)\s+(.*)$").expect("v-for alias regex is valid"));
static FOR_ITERATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",([^,\}\]]*)(?:,([^,\}\]]*))?$").expect("v-for iterator regex is valid")
});

/// Parse a `v-for` expression such as `(item, key, index) in list`.
pub fn parse_for(exp: &str) -> Option<ForParseResult> {
    let caps = FOR_ALIAS_RE.captures(exp)?;
    let for_exp = caps.get(2)?.as_str().trim().to_string();

    let raw_alias = caps.get(1)?.as_str().trim();
    let alias = raw_alias.strip_prefix('(').unwrap_or(raw_alias);
    let alias = alias.strip_suffix(')').unwrap_or(alias);

    let mut res = ForParseResult {
        for_exp,
        ..Default::default()
    };
    match FOR_ITERATOR_RE.captures(alias) {
        Some(iter) => {
            let start = iter.get(0).map_or(alias.len(), |m| m.start());
            res.alias = alias[..start].trim().to_string();
            res.iterator1 = iter.get(1).map(|m| m.as_str().trim().to_string());
            res.iterator2 = iter.get(2).map(|m| m.as_str().trim().to_string());
        }
        None => res.alias = alias.to_string(),
    }
    Some(res)
}

/// Consume `v-for` into `for_`.
pub fn process_for(el: &mut AstElement, options: &CompilerOptions) {
    let Some(exp) = get_and_remove_attr(el, "v-for", false) else {
        return;
    };
    match parse_for(&exp) {
        Some(res) => el.for_ = Some(res),
        None => options.warn(
            Diagnostic::warning(
                format!("Invalid v-for expression: {exp}"),
                DiagnosticCode::InvalidVFor,
            )
            .with_tag(el.tag.clone())
            .with_attr("v-for"),
        ),
    }
}

/// Consume `v-if` / `v-else` / `v-else-if`.
///
/// A `v-if` element becomes the head of its own chain.
pub fn process_if(arena: &mut AstArena, id: NodeId) {
    let el = &mut arena[id];
    if let Some(exp) = get_and_remove_attr(el, "v-if", false).filter(|e| !e.is_empty()) {
        el.if_ = Some(exp.clone());
        add_if_condition(
            el,
            IfCondition {
                exp: Some(exp),
                block: id,
            },
        );
    } else {
        if get_and_remove_attr(el, "v-else", false).is_some() {
            el.else_ = true;
        }
        if let Some(exp) = get_and_remove_attr(el, "v-else-if", false).filter(|e| !e.is_empty()) {
            el.else_if = Some(exp);
        }
    }
}

/// Consume `v-once`.
pub fn process_once(el: &mut AstElement) {
    if get_and_remove_attr(el, "v-once", false).is_some() {
        el.once = true;
    }
}

/// Append a branch to a chain head.
pub fn add_if_condition(el: &mut AstElement, condition: IfCondition) {
    el.if_conditions.push(condition);
}

/// Generic element pass: `key`, `ref`, module transforms, then the remaining
/// attributes.
pub fn process_element(arena: &mut AstArena, id: NodeId, options: &CompilerOptions) {
    let ref_in_for = arena[id].for_.is_some() || arena.ancestors(id).any(|a| arena[a].for_.is_some());

    let el = &mut arena[id];
    el.key = get_binding_attr(el, "key", true);
    el.plain = el.key.is_none() && el.attrs_list.is_empty();

    if let Some(r) = get_binding_attr(el, "ref", true) {
        el.ref_ = Some(r);
        el.ref_in_for = ref_in_for;
    }

    for transform in options.modules.iter().filter_map(|m| m.transform_node) {
        transform(el, options);
    }

    process_attrs(el, options);
}

/// Turn the remaining raw attributes into bindings, listeners, directives,
/// or static attributes.
pub fn process_attrs(el: &mut AstElement, options: &CompilerOptions) {
    let list = el.attrs_list.clone();
    for attr in list {
        let raw_name = attr.name.as_str();
        let value = attr.value.as_str();

        if !is_directive(raw_name) {
            add_attr(el, raw_name, to_js_string(value), false);
            continue;
        }
        el.has_bindings = true;

        if let Some(rest) = raw_name.strip_prefix('.') {
            // `.foo` is shorthand for `v-bind:foo.prop`.
            let (name, mut modifiers) = split_modifiers(rest);
            modifiers.push("prop".into());
            process_bind(el, name, value, &modifiers);
        } else if let Some(rest) = raw_name
            .strip_prefix(':')
            .or_else(|| raw_name.strip_prefix("v-bind:"))
        {
            let (name, modifiers) = split_modifiers(rest);
            process_bind(el, name, value, &modifiers);
        } else if let Some(rest) = raw_name
            .strip_prefix('@')
            .or_else(|| raw_name.strip_prefix("v-on:"))
        {
            let (name, modifiers) = split_modifiers(rest);
            add_handler(el, name, value, &modifiers, false);
        } else if let Some(rest) = raw_name.strip_prefix("v-") {
            let (name, modifiers) = split_modifiers(rest);
            let (name, arg) = match name.split_once(':') {
                Some((n, a)) => (n, Some(a.to_string())),
                None => (name, None),
            };
            process_directive(el, raw_name, name, arg, value, modifiers, options);
        }
    }
}

fn process_bind(
    el: &mut AstElement,
    name: &str,
    value: &str,
    modifiers: &[SmolStr],
) {
    let has = |m: &str| modifiers.iter().any(|x| x == m);
    let value = value.trim();
    let dynamic = name.starts_with('[') && name.ends_with(']');
    let mut name = if dynamic {
        name[1..name.len() - 1].to_string()
    } else {
        name.to_string()
    };
    let is_prop = has("prop");

    if !dynamic {
        if is_prop {
            name = camelize(&name);
            if name == "innerHtml" {
                name = "innerHTML".to_string();
            }
        }
        if has("camel") {
            name = camelize(&name);
        }
        if has("sync") {
            let assignment = gen_assignment_code(value, "$event");
            let camel = camelize(&name);
            add_handler(el, &format!("update:{camel}"), &assignment, &[], false);
            let kebab = hyphenate(&name);
            if kebab != camel {
                add_handler(el, &format!("update:{kebab}"), &assignment, &[], false);
            }
        }
    }

    let input_type = el.attrs_map.get("type").map(String::as_str);
    if is_prop || must_use_prop(&el.tag, input_type, &name) {
        add_prop(el, name, value, dynamic);
    } else {
        add_attr(el, name, value, dynamic);
    }
}

fn process_directive(
    el: &mut AstElement,
    raw_name: &str,
    name: &str,
    arg: Option<String>,
    value: &str,
    modifiers: Vec<SmolStr>,
    options: &CompilerOptions,
) {
    match (name, arg.as_deref()) {
        ("on", None) => {
            if !modifiers.is_empty() {
                options.warn(
                    Diagnostic::warning(
                        "v-on without argument does not support modifiers.",
                        DiagnosticCode::InvalidListenerModifiers,
                    )
                    .with_tag(el.tag.clone())
                    .with_attr(raw_name),
                );
            }
            el.wrap_listeners = Some(value.trim().to_string());
        }
        ("bind", None) => {
            if value.trim().is_empty() {
                options.warn(
                    Diagnostic::warning(
                        "v-bind without argument expects an Object or Array value",
                        DiagnosticCode::MissingBindValue,
                    )
                    .with_tag(el.tag.clone())
                    .with_attr(raw_name),
                );
                return;
            }
            el.wrap_data = Some(WrapData {
                value: value.trim().to_string(),
                as_prop: modifiers.iter().any(|m| m == "prop"),
                sync: modifiers.iter().any(|m| m == "sync"),
            });
        }
        ("text", _) => add_prop(el, "textContent", format!("_s({})", value.trim()), false),
        ("html", _) => add_prop(el, "innerHTML", format!("_s({})", value.trim()), false),
        ("cloak", _) => {}
        _ => add_directive(
            el,
            AstDirective {
                name: name.into(),
                raw_name: raw_name.into(),
                value: value.trim().to_string(),
                arg,
                modifiers,
            },
        ),
    }
}

fn is_directive(name: &str) -> bool {
    name.starts_with("v-") || name.starts_with('@') || name.starts_with(':') || name.starts_with('.')
}

/// Split `name.mod1.mod2` into the name and its modifiers. Dots inside a
/// dynamic `[argument]` are part of the name.
fn split_modifiers(raw: &str) -> (&str, Vec<SmolStr>) {
    let scan_from = raw.rfind(']').map_or(0, |i| i + 1);
    match raw[scan_from..].find('.') {
        Some(dot) => {
            let split = scan_from + dot;
            let modifiers = raw[split + 1..]
                .split('.')
                .filter(|m| !m.is_empty())
                .map(SmolStr::from)
                .collect();
            (&raw[..split], modifiers)
        }
        None => (raw, Vec::new()),
    }
}

/// Code assigning `assignment` to the model expression `value`, using
/// `$set` for member expressions so new keys stay reactive.
pub fn gen_assignment_code(value: &str, assignment: &str) -> String {
    let value = value.trim();
    if value.ends_with(']') {
        if let Some(open) = value.rfind('[') {
            if open > 0 {
                let (exp, key) = (&value[..open], &value[open + 1..value.len() - 1]);
                return format!("$set({exp}, {key}, {assignment})");
            }
        }
    } else if let Some(dot) = value.rfind('.') {
        let (exp, key) = (&value[..dot], &value[dot + 1..]);
        return format!("$set({exp}, {}, {assignment})", to_js_string(key));
    }
    format!("{value}={assignment}")
}
