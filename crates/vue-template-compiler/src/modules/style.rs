//! `style` / `:style` extraction.

use super::Module;
use crate::ast::AstElement;
use crate::helpers::{get_and_remove_attr, get_binding_attr};
use crate::options::CompilerOptions;
use crate::text_parser::parse_text;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use vue_diagnostics::{Diagnostic, DiagnosticCode};
use vue_shared::Cache;

/// The style module.
pub const MODULE: Module = Module {
    name: "style",
    static_keys: &["staticStyle"],
    pre_transform_node: None,
    transform_node: Some(transform_node),
    gen_data: Some(gen_data),
};

static STYLE_TEXT_CACHE: Lazy<Cache<String, IndexMap<String, String>>> = Lazy::new(Cache::new);

/// Move `style` into `static_style` (as an object literal) and `:style` into
/// `style_binding`.
pub fn transform_node(el: &mut AstElement, options: &CompilerOptions) {
    if let Some(static_style) =
        get_and_remove_attr(el, "style", false).filter(|v| !v.is_empty())
    {
        if parse_text(&static_style, options.delimiters.as_ref()).is_some() {
            options.warn(
                Diagnostic::warning(
                    format!(
                        "style=\"{static_style}\": Interpolation inside attributes has been removed. \
                         Use v-bind or the colon shorthand instead. For example, \
                         instead of <div style=\"{{{{ val }}}}\">, use <div :style=\"val\">."
                    ),
                    DiagnosticCode::InterpolationInAttribute,
                )
                .with_tag(el.tag.clone())
                .with_attr("style"),
            );
        }
        let parsed = parse_style_text(&static_style);
        let literal = serde_json::to_string(&parsed).unwrap_or_else(|_| "{}".to_string());
        el.static_style = Some(literal);
    }

    if let Some(binding) = get_binding_attr(el, "style", false) {
        el.style_binding = Some(binding);
    }
}

/// `staticStyle:…,style:(…),` for whichever fields are set.
pub fn gen_data(el: &AstElement) -> String {
    let mut data = String::new();
    if let Some(static_style) = &el.static_style {
        data.push_str(&format!("staticStyle:{static_style},"));
    }
    if let Some(binding) = &el.style_binding {
        data.push_str(&format!("style:({binding}),"));
    }
    data
}

/// Parse inline CSS text into property/value pairs, in source order.
///
/// Declarations split on `;` except inside parentheses (so `url(a;b)`
/// survives), then on the first `:`.
pub fn parse_style_text(css_text: &str) -> IndexMap<String, String> {
    STYLE_TEXT_CACHE.compute_or_fetch(css_text, |text| {
        let mut res = IndexMap::new();
        for item in split_declarations(text) {
            if item.is_empty() {
                continue;
            }
            if let Some((prop, value)) = item.split_once(':') {
                if !value.is_empty() {
                    res.insert(prop.trim().to_string(), value.trim().to_string());
                }
            }
        }
        res
    })
}

fn split_declarations(text: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if c != ';' {
            continue;
        }
        // A `;` followed by `)` before any `(` sits inside a function call.
        let rest = &text[i + 1..];
        let closes_first = rest
            .find(['(', ')'])
            .is_some_and(|pos| rest.as_bytes()[pos] == b')');
        if !closes_first {
            items.push(&text[start..i]);
            start = i + 1;
        }
    }
    items.push(&text[start..]);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstArena, AstAttr};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_style_text() {
        let parsed = parse_style_text("color: red; background: url(a;b.png);");
        assert_eq!(
            parsed.into_iter().collect::<Vec<_>>(),
            vec![
                ("color".to_string(), "red".to_string()),
                ("background".to_string(), "url(a;b.png)".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_style_text_keeps_later_colons() {
        let parsed = parse_style_text("background-image:url(http://x/y.png)");
        assert_eq!(parsed["background-image"], "url(http://x/y.png)");
    }

    #[test]
    fn test_empty_static_style_is_absent() {
        let mut arena = AstArena::new();
        let id = arena.create_element("div", vec![AstAttr::new("style", "")], None);
        transform_node(&mut arena[id], &CompilerOptions::new());
        assert_eq!(arena[id].static_style, None);
        assert_eq!(gen_data(&arena[id]), "");
    }

    #[test]
    fn test_transform_and_gen_data() {
        let mut arena = AstArena::new();
        let id = arena.create_element(
            "div",
            vec![
                AstAttr::new("style", "color: red"),
                AstAttr::new(":style", "styles"),
            ],
            None,
        );
        transform_node(&mut arena[id], &CompilerOptions::new());
        assert_eq!(
            gen_data(&arena[id]),
            r#"staticStyle:{"color":"red"},style:(styles),"#
        );
    }
}
