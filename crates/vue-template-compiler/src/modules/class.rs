//! `class` / `:class` extraction.

use super::Module;
use crate::ast::AstElement;
use crate::helpers::{get_and_remove_attr, get_binding_attr, to_js_string};
use crate::options::CompilerOptions;
use crate::text_parser::parse_text;
use vue_diagnostics::{Diagnostic, DiagnosticCode};

/// The class module.
pub const MODULE: Module = Module {
    name: "class",
    static_keys: &["staticClass"],
    pre_transform_node: None,
    transform_node: Some(transform_node),
    gen_data: Some(gen_data),
};

/// Move `class` into `static_class` and `:class` into `class_binding`.
pub fn transform_node(el: &mut AstElement, options: &CompilerOptions) {
    if let Some(static_class) =
        get_and_remove_attr(el, "class", false).filter(|v| !v.is_empty())
    {
        if parse_text(&static_class, options.delimiters.as_ref()).is_some() {
            options.warn(
                Diagnostic::warning(
                    format!(
                        "class=\"{static_class}\": Interpolation inside attributes has been removed. \
                         Use v-bind or the colon shorthand instead. For example, \
                         instead of <div class=\"{{{{ val }}}}\">, use <div :class=\"val\">."
                    ),
                    DiagnosticCode::InterpolationInAttribute,
                )
                .with_tag(el.tag.clone())
                .with_attr("class"),
            );
        }
        el.static_class = Some(to_js_string(&static_class));
    }

    if let Some(binding) = get_binding_attr(el, "class", false) {
        el.class_binding = Some(binding);
    }
}

/// `staticClass:…,class:…,` for whichever fields are set.
pub fn gen_data(el: &AstElement) -> String {
    let mut data = String::new();
    if let Some(static_class) = &el.static_class {
        data.push_str(&format!("staticClass:{static_class},"));
    }
    if let Some(binding) = &el.class_binding {
        data.push_str(&format!("class:{binding},"));
    }
    data
}
