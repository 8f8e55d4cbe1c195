//! Render data object assembly.

use crate::context::CodegenState;
use crate::events::gen_handlers;
use crate::helpers::{
    dynamic_name, strip_trailing_comma, transform_special_newlines, BIND_DYNAMIC_KEYS,
    BIND_OBJECT_LISTENERS, BIND_OBJECT_PROPS,
};
use vue_template_compiler::helpers::to_js_string;
use vue_template_compiler::{AstArena, AstAttr, AstDirective, AstElement, NodeId};

/// Generate the data object for an element, or `None` for a plain element
/// that needs none.
pub fn gen_element_data(arena: &AstArena, id: NodeId, state: &CodegenState<'_>) -> Option<String> {
    if arena[id].plain {
        None
    } else {
        Some(gen_data(arena, id, state))
    }
}

/// Generate the data object literal for an element.
///
/// Fields appear in a fixed order: directives, key, ref, module fragments,
/// attrs, domProps, listeners. A `v-bind` object wraps the result in `_b`
/// and a `v-on` object in `_g`.
pub fn gen_data(arena: &AstArena, id: NodeId, state: &CodegenState<'_>) -> String {
    let el = &arena[id];
    let mut data = String::from("{");

    if let Some(dirs) = gen_directives(&el.directives) {
        data.push_str(&dirs);
        data.push(',');
    }
    if let Some(key) = &el.key {
        data.push_str(&format!("key:{key},"));
    }
    if let Some(r) = &el.ref_ {
        data.push_str(&format!("ref:{r},"));
    }
    if el.ref_in_for {
        data.push_str("refInFor:true,");
    }
    for gen in &state.data_gen_fns {
        data.push_str(&gen(el));
    }
    if !el.attrs.is_empty() {
        data.push_str(&format!("attrs:{},", gen_props(&el.attrs)));
    }
    if !el.props.is_empty() {
        data.push_str(&format!("domProps:{},", gen_props(&el.props)));
    }
    if !el.events.is_empty() {
        data.push_str(&gen_handlers(&el.events, false));
        data.push(',');
    }
    if !el.native_events.is_empty() {
        data.push_str(&gen_handlers(&el.native_events, true));
        data.push(',');
    }

    let mut data = strip_trailing_comma(data);
    data.push('}');
    wrap(el, data)
}

fn wrap(el: &AstElement, mut data: String) -> String {
    if let Some(wrap_data) = &el.wrap_data {
        data = format!(
            "{BIND_OBJECT_PROPS}({data},'{}',{},{}{})",
            el.tag,
            wrap_data.value,
            wrap_data.as_prop,
            if wrap_data.sync { ",true" } else { "" }
        );
    }
    if let Some(listeners) = &el.wrap_listeners {
        data = format!("{BIND_OBJECT_LISTENERS}({data},{listeners})");
    }
    data
}

/// Generate `directives:[...]`, or `None` without directives.
pub fn gen_directives(directives: &[AstDirective]) -> Option<String> {
    if directives.is_empty() {
        return None;
    }
    let entries: Vec<String> = directives.iter().map(gen_directive).collect();
    Some(format!("directives:[{}]", entries.join(",")))
}

fn gen_directive(dir: &AstDirective) -> String {
    let mut code = format!("{{name:\"{}\",rawName:\"{}\"", dir.name, dir.raw_name);
    if !dir.value.is_empty() {
        code.push_str(&format!(
            ",value:({}),expression:{}",
            dir.value,
            to_js_string(&dir.value)
        ));
    }
    if let Some(arg) = &dir.arg {
        match dynamic_name(arg) {
            Some(exp) => code.push_str(&format!(",arg:{exp}")),
            None => code.push_str(&format!(",arg:\"{arg}\"")),
        }
    }
    if !dir.modifiers.is_empty() {
        let modifiers: Vec<String> = dir
            .modifiers
            .iter()
            .map(|m| format!("{}:true", to_js_string(m)))
            .collect();
        code.push_str(&format!(",modifiers:{{{}}}", modifiers.join(",")));
    }
    code.push('}');
    code
}

/// Generate an object literal for attribute or DOM property bindings.
///
/// Dynamic names are passed to `_d` as `[name, value, ...]` pairs.
pub fn gen_props(props: &[AstAttr]) -> String {
    let mut static_props = String::new();
    let mut dynamic_props = String::new();
    for prop in props {
        let value = transform_special_newlines(&prop.value);
        if prop.dynamic {
            dynamic_props.push_str(&format!("{},{value},", prop.name));
        } else {
            static_props.push_str(&format!("\"{}\":{value},", prop.name));
        }
    }
    let static_props = format!("{{{}}}", strip_trailing_comma(static_props));
    if dynamic_props.is_empty() {
        static_props
    } else {
        format!(
            "{BIND_DYNAMIC_KEYS}({static_props},[{}])",
            strip_trailing_comma(dynamic_props)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use vue_template_compiler::{compile, AstChild, CompilerOptions};

    fn compiled(tag: &str, attrs: &[(&str, &str)]) -> (AstArena, NodeId) {
        let mut arena = AstArena::new();
        let id = arena.create_element(
            tag,
            attrs.iter().map(|(n, v)| AstAttr::new(*n, *v)).collect(),
            None,
        );
        let id = compile(&mut arena, id, &CompilerOptions::new());
        (arena, id)
    }

    fn data(tag: &str, attrs: &[(&str, &str)]) -> String {
        let (arena, id) = compiled(tag, attrs);
        let options = CompilerOptions::new();
        gen_data(&arena, id, &CodegenState::new(&options))
    }

    #[test]
    fn test_plain_element_has_no_data() {
        let (arena, id) = compiled("div", &[]);
        let options = CompilerOptions::new();
        assert_eq!(gen_element_data(&arena, id, &CodegenState::new(&options)), None);
    }

    #[test]
    fn test_class_and_style_fragments() {
        assert_snapshot!(
            data("div", &[("class", "a b"), (":class", "{ on: x }"), ("style", "color: red")]),
            @r#"{staticClass:"a b",class:{ on: x },staticStyle:{"color":"red"}}"#
        );
    }

    #[test]
    fn test_field_order() {
        assert_snapshot!(
            data(
                "div",
                &[
                    (":key", "id"),
                    ("ref", "box"),
                    ("v-show", "visible"),
                    ("id", "main"),
                    (":title", "t"),
                    ("@click.prevent", "go"),
                ]
            ),
            @r#"{directives:[{name:"show",rawName:"v-show",value:(visible),expression:"visible"}],key:id,ref:"box",attrs:{"id":"main","title":t},on:{"click":function($event){$event.preventDefault();return go.apply(null, arguments)}}}"#
        );
    }

    #[test]
    fn test_dom_props_and_native_listeners() {
        assert_eq!(
            data("my-input", &[(":value", "v"), ("v-text", "msg"), ("@focus.native", "onFocus")]),
            r#"{attrs:{"value":v},domProps:{"textContent":_s(msg)},nativeOn:{"focus":onFocus}}"#
        );
        assert_eq!(
            data("input", &[(":value", "v")]),
            r#"{domProps:{"value":v}}"#
        );
    }

    #[test]
    fn test_dynamic_attribute_names() {
        assert_eq!(
            data("div", &[(":[name]", "v"), ("id", "x")]),
            r#"{attrs:_d({"id":"x"},[name,v])}"#
        );
    }

    #[test]
    fn test_directive_arg_and_modifiers() {
        assert_eq!(
            data("div", &[("v-focus:delay.lazy.deep", "opts")]),
            r#"{directives:[{name:"focus",rawName:"v-focus:delay.lazy.deep",value:(opts),expression:"opts",arg:"delay",modifiers:{"lazy":true,"deep":true}}]}"#
        );
    }

    #[test]
    fn test_object_bindings_are_wrapped() {
        assert_eq!(
            data("div", &[("v-bind", "$attrs"), ("v-on", "$listeners"), ("id", "a")]),
            r#"_g(_b({attrs:{"id":"a"}},'div',$attrs,false),$listeners)"#
        );
        assert_eq!(
            data("comp", &[("v-bind.prop.sync", "obj")]),
            r#"_b({},'comp',obj,true,true)"#
        );
    }

    #[test]
    fn test_ref_in_for() {
        let mut arena = AstArena::new();
        let ul = arena.create_element("ul", vec![], None);
        let li = arena.create_element(
            "li",
            vec![AstAttr::new("v-for", "x in xs"), AstAttr::new("ref", "item")],
            Some(ul),
        );
        arena[ul].children.push(AstChild::Element(li));
        let options = CompilerOptions::new();
        compile(&mut arena, ul, &options);

        assert_eq!(
            gen_data(&arena, li, &CodegenState::new(&options)),
            r#"{ref:"item",refInFor:true}"#
        );
    }

    #[test]
    fn test_model_branches_have_typed_attrs() {
        let (arena, head) = compiled("input", &[("v-model", "x"), (":type", "t")]);
        let options = CompilerOptions::new();
        let state = CodegenState::new(&options);
        let radio = arena[head].if_conditions[1].block;
        let other = arena[head].if_conditions[2].block;

        assert_eq!(
            gen_data(&arena, head, &state),
            r#"{directives:[{name:"model",rawName:"v-model",value:(x),expression:"x"}],attrs:{"type":"checkbox"}}"#
        );
        assert!(gen_data(&arena, radio, &state).ends_with(r#"attrs:{"type":"radio"}}"#));
        assert!(gen_data(&arena, other, &state).ends_with(r#"attrs:{"type":t}}"#));
    }
}
