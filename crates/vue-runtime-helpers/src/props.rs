//! `v-bind="object"` support (`_b`).

use crate::value::{Function, Object, Value};
use crate::vnode_data::{Listener, VNodeData};
use indexmap::IndexMap;
use vue_diagnostics::{Diagnostic, DiagnosticCode, WarnHandler};
use vue_shared::{camelize, hyphenate, must_use_prop};

/// Attributes that land on the data object itself.
fn is_reserved_attribute(key: &str) -> bool {
    matches!(key, "key" | "ref" | "slot" | "slot-scope" | "is")
}

/// Merge an object of bindings into `data`.
///
/// `class`, `style`, and reserved attributes go on the data object; the rest
/// go to `dom_props` when `as_prop` is set or the platform requires a
/// property, and to `attrs` otherwise. Bindings already present under the
/// camelized or hyphenated name are left alone. With `is_sync`, an
/// `update:<key>` listener writing back into `value` is installed for each
/// binding. An array value is merged into one object first.
pub fn bind_object_props<'a>(
    data: &'a mut VNodeData,
    tag: &str,
    value: &Value,
    as_prop: bool,
    is_sync: bool,
    warn: &dyn WarnHandler,
) -> &'a mut VNodeData {
    if !value.is_truthy() {
        return data;
    }
    let object = match value {
        Value::Object(object) => object.clone(),
        Value::Array(items) => to_object(items),
        _ => {
            warn.warn(
                Diagnostic::warning(
                    "v-bind without argument expects an Object or Array value",
                    DiagnosticCode::BindNotObject,
                )
                .with_tag(tag)
                .with_attr("v-bind"),
            );
            return data;
        }
    };

    for (key, binding) in object.entries() {
        let inserted = if key == "class" || key == "style" || is_reserved_attribute(&key) {
            set_data_field(data, &key, binding)
        } else {
            let input_type = match data.attrs.as_ref().and_then(|a| a.get("type")) {
                Some(Value::String(t)) => Some(t.as_str()),
                _ => None,
            };
            let target = if as_prop || must_use_prop(tag, input_type, &key) {
                data.dom_props.get_or_insert_with(IndexMap::new)
            } else {
                data.attrs.get_or_insert_with(IndexMap::new)
            };
            insert_unless_present(target, &key, binding)
        };

        if inserted && is_sync {
            let target = object.clone();
            let field = key.clone();
            let update = Function::new(format!("update:{key}"), move |args| {
                target.insert(field.clone(), args.first().cloned().unwrap_or_default());
                Value::Undefined
            });
            data.on_mut()
                .insert(format!("update:{key}"), Listener::One(Value::from(update)));
        }
    }
    data
}

fn insert_unless_present(target: &mut IndexMap<String, Value>, key: &str, value: Value) -> bool {
    if target.contains_key(&camelize(key)) || target.contains_key(&hyphenate(key)) {
        return false;
    }
    target.insert(key.to_string(), value);
    true
}

/// Set a data-level field. `slot-scope` and `is` are resolved at compile
/// time and have no data field.
fn set_data_field(data: &mut VNodeData, key: &str, value: Value) -> bool {
    let field = match key {
        "class" => &mut data.class,
        "style" => &mut data.style,
        "key" => &mut data.key,
        "ref" => &mut data.ref_,
        "slot" => &mut data.slot,
        _ => return false,
    };
    if field.is_some() {
        return false;
    }
    *field = Some(value);
    true
}

/// Merge an array of objects into one object, later entries winning.
fn to_object(items: &[Value]) -> Object {
    let merged = Object::new();
    for item in items {
        if let Value::Object(object) = item {
            for (key, value) in object.entries() {
                merged.insert(key, value);
            }
        }
    }
    merged
}
