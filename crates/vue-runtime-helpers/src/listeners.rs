//! `v-on="object"` support (`_g`).

use crate::value::Value;
use crate::vnode_data::{Listener, VNodeData};
use vue_diagnostics::{Diagnostic, DiagnosticCode, WarnHandler};

/// Merge an object of listeners into `data.on`.
///
/// A falsy `value` leaves `data` untouched. A value that is not a plain
/// object is reported once and otherwise ignored. Handlers for events that
/// already have listeners are appended after them; new events get the value
/// as is.
pub fn bind_object_listeners<'a>(
    data: &'a mut VNodeData,
    value: &Value,
    warn: &dyn WarnHandler,
) -> &'a mut VNodeData {
    if !value.is_truthy() {
        return data;
    }
    let Value::Object(object) = value else {
        warn.warn(
            Diagnostic::warning(
                "v-on without argument expects an Object value",
                DiagnosticCode::ListenerNotObject,
            )
            .with_attr("v-on"),
        );
        return data;
    };

    let on = data.on_mut();
    for (event, ours) in object.entries() {
        let merged = match on.get(&event) {
            Some(existing) if existing.is_truthy() => existing.concat(ours),
            _ => Listener::from_value(ours),
        };
        on.insert(event, merged);
    }
    tracing::trace!(events = on.len(), "bound object listeners");
    data
}
