//! Render data passed to `_c(tag, data, children)`.

use crate::value::Value;
use indexmap::IndexMap;
use std::rc::Rc;

/// Event name to handler(s).
pub type ListenerMap = IndexMap<String, Listener>;

/// Handler(s) registered for one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Listener {
    /// A single handler.
    One(Value),
    /// Handlers run in order.
    Many(Vec<Value>),
}

impl Listener {
    /// Wrap a value, treating an array as a handler list.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Many(items),
            other => Self::One(other),
        }
    }

    /// Registered handlers, in call order.
    pub fn handlers(&self) -> &[Value] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Check if anything is registered.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::One(value) => value.is_truthy(),
            Self::Many(_) => true,
        }
    }

    /// Append `value` after the existing handlers, flattening one level on
    /// both sides.
    pub fn concat(&self, value: Value) -> Self {
        let mut handlers = self.handlers().to_vec();
        match value {
            Value::Array(items) => handlers.extend(items),
            other => handlers.push(other),
        }
        Self::Many(handlers)
    }
}

/// Render data for one vnode.
///
/// Listener maps sit behind `Rc` so a map shared with another data object
/// is copied before it is modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VNodeData {
    /// `key`.
    pub key: Option<Value>,
    /// `ref`.
    pub ref_: Option<Value>,
    /// The ref sits inside a `v-for`.
    pub ref_in_for: bool,
    /// `slot`.
    pub slot: Option<Value>,
    /// `staticClass`.
    pub static_class: Option<String>,
    /// `class`.
    pub class: Option<Value>,
    /// `staticStyle`.
    pub static_style: Option<Value>,
    /// `style`.
    pub style: Option<Value>,
    /// `attrs`.
    pub attrs: Option<IndexMap<String, Value>>,
    /// `domProps`.
    pub dom_props: Option<IndexMap<String, Value>>,
    /// `on`.
    pub on: Option<Rc<ListenerMap>>,
    /// `nativeOn`.
    pub native_on: Option<Rc<ListenerMap>>,
}

impl VNodeData {
    /// Create empty render data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered listeners for `event`.
    pub fn listener(&self, event: &str) -> Option<&Listener> {
        self.on.as_deref()?.get(event)
    }

    /// Mutable access to the `on` map, copying it first if it is shared.
    pub fn on_mut(&mut self) -> &mut ListenerMap {
        Rc::make_mut(self.on.get_or_insert_with(Default::default))
    }
}
