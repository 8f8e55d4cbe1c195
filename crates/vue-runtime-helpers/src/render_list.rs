//! `v-for` iteration (`_l`).

use crate::value::Value;
use std::ops::Deref;

/// Second argument handed to the render callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListKey {
    /// Position in an array, string, or number range.
    Index(usize),
    /// Property name of an object.
    Key(String),
}

/// Nodes rendered by [`render_list`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedList<T> {
    items: Vec<T>,
    /// Always `true`; lets the patcher recognise lists produced by `v-for`.
    pub is_v_list: bool,
}

impl<T> RenderedList<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items,
            is_v_list: true,
        }
    }

    /// Take the rendered items.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for RenderedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for RenderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Render one node per entry of `collection`.
///
/// - arrays and strings: `render(item, Index(i), None)` per element or
///   character;
/// - a number `n`: `render(i + 1, Index(i), None)` for every `0 <= i < n`,
///   so a fractional `n` rounds up and `n <= 0` renders nothing;
/// - objects: `render(value, Key(k), Some(i))` per property, in insertion
///   order.
///
/// Anything else yields `None`, which is distinct from an empty list. That
/// includes non-finite numbers and counts above `u32::MAX`, the largest
/// array length a template can iterate.
pub fn render_list<T, F>(collection: &Value, mut render: F) -> Option<RenderedList<T>>
where
    F: FnMut(Value, ListKey, Option<usize>) -> T,
{
    let items = match collection {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| render(item.clone(), ListKey::Index(i), None))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| render(Value::String(c.to_string()), ListKey::Index(i), None))
            .collect(),
        Value::Number(n) if n.is_finite() && *n <= f64::from(u32::MAX) => {
            let count = if *n > 0.0 { n.ceil() as usize } else { 0 };
            (0..count)
                .map(|i| render(Value::Number((i + 1) as f64), ListKey::Index(i), None))
                .collect()
        }
        Value::Object(object) => object
            .entries()
            .into_iter()
            .enumerate()
            .map(|(i, (key, value))| render(value, ListKey::Key(key), Some(i)))
            .collect(),
        _ => {
            tracing::trace!(kind = collection.type_name(), "value is not iterable");
            return None;
        }
    };
    Some(RenderedList::new(items))
}
