//! Dynamic values seen by render helpers.
//!
//! Objects have reference semantics: cloning a [`Value::Object`] shares the
//! underlying map, as with objects handed to a render function.

use indexmap::IndexMap;
use smol_str::SmolStr;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A render-time value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// `undefined`.
    #[default]
    Undefined,
    /// `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// An array.
    Array(Vec<Value>),
    /// A plain object.
    Object(Object),
    /// A callable.
    Function(Function),
}

impl Value {
    /// Truthiness as used by conditionals in render code.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Check if this is a plain key/value object.
    pub fn is_plain_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Check if this is an object or an array.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Array(_))
    }

    /// Name of the value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

/// A shared, insertion-ordered object.
#[derive(Debug, Clone, Default)]
pub struct Object(Rc<RefCell<IndexMap<String, Value>>>);

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a property.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Set a property, keeping its position if it already exists.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.borrow_mut().insert(key.into(), value.into());
    }

    /// Check if a property exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Snapshot of the entries, in insertion order.
    ///
    /// Callers iterate over the snapshot, so callbacks may freely touch the
    /// object while it is being walked.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Check if the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || *self.0.borrow() == *other.0.borrow()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self(Rc::new(RefCell::new(map)))
    }
}

type Callback = dyn Fn(&[Value]) -> Value;

/// A callable value. Two functions are equal only if they are the same
/// function.
#[derive(Clone)]
pub struct Function {
    name: SmolStr,
    callback: Rc<Callback>,
}

impl Function {
    /// Wrap a closure.
    pub fn new(name: impl Into<SmolStr>, callback: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            name: name.into(),
            callback: Rc::new(callback),
        }
    }

    /// A function that does nothing.
    pub fn noop(name: impl Into<SmolStr>) -> Self {
        Self::new(name, |_| Value::Undefined)
    }

    /// Function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.callback)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("a").is_truthy());
        assert!(Value::Array(Vec::new()).is_truthy());
        assert!(Value::Object(Object::new()).is_truthy());
    }

    #[test]
    fn test_objects_share_state() {
        let a = Object::new();
        let b = a.clone();
        b.insert("x", 1.0);
        assert_eq!(a.get("x"), Some(Value::Number(1.0)));
    }

    #[test]
    fn test_object_keeps_insertion_order() {
        let o: Object = [("b", 1.0), ("a", 2.0)].into_iter().collect();
        let keys: Vec<String> = o.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_function_identity() {
        let f = Function::noop("f");
        let g = Function::noop("f");
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
        assert_eq!(format!("{f:?}"), "[Function: f]");
    }

    #[test]
    fn test_function_call() {
        let double = Function::new("double", |args| match args.first() {
            Some(Value::Number(n)) => Value::Number(n * 2.0),
            _ => Value::Undefined,
        });
        assert_eq!(double.call(&[Value::from(2.0)]), Value::Number(4.0));
    }
}
