//! AST types for Vue templates.
//!
//! Elements live in an [`AstArena`] and refer to each other through
//! [`NodeId`]s. Structural rewrites (such as the `v-model` expansion) create
//! new arena entries and hand back their ids for the caller to substitute;
//! an entry's identity never changes after creation.

use indexmap::IndexMap;
use smol_str::SmolStr;
use std::ops::{Index, IndexMut};

/// Stable handle to an element in an [`AstArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owner of every element created while compiling one template.
#[derive(Debug, Clone, Default)]
pub struct AstArena {
    nodes: Vec<AstElement>,
}

impl AstArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element with empty metadata.
    ///
    /// `attrs_map` is built from `attrs`; a later duplicate name overwrites an
    /// earlier one in the map but both stay in `attrs_list`.
    pub fn create_element(
        &mut self,
        tag: impl Into<SmolStr>,
        attrs: Vec<AstAttr>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let attrs_map = attrs
            .iter()
            .map(|a| (a.name.clone(), a.value.clone()))
            .collect();
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(AstElement {
            tag: tag.into(),
            attrs_list: attrs,
            attrs_map,
            parent,
            ..AstElement::default()
        });
        id
    }

    /// Clone an element's tag and a copy of its raw attribute list into a
    /// fresh element under the same parent.
    pub fn clone_element(&mut self, id: NodeId) -> NodeId {
        let source = &self[id];
        let tag = source.tag.clone();
        let attrs = source.attrs_list.clone();
        let parent = source.parent;
        self.create_element(tag, attrs, parent)
    }

    /// Get an element.
    pub fn get(&self, id: NodeId) -> Option<&AstElement> {
        self.nodes.get(id.index())
    }

    /// Get an element mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut AstElement> {
        self.nodes.get_mut(id.index())
    }

    /// Number of elements ever created.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: self[id].parent,
        }
    }

    /// Element children of `id`, in order.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self[id].children.iter().filter_map(AstChild::as_element)
    }
}

impl Index<NodeId> for AstArena {
    type Output = AstElement;

    fn index(&self, id: NodeId) -> &AstElement {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for AstArena {
    fn index_mut(&mut self, id: NodeId) -> &mut AstElement {
        &mut self.nodes[id.index()]
    }
}

/// Iterator returned by [`AstArena::ancestors`].
pub struct Ancestors<'a> {
    arena: &'a AstArena,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.arena[current].parent;
        Some(current)
    }
}

/// Structural processing state of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// Structural directives (`v-for`, `v-if`, `v-once`) not yet handled.
    #[default]
    Pending,
    /// Structural processing already ran; must not be re-entered.
    Processed,
}

/// An element during compilation.
#[derive(Debug, Clone, Default)]
pub struct AstElement {
    /// The tag name.
    pub tag: SmolStr,
    /// Raw attributes not yet consumed by processing.
    pub attrs_list: Vec<AstAttr>,
    /// Raw attributes by name, as written in the template.
    pub attrs_map: IndexMap<SmolStr, String>,
    /// Parent element.
    pub parent: Option<NodeId>,
    /// Child nodes.
    pub children: Vec<AstChild>,
    /// Structural processing state.
    pub state: NodeState,

    /// No key, no remaining attributes after processing.
    pub plain: bool,
    /// Any directive or binding was found.
    pub has_bindings: bool,
    /// `:key` expression.
    pub key: Option<String>,
    /// `ref` expression.
    pub ref_: Option<String>,
    /// The ref sits inside a `v-for`.
    pub ref_in_for: bool,
    /// `v-once`.
    pub once: bool,

    /// Parsed `v-for`.
    pub for_: Option<ForParseResult>,
    /// `v-if` condition.
    pub if_: Option<String>,
    /// `v-else-if` condition.
    pub else_if: Option<String>,
    /// `v-else`.
    pub else_: bool,
    /// Conditional chain; only set on the chain head.
    pub if_conditions: Vec<IfCondition>,

    /// Generated attribute bindings, values are code.
    pub attrs: Vec<AstAttr>,
    /// Generated DOM property bindings, values are code.
    pub props: Vec<AstAttr>,
    /// Component / element listeners.
    pub events: IndexMap<SmolStr, Vec<AstHandler>>,
    /// `.native` listeners.
    pub native_events: IndexMap<SmolStr, Vec<AstHandler>>,
    /// Runtime directives.
    pub directives: Vec<AstDirective>,
    /// `v-bind="obj"` expression and its modifiers.
    pub wrap_data: Option<WrapData>,
    /// `v-on="obj"` expression.
    pub wrap_listeners: Option<String>,

    // class module
    /// Static `class`, as a string literal.
    pub static_class: Option<String>,
    /// Bound `:class` expression.
    pub class_binding: Option<String>,

    // style module
    /// Static `style`, as an object literal.
    pub static_style: Option<String>,
    /// Bound `:style` expression.
    pub style_binding: Option<String>,

    // optimizer
    /// Element and all its descendants never change.
    pub static_: bool,
    /// Static subtree worth hoisting.
    pub static_root: bool,
}

impl AstElement {
    /// Check if this element heads a conditional chain.
    pub fn is_chain_head(&self) -> bool {
        !self.if_conditions.is_empty()
    }

    /// Check if the element has already gone through structural processing.
    pub fn is_processed(&self) -> bool {
        self.state == NodeState::Processed
    }

    /// Names of every populated field, using the render-data naming.
    ///
    /// Used by the optimizer: an element is only static when each of these
    /// is a static key.
    pub fn populated_keys(&self) -> Vec<&'static str> {
        let mut keys = vec![
            "type",
            "tag",
            "attrsList",
            "attrsMap",
            "rawAttrsMap",
            "parent",
            "children",
            "plain",
        ];
        let optional = [
            ("hasBindings", self.has_bindings),
            ("key", self.key.is_some()),
            ("ref", self.ref_.is_some()),
            ("refInFor", self.ref_in_for),
            ("once", self.once),
            ("for", self.for_.is_some()),
            ("if", self.if_.is_some()),
            ("elseif", self.else_if.is_some()),
            ("else", self.else_),
            ("ifConditions", !self.if_conditions.is_empty()),
            ("attrs", !self.attrs.is_empty()),
            ("props", !self.props.is_empty()),
            ("events", !self.events.is_empty()),
            ("nativeEvents", !self.native_events.is_empty()),
            ("directives", !self.directives.is_empty()),
            ("wrapData", self.wrap_data.is_some()),
            ("wrapListeners", self.wrap_listeners.is_some()),
            ("staticClass", self.static_class.is_some()),
            ("classBinding", self.class_binding.is_some()),
            ("staticStyle", self.static_style.is_some()),
            ("styleBinding", self.style_binding.is_some()),
        ];
        keys.extend(optional.into_iter().filter(|(_, set)| *set).map(|(k, _)| k));
        keys
    }
}

/// A name/value attribute pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstAttr {
    /// Attribute name.
    pub name: SmolStr,
    /// Raw value, or generated code for processed attributes.
    pub value: String,
    /// The name is itself an expression (`:[name]`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub dynamic: bool,
}

impl AstAttr {
    /// Create an attribute with a static name.
    pub fn new(name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            dynamic: false,
        }
    }
}

/// One branch of a conditional chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfCondition {
    /// Branch condition; `None` is the catch-all.
    pub exp: Option<String>,
    /// Element rendered when the condition holds.
    pub block: NodeId,
}

/// Parsed `v-for` expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForParseResult {
    /// The iterated source expression.
    pub for_exp: String,
    /// Value alias.
    pub alias: String,
    /// Second alias (key or index).
    pub iterator1: Option<String>,
    /// Third alias (index for objects).
    pub iterator2: Option<String>,
}

/// A runtime directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstDirective {
    /// Directive name without prefix or argument.
    pub name: SmolStr,
    /// Attribute name as written.
    pub raw_name: SmolStr,
    /// Value expression.
    pub value: String,
    /// Directive argument.
    pub arg: Option<String>,
    /// Modifiers.
    pub modifiers: Vec<SmolStr>,
}

/// An event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstHandler {
    /// Handler expression.
    pub value: String,
    /// Modifiers that remain relevant at codegen time.
    pub modifiers: Vec<SmolStr>,
}

/// `v-bind="obj"` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapData {
    /// Object expression.
    pub value: String,
    /// `.prop` modifier was present.
    pub as_prop: bool,
    /// `.sync` modifier was present.
    pub sync: bool,
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstChild {
    /// A nested element.
    Element(NodeId),
    /// Plain text.
    Text(String),
    /// Text containing interpolations.
    Expression {
        /// Generated concatenation expression.
        expression: String,
        /// Original text.
        text: String,
    },
}

impl AstChild {
    /// The element id, if this child is an element.
    pub fn as_element(&self) -> Option<NodeId> {
        match self {
            Self::Element(id) => Some(*id),
            _ => None,
        }
    }
}
