//! JSON template input.
//!
//! Templates arrive already parsed, as a tree of
//! `{ "tag", "attrs": [{ "name", "value" }], "children": [...] }` objects
//! where text children are plain strings.

use serde::Deserialize;
use vue_template_compiler::{AstArena, AstAttr, AstChild, NodeId};

/// A node of the input tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    /// Text content.
    Text(String),
    /// An element.
    Element(RawElement),
}

/// An element of the input tree.
#[derive(Debug, Clone, Deserialize)]
pub struct RawElement {
    /// Tag name.
    pub tag: String,
    /// Attributes, in source order.
    #[serde(default)]
    pub attrs: Vec<RawAttr>,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<RawNode>,
}

/// A raw attribute.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAttr {
    /// Attribute name as written.
    pub name: String,
    /// Attribute value; empty for boolean attributes.
    #[serde(default)]
    pub value: String,
}

impl RawElement {
    /// Parse a template tree from JSON.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Allocate this element and its descendants in `arena`.
    pub fn build(&self, arena: &mut AstArena, parent: Option<NodeId>) -> NodeId {
        let attrs = self
            .attrs
            .iter()
            .map(|a| AstAttr::new(a.name.as_str(), a.value.as_str()))
            .collect();
        let id = arena.create_element(self.tag.as_str(), attrs, parent);
        for child in &self.children {
            let child = match child {
                RawNode::Text(text) => AstChild::Text(text.clone()),
                RawNode::Element(element) => AstChild::Element(element.build(arena, Some(id))),
            };
            arena[id].children.push(child);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_tree() {
        let raw = RawElement::from_json(
            r#"{
                "tag": "ul",
                "attrs": [{ "name": "class", "value": "list" }],
                "children": [
                    "  ",
                    { "tag": "li", "attrs": [{ "name": "v-for", "value": "x in xs" }] }
                ]
            }"#,
        )
        .unwrap();

        let mut arena = AstArena::new();
        let root = raw.build(&mut arena, None);

        assert_eq!(arena.len(), 2);
        assert_eq!(arena[root].attrs_map.get("class").map(String::as_str), Some("list"));
        assert_eq!(arena[root].children[0], AstChild::Text("  ".into()));
        let li = arena.element_children(root).next().unwrap();
        assert_eq!(arena[li].parent, Some(root));
    }

    #[test]
    fn test_boolean_attribute_defaults_to_empty() {
        let raw = RawElement::from_json(r#"{ "tag": "p", "attrs": [{ "name": "v-else" }] }"#).unwrap();
        assert_eq!(raw.attrs[0].value, "");
    }

    #[test]
    fn test_missing_tag_is_an_error() {
        assert!(RawElement::from_json(r#"{ "attrs": [] }"#).is_err());
    }
}
