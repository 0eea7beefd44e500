//! Report tree nodes.
//!
//! A report tree is a plain owned tree: each node owns its children, and the
//! root is owned by whoever built it until it is registered into a
//! [`FeatureExtractionResult`](super::FeatureExtractionResult). Node and
//! attribute names must be XML-style identifiers so that any markup renderer
//! can emit them unchanged; a bad name is a construction fault.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// A node in a feature report tree.
#[derive(Debug, Serialize)]
pub struct ReportNode {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ReportNode>,
}

impl ReportNode {
    /// Create a detached node, typically the root of a report.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Error::InvalidNodeName(name));
        }
        Ok(Self {
            name,
            value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        })
    }

    /// Append a new child named `name` and return it.
    pub fn add_child(&mut self, name: impl Into<String>) -> Result<&mut ReportNode> {
        let child = ReportNode::new(name)?;
        self.children.push(child);
        let last = self.children.len() - 1;
        Ok(&mut self.children[last])
    }

    /// Append an already built subtree.
    pub fn append_child(&mut self, child: ReportNode) {
        self.children.push(child);
    }

    /// Append a child holding `value`, unless `value` is absent or empty.
    ///
    /// Returns whether a child was added.
    pub fn add_not_empty_child(
        &mut self,
        name: impl Into<String>,
        value: Option<&str>,
    ) -> Result<bool> {
        match value {
            Some(text) if !text.is_empty() => {
                self.add_child(name)?.set_value(text);
                Ok(true)
            },
            _ => Ok(false),
        }
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Error::InvalidAttributeName(name));
        }
        self.attributes.insert(name, value.into());
        Ok(())
    }

    /// Set the text value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[ReportNode] {
        &self.children
    }

    /// First child named `name`.
    pub fn child(&self, name: &str) -> Option<&ReportNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Node addressed by a child-index path (empty path = `self`).
    pub fn node_at(&self, path: &[usize]) -> Option<&ReportNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Copy of this node without its children.
    fn shallow_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: self.value.clone(),
            attributes: self.attributes.clone(),
            children: Vec::new(),
        }
    }
}

// Deep outlines produce deep trees: clone, compare and drop them without
// recursing.
impl Clone for ReportNode {
    fn clone(&self) -> Self {
        // Descendants in pre-order, rebuilt in reverse so that every node's
        // children are finished before the node itself.
        let mut order = Vec::new();
        let mut stack: Vec<&ReportNode> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.children.iter().rev());
        }

        // Finished subtrees, last sibling first.
        let mut built: Vec<ReportNode> = Vec::with_capacity(order.len());
        for node in order.into_iter().rev() {
            let mut copy = node.shallow_clone();
            let mut kids = built.split_off(built.len() - node.children.len());
            kids.reverse();
            copy.children = kids;
            built.push(copy);
        }

        let mut root = self.shallow_clone();
        built.reverse();
        root.children = built;
        root
    }
}

impl PartialEq for ReportNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.name != b.name
                || a.value != b.value
                || a.attributes != b.attributes
                || a.children.len() != b.children.len()
            {
                return false;
            }
            pending.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Eq for ReportNode {}

impl Drop for ReportNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// XML NCName subset: a letter or `_`, then letters, digits, `_`, `-`, `.`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
