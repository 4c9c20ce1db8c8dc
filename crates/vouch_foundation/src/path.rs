//! Parent-linked location trails for error reporting.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Immutable location trail used to render failure locations.
///
/// A path is a parent-linked chain of `(container, key)` nodes rooted at an
/// empty sentinel. A fresh node is created on every descent into an array
/// element, tuple position, or record field; nodes are never mutated.
/// Cloning is O(1) (the spine is shared through `Arc`).
///
/// Paths carry no validation semantics; they exist purely for diagnostics.
#[derive(Clone)]
pub struct Path {
    node: Arc<Node>,
}

enum Node {
    Root,
    Child {
        parent: Path,
        container: Value,
        key: String,
    },
}

impl Path {
    /// Returns the root sentinel, which renders as the empty string.
    #[must_use]
    pub fn root() -> Self {
        Self { node: Arc::new(Node::Root) }
    }

    /// Returns a new child path descending into `container` at `key`.
    #[must_use]
    pub fn child(&self, container: Value, key: impl Into<String>) -> Self {
        Self {
            node: Arc::new(Node::Child {
                parent: self.clone(),
                container,
                key: key.into(),
            }),
        }
    }

    /// Returns true if this is the root sentinel.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(*self.node, Node::Root)
    }

    /// Returns the key of this node; the root's key is empty.
    #[must_use]
    pub fn key(&self) -> &str {
        match &*self.node {
            Node::Root => "",
            Node::Child { key, .. } => key,
        }
    }

    /// Returns the parent path, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        match &*self.node {
            Node::Root => None,
            Node::Child { parent, .. } => Some(parent),
        }
    }

    /// Returns the container descended into at this node, if any.
    #[must_use]
    pub fn container(&self) -> Option<&Value> {
        match &*self.node {
            Node::Root => None,
            Node::Child { container, .. } => Some(container),
        }
    }

    /// Renders the dotted path from root to this node.
    ///
    /// The root sentinel contributes nothing, so a top-level path renders
    /// as `""` and nested descents render as `"name.age"` or `"items.0"`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut keys = Vec::new();
        let mut current = self;
        while let Node::Child { parent, key, .. } = &*current.node {
            keys.push(key.as_str());
            current = parent;
        }
        keys.reverse();
        keys.join(".")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({:?})", self.render())
    }
}
