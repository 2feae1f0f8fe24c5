//! Form validation tree model.
//!
//! This module provides [`FormNode`] and [`FormError`], an immutable snapshot
//! of a validated form: a root node with zero or more named children,
//! recursively, each carrying the errors attached directly to it.
//!
//! The tree is produced by an adapter over whatever validation engine ran
//! beforehand; this crate only reads it.

use indexmap::IndexMap;

/// An error attached directly to one node of the form tree.
///
/// The message is already rendered and interpolated by the validation engine.
/// The constraint name identifies which validation rule produced the error,
/// when known; framework-level errors (such as a rejected request token)
/// carry no constraint.
///
/// # Example
///
/// ```rust
/// use debrief::FormError;
///
/// let error = FormError::new("This value should not be blank.")
///     .with_constraint("NotBlank");
///
/// assert_eq!(error.constraint(), Some("NotBlank"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    message: String,
    constraint: Option<String>,
}

impl FormError {
    /// Creates an error with the given rendered message and no constraint.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            constraint: None,
        }
    }

    /// Sets the originating constraint name and returns self for chaining.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    /// The rendered, human-readable message. May be empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The identifier of the validation rule that produced this error,
    /// or `None` for framework-level errors.
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }
}

/// One node of a validated form tree.
///
/// Exactly one node in a tree is the root; it has no meaningful name and is
/// reported under the field `"#"`. Children are kept in insertion order so
/// that collected errors preserve document order.
///
/// # Example
///
/// ```rust
/// use debrief::{FormError, FormNode};
///
/// let form = FormNode::root()
///     .with_child(
///         FormNode::named("email")
///             .with_error(FormError::new("This value is not a valid email.")),
///     )
///     .with_child(FormNode::named("password"));
///
/// assert!(!form.is_valid());
/// assert!(form.child("password").unwrap().is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormNode {
    name: String,
    root: bool,
    errors: Vec<FormError>,
    children: IndexMap<String, FormNode>,
}

impl FormNode {
    /// Creates the root node of a form tree.
    pub fn root() -> Self {
        Self {
            name: String::new(),
            root: true,
            errors: Vec::new(),
            children: IndexMap::new(),
        }
    }

    /// Creates a named child node.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: false,
            errors: Vec::new(),
            children: IndexMap::new(),
        }
    }

    /// Appends an error attached directly to this node and returns self.
    pub fn with_error(mut self, error: FormError) -> Self {
        self.errors.push(error);
        self
    }

    /// Adds a child node, keyed by its name, and returns self.
    ///
    /// Insertion order is preserved and determines collection order.
    /// Adding a second child with the same name replaces the first.
    pub fn with_child(mut self, child: FormNode) -> Self {
        self.children.insert(child.name.clone(), child);
        self
    }

    /// The node's field name. Empty and meaningless for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this node is the tree root.
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// The errors attached directly to this node, in attachment order.
    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    /// Looks up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&FormNode> {
        self.children.get(name)
    }

    /// Iterates over direct children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &FormNode> {
        self.children.values()
    }

    /// Returns true if this node has no own errors and every descendant is
    /// valid too. Valid subtrees contribute nothing to a collection.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.children.values().all(FormNode::is_valid)
    }
}
