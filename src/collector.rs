//! Depth-first collection of field errors from a form tree.

use crate::code::classify;
use crate::error::FieldError;
use crate::form::FormNode;

/// Flattens a validated form tree into an ordered list of field errors.
///
/// Traversal is depth-first in document order: a node's own errors come
/// first, in attachment order, then each child's errors in insertion order.
/// Children whose whole subtree is valid are skipped and contribute nothing,
/// so an all-valid tree yields an empty list.
///
/// Pure read-and-transform over the tree; never fails and never mutates.
/// Repeated calls over the same tree yield identical output.
///
/// # Example
///
/// ```rust
/// use debrief::{collect, FormError, FormNode};
///
/// let form = FormNode::root().with_child(
///     FormNode::named("email")
///         .with_error(FormError::new("This value is not a valid email.").with_constraint("Email")),
/// );
///
/// let records = collect(&form);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].field, "email");
/// assert_eq!(records[0].code, "validation.email");
/// ```
pub fn collect(node: &FormNode) -> Vec<FieldError> {
    let mut records = Vec::new();
    collect_into(node, &mut records);
    records
}

fn collect_into(node: &FormNode, records: &mut Vec<FieldError>) {
    for error in node.errors() {
        records.push(classify(error, node));
    }
    for child in node.children() {
        if !child.is_valid() {
            collect_into(child, records);
        }
    }
}
