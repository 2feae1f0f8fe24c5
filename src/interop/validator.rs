//! Adapter for the `validator` crate.
//!
//! Maps a [`validator::ValidationErrors`] result onto a [`FormNode`] tree so
//! it can be flattened like any other validated form. Field errors become
//! named children carrying the validator code as the constraint name, nested
//! struct errors become subtrees, and list errors become `name[index]`
//! children.

use validator::{ValidationErrors, ValidationErrorsKind};

use crate::form::{FormError, FormNode};

/// Builds a form tree from a `validator` result.
///
/// `validator` stores per-field errors in a hash map, so sibling order is
/// not meaningful; fields are sorted by name to keep the resulting tree, and
/// therefore the collected records, deterministic.
///
/// # Example
///
/// ```rust
/// use debrief::{collect, interop::form_from_validation_errors};
/// use validator::Validate;
///
/// #[derive(Validate)]
/// struct Signup {
///     #[validate(email)]
///     email: String,
/// }
///
/// let signup = Signup { email: "not-an-email".into() };
/// let form = form_from_validation_errors(&signup.validate().unwrap_err());
///
/// let records = collect(&form);
/// assert_eq!(records[0].field, "email");
/// assert_eq!(records[0].code, "validation.email");
/// ```
pub fn form_from_validation_errors(errors: &ValidationErrors) -> FormNode {
    fill_children(FormNode::root(), errors)
}

fn fill_children(mut node: FormNode, errors: &ValidationErrors) -> FormNode {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let mut child = FormNode::named(field.to_string());
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    child = child.with_error(
                        FormError::new(message).with_constraint(error.code.to_string()),
                    );
                }
                node = node.with_child(child);
            }
            ValidationErrorsKind::Struct(nested) => {
                node = node.with_child(fill_children(FormNode::named(field.to_string()), nested));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    node = node.with_child(fill_children(
                        FormNode::named(format!("{field}[{index}]")),
                        nested,
                    ));
                }
            }
        }
    }
    node
}
