//! The error value raised when a form fails validation.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::code::{CODE_FORM_VALIDATION, MESSAGE_FORM_VALIDATION};
use crate::collector::collect;
use crate::error::FieldError;
use crate::form::FormNode;

/// Carrier for a failed form validation.
///
/// Holds the validated form tree together with the top-level message and
/// code describing the overall failure. The tree is not traversed when the
/// error is constructed; [`field_errors`](Self::field_errors) flattens it on
/// demand, so callers that never look at field-level detail pay nothing.
///
/// Serializing the carrier produces `{message, code, fields}`, ready to be
/// embedded into an API error response body.
///
/// # Example
///
/// ```rust
/// use debrief::{FormError, FormNode, FormValidationError};
///
/// let form = FormNode::root().with_child(
///     FormNode::named("email")
///         .with_error(FormError::new("This value is not a valid email.").with_constraint("Email")),
/// );
///
/// let error = FormValidationError::new(form);
/// assert_eq!(error.code(), "validation");
/// assert_eq!(error.field_errors()[0].code, "validation.email");
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct FormValidationError {
    form: FormNode,
    message: String,
    code: String,
}

impl FormValidationError {
    /// Wraps a validated form tree with the default message and code.
    pub fn new(form: FormNode) -> Self {
        Self {
            form,
            message: MESSAGE_FORM_VALIDATION.to_string(),
            code: CODE_FORM_VALIDATION.to_string(),
        }
    }

    /// Overrides the top-level message and returns self for chaining.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Overrides the top-level code and returns self for chaining.
    ///
    /// Field-level codes stay namespaced under the default validation code
    /// regardless of this override.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// The top-level message describing the overall failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The top-level error code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The underlying form tree.
    pub fn form(&self) -> &FormNode {
        &self.form
    }

    /// Flattens the form tree into field-level error records.
    ///
    /// Traverses on every call; the tree itself is never mutated, so repeated
    /// calls return identical output.
    pub fn field_errors(&self) -> Vec<FieldError> {
        collect(&self.form)
    }
}

impl Serialize for FormValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormValidationError", 3)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("fields", &self.field_errors())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormError;

    fn sample_form() -> FormNode {
        FormNode::root().with_child(
            FormNode::named("email")
                .with_error(FormError::new("This value is not a valid email.").with_constraint("Email")),
        )
    }

    #[test]
    fn test_default_message_and_code() {
        let error = FormValidationError::new(sample_form());
        assert_eq!(error.message(), "Form validation failed");
        assert_eq!(error.code(), "validation");
    }

    #[test]
    fn test_overrides() {
        let error = FormValidationError::new(sample_form())
            .with_message("Signup rejected")
            .with_code("signup.invalid");
        assert_eq!(error.message(), "Signup rejected");
        assert_eq!(error.code(), "signup.invalid");
    }

    #[test]
    fn test_display_uses_top_level_message() {
        let error = FormValidationError::new(sample_form());
        assert_eq!(error.to_string(), "Form validation failed");
    }

    #[test]
    fn test_field_errors_flatten_the_tree() {
        let errors = FormValidationError::new(sample_form()).field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_serialize_embeds_fields() {
        let json = serde_json::to_value(FormValidationError::new(sample_form())).unwrap();
        assert_eq!(json["code"], "validation");
        assert_eq!(json["fields"][0]["code"], "validation.email");
    }

    #[test]
    fn test_implements_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<FormValidationError>();
    }
}
