//! Flat field-error record.

use std::fmt::{self, Display};

use serde::Serialize;

/// One collected validation error, flattened for an API response body.
///
/// `FieldError` captures everything a client needs to attribute and handle a
/// failure:
/// - **field**: the name of the offending field, or `"#"` for the form root
/// - **code**: a dotted machine-readable identifier (e.g. `validation.not_blank`),
///   stable across releases for client-side matching
/// - **message**: the rendered human-readable message, verbatim
///
/// Records are immutable once built and serialize directly with serde.
///
/// # Example
///
/// ```rust
/// use debrief::FieldError;
///
/// let record = FieldError::new("email", "validation.email", "This value is not a valid email.");
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["field"], "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name the error is attributed to; `"#"` denotes the form root.
    pub field: String,
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message, copied verbatim from the validation engine.
    pub message: String,
}

impl FieldError {
    /// Creates a new record.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.field, self.code, self.message)
    }
}

// FieldError crosses thread boundaries when responses are assembled on worker
// threads; these assertions keep that guarantee if the fields change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldError>();
    assert_sync::<FieldError>();
};
