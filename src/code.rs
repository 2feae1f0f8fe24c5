//! Error-code derivation policy.
//!
//! Every collected error receives a dotted, machine-readable code namespaced
//! under the top-level validation code, so clients can match on codes rather
//! than on translated message text. Codes must stay stable across releases.

use std::sync::LazyLock;

use regex::RegexBuilder;

use crate::error::FieldError;
use crate::form::{FormError, FormNode};

/// Field name reported for errors attached to the tree root.
pub const FIELD_ROOT: &str = "#";

/// Top-level code for a form validation failure; every field-level code is
/// namespaced under it.
pub const CODE_FORM_VALIDATION: &str = "validation";

/// Default top-level message carried by a form validation failure.
pub const MESSAGE_FORM_VALIDATION: &str = "Form validation failed";

/// Code token for rejected request-forgery tokens.
pub const TOKEN_CSRF: &str = "csrf_token";

/// Code token used when no constraint or message marker identifies the error.
pub const TOKEN_GENERAL: &str = "general";

// Known imprecision: any message that happens to contain "csrf" for an
// unrelated reason is classified as a token failure. Constraint metadata,
// when present, takes priority and is never subject to this sniffing.
static CSRF_MARKER: LazyLock<regex::Regex> = LazyLock::new(|| {
    RegexBuilder::new("csrf")
        .case_insensitive(true)
        .build()
        .expect("static pattern is valid")
});

/// Converts one raw error into its flat record.
///
/// The field is `"#"` for root-level errors, otherwise the owning node's
/// name. The code is derived in priority order: the error's constraint name
/// (snake-cased), then the CSRF message marker, then the generic fallback.
/// The message is carried over verbatim. Total: every well-formed error
/// receives some code.
pub fn classify(error: &FormError, node: &FormNode) -> FieldError {
    let field = if node.is_root() {
        FIELD_ROOT.to_string()
    } else {
        node.name().to_string()
    };

    let code = match error.constraint() {
        Some(constraint) => error_code(&constraint_token(constraint)),
        None => error_code_by_message(error.message()),
    };

    FieldError::new(field, code, error.message())
}

fn error_code_by_message(message: &str) -> String {
    if CSRF_MARKER.is_match(message) {
        error_code(TOKEN_CSRF)
    } else {
        error_code(TOKEN_GENERAL)
    }
}

fn error_code(token: &str) -> String {
    format!("{CODE_FORM_VALIDATION}.{token}")
}

/// Derives the canonical snake-case token for a constraint identifier.
///
/// Only the final unqualified segment is used; namespace prefixes separated
/// by `\`, `::` or `.` are discarded. Pascal/camel case becomes lowercase
/// words joined by underscores, with acronym runs kept as one word.
///
/// # Example
///
/// ```rust
/// use debrief::code::constraint_token;
///
/// assert_eq!(constraint_token("NotBlank"), "not_blank");
/// assert_eq!(constraint_token("App\\Rules\\PasswordStrength"), "password_strength");
/// ```
pub fn constraint_token(constraint: &str) -> String {
    let segment = constraint
        .rsplit(['\\', ':', '.'])
        .next()
        .unwrap_or(constraint);

    let chars: Vec<char> = segment.chars().collect();
    let mut token = String::with_capacity(segment.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let after_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit();
            // End of an acronym run: uppercase followed by lowercase.
            let run_end = chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if after_lower || run_end {
                token.push('_');
            }
        }
        token.extend(c.to_lowercase());
    }
    token
}
