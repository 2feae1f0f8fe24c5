//! # Debrief
//!
//! Flattens the result of validating a nested form into an ordered list of
//! structured field-error records, ready to embed in an API error response.
//!
//! ## Overview
//!
//! Validation engines report failures on a tree: a root form with named
//! children, recursively. API clients want a flat list instead, with a stable
//! machine-readable code per error so they can match programmatically instead
//! of parsing translated message text. Debrief walks an already-validated
//! tree depth-first, skips valid subtrees, and derives a dotted code for
//! every error from its constraint name, with heuristic and generic
//! fallbacks when no constraint is known.
//!
//! Debrief does not validate anything itself; an adapter builds the
//! [`FormNode`] tree from whatever engine ran beforehand (the `validator`
//! feature ships one for the `validator` crate).
//!
//! ## Core Types
//!
//! - [`FormNode`] / [`FormError`]: the validated tree and its per-node errors
//! - [`FieldError`]: one flat record (`field`, `code`, `message`)
//! - [`FormValidationError`]: error carrier that flattens the tree on demand
//!
//! ## Example
//!
//! ```rust
//! use debrief::{FormError, FormNode, FormValidationError};
//!
//! let form = FormNode::root()
//!     .with_child(
//!         FormNode::named("email").with_error(
//!             FormError::new("This value is not a valid email.").with_constraint("Email"),
//!         ),
//!     )
//!     .with_child(FormNode::named("password"));
//!
//! let error = FormValidationError::new(form);
//! let records = error.field_errors();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].field, "email");
//! assert_eq!(records[0].code, "validation.email");
//! assert_eq!(records[0].message, "This value is not a valid email.");
//! ```

pub mod code;
pub mod collector;
pub mod error;
pub mod form;
pub mod interop;

pub use code::classify;
pub use collector::collect;
pub use error::{FieldError, FormValidationError};
pub use form::{FormError, FormNode};
