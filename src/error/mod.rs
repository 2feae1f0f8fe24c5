//! Output types for validation failures.
//!
//! This module provides [`FieldError`], the flat record emitted per collected
//! error, and [`FormValidationError`], the carrier raised when a form fails
//! validation.

mod field_error;
mod form_validation;

pub use field_error::FieldError;
pub use form_validation::FormValidationError;
