//! Adapters from external validation engines to the [`FormNode`](crate::FormNode) tree.

#[cfg(feature = "validator")]
mod validator;

#[cfg(feature = "validator")]
pub use validator::form_from_validation_errors;
