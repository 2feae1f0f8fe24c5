//! Integration tests for the `validator` crate adapter.
#![cfg(feature = "validator")]

use debrief::interop::form_from_validation_errors;
use debrief::{collect, FormValidationError};
use validator::Validate;

#[derive(Validate)]
struct Address {
    #[validate(length(min = 1, message = "street must not be empty"))]
    street: String,
}

#[derive(Validate)]
struct Signup {
    #[validate(email(message = "not a valid email address"))]
    email: String,
    #[validate(length(min = 8, message = "password too short"))]
    password: String,
    #[validate(nested)]
    address: Address,
}

fn invalid_signup() -> Signup {
    Signup {
        email: "not-an-email".to_string(),
        password: "short".to_string(),
        address: Address {
            street: String::new(),
        },
    }
}

#[test]
fn test_flat_field_errors_become_named_children() {
    let errors = invalid_signup().validate().unwrap_err();
    let form = form_from_validation_errors(&errors);

    let records = collect(&form);
    let fields: Vec<&str> = records.iter().map(|r| r.field.as_str()).collect();
    // Sorted by field name for determinism; nested street sits under address.
    assert_eq!(fields, ["street", "email", "password"]);
}

#[test]
fn test_validator_codes_become_constraint_tokens() {
    let errors = invalid_signup().validate().unwrap_err();
    let records = collect(&form_from_validation_errors(&errors));

    let email = records.iter().find(|r| r.field == "email").unwrap();
    assert_eq!(email.code, "validation.email");
    assert_eq!(email.message, "not a valid email address");

    let password = records.iter().find(|r| r.field == "password").unwrap();
    assert_eq!(password.code, "validation.length");
}

#[test]
fn test_adapter_output_feeds_the_carrier() {
    let errors = invalid_signup().validate().unwrap_err();
    let carrier = FormValidationError::new(form_from_validation_errors(&errors));

    let json = serde_json::to_value(&carrier).unwrap();
    assert_eq!(json["code"], "validation");
    assert_eq!(json["fields"].as_array().unwrap().len(), 3);
}

#[test]
fn test_valid_value_round_trips_to_empty_collection() {
    let signup = Signup {
        email: "user@example.com".to_string(),
        password: "long enough".to_string(),
        address: Address {
            street: "Main St".to_string(),
        },
    };
    assert!(signup.validate().is_ok());
}
