use crate::errors::AppError;
use crate::models::company::{CompanyFields, CompanyInput};

/// Checks that all four company attributes are present and non-empty.
///
/// Whitespace-only values count as empty. Accepted values are returned
/// untouched so the stored record echoes exactly what the caller sent.
/// Every missing field is named in the error, in declaration order.
pub fn validate_company(input: CompanyInput) -> Result<CompanyFields, AppError> {
    let CompanyInput {
        name,
        email,
        contact,
        address,
    } = input;

    let mut missing = Vec::new();
    let name = require("name", name, &mut missing);
    let email = require("email", email, &mut missing);
    let contact = require("contact", contact, &mut missing);
    let address = require("address", address, &mut missing);

    match (name, email, contact, address) {
        (Some(name), Some(email), Some(contact), Some(address)) => Ok(CompanyFields {
            name,
            email,
            contact,
            address,
        }),
        _ => Err(AppError::Validation(format!(
            "All fields are required; missing: {}",
            missing.join(", ")
        ))),
    }
}

fn require(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}
