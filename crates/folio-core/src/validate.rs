//! Submission validation.
//!
//! Turns an untrusted [`ContactPayload`] into a [`ContactDraft`] or an
//! ordered list of [`FieldViolation`]s. Every constraint is checked —
//! validation never short-circuits on the first failure, so the caller
//! can report all problems in one response.
//!
//! The checks mirror the constraints enforced client-side by the
//! contact form, so a well-behaved browser never hits a rejection here.

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::model::ContactDraft;

/// Raw contact-form input before validation.
///
/// Fields default to empty strings so an absent field surfaces as a
/// length violation on that field rather than a parse failure for the
/// whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A single field-level validation failure.
///
/// `field` names the offending payload key; `message` is the
/// human-readable reason, rendered verbatim in the 400 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Minimum lengths for the free-text fields, in characters.
const MIN_NAME_CHARS: usize = 2;
const MIN_SUBJECT_CHARS: usize = 5;
const MIN_MESSAGE_CHARS: usize = 10;

/// Validate a contact-form payload.
///
/// Checks run in a fixed order (name, email, subject, message) and all
/// violations are collected before returning, so the error list is
/// stable and complete.
///
/// # Errors
///
/// Returns the ordered list of violations when any constraint fails.
pub fn validate(payload: ContactPayload) -> Result<ContactDraft, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if payload.name.chars().count() < MIN_NAME_CHARS {
        violations.push(FieldViolation::new(
            "name",
            format!("Name must be at least {MIN_NAME_CHARS} characters"),
        ));
    }

    if !EmailAddress::is_valid(&payload.email) {
        violations.push(FieldViolation::new(
            "email",
            "Please enter a valid email address",
        ));
    }

    if payload.subject.chars().count() < MIN_SUBJECT_CHARS {
        violations.push(FieldViolation::new(
            "subject",
            format!("Subject must be at least {MIN_SUBJECT_CHARS} characters"),
        ));
    }

    if payload.message.chars().count() < MIN_MESSAGE_CHARS {
        violations.push(FieldViolation::new(
            "message",
            format!("Message must be at least {MIN_MESSAGE_CHARS} characters"),
        ));
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(ContactDraft {
        name: payload.name,
        email: payload.email,
        subject: payload.subject,
        message: payload.message,
    })
}
