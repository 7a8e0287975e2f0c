//! Core domain library for the folio portfolio site.
//!
//! Defines the [`ContactMessage`](model::ContactMessage) entity, the
//! [`ContactDraft`](model::ContactDraft) that precedes it, and the
//! submission validator that turns an untrusted payload into a draft
//! or a list of field-level violations.

pub mod model;
pub mod validate;

pub use model::{ContactDraft, ContactMessage};
pub use validate::{validate, ContactPayload, FieldViolation};
