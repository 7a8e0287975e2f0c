//! HTTP route modules.

pub mod contact;
pub mod site;
