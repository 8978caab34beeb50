//! Core types and trait definitions for the contact intake system.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod store;
pub mod submission;
pub mod validate;

pub use submission::{ContactFormInput, NewSubmission, StoredSubmission, SubmitAck};
pub use validate::{ValidationErrorSet, validate};
