//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic (date handling, form validation, error flattening) lives here so
//! components stay thin and the rules are testable without a browser.

pub mod datetime;
pub mod form_errors;
pub mod validation;
