//! Networking modules for the voyage REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP calls the voyage page issues, and `types` defines the
//! JSON records exchanged with the API.

pub mod api;
pub mod types;
