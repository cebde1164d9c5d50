//! Networking modules for the cage REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` classifies their failures, and `types`
//! defines the wire schema shared by both.

pub mod api;
pub mod error;
pub mod types;
