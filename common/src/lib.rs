//! Shared building blocks for lanscout: the wire-facing data model,
//! the error taxonomy, configuration, and the response envelope every
//! operation answers with.

pub mod config;
pub mod envelope;
pub mod error;
pub mod model;
