//! Network discovery and share browsing.
//!
//! Everything here is stateless across calls: a request fans out its
//! probes or queries, collects what answered, and forgets. Unreliable
//! externals (echo probes, name lookups, browse and share commands)
//! degrade to empty results; only path and argument problems surface
//! as errors.

pub mod discovery;
pub mod listing;
pub mod scanner;
pub mod shares;

mod exec;
