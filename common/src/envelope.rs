//! The `{ success, <payload> }` envelope every operation answers with.
//!
//! The HTTP layer that eventually carries these is not part of this
//! workspace; the shapes here are the contract it has to serve.

use serde::Serialize;

use crate::error::DiscoveryError;
use crate::model::{FileEntry, Host, Share};

#[derive(Debug, Serialize)]
pub struct HostList {
    pub success: bool,
    pub computers: Vec<Host>,
}

impl HostList {
    pub fn new(computers: Vec<Host>) -> Self {
        Self { success: true, computers }
    }
}

#[derive(Debug, Serialize)]
pub struct ShareList {
    pub success: bool,
    pub shares: Vec<Share>,
}

impl ShareList {
    pub fn new(shares: Vec<Share>) -> Self {
        Self { success: true, shares }
    }
}

#[derive(Debug, Serialize)]
pub struct FileList {
    pub success: bool,
    pub files: Vec<FileEntry>,
}

impl FileList {
    pub fn new(files: Vec<FileEntry>) -> Self {
        Self { success: true, files }
    }
}

/// Failure envelope shared by every operation.
#[derive(Debug, Serialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
}

impl Failure {
    pub fn new(err: &DiscoveryError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}
