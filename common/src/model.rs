//! # Discovery Data Model
//!
//! The three value objects every operation trades in. All of them are
//! transient: built to answer one request, serialized, and dropped.
//! Equality is structural; nothing here carries an identity beyond its
//! fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A machine seen on the network, either probed or browsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Display name: the resolved machine name, or the bare address
    /// when resolution failed.
    pub name: String,
    /// Network-path identifier, e.g. `\\WORKSTATION7`.
    pub path: String,
    /// Probed address; absent for hosts taken off a browse list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl Host {
    /// Host known only by name, as parsed off a browse list.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = format!(r"\\{name}");
        Self { name, path, ip: None }
    }

    /// Host found by an active probe against `ip`.
    pub fn probed(name: impl Into<String>, ip: impl Into<String>) -> Self {
        let mut host = Self::named(name);
        host.ip = Some(ip.into());
        host
    }
}

/// A disk share a host exposes.
///
/// Never a printer or administrative share; the enumerator filters
/// those out before a `Share` is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub name: String,
    /// The owning host's network path.
    pub host_path: String,
    /// Full path of the share itself: `hostPath + "\" + name`.
    pub path: String,
}

impl Share {
    pub fn new(host_path: impl Into<String>, name: impl Into<String>) -> Self {
        let host_path = host_path.into();
        let name = name.into();
        let path = format!("{host_path}\\{name}");
        Self { name, host_path, path }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    /// Path relative to the listing root, always forward-slash
    /// separated regardless of host OS.
    pub path: String,
    pub is_directory: bool,
    pub size: u64,
    pub modified: DateTime<Utc>,
    /// Populated only when a directory entry was actually expanded.
    /// Listings are lazy (one level per call), so this stays `None`
    /// until a caller asks for the deeper level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileEntry>>,
}
