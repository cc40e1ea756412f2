//! # Share Enumerator
//!
//! Lists the disk shares a single host exposes, in the order the
//! listing command reports them. Printer and administrative shares
//! never make it into the result.

use async_trait::async_trait;
use tracing::warn;

use lanscout_common::model::Share;

use crate::exec;

/// Reserved printer share, never user-facing.
const PRINTER_SHARE: &str = "Print$";
/// Suffix marking administrative/hidden shares.
const ADMIN_SUFFIX: char = '$';
/// Type column value that marks a share as browsable disk space.
const DISK_TYPE: &str = "Disk";

/// Per-host share listing.
#[async_trait]
pub trait ShareQuery: Send + Sync {
    /// Disk shares of `host_path`, in listing order. A failed query
    /// degrades to an empty list, never an error.
    async fn list(&self, host_path: &str) -> Vec<Share>;
}

/// `net view \\HOST` backend.
pub struct NetViewShareQuery;

#[async_trait]
impl ShareQuery for NetViewShareQuery {
    async fn list(&self, host_path: &str) -> Vec<Share> {
        match exec::run("net", &["view", host_path]).await {
            Ok(stdout) => parse_share_table(host_path, &stdout),
            Err(e) => {
                warn!("share query against {host_path} failed: {e}");
                Vec::new()
            }
        }
    }
}

/// Keeps `<name> Disk` rows anchored at column zero, dropping the
/// printer share and anything with the administrative suffix.
fn parse_share_table(host_path: &str, stdout: &str) -> Vec<Share> {
    let mut shares = Vec::new();
    for line in stdout.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(name), Some(kind)) = (fields.next(), fields.next()) else {
            continue;
        };
        if kind != DISK_TYPE || name == PRINTER_SHARE || name.ends_with(ADMIN_SUFFIX) {
            continue;
        }
        shares.push(Share::new(host_path, name));
    }
    shares
}
