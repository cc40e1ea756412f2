//! Passive discovery off the OS-maintained browse list.

use async_trait::async_trait;
use tracing::warn;

use lanscout_common::model::Host;

use crate::exec;

/// Queries a list of hosts that already announced themselves, instead
/// of probing addresses one by one.
#[async_trait]
pub trait HostBrowser: Send + Sync {
    /// A failed query degrades to an empty list, never an error.
    async fn browse(&self) -> Vec<Host>;
}

/// `net view` browse-list backend.
pub struct NetViewBrowser;

#[async_trait]
impl HostBrowser for NetViewBrowser {
    async fn browse(&self) -> Vec<Host> {
        match exec::run("net", &["view"]).await {
            Ok(stdout) => parse_browse_list(&stdout),
            Err(e) => {
                warn!("browse list query failed: {e}");
                Vec::new()
            }
        }
    }
}

/// Every line opening with a `\\NAME` path yields one host.
fn parse_browse_list(stdout: &str) -> Vec<Host> {
    let mut hosts = Vec::new();
    for line in stdout.lines() {
        let Some(rest) = line.strip_prefix(r"\\") else {
            continue;
        };
        let name = rest.split_whitespace().next().unwrap_or_default();
        if !name.is_empty() {
            hosts.push(Host::named(name));
        }
    }
    hosts
}
