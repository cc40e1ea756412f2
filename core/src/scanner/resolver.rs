//! Display-name lookup for addresses that answered a probe.

use std::net::IpAddr;

use async_trait::async_trait;
use tracing::debug;

use crate::exec;

/// Resolves a human-readable name for a reachable address.
///
/// A miss is not an error: the scanner falls back to the bare address.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve(&self, addr: IpAddr) -> Option<String>;
}

/// NetBIOS adapter-status lookup via `nbtstat -A <ip>`.
pub struct NbtstatResolver;

#[async_trait]
impl NameResolver for NbtstatResolver {
    async fn resolve(&self, addr: IpAddr) -> Option<String> {
        let addr_str = addr.to_string();
        match exec::run("nbtstat", &["-A", &addr_str]).await {
            Ok(stdout) => unique_name(&stdout),
            Err(e) => {
                debug!("name lookup for {addr} failed: {e}");
                None
            }
        }
    }
}

/// Picks the machine name off the `<00> UNIQUE <name>` row of an
/// adapter status table.
fn unique_name(stdout: &str) -> Option<String> {
    for line in stdout.lines() {
        let mut fields = line.split_whitespace();
        if fields.next() == Some("<00>")
            && fields.next() == Some("UNIQUE")
            && let Some(name) = fields.next()
        {
            return Some(name.to_string());
        }
    }
    None
}
