//! Single-address reachability checks.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time;
use tracing::trace;

use crate::exec;

/// Slack on top of the echo wait so a reply that is already being
/// printed still gets collected before the task is cut off.
const PROBE_OVERHEAD: Duration = Duration::from_millis(100);

/// One reachability check against one address.
///
/// Implementations must never block past their own timeout and never
/// return an error: anything that is not an unambiguous reply reads
/// as unreachable.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, addr: IpAddr) -> bool;
}

/// Echo probe backed by the system `ping` binary.
pub struct PingProbe {
    timeout: Duration,
}

impl PingProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn args(&self, addr: IpAddr) -> Vec<String> {
        let addr = addr.to_string();
        if cfg!(windows) {
            let wait_ms = self.timeout.as_millis().to_string();
            vec!["-n".into(), "1".into(), "-w".into(), wait_ms, addr]
        } else {
            // -W takes whole seconds on the pings we target; round up
            let wait_s = self.timeout.as_secs().max(1).to_string();
            vec!["-c".into(), "1".into(), "-W".into(), wait_s, addr]
        }
    }
}

#[async_trait]
impl Probe for PingProbe {
    async fn probe(&self, addr: IpAddr) -> bool {
        let args = self.args(addr);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match time::timeout(self.timeout + PROBE_OVERHEAD, exec::run("ping", &args)).await {
            Ok(Ok(stdout)) => replied(&stdout),
            Ok(Err(e)) => {
                trace!("ping {addr} failed: {e}");
                false
            }
            Err(_) => false,
        }
    }
}

/// Liveness markers `ping` prints on a successful echo. Anything the
/// output does not state outright counts as unreachable.
fn replied(stdout: &str) -> bool {
    stdout.contains("TTL=") || stdout.contains("ttl=") || stdout.contains("bytes from")
}
