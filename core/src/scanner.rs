//! # Host Scanner
//!
//! Finds reachable machines either by sweeping a /24 with echo probes
//! (active) or by reading the OS browse list (passive). The sweep is
//! the concurrent part: every address gets its own probe task, capped
//! by a bounded permit pool so a full segment never means 254 external
//! processes in flight at once.
//!
//! Hosts come back in completion order. Callers that want a stable
//! order sort afterwards.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use lanscout_common::config::ScanConfig;
use lanscout_common::model::Host;

pub mod browser;
pub mod probe;
pub mod resolver;

use probe::Probe;
use resolver::NameResolver;

/// Host addresses probed per segment: `.1 ..= .254`.
const SWEEP_RANGE: std::ops::RangeInclusive<u8> = 1..=254;

/// Fans echo probes out across a /24 and resolves a display name for
/// every address that answered.
pub struct HostScanner {
    probe: Arc<dyn Probe>,
    resolver: Arc<dyn NameResolver>,
    config: ScanConfig,
}

impl HostScanner {
    pub fn new(
        probe: Arc<dyn Probe>,
        resolver: Arc<dyn NameResolver>,
        config: ScanConfig,
    ) -> Self {
        Self {
            probe,
            resolver,
            config,
        }
    }

    /// Sweeps `{segment}.1 ..= {segment}.254` and returns one host per
    /// reachable address. A malformed segment degrades to an empty
    /// result, like every other discovery failure.
    pub async fn sweep(&self, segment: &str) -> Vec<Host> {
        self.sweep_with_cancel(segment, &CancellationToken::new())
            .await
    }

    /// Same as [`sweep`](Self::sweep), stoppable from outside. Probes
    /// that have not yet acquired a permit are dropped on cancellation;
    /// in-flight ones finish their own short timeout.
    pub async fn sweep_with_cancel(
        &self,
        segment: &str,
        cancel: &CancellationToken,
    ) -> Vec<Host> {
        let Some(prefix) = parse_segment(segment) else {
            warn!("not a usable /24 segment: {segment}");
            return Vec::new();
        };

        let permits = Arc::new(Semaphore::new(self.config.max_in_flight.max(1)));
        let mut probes: JoinSet<Option<Host>> = JoinSet::new();

        for last_octet in SWEEP_RANGE {
            let addr = IpAddr::V4(Ipv4Addr::new(prefix[0], prefix[1], prefix[2], last_octet));
            let probe = Arc::clone(&self.probe);
            let resolver = Arc::clone(&self.resolver);
            let permits = Arc::clone(&permits);
            let cancel = cancel.clone();

            probes.spawn(async move {
                let _permit = permits.acquire_owned().await.ok()?;
                if cancel.is_cancelled() || !probe.probe(addr).await {
                    return None;
                }
                let name = resolver
                    .resolve(addr)
                    .await
                    .unwrap_or_else(|| addr.to_string());
                Some(Host::probed(name, addr.to_string()))
            });
        }

        self.collect(probes, cancel).await
    }

    /// Fan-in: drains probe tasks until all are done, the sweep
    /// deadline passes, or the caller cancels.
    async fn collect(
        &self,
        mut probes: JoinSet<Option<Host>>,
        cancel: &CancellationToken,
    ) -> Vec<Host> {
        let deadline = tokio::time::sleep(self.config.sweep_timeout);
        tokio::pin!(deadline);

        let mut hosts: Vec<Host> = Vec::new();
        loop {
            tokio::select! {
                joined = probes.join_next() => {
                    match joined {
                        Some(Ok(Some(host))) => {
                            if !hosts.iter().any(|seen| seen.ip == host.ip) {
                                hosts.push(host);
                            }
                        }
                        Some(Ok(None)) => {}
                        Some(Err(e)) => debug!("probe task failed: {e}"),
                        None => break,
                    }
                }
                _ = &mut deadline => {
                    warn!("sweep deadline hit with {} probes outstanding", probes.len());
                    probes.abort_all();
                    break;
                }
                _ = cancel.cancelled() => {
                    probes.abort_all();
                    break;
                }
            }
        }
        hosts
    }
}

/// Accepts the first three dotted octets of an IPv4 /24, with or
/// without a trailing dot.
fn parse_segment(segment: &str) -> Option<[u8; 3]> {
    let trimmed = segment.trim().trim_end_matches('.');
    let mut octets = trimmed.split('.');
    let a = octets.next()?.parse().ok()?;
    let b = octets.next()?.parse().ok()?;
    let c = octets.next()?.parse().ok()?;
    if octets.next().is_some() {
        return None;
    }
    Some([a, b, c])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
