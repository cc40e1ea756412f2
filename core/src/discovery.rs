//! # Discovery Service
//!
//! The orchestrator behind every boundary operation. Composes the
//! scanner, browse list, share query, and directory lister; holds no
//! state between calls, so every request re-executes its probes and
//! queries against live network/filesystem state.

use std::path::Path;
use std::sync::Arc;

use tokio::fs::File;
use tokio_util::sync::CancellationToken;

use lanscout_common::config::ScanConfig;
use lanscout_common::error::DiscoveryError;
use lanscout_common::model::{FileEntry, Host, Share};

use crate::listing::DirectoryLister;
use crate::scanner::HostScanner;
use crate::scanner::browser::{HostBrowser, NetViewBrowser};
use crate::scanner::probe::PingProbe;
use crate::scanner::resolver::NbtstatResolver;
use crate::shares::{NetViewShareQuery, ShareQuery};

pub struct DiscoveryService {
    scanner: HostScanner,
    browser: Box<dyn HostBrowser>,
    shares: Box<dyn ShareQuery>,
    lister: DirectoryLister,
}

impl DiscoveryService {
    /// Service wired with the stock command-line backends.
    pub fn new(config: ScanConfig) -> Self {
        let probe = Arc::new(PingProbe::new(config.probe_timeout));
        let scanner = HostScanner::new(probe, Arc::new(NbtstatResolver), config);
        Self::with_backends(scanner, Box::new(NetViewBrowser), Box::new(NetViewShareQuery))
    }

    /// Service with caller-supplied backends. This is the seam tests
    /// and other platforms plug into.
    pub fn with_backends(
        scanner: HostScanner,
        browser: Box<dyn HostBrowser>,
        shares: Box<dyn ShareQuery>,
    ) -> Self {
        Self {
            scanner,
            browser,
            shares,
            lister: DirectoryLister,
        }
    }

    /// Active sweep when a segment is given, passive browse otherwise.
    /// Discovery never fails: degraded scans come back empty.
    pub async fn discover_hosts(&self, segment: Option<&str>) -> Vec<Host> {
        self.discover_hosts_with_cancel(segment, &CancellationToken::new())
            .await
    }

    pub async fn discover_hosts_with_cancel(
        &self,
        segment: Option<&str>,
        cancel: &CancellationToken,
    ) -> Vec<Host> {
        match segment {
            Some(segment) => self.scanner.sweep_with_cancel(segment, cancel).await,
            None => self.browser.browse().await,
        }
    }

    /// Disk shares of `host_path`, in listing order.
    pub async fn list_shares(&self, host_path: &str) -> Result<Vec<Share>, DiscoveryError> {
        if host_path.is_empty() {
            return Err(DiscoveryError::InvalidArgument("computer"));
        }
        Ok(self.shares.list(host_path).await)
    }

    /// One level of entries under `share_path/relative`.
    pub async fn list_files(
        &self,
        share_path: &str,
        relative: &str,
    ) -> Result<Vec<FileEntry>, DiscoveryError> {
        if share_path.is_empty() {
            return Err(DiscoveryError::InvalidArgument("share"));
        }
        self.lister.list(Path::new(share_path), relative).await
    }

    /// Opens a file under the share for byte streaming.
    pub async fn fetch_file(
        &self,
        share_path: &str,
        relative: &str,
    ) -> Result<File, DiscoveryError> {
        if share_path.is_empty() {
            return Err(DiscoveryError::InvalidArgument("share"));
        }
        self.lister.open(Path::new(share_path), relative).await
    }

    /// Stores `bytes` as `name` under `share_path/relative_dir`.
    pub async fn upload(
        &self,
        share_path: &str,
        relative_dir: &str,
        name: &str,
        bytes: &[u8],
    ) -> Result<(), DiscoveryError> {
        if share_path.is_empty() {
            return Err(DiscoveryError::InvalidArgument("share"));
        }
        self.lister
            .save(Path::new(share_path), relative_dir, name, bytes)
            .await
    }
}
