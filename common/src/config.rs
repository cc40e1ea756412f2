use std::path::PathBuf;
use std::time::Duration;

/// Tuning knobs for the active sweep.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// How long a single echo probe waits for an answer.
    pub probe_timeout: Duration,
    /// Upper bound on probes in flight at once.
    pub max_in_flight: usize,
    /// Deadline for the whole sweep; outstanding probes are aborted
    /// once it passes.
    pub sweep_timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_millis(200),
            max_in_flight: 64,
            sweep_timeout: Duration::from_secs(30),
        }
    }
}

/// Location of this machine's own share root.
///
/// Passed explicitly wherever it is needed so independent instances
/// (and tests) can each point at their own directory.
#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub root: PathBuf,
}

impl ShareConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the share root if it does not exist yet.
    pub fn prepare(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }
}
