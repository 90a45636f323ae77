use std::time::Duration;

/// Statistics for one completed epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochStats {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean per-sample loss accumulated while training this epoch.
    pub mean_loss: f64,
    /// Wall-clock duration of this epoch.
    pub elapsed: Duration,
}

/// Events handed to the trainer's progress callback.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// Sent after every completed epoch.
    Epoch(EpochStats),
    /// Sent once after the last epoch of a run.
    Finished { epochs: usize, elapsed: Duration },
}
