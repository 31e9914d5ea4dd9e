use crate::domain::models::{FitReport, ScannedItem, StorageUnitTier};
use crate::services::planner;
use crate::services::scanner::{ScanProfile, ScanSession};
use rand::Rng;
use std::time::{Duration, Instant};

pub const PERMISSION_DELAY: Duration = Duration::from_secs(2);
pub const SCAN_DURATION: Duration = Duration::from_millis(3400);
pub const INTER_SCAN_PAUSE: Duration = Duration::from_secs(1);
pub const RESULTS_DELAY: Duration = Duration::from_millis(1500);

/// The simulated flow always detects this many items before showing results.
pub const TARGET_ITEMS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizerStep {
    Intro,
    Permission,
    Scanning,
    Results,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    to: VisualizerStep,
    due: Instant,
}

/// Scan-flow state machine. All delays are simulated: a pending transition
/// or scan completion carries its deadline and `tick` applies whatever has
/// come due. Nothing here blocks, and `reset` drops every deadline, so a
/// closed view can never mutate state afterwards.
#[derive(Debug)]
pub struct VisualizerFlow {
    step: VisualizerStep,
    session: ScanSession,
    profile: ScanProfile,
    pending: Option<PendingTransition>,
    scan_completes_at: Option<Instant>,
}

impl Default for VisualizerFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualizerFlow {
    pub fn new() -> Self {
        Self {
            step: VisualizerStep::Intro,
            session: ScanSession::new(),
            profile: ScanProfile::visualizer(),
            pending: None,
            scan_completes_at: None,
        }
    }

    pub fn step(&self) -> VisualizerStep {
        self.step
    }

    pub fn items(&self) -> &[ScannedItem] {
        self.session.items()
    }

    pub fn total_volume_m3(&self) -> f64 {
        self.session.total_volume_m3()
    }

    /// Intro → Permission, with the camera-grant simulation queued behind it.
    pub fn begin(&mut self, now: Instant) {
        if self.step != VisualizerStep::Intro {
            return;
        }
        self.step = VisualizerStep::Permission;
        self.pending = Some(PendingTransition {
            to: VisualizerStep::Scanning,
            due: now + PERMISSION_DELAY,
        });
    }

    /// Apply every transition and scan completion that has come due. Safe to
    /// call at any cadence; a large time jump is caught up in one call.
    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        loop {
            if let Some(p) = self.pending {
                if now >= p.due {
                    self.pending = None;
                    self.enter(p.to, p.due);
                    continue;
                }
            }
            if self.step == VisualizerStep::Scanning {
                if let Some(done) = self.scan_completes_at {
                    if now >= done {
                        self.complete_scan(done, rng);
                        continue;
                    }
                }
            }
            break;
        }
    }

    fn enter(&mut self, step: VisualizerStep, at: Instant) {
        self.step = step;
        if step == VisualizerStep::Scanning {
            self.scan_completes_at = Some(at + SCAN_DURATION);
        }
    }

    fn complete_scan<R: Rng>(&mut self, at: Instant, rng: &mut R) {
        self.session.record_scan(&self.profile, rng);
        if self.session.len() < TARGET_ITEMS {
            self.scan_completes_at = Some(at + INTER_SCAN_PAUSE + SCAN_DURATION);
        } else {
            self.scan_completes_at = None;
            self.pending = Some(PendingTransition {
                to: VisualizerStep::Results,
                due: at + RESULTS_DELAY,
            });
        }
    }

    /// Progress of the scan in flight, 0–100. Sits at 0 during the pause
    /// before the next scan starts.
    pub fn scan_progress_percent(&self, now: Instant) -> f64 {
        let Some(done) = self.scan_completes_at else {
            return 0.0;
        };
        let remaining = done.saturating_duration_since(now);
        let ratio = remaining.as_secs_f64() / SCAN_DURATION.as_secs_f64();
        ((1.0 - ratio) * 100.0).clamp(0.0, 100.0)
    }

    /// Cancel any pending transition or scan and return to the intro. This
    /// is the teardown path: after reset nothing queued can fire.
    pub fn reset(&mut self) {
        self.pending = None;
        self.scan_completes_at = None;
        self.session.reset();
        self.step = VisualizerStep::Intro;
    }

    /// Size label and monthly price for the results card; only meaningful
    /// once the flow has reached `Results`.
    pub fn recommendation(&self) -> Option<(&'static str, u32)> {
        if self.step == VisualizerStep::Results {
            Some(planner::recommended_size(self.total_volume_m3()))
        } else {
            None
        }
    }

    pub fn fit_report_for(&self, tier: &StorageUnitTier) -> FitReport {
        planner::fit_report(self.total_volume_m3(), tier)
    }
}
