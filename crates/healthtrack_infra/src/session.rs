//! Session controller.
//!
//! The session is the single owner of one health track for one sitting — the
//! explicit replacement for holding track state in a UI framework's state
//! cell. The UI becomes a thin adapter: it forwards button presses to
//! [`Session::apply_damage`] / [`Session::reset`] and re-renders from
//! [`Session::snapshot`] whenever the digest changes.
//!
//! Nothing here persists anywhere; the history is in-memory and dies with
//! the session.

use crate::config::SessionConfig;
use crate::snapshot::TrackSnapshot;
use healthtrack_core::digest::track_digest;
use healthtrack_core::severity::Severity;
use healthtrack_core::track::{DamageError, DamageOutcome, HealthTrack, TrackSizeError};

// ─── Metrics ────────────────────────────────────────────────────────────

/// Running counters for one session's operations.
#[derive(Debug, Default)]
pub struct SessionMetrics {
    marked_total: u64,
    escalated_total: u64,
    overwritten_total: u64,
    reject_total: u64,
    reset_total: u64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty boxes marked with fresh damage.
    pub fn marked_total(&self) -> u64 {
        self.marked_total
    }

    /// Existing markers upgraded one severity step.
    pub fn escalated_total(&self) -> u64 {
        self.escalated_total
    }

    /// Weakest markers discarded for incoming Aggravated.
    pub fn overwritten_total(&self) -> u64 {
        self.overwritten_total
    }

    /// Damage calls rejected by the core.
    pub fn reject_total(&self) -> u64 {
        self.reject_total
    }

    /// Resets performed (including redundant ones).
    pub fn reset_total(&self) -> u64 {
        self.reset_total
    }

    fn record_outcome(&mut self, outcome: &DamageOutcome) {
        match outcome {
            DamageOutcome::Marked { .. } => self.marked_total += 1,
            DamageOutcome::Escalated { .. } => self.escalated_total += 1,
            DamageOutcome::Overwritten { .. } => self.overwritten_total += 1,
        }
    }

    fn record_reject(&mut self) {
        self.reject_total += 1;
    }

    fn record_reset(&mut self) {
        self.reset_total += 1;
    }
}

// ─── History ────────────────────────────────────────────────────────────

/// One successfully applied damage event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedDamage {
    /// Severity the caller applied.
    pub severity: Severity,
    /// What the track did with it.
    pub outcome: DamageOutcome,
    /// Track digest after the event.
    pub digest: u64,
}

// ─── Session ────────────────────────────────────────────────────────────

/// Exclusive owner of one health track plus its per-sitting bookkeeping.
#[derive(Debug)]
pub struct Session {
    track: HealthTrack,
    digest: u64,
    history: Vec<AppliedDamage>,
    metrics: SessionMetrics,
}

impl Session {
    /// Start a session with the given configuration.
    pub fn new(config: &SessionConfig) -> Result<Self, TrackSizeError> {
        let track = HealthTrack::new(config.track_size)?;
        let digest = track_digest(&track);
        Ok(Self {
            track,
            digest,
            history: Vec::new(),
            metrics: SessionMetrics::new(),
        })
    }

    /// Start a session with the default six-box track.
    pub fn with_default_config() -> Self {
        let track = HealthTrack::with_default_size();
        let digest = track_digest(&track);
        Self {
            track,
            digest,
            history: Vec::new(),
            metrics: SessionMetrics::new(),
        }
    }

    /// Apply one point of damage and record the event.
    ///
    /// On `Err` the track, digest, and history are untouched; only the
    /// reject counter moves.
    pub fn apply_damage(&mut self, severity: Severity) -> Result<DamageOutcome, DamageError> {
        match self.track.apply_damage(severity) {
            Ok(outcome) => {
                self.digest = track_digest(&self.track);
                self.metrics.record_outcome(&outcome);
                self.history.push(AppliedDamage {
                    severity,
                    outcome,
                    digest: self.digest,
                });
                Ok(outcome)
            }
            Err(err) => {
                self.metrics.record_reject();
                Err(err)
            }
        }
    }

    /// Clear the track. Returns whether anything observable changed, so a
    /// host can skip re-rendering on a redundant reset.
    pub fn reset(&mut self) -> bool {
        self.track.reset();
        self.metrics.record_reset();
        let new_digest = track_digest(&self.track);
        let changed = new_digest != self.digest;
        self.digest = new_digest;
        if changed {
            tracing::debug!("SessionReset digest={:016x}", new_digest);
        }
        changed
    }

    /// The track, read-only.
    pub fn track(&self) -> &HealthTrack {
        &self.track
    }

    /// Digest of the current track state.
    pub fn digest(&self) -> u64 {
        self.digest
    }

    /// Damage events applied so far, oldest first. Rejected calls and resets
    /// do not appear here.
    pub fn history(&self) -> &[AppliedDamage] {
        &self.history
    }

    /// Session counters.
    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Convenience passthrough for the host's enable/disable policy.
    pub fn is_dead(&self) -> bool {
        self.track.is_dead()
    }

    /// Convenience passthrough for the host's enable/disable policy.
    pub fn is_full_health(&self) -> bool {
        self.track.is_full_health()
    }

    /// Capture the current renderable view.
    pub fn snapshot(&self) -> TrackSnapshot {
        TrackSnapshot::capture(&self.track)
    }
}
