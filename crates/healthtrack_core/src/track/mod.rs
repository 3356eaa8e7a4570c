//! Health track state container.
//!
//! An ordered row of N damage boxes, N fixed at construction. After every
//! mutation the row is re-sorted most-severe-first, so "find an empty box"
//! and "find the weakest marked box" are simple index operations: marked
//! boxes occupy a prefix, empty boxes the suffix.
//!
//! **Hard rules:**
//! - No operation ever changes N.
//! - On any `Err`, the track is exactly as it was before the call.

mod damage;

pub use damage::{DamageError, DamageOutcome};

use crate::severity::Severity;
use std::fmt;

/// Default number of boxes when the caller does not choose one.
pub const DEFAULT_TRACK_SIZE: usize = 6;

/// Error when a track is constructed with an invalid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSizeError {
    /// The rejected size.
    pub size: usize,
}

impl fmt::Display for TrackSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid track size {}: a health track needs at least 1 box",
            self.size
        )
    }
}

impl std::error::Error for TrackSizeError {}

// ─── Track ──────────────────────────────────────────────────────────────

/// Fixed-length row of damage boxes, kept sorted descending by severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthTrack {
    boxes: Vec<Severity>,
}

impl HealthTrack {
    /// Create an all-empty track with `size` boxes.
    ///
    /// Fails closed on `size == 0` — a zero-length track has no meaningful
    /// dead/full-health state.
    pub fn new(size: usize) -> Result<Self, TrackSizeError> {
        if size == 0 {
            return Err(TrackSizeError { size });
        }
        Ok(Self {
            boxes: vec![Severity::Empty; size],
        })
    }

    /// Create an all-empty track with [`DEFAULT_TRACK_SIZE`] boxes.
    pub fn with_default_size() -> Self {
        Self {
            boxes: vec![Severity::Empty; DEFAULT_TRACK_SIZE],
        }
    }

    /// Number of boxes (N). Constant for the lifetime of the track.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True iff the track has no boxes. Unreachable via construction, but
    /// keeps clippy's `len_without_is_empty` contract honest.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The boxes in normalized order (most severe first, empties trailing).
    pub fn boxes(&self) -> &[Severity] {
        &self.boxes
    }

    /// True iff every box is `Empty`.
    pub fn is_full_health(&self) -> bool {
        self.boxes.iter().all(|&b| b == Severity::Empty)
    }

    /// True iff every box is `Aggravated` — the track is saturated with the
    /// worst severity and no further state exists. Terminal until `reset`.
    pub fn is_dead(&self) -> bool {
        self.boxes.iter().all(|&b| b == Severity::Aggravated)
    }

    /// Number of empty boxes.
    pub fn empty_count(&self) -> usize {
        self.boxes.iter().filter(|b| !b.is_marked()).count()
    }

    /// Number of marked (non-empty) boxes.
    pub fn marked_count(&self) -> usize {
        self.boxes.iter().filter(|b| b.is_marked()).count()
    }

    /// Total severity weight: the sum of every box's rank. Never decreases
    /// across `apply_damage`; only `reset` lowers it.
    pub fn severity_weight(&self) -> u32 {
        self.boxes.iter().map(|b| u32::from(b.rank())).sum()
    }

    /// Clear every box back to `Empty`. Never fails.
    pub fn reset(&mut self) {
        self.boxes.fill(Severity::Empty);
    }

    /// Re-establish the descending normal form after a box was written.
    ///
    /// Explicit comparator on the severity order — not a generic ascending
    /// sort followed by a reverse.
    pub(crate) fn sort_descending(&mut self) {
        self.boxes.sort_unstable_by(|a, b| b.cmp(a));
    }

    pub(crate) fn boxes_mut(&mut self) -> &mut [Severity] {
        &mut self.boxes
    }
}

impl Default for HealthTrack {
    fn default() -> Self {
        Self::with_default_size()
    }
}
