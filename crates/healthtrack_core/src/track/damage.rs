//! Damage application algorithm.
//!
//! Resolution order for an incoming mark:
//! 1. An empty box exists → mark it with the incoming severity.
//! 2. Track saturated, incoming `Aggravated` → discard the weakest existing
//!    marker and write `Aggravated` in its place.
//! 3. Track saturated, incoming `Bashing`/`Lethal` → escalate the weakest
//!    upgradable marker one step (first `Bashing` → `Lethal`, else first
//!    `Lethal` → `Aggravated`). The incoming severity only gates entry into
//!    this branch; the upgrade target is chosen from what is already marked.
//! 4. Track saturated with `Aggravated` only → no escalation target. Callers
//!    are expected to stop applying non-Aggravated damage once `is_dead()`;
//!    reaching this branch is a caller contract violation and is rejected
//!    without touching the track.
//!
//! All error checks run before any box is written, so an `Err` never leaves
//! a partially-updated track.

use super::HealthTrack;
use crate::severity::Severity;
use std::fmt;

// ─── Outcome ────────────────────────────────────────────────────────────

/// What a successful `apply_damage` call did to the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// An empty box was marked with the incoming severity.
    Marked {
        /// Severity written into the box.
        severity: Severity,
    },
    /// Saturated track: an existing marker was upgraded one severity step.
    Escalated {
        /// Severity the upgraded box held before.
        from: Severity,
        /// Severity it holds now.
        to: Severity,
    },
    /// Saturated track hit with Aggravated: the weakest marker was discarded
    /// and replaced outright.
    Overwritten {
        /// Severity that was permanently lost.
        discarded: Severity,
    },
}

// ─── Errors ─────────────────────────────────────────────────────────────

/// Rejection from `apply_damage`. The track is unchanged on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageError {
    /// `Empty` is not a damage severity; there is nothing to apply.
    InvalidSeverity,
    /// The track is fully Aggravated and the incoming severity cannot open
    /// a new box or upgrade an existing one. Callers should have checked
    /// `is_dead()` first.
    NoEscalationTarget,
}

impl fmt::Display for DamageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageError::InvalidSeverity => {
                write!(f, "cannot apply Empty as damage")
            }
            DamageError::NoEscalationTarget => {
                write!(
                    f,
                    "track is fully Aggravated: no box to mark and no marker to escalate"
                )
            }
        }
    }
}

impl std::error::Error for DamageError {}

// ─── Algorithm ──────────────────────────────────────────────────────────

impl HealthTrack {
    /// Apply one point of damage of the given severity.
    ///
    /// Returns what happened ([`DamageOutcome`]) or why nothing could
    /// ([`DamageError`]). Track length never changes; the row is re-sorted
    /// most-severe-first before returning.
    pub fn apply_damage(&mut self, severity: Severity) -> Result<DamageOutcome, DamageError> {
        if !severity.is_marked() {
            return Err(DamageError::InvalidSeverity);
        }

        // Sorted descending, so the first empty box is the leftmost boundary
        // between marked and empty — the "next available" box.
        if let Some(slot) = self.boxes().iter().position(|&b| b == Severity::Empty) {
            self.boxes_mut()[slot] = severity;
            self.sort_descending();
            tracing::debug!("DamageMarked severity={:?}", severity);
            return Ok(DamageOutcome::Marked { severity });
        }

        // Saturated: Aggravated overwrites the weakest marker outright.
        if severity == Severity::Aggravated {
            let last = self.len() - 1;
            let discarded = self.boxes()[last];
            self.boxes_mut()[last] = Severity::Aggravated;
            self.sort_descending();
            tracing::debug!("DamageOverwrite discarded={:?}", discarded);
            return Ok(DamageOutcome::Overwritten { discarded });
        }

        // Saturated, non-Aggravated: escalate the weakest upgradable marker.
        if let Some(slot) = self.boxes().iter().position(|&b| b == Severity::Bashing) {
            self.boxes_mut()[slot] = Severity::Lethal;
            self.sort_descending();
            tracing::debug!("DamageEscalated from=Bashing to=Lethal");
            return Ok(DamageOutcome::Escalated {
                from: Severity::Bashing,
                to: Severity::Lethal,
            });
        }
        if let Some(slot) = self.boxes().iter().position(|&b| b == Severity::Lethal) {
            self.boxes_mut()[slot] = Severity::Aggravated;
            self.sort_descending();
            tracing::debug!("DamageEscalated from=Lethal to=Aggravated");
            return Ok(DamageOutcome::Escalated {
                from: Severity::Lethal,
                to: Severity::Aggravated,
            });
        }

        // Every box is Aggravated. Nothing was written above, so the track
        // is exactly as the caller left it.
        tracing::warn!("DamageReject reason=NoEscalationTarget incoming={:?}", severity);
        Err(DamageError::NoEscalationTarget)
    }
}
