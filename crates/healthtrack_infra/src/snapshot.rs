//! Serializable view of a track for frontends.
//!
//! A snapshot is a pure capture of current state: box labels in normalized
//! order, the two gating predicates, the rendered effect messages, and the
//! state digest. Frontends render it and compare digests across captures;
//! nothing flows back into the core.

use healthtrack_core::digest::{format_digest, track_digest};
use healthtrack_core::effects::effect_messages;
use healthtrack_core::track::HealthTrack;
use serde::{Deserialize, Serialize};

/// Renderable view of one track state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    /// Display label per box, most severe first. Empty boxes render as "".
    pub boxes: Vec<String>,
    /// True when the track is saturated with Aggravated. Hosts disable
    /// damage entry on this.
    pub dead: bool,
    /// True when every box is empty. Hosts disable reset on this.
    pub full_health: bool,
    /// Derived status messages, in derivation order.
    pub effects: Vec<String>,
    /// Hex digest of the track contents at capture time.
    pub digest: String,
}

impl TrackSnapshot {
    /// Capture the current state of a track.
    pub fn capture(track: &HealthTrack) -> Self {
        Self {
            boxes: track.boxes().iter().map(|b| b.label().to_string()).collect(),
            dead: track.is_dead(),
            full_health: track.is_full_health(),
            effects: effect_messages(track),
            digest: format_digest(track_digest(track)),
        }
    }

    /// Serialize the snapshot as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
