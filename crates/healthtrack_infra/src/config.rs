//! Session configuration with fail-closed resolution.
//!
//! The only tunable is the track size. Hosts typically extract it from
//! somewhere out of scope here (the reference frontend reads a `?size=` URL
//! query parameter); this module takes the already-extracted string and
//! resolves it:
//!
//! - Missing parameter → [`DEFAULT_TRACK_SIZE`] (6).
//! - Supplied parameter MUST parse as a positive integer. Unparsable input
//!   and zero both fail closed rather than being coerced to a default.

use healthtrack_core::track::DEFAULT_TRACK_SIZE;
use std::fmt;

/// Error when a supplied track-size parameter cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackConfigError {
    /// The raw parameter value as received.
    pub raw: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl fmt::Display for TrackConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config fail-closed: track size parameter '{}' rejected ({})",
            self.raw, self.reason
        )
    }
}

impl std::error::Error for TrackConfigError {}

/// Resolve a raw track-size parameter into a usable size.
///
/// `None` means the host supplied nothing and the default applies. `Some`
/// values are validated strictly; there is no silent fallback once the host
/// has expressed a choice.
pub fn resolve_track_size(raw: Option<&str>) -> Result<usize, TrackConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TRACK_SIZE);
    };
    let size: usize = raw.trim().parse().map_err(|_| TrackConfigError {
        raw: raw.to_string(),
        reason: "not a non-negative integer",
    })?;
    if size == 0 {
        return Err(TrackConfigError {
            raw: raw.to_string(),
            reason: "a health track needs at least 1 box",
        });
    }
    Ok(size)
}

/// Resolved configuration for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of boxes in the track.
    pub track_size: usize,
}

impl SessionConfig {
    /// Build a config from a raw size parameter (see [`resolve_track_size`]).
    pub fn from_size_param(raw: Option<&str>) -> Result<Self, TrackConfigError> {
        Ok(Self {
            track_size: resolve_track_size(raw)?,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            track_size: DEFAULT_TRACK_SIZE,
        }
    }
}
