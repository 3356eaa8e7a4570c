//! Track state digest.
//!
//! `track_digest = xxhash64(rank byte of every box, in normalized order)`
//!
//! The digest is a deterministic fingerprint of the whole-track value. The
//! session layer compares digests to decide whether anything observable
//! changed (a redundant `reset` on a fresh track, for example, should not
//! trigger a re-render). Inputs are the rank bytes only — no timestamps, no
//! track identity.

use crate::track::HealthTrack;
use xxhash_rust::xxh64::xxh64;

/// Compute the xxh64 fingerprint of the track's current contents.
///
/// Two tracks with the same normalized box sequence digest equal; any change
/// to any box changes the digest with overwhelming probability.
pub fn track_digest(track: &HealthTrack) -> u64 {
    let buf: Vec<u8> = track.boxes().iter().map(|b| b.rank()).collect();
    xxh64(&buf, 0)
}

/// Format a digest as a fixed-width hex string.
pub fn format_digest(digest: u64) -> String {
    format!("{digest:016x}")
}
