//! Integration tests for track-size configuration resolution.
//!
//! - Missing parameter -> default of 6.
//! - Supplied parameter MUST be a positive integer; anything else fails
//!   closed instead of being coerced.

use healthtrack_core::track::DEFAULT_TRACK_SIZE;
use healthtrack_infra::config::{SessionConfig, resolve_track_size};
use healthtrack_infra::session::Session;

/// Missing parameter resolves to the default six-box track.
#[test]
fn test_missing_param_uses_default() {
    assert_eq!(resolve_track_size(None), Ok(DEFAULT_TRACK_SIZE));
    assert_eq!(SessionConfig::default().track_size, 6);
}

/// Valid positive integers are accepted, surrounding whitespace included.
#[test]
fn test_valid_sizes_accepted() {
    assert_eq!(resolve_track_size(Some("1")), Ok(1));
    assert_eq!(resolve_track_size(Some("10")), Ok(10));
    assert_eq!(resolve_track_size(Some(" 7 ")), Ok(7));
}

/// Zero, negatives, and non-numeric input all fail closed.
#[test]
fn test_invalid_sizes_fail_closed() {
    for raw in ["0", "-3", "abc", "6.5", ""] {
        let result = resolve_track_size(Some(raw));
        assert!(
            result.is_err(),
            "'{raw}' must be rejected, got {result:?}"
        );
    }
}

/// A config built from a size parameter produces a session of that length.
#[test]
fn test_config_flows_into_session() {
    let config = SessionConfig::from_size_param(Some("3")).unwrap();
    let session = Session::new(&config).unwrap();
    assert_eq!(session.track().len(), 3);
}
