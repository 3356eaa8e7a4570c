//! Integration tests for the session controller and snapshots.

use healthtrack_core::severity::Severity;
use healthtrack_core::track::{DamageError, DamageOutcome};
use healthtrack_infra::config::SessionConfig;
use healthtrack_infra::session::Session;

/// A fresh session is full health with an empty history and zeroed counters.
#[test]
fn test_fresh_session() {
    let session = Session::with_default_config();

    assert!(session.is_full_health());
    assert!(!session.is_dead());
    assert!(session.history().is_empty());
    assert_eq!(session.metrics().marked_total(), 0);
    assert_eq!(session.track().len(), 6);
}

/// Applied damage lands in history with the outcome and the digest after.
#[test]
fn test_history_records_each_applied_event() {
    let mut session = Session::with_default_config();

    session.apply_damage(Severity::Bashing).unwrap();
    session.apply_damage(Severity::Lethal).unwrap();

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].severity, Severity::Bashing);
    assert_eq!(
        history[1].outcome,
        DamageOutcome::Marked {
            severity: Severity::Lethal
        }
    );
    assert_eq!(
        history[1].digest,
        session.digest(),
        "last history entry must carry the current digest"
    );
    assert_ne!(history[0].digest, history[1].digest);
}

/// The digest changes exactly when observable state changes.
#[test]
fn test_digest_tracks_observable_state() {
    let mut session = Session::with_default_config();
    let fresh = session.digest();

    session.apply_damage(Severity::Bashing).unwrap();
    assert_ne!(session.digest(), fresh);

    // Rejected call: digest untouched.
    let before = session.digest();
    assert_eq!(
        session.apply_damage(Severity::Empty),
        Err(DamageError::InvalidSeverity)
    );
    assert_eq!(session.digest(), before);

    // Reset back to fresh: same contents, same digest.
    assert!(session.reset());
    assert_eq!(session.digest(), fresh);
}

/// A redundant reset reports no change; hosts can skip the re-render.
#[test]
fn test_redundant_reset_reports_unchanged() {
    let mut session = Session::with_default_config();

    assert!(!session.reset(), "reset at full health changes nothing");
    assert_eq!(session.metrics().reset_total(), 1);

    session.apply_damage(Severity::Lethal).unwrap();
    assert!(session.reset());
    assert_eq!(session.metrics().reset_total(), 2);
}

/// Rejects bump the reject counter and leave track and history alone.
#[test]
fn test_reject_only_moves_the_reject_counter() {
    let config = SessionConfig { track_size: 2 };
    let mut session = Session::new(&config).unwrap();
    session.apply_damage(Severity::Aggravated).unwrap();
    session.apply_damage(Severity::Aggravated).unwrap();
    assert!(session.is_dead());

    let history_len = session.history().len();
    assert_eq!(
        session.apply_damage(Severity::Lethal),
        Err(DamageError::NoEscalationTarget)
    );
    assert_eq!(session.history().len(), history_len);
    assert_eq!(session.metrics().reject_total(), 1);
    assert!(session.is_dead());
}

/// Metrics distinguish the three outcome kinds.
#[test]
fn test_metrics_by_outcome_kind() {
    let config = SessionConfig { track_size: 2 };
    let mut session = Session::new(&config).unwrap();

    session.apply_damage(Severity::Bashing).unwrap();
    session.apply_damage(Severity::Bashing).unwrap();
    // Saturated: escalation.
    session.apply_damage(Severity::Bashing).unwrap();
    // Saturated: Aggravated overwrite.
    session.apply_damage(Severity::Aggravated).unwrap();

    let metrics = session.metrics();
    assert_eq!(metrics.marked_total(), 2);
    assert_eq!(metrics.escalated_total(), 1);
    assert_eq!(metrics.overwritten_total(), 1);
}

/// Snapshots expose labels, predicates, effects, and digest as a frontend
/// needs them, and round-trip through JSON.
#[test]
fn test_snapshot_capture_and_json() {
    let mut session = Session::with_default_config();
    session.apply_damage(Severity::Aggravated).unwrap();
    session.apply_damage(Severity::Bashing).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(
        snapshot.boxes,
        vec!["Aggravated", "Bashing", "", "", "", ""],
        "labels must come out most-severe-first with blank empties"
    );
    assert!(!snapshot.dead);
    assert!(!snapshot.full_health);
    assert!(snapshot.effects.is_empty(), "4 empty boxes -> no effects");
    assert_eq!(snapshot.digest.len(), 16);

    let json = snapshot.to_json().unwrap();
    let parsed: healthtrack_infra::snapshot::TrackSnapshot =
        serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

/// Dead session snapshot carries the death message and the dead flag the
/// host uses to disable damage entry.
#[test]
fn test_dead_session_snapshot() {
    let config = SessionConfig { track_size: 1 };
    let mut session = Session::new(&config).unwrap();
    session.apply_damage(Severity::Aggravated).unwrap();

    let snapshot = session.snapshot();
    assert!(snapshot.dead);
    assert_eq!(snapshot.effects, vec!["You're dead".to_string()]);
}
