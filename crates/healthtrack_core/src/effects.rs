//! Status effects derived from the current damage pattern.
//!
//! Evaluation order is fixed:
//! 1. Full health → no effects.
//! 2. Dead → the death message alone; nothing else is checked.
//! 3. Otherwise, in order: ongoing damage (every box at least Lethal),
//!    consciousness checks (every box marked), dice penalty (three or fewer
//!    empty boxes remaining).
//!
//! The penalty is a function of how many empty boxes remain, capped at 3:
//! 0 remaining → −3, 1 → −2, 2 → −1, 3 or more → no penalty.

use crate::severity::Severity;
use crate::track::HealthTrack;
use std::fmt;

/// A derived status effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Track saturated with Aggravated.
    Dead,
    /// Every box at least Lethal: damage keeps accruing without treatment.
    OngoingDamage,
    /// Every box marked: staying conscious takes a roll each turn.
    ConsciousnessCheck,
    /// Wound penalty to all actions. Always −1, −2, or −3.
    DicePenalty(i8),
}

impl Effect {
    /// The user-facing message for this effect.
    pub fn message(&self) -> String {
        match self {
            Effect::Dead => "You're dead".to_string(),
            Effect::OngoingDamage => {
                "Take another point of damage each minute until receiving medical attention"
                    .to_string()
            }
            Effect::ConsciousnessCheck => {
                "Make a reflexive Stamina roll each turn to remain conscious".to_string()
            }
            Effect::DicePenalty(penalty) => {
                format!("Take a {penalty} penalty to all actions except rolling to stay conscious")
            }
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Derive the ordered effect list for the current track state.
pub fn derive_effects(track: &HealthTrack) -> Vec<Effect> {
    if track.is_full_health() {
        return Vec::new();
    }
    if track.is_dead() {
        return vec![Effect::Dead];
    }

    let mut effects = Vec::new();
    if track.boxes().iter().all(|&b| b >= Severity::Lethal) {
        effects.push(Effect::OngoingDamage);
    }
    if track.boxes().iter().all(|&b| b.is_marked()) {
        effects.push(Effect::ConsciousnessCheck);
    }
    let remaining = track.empty_count().min(3);
    let penalty: i8 = match remaining {
        0 => -3,
        1 => -2,
        2 => -1,
        _ => 0,
    };
    if penalty != 0 {
        effects.push(Effect::DicePenalty(penalty));
    }
    effects
}

/// The rendered effect messages, in derivation order.
pub fn effect_messages(track: &HealthTrack) -> Vec<String> {
    derive_effects(track).iter().map(Effect::message).collect()
}
