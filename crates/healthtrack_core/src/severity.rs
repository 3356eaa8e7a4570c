//! Damage severity ordering.
//!
//! The four severities form a strict total order:
//!
//! `Empty < Bashing < Lethal < Aggravated`
//!
//! Every comparison in the engine — "upgrade to the next severity", "sort
//! most-severe-first", "at least Lethal" — goes through this order. Variant
//! declaration order IS the severity order; `rank()` exposes it explicitly.

/// Severity of a single damage box, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// No damage marked.
    Empty,
    /// Bashing damage (blunt trauma; heals fastest).
    Bashing,
    /// Lethal damage (cuts, bullets, fire).
    Lethal,
    /// Aggravated damage (the worst; overwrites everything else).
    Aggravated,
}

impl Severity {
    /// Explicit ranking function for the total order. Matches declaration
    /// order, so `a < b` and `a.rank() < b.rank()` always agree.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Empty => 0,
            Severity::Bashing => 1,
            Severity::Lethal => 2,
            Severity::Aggravated => 3,
        }
    }

    /// Whether this box holds actual damage (anything but `Empty`).
    pub fn is_marked(self) -> bool {
        self != Severity::Empty
    }

    /// Display label for a box. Empty boxes render blank.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Empty => "",
            Severity::Bashing => "Bashing",
            Severity::Lethal => "Lethal",
            Severity::Aggravated => "Aggravated",
        }
    }
}

/// All severity variants in ascending order (for exhaustive iteration in tests).
pub const ALL_SEVERITIES: &[Severity] = &[
    Severity::Empty,
    Severity::Bashing,
    Severity::Lethal,
    Severity::Aggravated,
];
