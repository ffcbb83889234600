//! Static study-technique catalog and motivation lines.
//!
//! The catalog is fixed at compile time; only usage counters are
//! persisted. `pomodoro` doubles as the focus-sprint fallback the planner
//! prescribes under low mood or energy.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// A study method with usage instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technique {
    pub code: &'static str,
    pub name: &'static str,
    pub how: &'static str,
}

/// Code of the focus-sprint technique, always suggested under low mood
/// or energy.
pub const FOCUS_SPRINT: &str = "pomodoro";

/// The full technique catalog, in presentation order.
pub static CATALOG: [Technique; 4] = [
    Technique {
        code: "pomodoro",
        name: "Pomodoro (focus sprints)",
        how: "Study 25-30 minutes, then 5-minute breaks; after 3-4 rounds, \
              take a longer 20-30 minute break.",
    },
    Technique {
        code: "active_recall",
        name: "Active Recall",
        how: "Test yourself from memory before checking notes.",
    },
    Technique {
        code: "spaced_repetition",
        name: "Spaced Repetition",
        how: "Review material over increasing intervals instead of cramming.",
    },
    Technique {
        code: "interleaving",
        name: "Interleaving",
        how: "Mix related topics instead of studying one type only.",
    },
];

/// Fixed list of motivation lines shown after planning.
pub const MOTIVATION_LINES: [&str; 5] = [
    "Tiny consistent sessions beat random all-nighters.",
    "You don't need a perfect day, just one honest study block.",
    "Rest is part of the plan, not outside it.",
    "Start small. Momentum will take care of the rest.",
    "You're building a system, not chasing a mood.",
];

/// Look up a technique by code.
pub fn find(code: &str) -> Option<&'static Technique> {
    CATALOG.iter().find(|t| t.code == code)
}

/// Uniform random pick from the motivation lines.
pub fn motivation_line<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATION_LINES
        .choose(rng)
        .copied()
        .expect("motivation lines are non-empty")
}
