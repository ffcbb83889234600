//! Study-technique suggestion heuristics.
//!
//! The random source is a capability passed in by the caller, so tests
//! can seed it while production code uses `rand::thread_rng()`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::technique::{self, Technique, CATALOG, FOCUS_SPRINT};

/// Techniques suited to a day that includes a hard task.
const HARD_TASK_CANDIDATES: [&str; 2] = ["active_recall", "interleaving"];

/// Suggest a technique for the day.
///
/// Low mood or energy (either rating at 2 or below) always yields the
/// focus-sprint technique. Otherwise, a hard task among the chosen ones
/// (`max_difficulty >= 3`) narrows the draw to active recall or
/// interleaving; failing that, any catalog technique can come up.
pub fn suggest_technique<R: Rng + ?Sized>(
    mood: u8,
    energy: u8,
    max_difficulty: u8,
    rng: &mut R,
) -> &'static Technique {
    if mood <= 2 || energy <= 2 {
        return technique::find(FOCUS_SPRINT).expect("focus sprint is in the catalog");
    }

    if max_difficulty >= 3 {
        let code = HARD_TASK_CANDIDATES
            .choose(rng)
            .copied()
            .expect("hard-task candidates are non-empty");
        return technique::find(code).expect("candidate codes are in the catalog");
    }

    CATALOG.choose(rng).expect("catalog is non-empty")
}
