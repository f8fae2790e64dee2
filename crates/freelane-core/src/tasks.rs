//! Task selection for generated blocks.
//!
//! Candidates are pooled from every selected role, deduplicated, shuffled
//! and sampled. The shuffle is intentional: multi-role users get varied
//! suggestions on every regeneration. The RNG is injected so tests can
//! pin a seed while production uses `thread_rng`.

use std::collections::BTreeSet;
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::role::Role;

/// Upper bound on sampled suggestions per generated block.
pub const MAX_SUGGESTED_TASKS: usize = 3;

/// Which role content pool to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionPool {
    TrendHunting,
    DeepWork,
}

const GENERIC_TREND_TASKS: [&str; 3] = [
    "Browse this week's top posts in your field and save 5 references",
    "Check what services similar freelancers are advertising right now",
    "Write down one trend you could turn into an offer",
];

const GENERIC_DEEP_WORK_TASKS: [&str; 3] = [
    "Advance your most important client deliverable",
    "Improve one portfolio piece you are not proud of yet",
    "Practice the skill you most often get asked about",
];

const GENERIC_PROSPECTING_TIP: &str =
    "Reach out to 3 past clients and ask what they are working on this quarter";

/// Sample at most [`MAX_SUGGESTED_TASKS`] tasks for the given pool.
///
/// With no roles selected the fixed generic list for the pool is returned
/// unshuffled. Otherwise candidates from every role are pooled, first-seen
/// order deduplicated, shuffled, and truncated.
pub fn select_tasks<R: Rng>(
    roles: &BTreeSet<Role>,
    pool: SuggestionPool,
    rng: &mut R,
) -> Vec<String> {
    if roles.is_empty() {
        let generic = match pool {
            SuggestionPool::TrendHunting => &GENERIC_TREND_TASKS,
            SuggestionPool::DeepWork => &GENERIC_DEEP_WORK_TASKS,
        };
        return generic.iter().map(|t| t.to_string()).collect();
    }

    let mut candidates: Vec<&'static str> = Vec::new();
    for role in roles {
        let role_pool = match pool {
            SuggestionPool::TrendHunting => role.trend_pool(),
            SuggestionPool::DeepWork => role.deep_work_pool(),
        };
        candidates.extend_from_slice(role_pool);
    }

    let mut seen = HashSet::new();
    candidates.retain(|task| seen.insert(*task));

    candidates.shuffle(rng);
    candidates.truncate(MAX_SUGGESTED_TASKS);
    candidates.into_iter().map(|t| t.to_string()).collect()
}

/// Pick one prospecting tip, uniformly across the selected roles.
///
/// Always returns a non-empty string; with no roles the generic tip is
/// returned.
pub fn select_prospecting_tip<R: Rng>(roles: &BTreeSet<Role>, rng: &mut R) -> String {
    let roles: Vec<&Role> = roles.iter().collect();
    match roles.choose(rng) {
        Some(role) => role.prospecting_tip().to_string(),
        None => GENERIC_PROSPECTING_TIP.to_string(),
    }
}
