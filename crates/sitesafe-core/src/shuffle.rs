//! Seeded option ordering for display.
//!
//! Options of a step are shown in a shuffled order that depends only on the
//! step id, so a step always looks the same within a session while different
//! steps look different. The ordering is a pure function of `(len, seed)` and
//! never touches campaign state.
//!
//! The pseudo-random stream is a Fisher–Yates shuffle where the draw for
//! position `i` hashes the string `seed ++ i`:
//!
//! - `hash = hash * 31 + unit` over the UTF-16 code units, wrapping at 32 bits
//! - `rand = (|hash| mod 2^31) / 2^31`, a value in `[0, 1)`
//! - `j = floor(rand * (i + 1))`, then swap `i` and `j`
//!
//! ```rust
//! use sitesafe_core::shuffle::shuffle_indices;
//!
//! let order = shuffle_indices(3, "ppe-selection");
//! assert_eq!(order, vec![1, 2, 0]);
//! assert_eq!(order, shuffle_indices(3, "ppe-selection"));
//! ```

use log::trace;

use crate::models::{SafetyStep, StepOption};

/// Size of the hash space the 32-bit hash is folded into.
const HASH_SPACE: u32 = 0x8000_0000;

/// 32-bit rolling polynomial hash of `seed`.
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Maps `seed` to a pseudo-random value in `[0, 1)`.
pub fn seeded_random(seed: &str) -> f64 {
    let hash = seed_hash(seed);
    f64::from(hash.unsigned_abs() % HASH_SPACE) / f64::from(HASH_SPACE)
}

/// Returns a permutation of `0..len` determined by `seed`.
pub fn shuffle_indices(len: usize, seed: &str) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let rand = seeded_random(&format!("{seed}{i}"));
        let j = (rand * (i + 1) as f64).floor() as usize;
        order.swap(i, j);
    }
    order
}

/// Returns references to `items` in the order determined by `seed`.
pub fn shuffled<'a, T>(items: &'a [T], seed: &str) -> Vec<&'a T> {
    shuffle_indices(items.len(), seed)
        .into_iter()
        .map(|index| &items[index])
        .collect()
}

/// Display order of a step's options, memoized for the last step seen.
///
/// The order is recomputed only when the step identity changes, so selecting
/// an option and re-rendering never reorders the choices.
#[derive(Debug, Clone, Default)]
pub struct OptionOrder {
    step_id: Option<String>,
    order: Vec<usize>,
}

impl OptionOrder {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices into `step.options` in display order.
    pub fn order_for(&mut self, step: &SafetyStep) -> &[usize] {
        let stale = self.step_id.as_deref() != Some(step.id.as_str())
            || self.order.len() != step.options.len();
        if stale {
            trace!("Computing option order for step '{}'", step.id);
            self.order = shuffle_indices(step.options.len(), &step.id);
            self.step_id = Some(step.id.clone());
        }
        &self.order
    }

    /// Options of `step` in display order.
    pub fn options_for<'s>(&mut self, step: &'s SafetyStep) -> Vec<&'s StepOption> {
        self.order_for(step)
            .iter()
            .map(|&index| &step.options[index])
            .collect()
    }

    /// The option shown at 0-based display `position`, if any.
    pub fn option_at<'s>(&mut self, step: &'s SafetyStep, position: usize) -> Option<&'s StepOption> {
        self.order_for(step)
            .get(position)
            .map(|&index| &step.options[index])
    }

    /// Step id the cached order belongs to.
    pub fn cached_step(&self) -> Option<&str> {
        self.step_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str, count: usize) -> SafetyStep {
        SafetyStep {
            id: id.to_string(),
            description: "Question".to_string(),
            vital: false,
            options: (0..count)
                .map(|i| StepOption {
                    id: format!("opt-{i}"),
                    text: format!("Option {i}"),
                    correct: i == 0,
                    feedback: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_seed_hash_values() {
        assert_eq!(seed_hash(""), 0);
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(seed_hash("ab"), 3105);
        assert_eq!(seed_hash("abc"), 96354);
        // Wraps into negative range
        assert_eq!(seed_hash("permit-review"), -1_436_083_894);
    }

    #[test]
    fn test_seed_hash_uses_utf16_units() {
        // 'O₂' is two UTF-16 units: 0x4F and 0x2082
        assert_eq!(seed_hash("O₂"), 0x4F * 31 + 0x2082);
    }

    #[test]
    fn test_seeded_random_range() {
        for seed in ["", "a", "permit-review", "gas-readings3", "ümlaut"] {
            let value = seeded_random(seed);
            assert!((0.0..1.0).contains(&value), "{seed} -> {value}");
        }
    }

    #[test]
    fn test_pinned_permutations() {
        assert_eq!(shuffle_indices(3, "permit-review"), vec![0, 1, 2]);
        assert_eq!(shuffle_indices(3, "ppe-selection"), vec![1, 2, 0]);
        assert_eq!(shuffle_indices(3, "ppe-inspection"), vec![2, 0, 1]);
        assert_eq!(shuffle_indices(4, "ppe-inspection"), vec![2, 0, 3, 1]);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        for _ in 0..5 {
            assert_eq!(
                shuffle_indices(5, "continuous-monitoring"),
                shuffle_indices(5, "continuous-monitoring")
            );
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        for seed in ["x", "tripod-setup", "rescue-attempt"] {
            let mut order = shuffle_indices(6, seed);
            order.sort_unstable();
            assert_eq!(order, (0..6).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_different_steps_get_different_orders() {
        assert_ne!(
            shuffle_indices(3, "ppe-selection"),
            shuffle_indices(3, "ppe-inspection")
        );
    }

    #[test]
    fn test_trivial_lengths() {
        assert!(shuffle_indices(0, "seed").is_empty());
        assert_eq!(shuffle_indices(1, "seed"), vec![0]);
    }

    #[test]
    fn test_shuffled_references() {
        let items = ["a", "b", "c"];
        let order: Vec<&str> = shuffled(&items, "ppe-selection").into_iter().copied().collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_option_order_cache_is_stable() {
        let mut cache = OptionOrder::new();
        let first = step("ppe-inspection", 3);

        let before = cache.order_for(&first).to_vec();
        assert_eq!(cache.cached_step(), Some("ppe-inspection"));
        let again = cache.order_for(&first).to_vec();
        assert_eq!(before, again);
        assert_eq!(before, vec![2, 0, 1]);

        let option = cache.option_at(&first, 0).expect("first displayed option");
        assert_eq!(option.id, "opt-2");
        assert!(cache.option_at(&first, 3).is_none());
    }

    #[test]
    fn test_option_order_cache_invalidates_on_step_change() {
        let mut cache = OptionOrder::new();
        let first = step("ppe-inspection", 3);
        let second = step("ppe-selection", 3);

        cache.order_for(&first);
        let ids: Vec<&str> = cache
            .options_for(&second)
            .into_iter()
            .map(|option| option.id.as_str())
            .collect();
        assert_eq!(cache.cached_step(), Some("ppe-selection"));
        assert_eq!(ids, vec!["opt-1", "opt-2", "opt-0"]);
    }
}
