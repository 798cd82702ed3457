//! Attack-matrix damage profiles: a fixed scalar or a discrete
//! probability distribution over integer damage values.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The tolerance within which a distribution's probabilities must sum
/// to `1.0` to be accepted (§6.1).
const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// A single attacker/defender pairing's damage rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DamageProfile {
    /// A fixed amount of damage, always dealt.
    Deterministic(f64),
    /// A discrete distribution over integer damage values, keyed by
    /// the damage amount as a string (JSON object keys are strings).
    Distribution(BTreeMap<String, f64>),
}

impl DamageProfile {
    /// Sums the distribution's probabilities, or `1.0` for a
    /// deterministic profile (trivially normalized).
    #[must_use]
    pub fn total_probability(&self) -> f64 {
        match self {
            DamageProfile::Deterministic(_) => 1.0,
            DamageProfile::Distribution(dist) => dist.values().sum(),
        }
    }

    /// Draws one damage sample from `rng`. For a distribution, walks
    /// the entries in key order accumulating probability mass until it
    /// passes a uniform `[0, 1)` draw; falls back to the last entry if
    /// rounding leaves a residual.
    #[must_use]
    pub fn sample(&self, rng: &mut impl Rng) -> i32 {
        match self {
            DamageProfile::Deterministic(amount) => *amount as i32,
            DamageProfile::Distribution(dist) => {
                let roll: f64 = rng.random();
                let mut acc = 0.0;
                let mut last = 0;
                for (damage_str, prob) in dist {
                    acc += prob;
                    last = damage_str.parse().unwrap_or(0);
                    if roll < acc {
                        return last;
                    }
                }
                last
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn deterministic_profile_samples_its_value() {
        let profile = DamageProfile::Deterministic(4.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(profile.sample(&mut rng), 4);
    }

    #[test]
    fn distribution_total_probability_sums_entries() {
        let mut dist = BTreeMap::new();
        dist.insert("2".to_string(), 0.5);
        dist.insert("3".to_string(), 0.5);
        let profile = DamageProfile::Distribution(dist);
        assert!((profile.total_probability() - 1.0).abs() < PROBABILITY_TOLERANCE);
    }

    #[test]
    fn distribution_sample_is_always_a_listed_value() {
        let mut dist = BTreeMap::new();
        dist.insert("1".to_string(), 0.3);
        dist.insert("2".to_string(), 0.7);
        let profile = DamageProfile::Distribution(dist);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let sample = profile.sample(&mut rng);
            assert!(sample == 1 || sample == 2);
        }
    }

    #[test]
    fn distribution_is_deterministic_given_same_seed() {
        let mut dist = BTreeMap::new();
        dist.insert("1".to_string(), 0.5);
        dist.insert("2".to_string(), 0.5);
        let profile = DamageProfile::Distribution(dist);

        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);
        let sequence_a: Vec<i32> = (0..10).map(|_| profile.sample(&mut rng_a)).collect();
        let sequence_b: Vec<i32> = (0..10).map(|_| profile.sample(&mut rng_b)).collect();
        assert_eq!(sequence_a, sequence_b);
    }
}
