//! Statistical checks that the shuffle draws every permutation equally often.
//!
//! Runs are seeded, so each test is deterministic. Thresholds are the
//! chi-squared critical values at p = 0.001.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sllist::LinkedList;

/// Critical value for 5 degrees of freedom (3! - 1).
const CHI2_CRITICAL_DF5: f64 = 20.515;
/// Critical value for 23 degrees of freedom (4! - 1).
const CHI2_CRITICAL_DF23: f64 = 49.728;

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// Shuffle `len` distinct values `trials` times and tally each ordering.
fn tally<F>(len: usize, trials: usize, mut shuffle: F) -> HashMap<Vec<u8>, usize>
where
    F: FnMut(&mut LinkedList<u8>),
{
    let mut counts = HashMap::new();
    for _ in 0..trials {
        let mut list: LinkedList<u8> = (0..len as u8).collect();
        shuffle(&mut list);
        *counts.entry(list.iter().copied().collect()).or_insert(0) += 1;
    }
    counts
}

/// Pearson's chi-squared statistic against the uniform distribution over
/// all `len!` orderings. Orderings never observed count as zero.
fn chi_squared(counts: &HashMap<Vec<u8>, usize>, len: usize, trials: usize) -> f64 {
    let cells = factorial(len);
    let expected = trials as f64 / cells as f64;
    let observed: f64 = counts
        .values()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    let missing = (cells - counts.len()) as f64 * expected;
    observed + missing
}

#[test]
fn test_shuffle_uniform_over_three() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);
    let trials = 60_000;
    let counts = tally(3, trials, |list| list.shuffle_with(&mut rng));

    assert_eq!(counts.len(), 6, "every ordering should appear");
    let stat = chi_squared(&counts, 3, trials);
    assert!(
        stat < CHI2_CRITICAL_DF5,
        "chi-squared {:.2} exceeds {:.3}: {:?}",
        stat,
        CHI2_CRITICAL_DF5,
        counts
    );
}

#[test]
fn test_shuffle_uniform_over_four() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    let trials = 120_000;
    let counts = tally(4, trials, |list| list.shuffle_with(&mut rng));

    assert_eq!(counts.len(), 24, "every ordering should appear");
    let stat = chi_squared(&counts, 4, trials);
    assert!(
        stat < CHI2_CRITICAL_DF23,
        "chi-squared {:.2} exceeds {:.3}: {:?}",
        stat,
        CHI2_CRITICAL_DF23,
        counts
    );
}

#[test]
fn test_thread_local_shuffle_reaches_every_ordering() {
    let counts = tally(3, 6_000, |list| list.shuffle());
    assert_eq!(counts.len(), 6);
    assert_eq!(counts.values().sum::<usize>(), 6_000);
}

#[test]
fn test_chi_squared_detects_biased_shuffle() {
    // Swapping each position with any position, not just the suffix, yields
    // n^n equally likely paths over n! orderings and is therefore biased.
    let mut rng = StdRng::seed_from_u64(0xb1a5);
    let trials = 60_000;
    let counts = tally(3, trials, |list| {
        let n = list.len();
        for p in 1..=n {
            let q = rng.random_range(1..=n);
            list.swap_positions(p.min(q), p.max(q)).unwrap();
        }
    });

    let stat = chi_squared(&counts, 3, trials);
    assert!(
        stat > CHI2_CRITICAL_DF5,
        "biased shuffle went undetected: chi-squared {:.2}",
        stat
    );
}
