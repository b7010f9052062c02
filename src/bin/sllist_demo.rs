//! sllist-demo: walkthrough of the list algorithms
//!
//! Builds a list, then shuffles, removes one value, swaps adjacent pairs,
//! reverses iteratively and reverses recursively, printing the sequence
//! after each step.
//!
//! ## Configuration
//! - SLLIST_CONFIG: Path to YAML config (default: sllist.yaml)
//! - SLLIST_SEED: Shuffle seed (optional)
//! - SLLIST_REMOVE: Value to remove (default: 101)
//! - SLLIST_LOG: Log filter (default: info)

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use sllist::config::DemoConfig;
use sllist::utils::bootstrap::init_tracing;
use sllist::LinkedList;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = DemoConfig::load()?;
    info!(len = config.values.len(), seed = ?config.seed, "sllist-demo started");

    let mut list: LinkedList<i64> = config.values.iter().copied().collect();
    println!("{}", list);

    match config.seed {
        Some(seed) => list.shuffle_with(&mut StdRng::seed_from_u64(seed)),
        None => list.shuffle(),
    }
    println!("{}", list);

    if let Err(e) = list.remove_first(&config.remove) {
        warn!(value = config.remove, error = %e, "Value not removed");
    }
    println!("{}", list);

    list.swap_adjacent_pairs();
    println!("{}", list);

    list.reverse();
    println!("{}", list);

    list.reverse_recursive();
    println!("{}", list);

    Ok(())
}
