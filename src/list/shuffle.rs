//! Fisher-Yates shuffle over ordinal positions.
//!
//! Each step draws a position uniformly from the unshuffled suffix and swaps
//! it into place with the relinking behind
//! [`LinkedList::swap_positions`]. Without random access,
//! each positional swap walks the list, so a full shuffle costs O(n²). That
//! cost comes from the linked representation. The resulting permutation is
//! still uniform.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sllist::LinkedList;
//!
//! let mut list: LinkedList<i64> = (1..=5).collect();
//!
//! // Thread-local generator, seeded once per thread from OS entropy
//! list.shuffle();
//!
//! // Reproducible shuffle from an injected source
//! let mut rng = StdRng::seed_from_u64(7);
//! list.shuffle_with(&mut rng);
//! assert_eq!(list.len(), 5);
//! ```

use rand::Rng;
use tracing::debug;

use super::LinkedList;

impl<T> LinkedList<T> {
    /// Shuffle the nodes in place using the thread-local generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle the nodes in place using `rng`.
    ///
    /// For each position `p` in `1..n`, a position `q` is drawn uniformly
    /// from `p..=n` and the two nodes are exchanged. Nodes are relinked,
    /// never reallocated, and values are never copied. Lists shorter than two
    /// nodes are left untouched.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.len();
        if n < 2 {
            return;
        }

        debug!(len = n, "Shuffling list");
        for p in 1..n {
            let q = rng.random_range(p..=n);
            if q != p {
                self.exchange(p, q);
            }
        }
    }
}
