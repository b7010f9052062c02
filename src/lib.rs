//! sllist - singly-linked list algorithms
//!
//! An owned, singly-linked list with the classic pointer-manipulation
//! algorithms expressed as ownership transfers: splice removal, pairwise
//! swap, iterative and recursive reversal, positional swap, and a
//! Fisher-Yates shuffle built on positional swaps.

pub mod config;
pub mod error;
pub mod list;
pub mod utils;

pub use error::{ListError, Result};
pub use list::{IntoIter, Iter, LinkedList, NodeRef};
