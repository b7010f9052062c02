//! In-place reordering: pairwise swap, reversal and positional swap.
//!
//! All operations relink existing nodes. Values are never moved or copied,
//! so `NodeRef` handles stay valid across them.

use tracing::trace;

use super::{attach, link_at, LinkedList, Link, Node};
use crate::error::{ListError, Result};

impl<T> LinkedList<T> {
    /// Exchange each disjoint pair of adjacent nodes: 1↔2, 3↔4, ...
    ///
    /// With an odd length the last node stays in place. Single pass, O(1)
    /// auxiliary space.
    pub fn swap_adjacent_pairs(&mut self) {
        let mut rest = self.head.take();
        let mut tail = &mut self.head;
        while let Some(mut first) = rest.take() {
            rest = first.next.take();
            if let Some(mut second) = rest.take() {
                rest = second.next.take();
                tail = attach(tail, second);
            }
            tail = attach(tail, first);
        }
    }

    /// Reverse the list iteratively.
    ///
    /// Every link is redirected to its predecessor and the former tail becomes
    /// the head. Single pass, O(1) auxiliary space.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Reverse the list recursively.
    ///
    /// Ends in the same state as [`reverse`](Self::reverse). The recursion
    /// depth equals the list length, so very long lists can exhaust the
    /// stack; use `reverse` for those. Reversing an empty list is a no-op.
    pub fn reverse_recursive(&mut self) {
        if let Some(head) = self.head.take() {
            self.head = Some(reverse_from(head, None));
        }
    }

    /// Exchange the nodes at 1-based positions `p` and `q`.
    ///
    /// The predecessor of `p` (or the head) is relinked to the node at `q`,
    /// the predecessor of `q` to the node formerly at `p`, and the two nodes'
    /// successor links are exchanged. Adjacent positions are handled.
    /// Swapping a position with itself is a no-op.
    ///
    /// # Errors
    /// - `ListError::PositionOutOfRange` if `p` is zero or `q` exceeds the length
    /// - `ListError::InvalidRange` if `p > q`
    ///
    /// The list is unchanged on error.
    pub fn swap_positions(&mut self, p: usize, q: usize) -> Result<()> {
        if p == 0 {
            return Err(ListError::PositionOutOfRange {
                position: p,
                len: self.len,
            });
        }
        if p > q {
            return Err(ListError::InvalidRange { p, q });
        }
        if q > self.len {
            return Err(ListError::PositionOutOfRange {
                position: q,
                len: self.len,
            });
        }
        if p < q {
            self.exchange(p, q);
        }
        Ok(())
    }

    /// Relink the nodes at positions `p < q`. Positions must already be
    /// validated against the length.
    pub(super) fn exchange(&mut self, p: usize, q: usize) {
        trace!(p, q, "Exchanging nodes");

        let Some(slot_p) = link_at(&mut self.head, p - 1) else {
            return;
        };
        let Some(mut node_p) = slot_p.take() else {
            return;
        };

        // Nodes p+1 .. end, with node q at offset q-p-1.
        let mut between = node_p.next.take();
        if let Some(slot_q) = link_at(&mut between, q - p - 1) {
            if let Some(mut node_q) = slot_q.take() {
                node_p.next = node_q.next.take();
                *slot_q = Some(node_p);
                node_q.next = between;
                *slot_p = Some(node_q);
                return;
            }
        }

        node_p.next = between;
        *slot_p = Some(node_p);
    }
}

/// Hang `node` in front of the already-reversed prefix and recurse into its
/// successor. The node with no successor ends up as the new head.
fn reverse_from<T>(mut node: Box<Node<T>>, reversed: Link<T>) -> Box<Node<T>> {
    match std::mem::replace(&mut node.next, reversed) {
        None => node,
        Some(successor) => reverse_from(successor, Some(node)),
    }
}
