//! Owned singly-linked list.
//!
//! Each node is owned by exactly one predecessor, or by the list itself for
//! the head. There are no back-links, no shared ownership and no cycles.
//! Every structural edit detaches a sub-chain by value and re-attaches it, so
//! ownership moves together with the splice.
//!
//! This module contains:
//! - `LinkedList`: construction, append, search, removal, iteration, rendering
//! - `NodeRef`: a borrow-free handle naming one node of one list
//! - `reorder`: pairwise swap, reversal, positional swap
//! - `shuffle`: Fisher-Yates shuffle by position

mod reorder;
mod shuffle;

use std::fmt;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::error::{ListError, Result};

type Link<T> = Option<Box<Node<T>>>;

/// Source of process-unique list identifiers.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

struct Node<T> {
    id: u64,
    value: T,
    next: Link<T>,
}

/// Handle to a node returned by [`LinkedList::find`].
///
/// A handle names a node by identity, not by position, so it stays valid
/// across reordering operations on the same list. It stops resolving once
/// its node has been removed, and it never resolves against another list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    list: u64,
    node: u64,
}

/// Owned, singly-linked, null-terminated sequence.
pub struct LinkedList<T> {
    id: u64,
    head: Link<T>,
    len: usize,
    next_node_id: u64,
}

/// Place `node` into the empty `link` and return the node's own successor link.
fn attach<T>(link: &mut Link<T>, node: Box<Node<T>>) -> &mut Link<T> {
    &mut link.insert(node).next
}

/// Follow `steps` links starting from `link`.
///
/// Returns `None` if the chain ends before `steps` links were followed.
fn link_at<T>(mut link: &mut Link<T>, steps: usize) -> Option<&mut Link<T>> {
    for _ in 0..steps {
        link = &mut link.as_mut()?.next;
    }
    Some(link)
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            head: None,
            len: 0,
            next_node_id: 0,
        }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn new_node(&mut self, value: T) -> Box<Node<T>> {
        let id = self.next_node_id;
        self.next_node_id += 1;
        Box::new(Node {
            id,
            value,
            next: None,
        })
    }

    fn handle(&self, node: &Node<T>) -> NodeRef {
        NodeRef {
            list: self.id,
            node: node.id,
        }
    }

    /// Append `value` as the new tail.
    ///
    /// Walks from the head to the tail, so each call is O(n).
    pub fn append(&mut self, value: T) {
        self.extend(std::iter::once(value));
    }

    /// Insert `value` as the new head. O(1).
    pub fn push_front(&mut self, value: T) {
        let mut node = self.new_node(value);
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Detach the head node and return its value.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next, .. } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Destroy every node.
    pub fn clear(&mut self) {
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
        }
        self.len = 0;
    }

    /// First value of the list, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Find the first node, in head-to-tail order, whose value equals `value`.
    pub fn find(&self, value: &T) -> Option<NodeRef>
    where
        T: PartialEq,
    {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.value == *value {
                return Some(self.handle(node));
            }
            current = node.next.as_deref();
        }
        None
    }

    /// Returns true if any node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Resolve a handle to the value of its node.
    ///
    /// Returns `None` if the node is no longer (or never was) in this list.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        if node.list != self.id {
            return None;
        }
        let mut current = self.head.as_deref();
        while let Some(n) = current {
            if n.id == node.node {
                return Some(&n.value);
            }
            current = n.next.as_deref();
        }
        None
    }

    /// Splice the referenced node out of the list and return its value.
    ///
    /// The predecessor's link (or the head, for the first node) is relinked
    /// to the node's successor before the node is destroyed. O(n) to locate
    /// the node, O(1) to splice.
    ///
    /// # Errors
    /// `ListError::NotFound` if `node` does not name a current member of this
    /// list. The list is left unchanged.
    pub fn remove(&mut self, node: NodeRef) -> Result<T> {
        if node.list != self.id {
            debug!(list = self.id, other = node.list, "Rejected handle from another list");
            return Err(ListError::NotFound);
        }

        let mut rest = self.head.take();
        let mut tail = &mut self.head;
        while let Some(mut current) = rest {
            rest = current.next.take();
            if current.id == node.node {
                *tail = rest;
                self.len -= 1;
                return Ok(current.value);
            }
            tail = attach(tail, current);
        }

        debug!(list = self.id, node = node.node, "Node already removed");
        Err(ListError::NotFound)
    }

    /// Remove the first node whose value equals `value`.
    pub fn remove_first(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let node = self.find(value).ok_or(ListError::NotFound)?;
        self.remove(node)
    }

    /// Borrowing iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    // Boxed chains drop recursively by default; unlink one node at a time instead.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for value in iter {
            let id = self.next_node_id;
            self.next_node_id += 1;
            link = attach(
                link,
                Box::new(Node {
                    id,
                    value,
                    next: None,
                }),
            );
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the values as space-separated tokens, head first.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
