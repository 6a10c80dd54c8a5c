use alloc::{boxed::Box, vec::Vec};

use core::{
    fmt::{self, Debug, Display, Formatter},
    iter::{Extend, FromIterator},
};

mod recursive;

pub(crate) type Link = Option<Box<SinglyLinkedListNode>>;

/// A singly linked list of integer ids.
///
/// Every node is owned by the `next` link of its predecessor (the head by the
/// list itself), so the chain can't contain a cycle and every node is freed
/// exactly once.
#[derive(Default)]
pub struct SinglyLinkedList {
    head: Link,
}

impl SinglyLinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element at the beginning of the list
    pub fn insert_at_front(&mut self, value: i64) {
        let node = SinglyLinkedListNode {
            value,
            next: self.head.take(),
        };
        self.head = Some(Box::new(node));
        log::trace!("inserted {value} at front");
    }

    /// Inserts an element at the end of the list, walking the whole chain
    pub fn insert_at_end(&mut self, value: i64) {
        *self.last_link_mut() = Some(Box::new(SinglyLinkedListNode::new(value)));
        log::trace!("inserted {value} at end");
    }

    /// Sum of every value, one call frame per node.
    pub fn sum(&self) -> i64 {
        recursive::sum(&self.head)
    }

    /// Whether `target` occurs anywhere in the list, one call frame per
    /// visited node.
    pub fn search(&self, target: i64) -> bool {
        recursive::search(&self.head, target)
    }

    /// Reverses the list in place by relinking every node, recursing once per
    /// node with a `(previous, current)` pair.
    pub fn reverse(&mut self) {
        let head = self.head.take();
        self.head = recursive::reverse(None, head);
        log::trace!("reversed list");
    }

    /// Same result as [`sum`](Self::sum) but with an accumulator loop, for
    /// lists too long to recurse over.
    pub fn sum_iterative(&self) -> i64 {
        recursive::sum_iterative(&self.head)
    }

    /// Same result as [`search`](Self::search) without recursion.
    pub fn search_iterative(&self, target: i64) -> bool {
        recursive::search_iterative(&self.head, target)
    }

    /// Same relinking as [`reverse`](Self::reverse) expressed as a loop over
    /// the `(previous, current)` pair.
    pub fn reverse_iterative(&mut self) {
        let head = self.head.take();
        self.head = recursive::reverse_iterative(None, head);
        log::trace!("reversed list");
    }

    /// The values from head to tail, in the order they are rendered.
    pub fn display(&self) -> Vec<i64> {
        self.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.head)
    }

    /// The `None` link after the last node, or the head if the list is empty
    fn last_link_mut(&mut self) -> &mut Link {
        let mut current = &mut self.head;
        while let Some(node) = current {
            current = &mut node.next;
        }
        current
    }
}

// the default drop recurses through every Box
impl Drop for SinglyLinkedList {
    fn drop(&mut self) {
        unlink(self.head.take());
    }
}

fn unlink(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

impl Clone for SinglyLinkedList {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

impl Debug for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len();
        write!(f, "SinglyLinkedList {{ length: {len}, items: {{")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

/// `1 -> 2 -> 3 -> END`, or `Empty list`
impl Display for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty list");
        }
        for elem in self.iter() {
            write!(f, "{elem} -> ")?;
        }
        write!(f, "END")
    }
}

impl FromIterator<i64> for SinglyLinkedList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

/// Appends in iteration order, walking to the end only once
impl Extend<i64> for SinglyLinkedList {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        let mut tail = self.last_link_mut();
        for value in iter.into_iter() {
            tail = &mut tail.insert(Box::new(SinglyLinkedListNode::new(value))).next;
        }
    }
}

pub use iters::*;
mod iters {
    use super::*;

    impl IntoIterator for SinglyLinkedList {
        type Item = i64;
        type IntoIter = IntoIter;
        fn into_iter(mut self) -> Self::IntoIter {
            IntoIter {
                head: self.head.take(),
            }
        }
    }

    impl<'a> IntoIterator for &'a SinglyLinkedList {
        type Item = &'a i64;
        type IntoIter = Iter<'a>;
        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    pub struct IntoIter {
        head: Link,
    }

    impl Iterator for IntoIter {
        type Item = i64;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(mut s) = self.head.take() {
                self.head = s.next.take();
                Some(s.value)
            } else {
                None
            }
        }
    }

    impl Drop for IntoIter {
        fn drop(&mut self) {
            unlink(self.head.take());
        }
    }

    pub struct Iter<'a> {
        node: &'a Link,
    }

    impl<'a> Iter<'a> {
        pub(super) fn new(node: &'a Link) -> Self {
            Self { node }
        }
    }

    impl<'a> Iterator for Iter<'a> {
        type Item = &'a i64;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(s) = self.node {
                self.node = &s.next;
                Some(&s.value)
            } else {
                None
            }
        }
    }
}

pub(crate) struct SinglyLinkedListNode {
    value: i64,
    next: Link,
}

impl SinglyLinkedListNode {
    fn new(value: i64) -> Self {
        Self { value, next: None }
    }
}
