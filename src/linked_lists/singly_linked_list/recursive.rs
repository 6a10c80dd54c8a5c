//! Recursive walks over a chain of owned nodes.
//!
//! Each walk is split into a base case on the empty link and a recursive case
//! on a node and the rest of the chain. None of these are tail calls the
//! compiler is guaranteed to eliminate, so every node costs a stack frame; the
//! `_iterative` versions keep the same decomposition as an accumulator loop.

use super::Link;

/// sum(none) = 0, sum(node) = node.value + sum(node.next)
pub(super) fn sum(link: &Link) -> i64 {
    match link {
        None => 0,
        Some(node) => node.value + sum(&node.next),
    }
}

/// search(none, t) = false, search(node, t) = node.value == t || search(node.next, t)
pub(super) fn search(link: &Link, target: i64) -> bool {
    match link {
        None => false,
        Some(node) if node.value == target => true,
        Some(node) => search(&node.next, target),
    }
}

/// Relinks `current` and everything after it in front of `previous`,
/// returning the new head once `current` runs out.
pub(super) fn reverse(previous: Link, current: Link) -> Link {
    match current {
        None => previous,
        Some(mut node) => {
            let next = node.next.take();
            node.next = previous;
            reverse(Some(node), next)
        }
    }
}

pub(super) fn sum_iterative(link: &Link) -> i64 {
    let mut total = 0;
    let mut current = link;
    while let Some(node) = current {
        total += node.value;
        current = &node.next;
    }
    total
}

pub(super) fn search_iterative(link: &Link, target: i64) -> bool {
    let mut current = link;
    while let Some(node) = current {
        if node.value == target {
            return true;
        }
        current = &node.next;
    }
    false
}

pub(super) fn reverse_iterative(mut previous: Link, mut current: Link) -> Link {
    while let Some(mut node) = current {
        current = node.next.take();
        node.next = previous;
        previous = Some(node);
    }
    previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SinglyLinkedList;

    fn values(mut link: &Link) -> Vec<i64> {
        let mut out = vec![];
        while let Some(node) = link {
            out.push(node.value);
            link = &node.next;
        }
        out
    }

    #[test]
    fn base_cases() {
        assert_eq!(sum(&None), 0);
        assert!(!search(&None, 0));
        assert!(reverse(None, None).is_none());
        assert_eq!(sum_iterative(&None), 0);
        assert!(!search_iterative(&None, 0));
        assert!(reverse_iterative(None, None).is_none());
    }

    #[test]
    fn sum_of_suffix() {
        let lst: SinglyLinkedList = (1..=4).collect();
        let second = &lst.head.as_ref().unwrap().next;
        assert_eq!(sum(&lst.head), 10);
        assert_eq!(sum(second), 9);
    }

    #[test]
    fn search_stops_at_first_match() {
        let lst: SinglyLinkedList = [5, 6, 5].into_iter().collect();
        assert!(search(&lst.head, 5));
        assert!(search(&lst.head, 6));
        assert!(!search(&lst.head, 7));
    }

    #[test]
    fn reverse_onto_accumulator() {
        let mut front: SinglyLinkedList = [1, 2].into_iter().collect();
        let mut back: SinglyLinkedList = [3, 4, 5].into_iter().collect();

        // previous already holds 2 -> 1, so 3, 4, 5 get stacked on top of it
        let previous = reverse(None, front.head.take());
        let head = reverse(previous, back.head.take());
        assert_eq!(values(&head), vec![5, 4, 3, 2, 1]);

        let head = reverse_iterative(None, head);
        assert_eq!(values(&head), vec![1, 2, 3, 4, 5]);
    }
}
