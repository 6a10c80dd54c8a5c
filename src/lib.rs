#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod linked_lists;

pub use linked_lists::SinglyLinkedList;
