//! Implicit-key treap sequences for Rust.
//!
//! This crate provides [`TreapVec`], an index-addressable sequence with the surface of a
//! `Vec` whose positional operations all run in expected O(log n):
//!
//! - [`get`](TreapVec::get) / [`set`](TreapVec::set) - Read or overwrite any position
//! - [`insert`](TreapVec::insert) / [`remove`](TreapVec::remove) - Without shifting the tail
//! - [`append`](TreapVec::append) / [`split_off`](TreapVec::split_off) - Whole-sequence splicing
//!
//! # Example
//!
//! ```
//! use treap_vec::TreapVec;
//!
//! let mut seq = TreapVec::from([1, 2, 3]);
//!
//! // Positional edits anywhere in the sequence
//! seq.insert(0, 0);
//! assert_eq!(seq.remove(2), 2);
//! seq[1] = 9;
//! assert_eq!(seq.to_vec(), [0, 9, 3]);
//!
//! // Clones are O(1) and independent
//! let snapshot = seq.clone();
//! seq.push_back(4);
//! assert_eq!(snapshot.len(), 3);
//! assert_eq!(seq.len(), 4);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`; the default `std` feature seeds
//!   priority generators from the thread-local entropy source
//! - **Copy-on-write** - Clones share their tree until one of them is written
//! - **Reproducible shapes** - Priorities come from an injectable [`RngCore`](priority::RngCore)
//!
//! # Implementation
//!
//! A treap is a binary tree that is a heap by random priority and a search tree by key.
//! Here the key is implicit: a node's position in the in-order traversal, recovered from
//! the subtree sizes cached in every node. `split` and `merge` on those sizes are the only
//! structural primitives; every positional operation is built from them.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod priority;
pub mod treap_vec;

pub use error::IndexNotFound;
pub use priority::DefaultRng;
pub use treap_vec::TreapVec;
