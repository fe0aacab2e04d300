//! Lazily evaluated sequences.
//!
//! This module provides [`Sequence`], a pull-based lazy stream of values.
//! A sequence owns a suspended computation that, when forced, produces
//! exactly one [`Node`]: either [`Node::Empty`] or one value plus the
//! (still suspended) rest of the stream.
//!
//! # Laziness
//!
//! Nothing happens until a consumer forces a node. Transformations such as
//! [`Sequence::map`] and [`Sequence::filter`] return new suspended sequences
//! and never materialize more than one element ahead of demand, which makes
//! infinite sequences first-class values:
//!
//! ```rust
//! use lazyseq::sequence::Sequence;
//!
//! let naturals = Sequence::unfold(0_i64, |n| Some((n, n + 1)));
//! let squares = naturals.map(|n| n * n).truncate(4);
//! assert_eq!(squares.to_vec(), vec![0, 1, 4, 9]);
//! ```
//!
//! # Recomputation versus memoization
//!
//! Sequences are "cold" by default: every force re-executes the underlying
//! computation from scratch. Callers that traverse a sequence more than once
//! and want each node computed at most once opt in with [`Sequence::memo`]:
//!
//! ```rust
//! use lazyseq::sequence::Sequence;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counted = {
//!     let runs = Rc::clone(&runs);
//!     Sequence::unfold(0, move |n| {
//!         runs.set(runs.get() + 1);
//!         (n < 3).then_some((n, n + 1))
//!     })
//! };
//!
//! let cached = counted.memo();
//! cached.drain();
//! cached.drain();
//! // Each node was computed exactly once despite two traversals.
//! assert_eq!(runs.get(), 4);
//! ```
//!
//! # Sharing
//!
//! A sequence handle is an `Rc`-backed value: cloning is O(1) and shares the
//! underlying suspension. Memoization benefits exactly the consumers holding
//! a clone of the same memoized handle; independently built but equal
//! sequences share nothing.
//!
//! # Divergence
//!
//! Full-consumption operations ([`Sequence::to_vec`],
//! [`Sequence::fold_left`], equality on two equal infinite inputs, ...) never
//! return on infinite sequences. Bound the input first with
//! [`Sequence::truncate`] or [`Sequence::take`].

mod build;
mod consume;
mod suspension;
mod transform;

pub use suspension::Node;
pub use suspension::Sequence;
pub use suspension::SequenceIterator;
