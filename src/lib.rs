//! # lazyseq
//!
//! A lazily evaluated, potentially infinite sequence library for Rust.
//!
//! ## Overview
//!
//! This library provides [`Sequence`](sequence::Sequence), a pull-based lazy
//! stream built from suspended computations. It includes:
//!
//! - **Suspension core**: `suspend` / `force` primitives and the
//!   [`Node`](sequence::Node) step type
//! - **Explicit memoization**: recomputation is the default; `memo` opts a
//!   sequence into once-per-node caching
//! - **Creation combinators**: ranges, unfolds, eager-container adapters,
//!   infinite generators
//! - **Consumption combinators**: folds, searches, buffer filling, eager
//!   materialization
//! - **Transformation combinators**: map, filter, zip, slicing, windowing,
//!   all composing lazily
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens = Sequence::range(1, i64::MAX)
//!     .filter(|n| n % 2 == 0)
//!     .truncate(3);
//! assert_eq!(evens.to_vec(), vec![2, 4, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;
}

pub mod sequence;
