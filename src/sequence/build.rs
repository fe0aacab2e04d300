//! Creation combinators: building sequences from scratch, from eager
//! containers, from generator functions, and from numeric ranges.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::Sequence;
//!
//! // From an eager container
//! let seq = Sequence::from_vec(vec![1, 2, 3]);
//! assert_eq!(seq.to_vec(), vec![1, 2, 3]);
//!
//! // From a generator: the Fibonacci numbers, lazily
//! let fibonacci = Sequence::unfold((0_u64, 1_u64), |(a, b)| Some((a, (b, a + b))));
//! assert_eq!(fibonacci.truncate(8).to_vec(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
//! ```

use std::rc::Rc;

use super::suspension::{Node, Sequence};

impl<A: 'static> Sequence<A> {
    /// Creates a sequence of `count` repetitions of `element`.
    ///
    /// The repetitions are produced lazily; nothing is allocated up front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::replicate(3, "x");
    /// assert_eq!(seq.to_vec(), vec!["x", "x", "x"]);
    /// assert!(Sequence::replicate(0, 1).is_empty());
    /// ```
    #[must_use]
    pub fn replicate(count: usize, element: A) -> Self
    where
        A: Clone,
    {
        Self::suspend(move || {
            if count == 0 {
                Node::Empty
            } else {
                Node::Cons(element.clone(), Self::replicate(count - 1, element.clone()))
            }
        })
    }

    /// Builds a sequence by repeatedly applying `step` to a seed.
    ///
    /// Each demanded element invokes `step(seed)` once: `Some((value, next))`
    /// produces `value` and continues from `next`; `None` terminates the
    /// sequence. `step` is never invoked ahead of demand, so unfolds over
    /// non-terminating seeds are fine as long as consumption is bounded.
    ///
    /// The seed must be `Clone` because a cold sequence may be re-forced,
    /// re-running the step from the same seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - The initial generator state
    /// * `step` - Produces the next element and state, or `None` to stop
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// // A finite countdown
    /// let countdown = Sequence::unfold(3, |n| (n > 0).then_some((n, n - 1)));
    /// assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
    ///
    /// // An infinite generator, consumed boundedly
    /// let naturals = Sequence::unfold(0_i64, |n| Some((n, n + 1)));
    /// assert_eq!(naturals.truncate(4).to_vec(), vec![0, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
        S: Clone + 'static,
        F: Fn(S) -> Option<(A, S)> + 'static,
    {
        Self::unfold_shared(seed, Rc::new(step))
    }

    fn unfold_shared<S>(seed: S, step: Rc<dyn Fn(S) -> Option<(A, S)>>) -> Self
    where
        S: Clone + 'static,
    {
        Self::suspend(move || match step(seed.clone()) {
            None => Node::Empty,
            Some((value, next)) => Node::Cons(value, Self::unfold_shared(next, Rc::clone(&step))),
        })
    }

    /// Creates an infinite sequence where every element is the result of
    /// re-invoking `produce`.
    ///
    /// Fully consuming the result never terminates; bound it with
    /// [`truncate`](Self::truncate) or [`take`](Self::take).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let sevens = Sequence::forever(|| 7);
    /// assert_eq!(sevens.truncate(3).to_vec(), vec![7, 7, 7]);
    /// ```
    #[must_use]
    pub fn forever<F>(produce: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::forever_shared(Rc::new(produce))
    }

    fn forever_shared(produce: Rc<dyn Fn() -> A>) -> Self {
        Self::suspend(move || Node::Cons(produce(), Self::forever_shared(Rc::clone(&produce))))
    }

    /// Converts an eager `Vec` into a sequence, preserving order.
    ///
    /// The vector is held behind an `Rc` and served element by element;
    /// elements are cloned out on demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_vec(elements: Vec<A>) -> Self
    where
        A: Clone,
    {
        Self::from_shared_vec(Rc::new(elements), 0)
    }

    /// Converts a slice into a sequence, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_slice(&[1, 2, 3]);
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_slice(elements: &[A]) -> Self
    where
        A: Clone,
    {
        Self::from_vec(elements.to_vec())
    }

    /// Converts a slice into a sequence yielding elements from last index
    /// to first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_slice_reversed(&[1, 2, 3]);
    /// assert_eq!(seq.to_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn from_slice_reversed(elements: &[A]) -> Self
    where
        A: Clone,
    {
        let shared = Rc::new(elements.to_vec());
        let remaining = shared.len();
        Self::from_shared_vec_reversed(shared, remaining)
    }

    fn from_shared_vec(elements: Rc<Vec<A>>, index: usize) -> Self
    where
        A: Clone,
    {
        Self::suspend(move || {
            elements.get(index).map_or(Node::Empty, |element| {
                Node::Cons(
                    element.clone(),
                    Self::from_shared_vec(Rc::clone(&elements), index + 1),
                )
            })
        })
    }

    fn from_shared_vec_reversed(elements: Rc<Vec<A>>, remaining: usize) -> Self
    where
        A: Clone,
    {
        Self::suspend(move || {
            if remaining == 0 {
                Node::Empty
            } else {
                Node::Cons(
                    elements[remaining - 1].clone(),
                    Self::from_shared_vec_reversed(Rc::clone(&elements), remaining - 1),
                )
            }
        })
    }
}

impl Sequence<i64> {
    /// Creates an inclusive numeric range from `start` to `end`, stepping
    /// by `step`.
    ///
    /// A positive step walks increasing while the current value is at most
    /// `end`; a negative step walks decreasing while the current value is at
    /// least `end`. The stepping direction is independent of the relative
    /// order of `start` and `end`: a step pointing away from `end` yields an
    /// empty sequence.
    ///
    /// # Panics
    ///
    /// Panics if `step == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::range_step(0, 10, 3).to_vec(), vec![0, 3, 6, 9]);
    /// assert_eq!(Sequence::range_step(5, 1, -2).to_vec(), vec![5, 3, 1]);
    /// assert!(Sequence::range_step(5, 1, 1).is_empty());
    /// ```
    #[must_use]
    pub fn range_step(start: i64, end: i64, step: i64) -> Self {
        assert!(step != 0, "range_step requires a non-zero step");
        Self::range_walk(start, end, step)
    }

    fn range_walk(current: i64, end: i64, step: i64) -> Self {
        Self::suspend(move || {
            let exhausted = if step > 0 { current > end } else { current < end };
            if exhausted {
                Node::Empty
            } else {
                // Stepping past i64::MAX / i64::MIN means the bound was just
                // emitted; the range is complete.
                let rest = current
                    .checked_add(step)
                    .map_or_else(Self::empty, |next| Self::range_walk(next, end, step));
                Node::Cons(current, rest)
            }
        })
    }

    /// Creates an inclusive range from `start` to `end` with an implied
    /// step of `+1` if `end >= start`, else `-1`.
    ///
    /// Always produces a non-empty closed interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::range(1, 4).to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!(Sequence::range(4, 1).to_vec(), vec![4, 3, 2, 1]);
    /// assert_eq!(Sequence::range(2, 2).to_vec(), vec![2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn range(start: i64, end: i64) -> Self {
        let step = if end >= start { 1 } else { -1 };
        Self::range_step(start, end, step)
    }
}

impl Sequence<char> {
    /// Creates a sequence of the characters of a text value.
    ///
    /// Empty text yields an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_text("abc");
    /// assert_eq!(seq.to_vec(), vec!['a', 'b', 'c']);
    /// assert!(Sequence::from_text("").is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_vec(text.chars().collect())
    }
}

impl<A: Clone + 'static> FromIterator<A> for Sequence<A> {
    /// Collects an iterator eagerly and serves its elements lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq: Sequence<i32> = (1..=3).collect();
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    /// ```
    fn from_iter<I: IntoIterator<Item = A>>(iterator: I) -> Self {
        Self::from_vec(iterator.into_iter().collect())
    }
}
