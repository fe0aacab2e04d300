//! Consumption combinators: operations that drive a sequence, either to
//! completion (folds, eager materialization, buffer filling) or until an
//! answer is decided (searches, comparisons).
//!
//! Every operation here walks iteratively, so arbitrarily long finite
//! sequences consume constant stack. Full-consumption operations diverge on
//! infinite input; bound the sequence first with
//! [`truncate`](Sequence::truncate) or [`take`](Sequence::take).
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::Sequence;
//!
//! let seq = Sequence::range(1, 5);
//! assert_eq!(seq.fold_left(0, |total, n| total + n), 15);
//! assert_eq!(seq.find(|n| n % 3 == 0), Some(3));
//! ```

use super::suspension::{Node, Sequence};

impl<A: 'static> Sequence<A> {
    /// Returns `true` if the sequence has no elements.
    ///
    /// Forces exactly one node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// assert!(Sequence::<i32>::empty().is_empty());
    /// assert!(!Sequence::singleton(1).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.force(), Node::Empty)
    }

    /// Returns the first element of the sequence.
    ///
    /// Forces exactly one node.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::from_vec(vec![1, 2]).head(), 1);
    /// ```
    #[must_use]
    pub fn head(&self) -> A {
        match self.force() {
            Node::Empty => panic!("head called on empty sequence"),
            Node::Cons(head, _) => head,
        }
    }

    /// Returns the sequence without its first element.
    ///
    /// Forces exactly one node.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.tail().to_vec(), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn tail(&self) -> Self {
        match self.force() {
            Node::Empty => panic!("tail called on empty sequence"),
            Node::Cons(_, tail) => tail,
        }
    }

    /// Strict left fold over the whole sequence.
    ///
    /// Diverges on infinite input.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator
    /// * `combine` - Folds one element into the accumulator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.fold_left(0, |total, n| total + n), 6);
    /// assert_eq!(
    ///     seq.fold_left(String::new(), |text, n| format!("{text}{n}")),
    ///     "123"
    /// );
    /// ```
    pub fn fold_left<B, F>(&self, init: B, mut combine: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        let mut accumulator = init;
        for element in self {
            accumulator = combine(accumulator, element);
        }
        accumulator
    }

    /// Applies `effect` to every element, in order, for its side effects.
    ///
    /// Diverges on infinite input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let mut seen = Vec::new();
    /// Sequence::from_vec(vec![1, 2, 3]).for_each(|n| seen.push(n));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn for_each<F>(&self, mut effect: F)
    where
        F: FnMut(A),
    {
        for element in self {
            effect(element);
        }
    }

    /// Walks the whole sequence, discarding every element.
    ///
    /// Useful to trigger the side effects of a generator, or to populate a
    /// memoized chain. Diverges on infinite input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let produced = Rc::new(Cell::new(0));
    /// let seq = {
    ///     let produced = Rc::clone(&produced);
    ///     Sequence::unfold(0, move |n| {
    ///         produced.set(produced.get() + 1);
    ///         (n < 3).then_some((n, n + 1))
    ///     })
    /// };
    ///
    /// seq.drain();
    /// assert_eq!(produced.get(), 4);
    /// ```
    pub fn drain(&self) {
        for _ in self {}
    }

    /// Eagerly materializes the sequence into a `Vec`.
    ///
    /// Diverges on infinite input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::range(1, 3);
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<A> {
        self.iter().collect()
    }

    /// Counts the elements of the sequence.
    ///
    /// Diverges on infinite input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::range(1, 4).count(), 4);
    /// assert_eq!(Sequence::<i32>::empty().count(), 0);
    /// ```
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Fills a span of `buffer` with elements of the sequence.
    ///
    /// With `count >= 0` the span is `start..start + count`, written in
    /// forward index order. With `count < 0` the span is
    /// `start + count + 1..=start`, and element N of the sequence lands at
    /// index `start - N`: the walk moves backward through buffer indices
    /// while moving forward through the sequence.
    ///
    /// Indices are 0-based. Filling stops early if the sequence is
    /// exhausted; that is not an error.
    ///
    /// # Returns
    ///
    /// The unconsumed tail of the sequence and the number of slots left
    /// unfilled (0 means the span was filled exactly).
    ///
    /// # Panics
    ///
    /// Panics before any element is consumed if `start` is out of bounds,
    /// if `start + count` exceeds the buffer length (positive `count`), or
    /// if `start + count` falls below -1 (negative `count`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let mut buffer = [0; 5];
    ///
    /// // Forward fill
    /// let (rest, unfilled) = Sequence::range(1, 9).fill_buffer(&mut buffer, 1, 3);
    /// assert_eq!(buffer, [0, 1, 2, 3, 0]);
    /// assert_eq!(unfilled, 0);
    /// assert_eq!(rest.head(), 4);
    ///
    /// // Backward fill: elements arrive in order but land at descending indices
    /// let (_, unfilled) = Sequence::range(1, 9).fill_buffer(&mut buffer, 4, -3);
    /// assert_eq!(buffer, [0, 1, 3, 2, 1]);
    /// assert_eq!(unfilled, 0);
    ///
    /// // Early exhaustion is reported, not raised
    /// let (_, unfilled) = Sequence::singleton(7).fill_buffer(&mut buffer, 0, 4);
    /// assert_eq!(unfilled, 3);
    /// ```
    pub fn fill_buffer(&self, buffer: &mut [A], start: usize, count: isize) -> (Self, usize) {
        let length = buffer.len();
        assert!(
            start < length,
            "fill_buffer start index {start} out of bounds for buffer of length {length}"
        );
        let span_end = isize::try_from(start).expect("buffer index overflows isize") + count;
        if count >= 0 {
            assert!(
                span_end <= isize::try_from(length).expect("buffer length overflows isize"),
                "fill_buffer span {start}..{span_end} out of bounds for buffer of length {length}"
            );
        } else {
            assert!(
                span_end >= -1,
                "fill_buffer span below index 0 (start {start}, count {count})"
            );
        }

        let requested = count.unsigned_abs();
        let mut current = self.clone();
        let mut filled = 0_usize;
        while filled < requested {
            match current.force() {
                Node::Empty => break,
                Node::Cons(head, rest) => {
                    let index = if count >= 0 { start + filled } else { start - filled };
                    buffer[index] = head;
                    current = rest;
                    filled += 1;
                }
            }
        }
        (current, requested - filled)
    }

    /// Compares two sequences element-wise with a custom comparison.
    ///
    /// Short-circuits on the first mismatch or length difference, and never
    /// forces either input past that point. Never terminates when both
    /// inputs are infinite and ever-matching; bound them first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let left = Sequence::from_vec(vec![1_i32, 2, 3]);
    /// let right = Sequence::from_vec(vec![-1_i32, -2, -3]);
    /// assert!(left.eq_by(&right, |a, b| a.abs() == b.abs()));
    /// assert!(!left.eq_by(&right, |a, b| a == b));
    /// ```
    #[must_use]
    pub fn eq_by<B, F>(&self, other: &Sequence<B>, compare: F) -> bool
    where
        B: 'static,
        F: Fn(&A, &B) -> bool,
    {
        let mut left = self.clone();
        let mut right = other.clone();
        loop {
            match left.force() {
                Node::Empty => return matches!(right.force(), Node::Empty),
                Node::Cons(left_head, left_tail) => match right.force() {
                    Node::Empty => return false,
                    Node::Cons(right_head, right_tail) => {
                        if !compare(&left_head, &right_head) {
                            return false;
                        }
                        left = left_tail;
                        right = right_tail;
                    }
                },
            }
        }
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Short-circuits on the first element that fails. Returns `true` for
    /// an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![2, 4, 6]);
    /// assert!(seq.all(|n| n % 2 == 0));
    /// assert!(!seq.all(|n| *n > 2));
    /// ```
    #[must_use]
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: Fn(&A) -> bool,
    {
        for element in self {
            if !predicate(&element) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if some element satisfies the predicate.
    ///
    /// Short-circuits on the first element that passes. Returns `false` for
    /// an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]);
    /// assert!(seq.any(|n| *n == 2));
    /// assert!(!seq.any(|n| *n > 5));
    /// ```
    #[must_use]
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&A) -> bool,
    {
        for element in self {
            if predicate(&element) {
                return true;
            }
        }
        false
    }

    /// Returns `true` if the sequence contains `target`.
    ///
    /// Short-circuits on the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]);
    /// assert!(seq.contains(&2));
    /// assert!(!seq.contains(&9));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, target: &A) -> bool
    where
        A: PartialEq,
    {
        self.any(|element| element == target)
    }

    /// Returns `true` if the sequence contains an element equal to `target`
    /// under a custom comparison.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec!["a", "B"]);
    /// assert!(seq.contains_by(|a, b| a.eq_ignore_ascii_case(b), &"b"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains_by<F>(&self, compare: F, target: &A) -> bool
    where
        F: Fn(&A, &A) -> bool,
    {
        self.any(|element| compare(element, target))
    }

    /// Returns the first element satisfying the predicate.
    ///
    /// Stops immediately on a match; the remaining tail is never forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.find(|n| n % 2 == 0), Some(2));
    /// assert_eq!(seq.find(|n| *n > 5), None);
    /// ```
    #[must_use]
    pub fn find<F>(&self, predicate: F) -> Option<A>
    where
        F: Fn(&A) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }

    /// Returns the first `Some` produced by projecting elements in order.
    ///
    /// Stops immediately on the first produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec!["x", "12", "34"]);
    /// assert_eq!(seq.find_map(|text| text.parse::<i32>().ok()), Some(12));
    /// ```
    #[must_use]
    pub fn find_map<B, F>(&self, project: F) -> Option<B>
    where
        F: Fn(A) -> Option<B>,
    {
        self.iter().find_map(project)
    }
}

impl Sequence<char> {
    /// Concatenates a sequence of characters into a `String`.
    ///
    /// Diverges on infinite input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_text("abc");
    /// assert_eq!(seq.to_text(), "abc");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        self.iter().collect()
    }
}

impl<A: PartialEq + 'static> PartialEq for Sequence<A> {
    /// Structural, element-wise, short-circuiting comparison.
    ///
    /// Never terminates when both sequences are infinite and equal; this is
    /// a documented divergence hazard, not a bug.
    fn eq(&self, other: &Self) -> bool {
        self.eq_by(other, |left, right| left == right)
    }
}
