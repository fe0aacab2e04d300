//! Transformation combinators: operations that produce new lazy sequences
//! from existing ones.
//!
//! Every combinator here returns a new suspended sequence and forces no
//! more of its input than one `force` call on the result demands. A
//! transformation applied to an infinite sequence is itself a perfectly
//! usable infinite sequence.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::Sequence;
//!
//! let naturals = Sequence::unfold(0_i64, |n| Some((n, n + 1)));
//! let result = naturals
//!     .map(|n| n * n)
//!     .filter(|n| n % 2 == 0)
//!     .truncate(3);
//! assert_eq!(result.to_vec(), vec![0, 4, 16]);
//! ```

use std::rc::Rc;

use super::suspension::{Node, Sequence};

impl<A: 'static> Sequence<A> {
    /// Applies `function` to every element, lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]).map(|n| n * 10);
    /// assert_eq!(seq.to_vec(), vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> Sequence<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Self::map_shared(self.clone(), Rc::new(function))
    }

    fn map_shared<B: 'static>(source: Self, function: Rc<dyn Fn(A) -> B>) -> Sequence<B> {
        Sequence::suspend(move || match source.force() {
            Node::Empty => Node::Empty,
            Node::Cons(head, tail) => Node::Cons(
                function(head),
                Self::map_shared(tail, Rc::clone(&function)),
            ),
        })
    }

    /// Keeps only the elements satisfying the predicate, lazily.
    ///
    /// Forcing one node of the result may force several underlying nodes
    /// until an element passes, but nothing further ahead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::range(1, 6).filter(|n| n % 2 == 0);
    /// assert_eq!(seq.to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        Self::filter_shared(self.clone(), Rc::new(predicate))
    }

    fn filter_shared(source: Self, predicate: Rc<dyn Fn(&A) -> bool>) -> Self {
        Self::suspend(move || {
            let mut current = source.clone();
            loop {
                match current.force() {
                    Node::Empty => return Node::Empty,
                    Node::Cons(head, tail) => {
                        if predicate(&head) {
                            return Node::Cons(
                                head,
                                Self::filter_shared(tail, Rc::clone(&predicate)),
                            );
                        }
                        current = tail;
                    }
                }
            }
        })
    }

    /// Maps and filters in one pass: keeps the values for which `project`
    /// returns `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec!["1", "x", "3"])
    ///     .filter_map(|text| text.parse::<i32>().ok());
    /// assert_eq!(seq.to_vec(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn filter_map<B, F>(&self, project: F) -> Sequence<B>
    where
        B: 'static,
        F: Fn(A) -> Option<B> + 'static,
    {
        Self::filter_map_shared(self.clone(), Rc::new(project))
    }

    fn filter_map_shared<B: 'static>(
        source: Self,
        project: Rc<dyn Fn(A) -> Option<B>>,
    ) -> Sequence<B> {
        Sequence::suspend(move || {
            let mut current = source.clone();
            loop {
                match current.force() {
                    Node::Empty => return Node::Empty,
                    Node::Cons(head, tail) => {
                        if let Some(value) = project(head) {
                            return Node::Cons(
                                value,
                                Self::filter_map_shared(tail, Rc::clone(&project)),
                            );
                        }
                        current = tail;
                    }
                }
            }
        })
    }

    /// Maps every element to a sub-sequence and concatenates the results
    /// in order, lazily.
    ///
    /// One sub-sequence is fully traversed (or abandoned by the consumer
    /// stopping early) before the next one is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 3]).flat_map(|n| Sequence::range(n, n + 1));
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(&self, project: F) -> Sequence<B>
    where
        B: 'static,
        F: Fn(A) -> Sequence<B> + 'static,
    {
        Self::flat_map_shared(self.clone(), Rc::new(project))
    }

    fn flat_map_shared<B: 'static>(
        source: Self,
        project: Rc<dyn Fn(A) -> Sequence<B>>,
    ) -> Sequence<B> {
        Sequence::suspend(move || match source.force() {
            Node::Empty => Node::Empty,
            Node::Cons(head, tail) => project(head)
                .append(&Self::flat_map_shared(tail, Rc::clone(&project)))
                .force(),
        })
    }

    /// Returns all of `self` followed by all of `other`, lazily in both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2]).append(&Sequence::from_vec(vec![3]));
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let first = self.clone();
        let second = other.clone();
        Self::suspend(move || match first.force() {
            Node::Empty => second.force(),
            Node::Cons(head, tail) => Node::Cons(head, tail.append(&second)),
        })
    }

    /// Concatenates a collection of sequences, left to right.
    ///
    /// The collection itself is consumed eagerly; the elements stay lazy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::concat(vec![
    ///     Sequence::from_vec(vec![1]),
    ///     Sequence::empty(),
    ///     Sequence::from_vec(vec![2, 3]),
    /// ]);
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn concat<I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: DoubleEndedIterator,
    {
        sequences
            .into_iter()
            .rev()
            .fold(Self::empty(), |rest, sequence| sequence.append(&rest))
    }

    /// Infinite repetition of this sequence.
    ///
    /// Cycling an empty sequence is defined to yield `empty()` rather than
    /// hanging on first force.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2]).cycle();
    /// assert_eq!(seq.truncate(5).to_vec(), vec![1, 2, 1, 2, 1]);
    /// assert!(Sequence::<i32>::empty().cycle().is_empty());
    /// ```
    #[must_use]
    pub fn cycle(&self) -> Self {
        let source = self.clone();
        Self::suspend(move || match source.force() {
            Node::Empty => Node::Empty,
            Node::Cons(head, tail) => Node::Cons(head, tail.append(&source.cycle())),
        })
    }

    /// Returns up to the first `count` elements.
    ///
    /// A shorter input is returned in full; unlike [`take`](Self::take),
    /// short input is not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2]);
    /// assert_eq!(seq.truncate(5).to_vec(), vec![1, 2]);
    /// assert_eq!(seq.truncate(1).to_vec(), vec![1]);
    /// assert!(seq.truncate(0).is_empty());
    /// ```
    #[must_use]
    pub fn truncate(&self, count: usize) -> Self {
        let source = self.clone();
        Self::suspend(move || {
            if count == 0 {
                return Node::Empty;
            }
            match source.force() {
                Node::Empty => Node::Empty,
                Node::Cons(head, tail) => Node::Cons(head, tail.truncate(count - 1)),
            }
        })
    }

    /// Returns exactly the first `count` elements.
    ///
    /// # Panics
    ///
    /// Panics, lazily at the position where exhaustion is discovered, if
    /// the sequence ends before `count` elements are produced. Use
    /// [`truncate`](Self::truncate) when short input is acceptable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.take(2).to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        let source = self.clone();
        Self::suspend(move || {
            if count == 0 {
                return Node::Empty;
            }
            match source.force() {
                Node::Empty => panic!("take called past the end of the sequence"),
                Node::Cons(head, tail) => Node::Cons(head, tail.take(count - 1)),
            }
        })
    }

    /// Drops the first `count` elements.
    ///
    /// `drop_first(0)` is always legal and a no-op. The dropping happens
    /// lazily, on the first force of the result.
    ///
    /// # Panics
    ///
    /// Panics, at force time, if the sequence ends before `count` elements
    /// have been dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.drop_first(2).to_vec(), vec![3]);
    /// assert_eq!(seq.drop_first(0).to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let source = self.clone();
        Self::suspend(move || {
            let mut current = source.clone();
            let mut remaining = count;
            while remaining > 0 {
                match current.force() {
                    Node::Empty => panic!("drop_first called past the end of the sequence"),
                    Node::Cons(_, tail) => {
                        current = tail;
                        remaining -= 1;
                    }
                }
            }
            current.force()
        })
    }

    /// Returns the longest prefix whose elements satisfy the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 9, 1]).take_while(|n| *n < 5);
    /// assert_eq!(seq.to_vec(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn take_while<F>(&self, predicate: F) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        Self::take_while_shared(self.clone(), Rc::new(predicate))
    }

    fn take_while_shared(source: Self, predicate: Rc<dyn Fn(&A) -> bool>) -> Self {
        Self::suspend(move || match source.force() {
            Node::Empty => Node::Empty,
            Node::Cons(head, tail) => {
                if predicate(&head) {
                    Node::Cons(head, Self::take_while_shared(tail, Rc::clone(&predicate)))
                } else {
                    Node::Empty
                }
            }
        })
    }

    /// Drops the longest prefix whose elements satisfy the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 9, 1]).drop_while(|n| *n < 5);
    /// assert_eq!(seq.to_vec(), vec![9, 1]);
    /// ```
    #[must_use]
    pub fn drop_while<F>(&self, predicate: F) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        let source = self.clone();
        let predicate = Rc::new(predicate);
        Self::suspend(move || {
            let mut current = source.clone();
            loop {
                match current.force() {
                    Node::Empty => return Node::Empty,
                    Node::Cons(head, tail) => {
                        if predicate(&head) {
                            current = tail;
                        } else {
                            return Node::Cons(head, tail);
                        }
                    }
                }
            }
        })
    }

    /// Combines two sequences element-wise, stopping at the shorter one.
    ///
    /// The left input is forced first; when it is exhausted the right input
    /// is not touched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let left = Sequence::from_vec(vec![1, 2, 3]);
    /// let right = Sequence::from_vec(vec![10, 20]);
    /// assert_eq!(left.zip_with(&right, |a, b| a + b).to_vec(), vec![11, 22]);
    /// ```
    #[must_use]
    pub fn zip_with<B, C, F>(&self, other: &Sequence<B>, combine: F) -> Sequence<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        Self::zip_with_shared(self.clone(), other.clone(), Rc::new(combine))
    }

    fn zip_with_shared<B: 'static, C: 'static>(
        left: Self,
        right: Sequence<B>,
        combine: Rc<dyn Fn(A, B) -> C>,
    ) -> Sequence<C> {
        Sequence::suspend(move || match left.force() {
            Node::Empty => Node::Empty,
            Node::Cons(left_head, left_tail) => match right.force() {
                Node::Empty => Node::Empty,
                Node::Cons(right_head, right_tail) => Node::Cons(
                    combine(left_head, right_head),
                    Self::zip_with_shared(left_tail, right_tail, Rc::clone(&combine)),
                ),
            },
        })
    }

    /// Pairs two sequences element-wise, stopping at the shorter one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let left = Sequence::from_vec(vec![1, 2, 3]);
    /// let right = Sequence::from_vec(vec!["a", "b"]);
    /// assert_eq!(left.zip(&right).to_vec(), vec![(1, "a"), (2, "b")]);
    /// ```
    #[inline]
    #[must_use]
    pub fn zip<B>(&self, other: &Sequence<B>) -> Sequence<(A, B)>
    where
        B: 'static,
    {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Groups elements into buffers of length `size`, lazily.
    ///
    /// The last group may be shorter when the sequence length is not a
    /// multiple of `size`; each group is right-sized to the elements it
    /// actually holds.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let groups = Sequence::range(1, 5).chunks(2);
    /// assert_eq!(groups.to_vec(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    #[must_use]
    pub fn chunks(&self, size: usize) -> Sequence<Vec<A>> {
        assert!(size >= 1, "chunks requires a group size of at least 1");
        Self::chunks_unchecked(self.clone(), size)
    }

    fn chunks_unchecked(source: Self, size: usize) -> Sequence<Vec<A>> {
        Sequence::suspend(move || {
            let mut group = Vec::with_capacity(size);
            let mut current = source.clone();
            while group.len() < size {
                match current.force() {
                    Node::Empty => break,
                    Node::Cons(head, tail) => {
                        group.push(head);
                        current = tail;
                    }
                }
            }
            if group.is_empty() {
                Node::Empty
            } else {
                Node::Cons(group, Self::chunks_unchecked(current, size))
            }
        })
    }
}

impl<A: 'static> Sequence<Sequence<A>> {
    /// Concatenates a sequence of sequences, left to right, lazily at both
    /// levels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let nested = Sequence::from_vec(vec![
    ///     Sequence::from_vec(vec![1, 2]),
    ///     Sequence::empty(),
    ///     Sequence::from_vec(vec![3]),
    /// ]);
    /// assert_eq!(nested.flatten().to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Sequence<A> {
        let source = self.clone();
        Sequence::suspend(move || match source.force() {
            Node::Empty => Node::Empty,
            Node::Cons(head, tail) => head.append(&tail.flatten()).force(),
        })
    }
}

impl<A: 'static, B: 'static> Sequence<(A, B)> {
    /// Splits a sequence of pairs into two lazily-derived projections.
    ///
    /// Forcing one projection does not force the other beyond what each
    /// independently demands. Each projection re-traverses this sequence if
    /// it is not memoized; call [`memo`](Sequence::memo) first for shared
    /// single-pass behavior.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let pairs = Sequence::from_vec(vec![(1, 'a'), (2, 'b')]);
    /// let (numbers, letters) = pairs.unzip();
    /// assert_eq!(numbers.to_vec(), vec![1, 2]);
    /// assert_eq!(letters.to_vec(), vec!['a', 'b']);
    /// ```
    #[must_use]
    pub fn unzip(&self) -> (Sequence<A>, Sequence<B>) {
        (self.map(|(left, _)| left), self.map(|(_, right)| right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_is_lazy() {
        let applied = Rc::new(Cell::new(0));
        let seq = {
            let applied = Rc::clone(&applied);
            Sequence::from_vec(vec![1, 2, 3]).map(move |n| {
                applied.set(applied.get() + 1);
                n * 2
            })
        };

        assert_eq!(applied.get(), 0);
        let (head, _) = seq.uncons().unwrap();
        assert_eq!(head, 2);
        assert_eq!(applied.get(), 1);
    }

    #[rstest]
    fn test_filter_keeps_matching_elements() {
        let seq = Sequence::range(1, 6).filter(|n| n % 2 == 0);
        assert_eq!(seq.to_vec(), vec![2, 4, 6]);
    }

    #[rstest]
    fn test_filter_stays_lazy_past_next_match() {
        let infinite = Sequence::unfold(0_i64, |n| Some((n, n + 1)));
        let multiples = infinite.filter(|n| n % 100 == 0);
        assert_eq!(multiples.truncate(3).to_vec(), vec![0, 100, 200]);
    }

    #[rstest]
    fn test_filter_map_combines_both_passes() {
        let seq = Sequence::from_vec(vec!["1", "x", "3"])
            .filter_map(|text| text.parse::<i32>().ok());
        assert_eq!(seq.to_vec(), vec![1, 3]);
    }

    #[rstest]
    fn test_flat_map_traverses_subsequences_in_order() {
        let seq = Sequence::from_vec(vec![1_i64, 4]).flat_map(|n| Sequence::range(n, n + 2));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn test_flat_map_skips_empty_subsequences() {
        let seq = Sequence::from_vec(vec![0_usize, 2, 0, 1])
            .flat_map(|n| Sequence::replicate(n, n));
        assert_eq!(seq.to_vec(), vec![2, 2, 1]);
    }

    #[rstest]
    fn test_append_is_lazy_in_second_argument() {
        let poisoned: Sequence<i32> = Sequence::suspend(|| panic!("forced too far"));
        let seq = Sequence::from_vec(vec![1, 2]).append(&poisoned);
        assert_eq!(seq.truncate(2).to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_concat_preserves_order() {
        let seq = Sequence::concat(vec![
            Sequence::from_vec(vec![1]),
            Sequence::empty(),
            Sequence::from_vec(vec![2, 3]),
        ]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_concat_of_nothing_is_empty() {
        let seq = Sequence::<i32>::concat(Vec::new());
        assert!(seq.is_empty());
    }

    #[rstest]
    fn test_flatten_matches_concat() {
        let nested = Sequence::from_vec(vec![
            Sequence::from_vec(vec![1, 2]),
            Sequence::from_vec(vec![3]),
        ]);
        assert_eq!(nested.flatten().to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_cycle_repeats_forever() {
        let seq = Sequence::from_vec(vec![1, 2]).cycle();
        assert_eq!(seq.truncate(5).to_vec(), vec![1, 2, 1, 2, 1]);
    }

    #[rstest]
    fn test_cycle_of_empty_is_empty() {
        let seq = Sequence::<i32>::empty().cycle();
        assert!(seq.is_empty());
    }

    #[rstest]
    fn test_truncate_tolerates_short_input() {
        let seq = Sequence::from_vec(vec![1, 2]);
        assert_eq!(seq.truncate(10).to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_take_exact_prefix() {
        let seq = Sequence::range(1, 10).take(3);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    #[should_panic(expected = "take called past the end")]
    fn test_take_past_end_panics() {
        let _ = Sequence::from_vec(vec![1, 2]).take(3).to_vec();
    }

    #[rstest]
    fn test_take_panics_lazily_not_at_construction() {
        // Construction and bounded consumption are fine; only forcing the
        // missing position panics.
        let seq = Sequence::from_vec(vec![1, 2]).take(3);
        assert_eq!(seq.truncate(2).to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_drop_first_splits_complement_of_take() {
        let seq = Sequence::range(1, 6);
        assert_eq!(seq.drop_first(2).to_vec(), vec![3, 4, 5, 6]);
        assert_eq!(seq.drop_first(6).to_vec(), Vec::<i64>::new());
    }

    #[rstest]
    #[should_panic(expected = "drop_first called past the end")]
    fn test_drop_first_past_end_panics() {
        let _ = Sequence::from_vec(vec![1]).drop_first(2).to_vec();
    }

    #[rstest]
    fn test_drop_first_zero_on_empty_is_legal() {
        let seq = Sequence::<i32>::empty().drop_first(0);
        assert!(seq.is_empty());
    }

    #[rstest]
    fn test_take_while_and_drop_while_split() {
        let seq = Sequence::from_vec(vec![1, 2, 9, 1]);
        assert_eq!(seq.take_while(|n| *n < 5).to_vec(), vec![1, 2]);
        assert_eq!(seq.drop_while(|n| *n < 5).to_vec(), vec![9, 1]);
    }

    #[rstest]
    fn test_take_while_on_infinite_input() {
        let naturals = Sequence::unfold(0_i64, |n| Some((n, n + 1)));
        assert_eq!(naturals.take_while(|n| *n < 4).to_vec(), vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_zip_stops_at_shorter() {
        let left = Sequence::from_vec(vec![1, 2, 3]);
        let right = Sequence::from_vec(vec!["a", "b"]);
        assert_eq!(left.zip(&right).to_vec(), vec![(1, "a"), (2, "b")]);
        assert_eq!(right.zip(&left).to_vec(), vec![("a", 1), ("b", 2)]);
    }

    #[rstest]
    fn test_zip_does_not_force_right_past_left_end() {
        let left = Sequence::from_vec(vec![1]);
        let right: Sequence<i32> =
            Sequence::from_vec(vec![10]).append(&Sequence::suspend(|| panic!("forced too far")));
        assert_eq!(left.zip(&right).to_vec(), vec![(1, 10)]);
    }

    #[rstest]
    fn test_zip_with_combines() {
        let left = Sequence::from_vec(vec![1, 2]);
        let right = Sequence::from_vec(vec![10, 20, 30]);
        assert_eq!(left.zip_with(&right, |a, b| a * b).to_vec(), vec![10, 40]);
    }

    #[rstest]
    fn test_unzip_projections_are_independent() {
        let pairs = Sequence::from_vec(vec![(1, 'a'), (2, 'b'), (3, 'c')]);
        let (numbers, letters) = pairs.unzip();
        assert_eq!(numbers.truncate(2).to_vec(), vec![1, 2]);
        assert_eq!(letters.to_vec(), vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn test_chunks_groups_with_short_last_group() {
        let groups = Sequence::range(1, 5).chunks(2);
        assert_eq!(groups.to_vec(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[rstest]
    fn test_chunks_exact_multiple() {
        let groups = Sequence::range(1, 4).chunks(2);
        assert_eq!(groups.to_vec(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[rstest]
    fn test_chunks_of_empty_is_empty() {
        let groups = Sequence::<i32>::empty().chunks(3);
        assert!(groups.is_empty());
    }

    #[rstest]
    #[should_panic(expected = "group size of at least 1")]
    fn test_chunks_zero_size_panics() {
        let _ = Sequence::from_vec(vec![1]).chunks(0);
    }

    #[rstest]
    fn test_chunks_is_lazy() {
        let infinite = Sequence::unfold(0_i64, |n| Some((n, n + 1)));
        let groups = infinite.chunks(3);
        assert_eq!(groups.truncate(2).to_vec(), vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }

    #[rstest]
    fn test_transformations_compose_without_forcing() {
        let forced = Rc::new(Cell::new(0));
        let source = {
            let forced = Rc::clone(&forced);
            Sequence::unfold(0_i64, move |n| {
                forced.set(forced.get() + 1);
                Some((n, n + 1))
            })
        };

        let pipeline = source.map(|n| n + 1).filter(|n| n % 2 == 1).truncate(2);
        assert_eq!(forced.get(), 0);
        assert_eq!(pipeline.to_vec(), vec![1, 3]);
        // Demanded two odd results: the generator ran for 0, 1, 2.
        assert_eq!(forced.get(), 3);
    }
}
