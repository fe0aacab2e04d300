//! Suspension core: the sequence handle, its node type, and memoization.
//!
//! This module provides the two primitive operations everything else is
//! built from: [`Sequence::suspend`], which wraps a zero-argument
//! computation without running it, and [`Sequence::force`], which runs it
//! to obtain one [`Node`].
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::{Node, Sequence};
//!
//! let seq = Sequence::suspend(|| Node::Cons(1, Sequence::empty()));
//!
//! match seq.force() {
//!     Node::Cons(head, tail) => {
//!         assert_eq!(head, 1);
//!         assert!(matches!(tail.force(), Node::Empty));
//!     }
//!     Node::Empty => unreachable!(),
//! }
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One step of a sequence.
///
/// Forcing a [`Sequence`] yields exactly one node: either the terminal
/// [`Node::Empty`] marker or [`Node::Cons`] carrying one produced value and
/// a suspension representing everything after it.
///
/// The tail inside `Cons` is itself a sequence, not a forced value;
/// forcing it may trigger further computation.
#[derive(Clone, Debug)]
pub enum Node<A> {
    /// Terminal marker: the sequence has no (more) elements.
    Empty,
    /// One produced value and the suspended rest of the sequence.
    Cons(A, Sequence<A>),
}

/// The internal state of a memoized sequence's cache cell.
///
/// The cell transitions from `Pending` to `Forced` at most once, on the
/// first force of the memoized handle.
enum CacheState<A> {
    /// The underlying computation has not run yet.
    Pending,
    /// The underlying computation ran; its node is cached.
    Forced(Node<A>),
}

/// A lazily evaluated, potentially infinite sequence of values.
///
/// A `Sequence<A>` owns a suspended computation that, when invoked via
/// [`force`](Self::force), produces exactly one [`Node<A>`]. The handle is
/// immutable from the outside: forcing never alters it.
///
/// # Recomputation by default
///
/// A plain sequence is "cold": every call to `force` re-executes the
/// underlying computation from scratch. Use [`memo`](Self::memo) to obtain
/// a handle whose computation runs at most once per node.
///
/// # Sharing
///
/// `Clone` is O(1) and shares the underlying suspension (`Rc`-backed), so
/// handles can be passed around freely. The element type must be `'static`
/// because suspensions own their captured state.
///
/// # Thread safety
///
/// This type is NOT thread-safe (`Rc` + `RefCell`). It is intended for
/// single-threaded, synchronous pull-based consumption.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::Sequence;
///
/// let seq = Sequence::empty().cons(3).cons(2).cons(1);
/// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
/// ```
pub struct Sequence<A> {
    /// The suspended computation producing this sequence's next node.
    thunk: Rc<dyn Fn() -> Node<A>>,
}

impl<A> Clone for Sequence<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

impl<A: 'static> Sequence<A> {
    /// Wraps a zero-argument computation as a sequence handle.
    ///
    /// This is the universal constructor used by every other combinator.
    /// The computation is NOT executed here; it runs each time
    /// [`force`](Self::force) is invoked on the returned handle.
    ///
    /// # Arguments
    ///
    /// * `compute` - A computation producing the sequence's next node
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{Node, Sequence};
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let ran = Rc::new(Cell::new(false));
    /// let seq = {
    ///     let ran = Rc::clone(&ran);
    ///     Sequence::<i32>::suspend(move || {
    ///         ran.set(true);
    ///         Node::Empty
    ///     })
    /// };
    ///
    /// assert!(!ran.get()); // Nothing ran at construction time
    /// let _ = seq.force();
    /// assert!(ran.get());
    /// ```
    #[inline]
    #[must_use]
    pub fn suspend<F>(compute: F) -> Self
    where
        F: Fn() -> Node<A> + 'static,
    {
        Self {
            thunk: Rc::new(compute),
        }
    }

    /// Runs the suspended computation and returns the produced node.
    ///
    /// Forcing has no effect on the handle itself. For a non-memoized
    /// sequence the computation re-runs on every call; for a handle
    /// returned by [`memo`](Self::memo) the first call's result is cached
    /// and replayed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{Node, Sequence};
    ///
    /// let seq = Sequence::singleton(7);
    /// assert!(matches!(seq.force(), Node::Cons(7, _)));
    /// // Forcing again re-runs the computation and yields an equal node.
    /// assert!(matches!(seq.force(), Node::Cons(7, _)));
    /// ```
    #[inline]
    #[must_use]
    pub fn force(&self) -> Node<A> {
        (self.thunk)()
    }

    /// Creates a sequence whose single force yields [`Node::Empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq: Sequence<i32> = Sequence::empty();
    /// assert!(seq.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::suspend(|| Node::Empty)
    }

    /// Creates a one-element sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::singleton(42);
    /// assert_eq!(seq.to_vec(), vec![42]);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: A) -> Self
    where
        A: Clone,
    {
        Self::empty().cons(element)
    }

    /// Prepends an element to the front of the sequence.
    ///
    /// The original sequence is untouched; the new handle shares it.
    /// The element is cloned on every force because a cold sequence must
    /// be able to produce its node repeatedly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::empty().cons(3).cons(2).cons(1);
    /// assert_eq!(seq.head(), 1);
    /// ```
    #[must_use]
    pub fn cons(&self, element: A) -> Self
    where
        A: Clone,
    {
        let rest = self.clone();
        Self::suspend(move || Node::Cons(element.clone(), rest.clone()))
    }

    /// Decomposes the sequence into its head and tail.
    ///
    /// Forces one node. Returns `None` if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2]);
    /// let (head, tail) = seq.uncons().unwrap();
    /// assert_eq!(head, 1);
    /// assert_eq!(tail.to_vec(), vec![2]);
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(A, Self)> {
        match self.force() {
            Node::Empty => None,
            Node::Cons(head, tail) => Some((head, tail)),
        }
    }

    /// Returns a memoizing view of this sequence.
    ///
    /// Forcing the returned handle the first time forces `self` and caches
    /// the produced node; every subsequent force replays the cached node
    /// without recomputation. The produced tail is recursively memoized, so
    /// an entire chain benefits from caching as it is walked.
    ///
    /// The cache is shared by every consumer holding a clone of this
    /// particular handle. Independently constructed equivalent sequences do
    /// not share it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let runs = Rc::new(Cell::new(0));
    /// let counted = {
    ///     let runs = Rc::clone(&runs);
    ///     Sequence::forever(move || {
    ///         runs.set(runs.get() + 1);
    ///         7
    ///     })
    /// };
    ///
    /// let cached = counted.memo().truncate(3);
    /// cached.drain();
    /// cached.drain();
    /// assert_eq!(runs.get(), 3); // One run per node, not per traversal
    /// ```
    #[must_use]
    pub fn memo(&self) -> Self
    where
        A: Clone,
    {
        let source = self.clone();
        let cache = Rc::new(RefCell::new(CacheState::Pending));
        Self::suspend(move || {
            if let CacheState::Forced(node) = &*cache.borrow() {
                return node.clone();
            }
            let node = match source.force() {
                Node::Empty => Node::Empty,
                Node::Cons(head, tail) => Node::Cons(head, tail.memo()),
            };
            *cache.borrow_mut() = CacheState::Forced(node.clone());
            node
        })
    }

    /// Returns an iterator yielding the sequence's elements in order.
    ///
    /// Each `next` call forces one node. Iterating an infinite sequence
    /// never terminates unless the caller stops.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Sequence;
    ///
    /// let seq = Sequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.iter().sum::<i32>(), 6);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SequenceIterator<A> {
        SequenceIterator {
            current: self.clone(),
        }
    }
}

// =============================================================================
// Iterator Support
// =============================================================================

/// An iterator over the elements of a [`Sequence`].
///
/// Yields owned elements; each step forces one node of the underlying
/// sequence.
pub struct SequenceIterator<A> {
    /// The suspended remainder of the traversal.
    current: Sequence<A>,
}

impl<A: 'static> Iterator for SequenceIterator<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        match self.current.force() {
            Node::Empty => None,
            Node::Cons(head, tail) => {
                self.current = tail;
                Some(head)
            }
        }
    }
}

impl<A: 'static> IntoIterator for Sequence<A> {
    type Item = A;
    type IntoIter = SequenceIterator<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SequenceIterator { current: self }
    }
}

impl<'a, A: 'static> IntoIterator for &'a Sequence<A> {
    type Item = A;
    type IntoIter = SequenceIterator<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<A: 'static> Default for Sequence<A> {
    /// Creates an empty sequence.
    fn default() -> Self {
        Self::empty()
    }
}

impl<A> fmt::Debug for Sequence<A> {
    /// Formats without forcing: the suspension stays cold.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Sequence").field(&"<suspended>").finish()
    }
}
