//! # Immutable Sequences
//!
//! A cons sequence is either [`Sequence::Empty`] or a [`Sequence::Node`]
//! holding a head element and the rest of the sequence. Nodes live behind
//! an `Rc`, so a tail handed out by [`Sequence::tail`] or kept by
//! [`Sequence::set_head`] is the same cell the original sequence points at,
//! never a copy.
//!
//! ```text
//! s:             1 -> 2 -> 3 -> Empty
//! s.set_head(9): 9 -> [2 -> 3 -> Empty]   // shares [2, 3] with s
//! ```
//!
//! ## Example
//!
//! ```
//! use structural_sequence::Sequence;
//!
//! let s = Sequence::construct([1, 2, 3]);
//! assert_eq!(s.head(), Some(&1));
//! assert_eq!(s.length(), 3);
//!
//! let replaced = s.set_head(9);
//! assert!(replaced.tail()?.ptr_eq(s.tail()?));
//! # Ok::<(), structural_sequence::EmptyStructureError>(())
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::rc::Rc;

use log::debug;

use crate::error::{EmptyStructureError, Result};

/// An immutable, singly linked sequence.
pub enum Sequence<A> {
    /// The zero-length sequence.
    Empty,
    /// A head element followed by the remainder of the sequence.
    Node(Rc<Cons<A>>),
}

/// The cell behind [`Sequence::Node`].
pub struct Cons<A> {
    pub(crate) head: A,
    pub(crate) tail: Sequence<A>,
}

impl<A> Cons<A> {
    /// The element stored in this cell.
    pub fn head(&self) -> &A {
        &self.head
    }

    /// The rest of the sequence after this cell.
    pub fn tail(&self) -> &Sequence<A> {
        &self.tail
    }
}

// Unlinks the chain one cell at a time. Dropping a long sequence through the
// compiler-generated glue would recurse once per element.
impl<A> Drop for Cons<A> {
    fn drop(&mut self) {
        let mut next = mem::take(&mut self.tail);
        while let Sequence::Node(cell) = next {
            match Rc::try_unwrap(cell) {
                Ok(mut cons) => next = mem::take(&mut cons.tail),
                // Still shared with another sequence; that owner drops the rest.
                Err(_) => break,
            }
        }
    }
}

impl<A> Sequence<A> {
    /// Creates the empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Sequence::Empty
    }

    /// Prepends `head` to `tail`. The tail is moved in, not copied.
    #[must_use]
    pub fn cons(head: A, tail: Self) -> Self {
        Sequence::Node(Rc::new(Cons { head, tail }))
    }

    /// Creates a one-element sequence.
    #[must_use]
    pub fn singleton(element: A) -> Self {
        Self::cons(element, Sequence::Empty)
    }

    /// Builds a sequence from `elements`, keeping their order.
    ///
    /// Construction runs right to left: the last element is consed onto
    /// `Empty` first and the first element ends up as the head.
    ///
    /// # Example
    /// ```
    /// use structural_sequence::Sequence;
    ///
    /// let s = Sequence::construct(vec!['a', 'b', 'c']);
    /// assert_eq!(s.to_string(), "[a, b, c]");
    /// ```
    pub fn construct<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self::build_onto(elements.into_iter().collect(), Sequence::Empty)
    }

    /// Conses `items` in order in front of `tail`, which is reused as is.
    pub(crate) fn build_onto(items: Vec<A>, tail: Self) -> Self {
        items
            .into_iter()
            .rev()
            .fold(tail, |rest, item| Self::cons(item, rest))
    }

    /// Returns `true` for [`Sequence::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Sequence::Empty)
    }

    /// The first element, if any.
    pub fn head(&self) -> Option<&A> {
        match self {
            Sequence::Empty => None,
            Sequence::Node(cell) => Some(&cell.head),
        }
    }

    /// The sequence without its first element.
    ///
    /// The returned reference points at the tail stored inside `self`;
    /// cloning it shares the cell rather than copying elements.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] when `self` is `Empty`.
    pub fn tail(&self) -> Result<&Sequence<A>> {
        match self {
            Sequence::Empty => {
                debug!("tail rejected: sequence is empty");
                Err(EmptyStructureError::new("tail"))
            }
            Sequence::Node(cell) => Ok(&cell.tail),
        }
    }

    /// Replaces the first element.
    ///
    /// On `Empty` this yields `[head]`; otherwise the original tail is shared
    /// by the result.
    #[must_use]
    pub fn set_head(&self, head: A) -> Self {
        match self {
            Sequence::Empty => Self::singleton(head),
            Sequence::Node(cell) => Self::cons(head, cell.tail.clone()),
        }
    }

    /// Removes the first `n` elements.
    ///
    /// `drop(0)` is the identity, and dropping past the end yields `Empty`.
    /// The result is a suffix of `self`, shared rather than copied.
    #[must_use]
    pub fn drop(&self, n: usize) -> Self {
        let mut rest = self;
        for _ in 0..n {
            match rest {
                Sequence::Empty => break,
                Sequence::Node(cell) => rest = &cell.tail,
            }
        }
        rest.clone()
    }

    /// Removes the longest prefix whose elements all satisfy `predicate`.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        let mut rest = self;
        while let Sequence::Node(cell) = rest {
            if !predicate(&cell.head) {
                break;
            }
            rest = &cell.tail;
        }
        rest.clone()
    }

    /// Returns every element except the last.
    ///
    /// Both `Empty` and a one-element sequence map to `Empty`.
    #[must_use]
    pub fn init(&self) -> Self
    where
        A: Clone,
    {
        let mut kept: Vec<A> = self.iter().cloned().collect();
        kept.pop();
        Self::construct(kept)
    }

    /// Number of elements.
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` when both sequences are the same cell, or both empty.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Sequence::Empty, Sequence::Empty) => true,
            (Sequence::Node(a), Sequence::Node(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Borrowing iterator from head to last element.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter { next: self }
    }
}

/// Iterator over the elements of a [`Sequence`].
pub struct Iter<'a, A> {
    next: &'a Sequence<A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<&'a A> {
        let current = self.next;
        match current {
            Sequence::Empty => None,
            Sequence::Node(cell) => {
                self.next = &cell.tail;
                Some(&cell.head)
            }
        }
    }
}

impl<A> FusedIterator for Iter<'_, A> {}

impl<A> Clone for Iter<'_, A> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

impl<'a, A> IntoIterator for &'a Sequence<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}

// Cloning only bumps the reference count, so no `A: Clone` bound.
impl<A> Clone for Sequence<A> {
    fn clone(&self) -> Self {
        match self {
            Sequence::Empty => Sequence::Empty,
            Sequence::Node(cell) => Sequence::Node(Rc::clone(cell)),
        }
    }
}

impl<A> Default for Sequence<A> {
    fn default() -> Self {
        Sequence::Empty
    }
}

impl<A: PartialEq> PartialEq for Sequence<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for Sequence<A> {}

impl<A: fmt::Debug> fmt::Debug for Sequence<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for Sequence<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl<A> FromIterator<A> for Sequence<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::construct(iter)
    }
}

impl<A> From<Vec<A>> for Sequence<A> {
    fn from(elements: Vec<A>) -> Self {
        Self::build_onto(elements, Sequence::Empty)
    }
}
