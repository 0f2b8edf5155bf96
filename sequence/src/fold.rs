//! # Folds
//!
//! [`Sequence::fold_right`] is the universal eliminator: replacing `Node`
//! with `combine` and `Empty` with `zero` rebuilds any function defined by
//! structural recursion over a sequence.
//!
//! ```text
//! fold_right([1, 2, 3], z, f) = f(1, f(2, f(3, z)))
//! fold_left([1, 2, 3], z, f)  = f(f(f(z, 1), 2), 3)
//! ```
//!
//! Both folds run in constant stack space. `fold_right` first walks the
//! sequence to record its elements and then combines them from the back,
//! which is the same order of `combine` calls the recursive definition makes.

use crate::sequence::Sequence;

impl<A> Sequence<A> {
    /// Right-associative fold.
    ///
    /// # Example
    /// ```
    /// use structural_sequence::Sequence;
    ///
    /// let s = Sequence::construct([1, 2, 3]);
    /// let shown = s.fold_right(String::from("nil"), |x, acc| format!("({x} . {acc})"));
    /// assert_eq!(shown, "(1 . (2 . (3 . nil)))");
    /// ```
    pub fn fold_right<'a, B, F>(&'a self, zero: B, mut combine: F) -> B
    where
        F: FnMut(&'a A, B) -> B,
    {
        let elements: Vec<&'a A> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(zero, |acc, element| combine(element, acc))
    }

    /// Left-associative fold.
    ///
    /// # Example
    /// ```
    /// use structural_sequence::Sequence;
    ///
    /// let s = Sequence::construct([1, 2, 3]);
    /// assert_eq!(s.fold_left(0, |acc, x| acc * 10 + x), 123);
    /// ```
    pub fn fold_left<'a, B, F>(&'a self, zero: B, mut combine: F) -> B
    where
        F: FnMut(B, &'a A) -> B,
    {
        let mut acc = zero;
        for element in self.iter() {
            acc = combine(acc, element);
        }
        acc
    }

    /// Reverses the sequence by consing each element onto an accumulator.
    #[must_use]
    pub fn reverse(&self) -> Self
    where
        A: Clone,
    {
        self.fold_left(Sequence::Empty, |acc, x| Sequence::cons(x.clone(), acc))
    }

    /// [`fold_right`](Self::fold_right) expressed as a left fold over the
    /// reversed sequence.
    pub fn fold_right_via_fold_left<'a, B, F>(&'a self, zero: B, mut combine: F) -> B
    where
        F: FnMut(&'a A, B) -> B,
    {
        self.reversed_refs()
            .fold_left(zero, |acc, element| combine(*element, acc))
    }

    /// [`fold_left`](Self::fold_left) expressed as a right fold over the
    /// reversed sequence.
    pub fn fold_left_via_fold_right<'a, B, F>(&'a self, zero: B, mut combine: F) -> B
    where
        F: FnMut(B, &'a A) -> B,
    {
        self.reversed_refs()
            .fold_right(zero, |element, acc| combine(acc, *element))
    }

    /// Element count computed with `fold_right`.
    pub fn length_via_fold_right(&self) -> usize {
        self.fold_right(0, |_, n| n + 1)
    }

    /// Element count computed with `fold_left`.
    pub fn length_via_fold_left(&self) -> usize {
        self.fold_left(0, |n, _| n + 1)
    }

    // A reversed view that borrows the elements instead of cloning them.
    fn reversed_refs(&self) -> Sequence<&A> {
        self.fold_left(Sequence::Empty, |acc, x| Sequence::cons(x, acc))
    }
}
