//! # Transformations
//!
//! Operations that build new sequences out of existing ones. Most are
//! derived from [`Sequence::fold_right`]; `append` also has a direct
//! version, and the prefix searches walk the sequence themselves.
//!
//! Whatever part of an input survives unchanged is reused, not copied: the
//! second operand of `append` becomes the tail of the result, and
//! `zip_with` keeps the unconsumed suffix of the longer operand.

use log::trace;

use crate::sequence::Sequence;

impl<A> Sequence<A> {
    /// Concatenates `self` and `other`.
    ///
    /// The elements of `self` are copied into fresh cells; `other` is shared.
    ///
    /// # Example
    /// ```
    /// use structural_sequence::Sequence;
    ///
    /// let front = Sequence::construct([1, 2]);
    /// let back = Sequence::construct([3, 4]);
    /// assert_eq!(front.append(&back), Sequence::construct([1, 2, 3, 4]));
    /// assert!(Sequence::empty().append(&back).ptr_eq(&back));
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self
    where
        A: Clone,
    {
        Self::build_onto(self.iter().cloned().collect(), other.clone())
    }

    /// [`append`](Self::append) as `fold_right(self, other, cons)`.
    #[must_use]
    pub fn append_via_fold_right(&self, other: &Self) -> Self
    where
        A: Clone,
    {
        self.fold_right(other.clone(), |x, acc| Sequence::cons(x.clone(), acc))
    }

    /// Applies `f` to every element, keeping order and length.
    ///
    /// `f` is invoked from the last element towards the first.
    pub fn map<'a, B, F>(&'a self, mut f: F) -> Sequence<B>
    where
        F: FnMut(&'a A) -> B,
    {
        self.fold_right(Sequence::Empty, |x, acc| Sequence::cons(f(x), acc))
    }

    /// Keeps the elements satisfying `predicate`, in their original order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        A: Clone,
        P: FnMut(&A) -> bool,
    {
        self.fold_right(Sequence::Empty, |x, acc| {
            if predicate(x) {
                Sequence::cons(x.clone(), acc)
            } else {
                acc
            }
        })
    }

    /// Maps every element to a sequence and concatenates the results.
    ///
    /// # Example
    /// ```
    /// use structural_sequence::Sequence;
    ///
    /// let s = Sequence::construct([1, 2, 3]);
    /// let doubled = s.flat_map(|x| Sequence::construct([*x, *x]));
    /// assert_eq!(doubled.to_string(), "[1, 1, 2, 2, 3, 3]");
    /// ```
    pub fn flat_map<'a, B, F>(&'a self, mut f: F) -> Sequence<B>
    where
        B: Clone,
        F: FnMut(&'a A) -> Sequence<B>,
    {
        self.fold_right(Sequence::Empty, |x, acc| f(x).append(&acc))
    }

    /// [`filter`](Self::filter) written with `flat_map`: each element maps to
    /// itself or to nothing.
    #[must_use]
    pub fn filter_via_flat_map<P>(&self, mut predicate: P) -> Self
    where
        A: Clone,
        P: FnMut(&A) -> bool,
    {
        self.flat_map(|x| {
            if predicate(x) {
                Sequence::singleton(x.clone())
            } else {
                Sequence::Empty
            }
        })
    }

    /// Combines elements at matching positions.
    ///
    /// When one operand runs out first, the remaining suffix of the other is
    /// appended to the result unchanged instead of being cut off:
    /// `zip_with([1, 2], [1, 2, 3], +)` is `[2, 4, 3]`.
    ///
    /// # Example
    /// ```
    /// use structural_sequence::Sequence;
    ///
    /// let a = Sequence::construct([1, 2]);
    /// let b = Sequence::construct([10, 20, 30]);
    /// assert_eq!(a.zip_with(&b, |x, y| x * y).to_string(), "[10, 40, 30]");
    /// ```
    #[must_use]
    pub fn zip_with<F>(&self, other: &Self, mut combine: F) -> Self
    where
        F: FnMut(&A, &A) -> A,
    {
        let mut combined = Vec::new();
        let (mut left, mut right) = (self, other);
        loop {
            match (left, right) {
                (Sequence::Node(l), Sequence::Node(r)) => {
                    combined.push(combine(&l.head, &r.head));
                    left = &l.tail;
                    right = &r.tail;
                }
                (Sequence::Empty, rest) | (rest, Sequence::Empty) => {
                    return Self::build_onto(combined, rest.clone());
                }
            }
        }
    }

    /// Returns `true` if `prefix` matches the start of `self` element by
    /// element. Every sequence starts with `Empty`; `Empty` starts with
    /// nothing else.
    pub fn starts_with(&self, prefix: &Self) -> bool
    where
        A: PartialEq,
    {
        let mut remaining = self.iter();
        prefix.iter().all(|expected| remaining.next() == Some(expected))
    }

    /// Returns `true` if `sub` occurs as a contiguous run inside `self`.
    ///
    /// Every suffix of `self` is tried, down to and including `Empty`, so an
    /// empty `sub` always matches.
    ///
    /// # Example
    /// ```
    /// use structural_sequence::Sequence;
    ///
    /// let s = Sequence::construct([1, 2, 3, 4]);
    /// assert!(s.has_subsequence(&Sequence::construct([2, 3])));
    /// assert!(!s.has_subsequence(&Sequence::construct([2, 4])));
    /// ```
    pub fn has_subsequence(&self, sub: &Self) -> bool
    where
        A: PartialEq,
    {
        let mut current = self;
        let mut offset = 0usize;
        loop {
            if current.starts_with(sub) {
                trace!("subsequence found at offset {offset}");
                return true;
            }
            match current {
                Sequence::Empty => return false,
                Sequence::Node(cell) => {
                    current = &cell.tail;
                    offset += 1;
                }
            }
        }
    }
}

impl<A: Clone> Sequence<Sequence<A>> {
    /// Flattens one level of nesting, left to right.
    #[must_use]
    pub fn concat(&self) -> Sequence<A> {
        self.fold_right(Sequence::Empty, |inner, acc| inner.append(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seq(elements: &[i64]) -> Sequence<i64> {
        Sequence::construct(elements.iter().copied())
    }

    #[test]
    fn test_append_shares_second_operand() {
        let front = seq(&[1, 2]);
        let back = seq(&[3]);
        let joined = front.append(&back);
        assert_eq!(joined, seq(&[1, 2, 3]));
        assert!(joined.drop(2).ptr_eq(&back));
        assert!(Sequence::Empty.append(&back).ptr_eq(&back));
        assert_eq!(front.append(&Sequence::Empty), front);
    }

    #[test]
    fn test_append_variants_agree() {
        let front = seq(&[5, 6, 7]);
        let back = seq(&[8, 9]);
        assert_eq!(front.append_via_fold_right(&back), front.append(&back));
        assert!(front.append_via_fold_right(&back).drop(3).ptr_eq(&back));
    }

    #[test]
    fn test_concat() {
        let nested = Sequence::construct([seq(&[1, 2]), Sequence::Empty, seq(&[3]), seq(&[4, 5])]);
        assert_eq!(nested.concat(), seq(&[1, 2, 3, 4, 5]));
        assert_eq!(Sequence::<Sequence<i64>>::Empty.concat(), Sequence::Empty);
    }

    #[test]
    fn test_map() {
        let s = seq(&[1, 2, 3]);
        assert_eq!(s.map(|x| x * x), seq(&[1, 4, 9]));
        assert_eq!(s.map(|x| x.to_string()).to_string(), "[1, 2, 3]");
        assert_eq!(Sequence::<i64>::Empty.map(|x| x + 1), Sequence::Empty);
    }

    #[test]
    fn test_filter() {
        let s = seq(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(s.filter(|x| x % 2 == 0), seq(&[2, 4, 6]));
        assert_eq!(s.filter(|_| false), Sequence::Empty);
    }

    #[test]
    fn test_flat_map() {
        let s = seq(&[1, 2, 3]);
        let expanded = s.flat_map(|x| seq(&[*x, *x * 10]));
        assert_eq!(expanded, seq(&[1, 10, 2, 20, 3, 30]));
        assert_eq!(s.flat_map(|_| Sequence::<i64>::Empty), Sequence::Empty);
    }

    #[test]
    fn test_zip_with_keeps_longer_suffix() {
        let short = seq(&[1, 2]);
        let long = seq(&[1, 2, 3]);
        let summed = short.zip_with(&long, |a, b| a + b);
        assert_eq!(summed, seq(&[2, 4, 3]));
        assert!(summed.drop(2).ptr_eq(&long.drop(2)));

        assert_eq!(long.zip_with(&short, |a, b| a + b), seq(&[2, 4, 3]));
        assert!(Sequence::Empty.zip_with(&long, |a, b| a + b).ptr_eq(&long));
    }

    #[test]
    fn test_zip_with_equal_lengths() {
        let a = seq(&[1, 2, 3]);
        let b = seq(&[4, 5, 6]);
        assert_eq!(a.zip_with(&b, |x, y| x * y), seq(&[4, 10, 18]));
    }

    #[test]
    fn test_starts_with() {
        let s = seq(&[1, 2, 3]);
        assert!(s.starts_with(&Sequence::Empty));
        assert!(s.starts_with(&seq(&[1, 2])));
        assert!(!s.starts_with(&seq(&[2])));
        assert!(!s.starts_with(&seq(&[1, 2, 3, 4])));
        assert!(Sequence::<i64>::Empty.starts_with(&Sequence::Empty));
        assert!(!Sequence::Empty.starts_with(&seq(&[1])));
    }

    #[test]
    fn test_has_subsequence() {
        let s = seq(&[1, 2, 3, 4]);
        assert!(s.has_subsequence(&seq(&[2, 3])));
        assert!(s.has_subsequence(&seq(&[4])));
        assert!(s.has_subsequence(&s));
        assert!(!s.has_subsequence(&seq(&[2, 4])));
        assert!(!s.has_subsequence(&seq(&[3, 4, 5])));
        assert!(s.has_subsequence(&Sequence::Empty));
        assert!(Sequence::<i64>::Empty.has_subsequence(&Sequence::Empty));
        assert!(!Sequence::Empty.has_subsequence(&seq(&[1])));
    }

    proptest! {
        #[test]
        fn test_fold_right_with_cons_is_append(
            front in prop::collection::vec(any::<i64>(), 0..32),
            back in prop::collection::vec(any::<i64>(), 0..32),
        ) {
            let (s, t) = (seq(&front), seq(&back));
            let folded = s.fold_right(t.clone(), |x, acc| Sequence::cons(*x, acc));
            prop_assert_eq!(folded, s.append(&t));
        }

        #[test]
        fn test_filter_via_flat_map_agrees(
            elements in prop::collection::vec(-50i64..50, 0..48),
            modulus in 1i64..6,
        ) {
            let s = seq(&elements);
            prop_assert_eq!(
                s.filter_via_flat_map(|x| x % modulus == 0),
                s.filter(|x| x % modulus == 0)
            );
        }

        #[test]
        fn test_concat_matches_flattened_vectors(
            groups in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..6), 0..8),
        ) {
            let nested: Sequence<Sequence<i64>> = groups.iter().map(|g| seq(g)).collect();
            let flat: Vec<i64> = groups.concat();
            prop_assert_eq!(nested.concat(), seq(&flat));
        }

        #[test]
        fn test_every_slice_is_a_subsequence(
            elements in prop::collection::vec(0i64..4, 0..16),
            start in 0usize..16,
            len in 0usize..16,
        ) {
            let start = start.min(elements.len());
            let end = (start + len).min(elements.len());
            let s = seq(&elements);
            prop_assert!(s.has_subsequence(&seq(&elements[start..end])));
        }
    }
}
