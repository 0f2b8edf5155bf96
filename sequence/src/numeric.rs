//! Arithmetic over integer and floating point sequences.

use std::fmt::Display;
use std::ops::Add;

use log::trace;

use crate::sequence::Sequence;

impl Sequence<i64> {
    /// Sum of the elements; `Empty` sums to `0`.
    ///
    /// Uses native `i64` addition, so overflow panics in debug builds and
    /// wraps in release builds.
    pub fn sum(&self) -> i64 {
        let mut total: i64 = 0;
        for x in self.iter() {
            total += x;
        }
        total
    }

    /// [`sum`](Self::sum) computed with `fold_left`.
    pub fn sum_via_fold_left(&self) -> i64 {
        self.fold_left(0i64, |acc, x| acc + x)
    }

    /// Pairwise sum. Like [`zip_with`](Sequence::zip_with), a longer operand
    /// contributes its leftover suffix unchanged.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Adds one to every element.
    #[must_use]
    pub fn add_one(&self) -> Self {
        self.map(|x| x + 1)
    }
}

impl Sequence<f64> {
    /// Product of the elements; `Empty` yields `1.0`.
    ///
    /// Returns `0.0` as soon as a factor equal to `0.0` is reached, without
    /// reading the rest of the sequence. Otherwise the factors are multiplied
    /// right to left, `x1 * (x2 * (... * 1.0))`.
    ///
    /// # Example
    /// ```
    /// use structural_sequence::Sequence;
    ///
    /// assert_eq!(Sequence::construct([2.0_f64, 3.5]).product(), 7.0);
    /// // The NaN after the zero is never multiplied in.
    /// assert_eq!(Sequence::construct([1.0_f64, 0.0, f64::NAN]).product(), 0.0);
    /// ```
    pub fn product(&self) -> f64 {
        let mut factors = Vec::new();
        for (index, &x) in self.iter().enumerate() {
            if x == 0.0 {
                trace!("product short-circuited on zero factor at index {index}");
                return 0.0;
            }
            factors.push(x);
        }
        factors.into_iter().rev().fold(1.0_f64, |acc, x| x * acc)
    }

    /// Product computed with `fold_left`. Has no zero short-circuit, so a
    /// `NaN` or infinity after a zero still reaches the result.
    pub fn product_via_fold_left(&self) -> f64 {
        self.fold_left(1.0_f64, |acc, x| acc * x)
    }
}

impl<A: Display> Sequence<A> {
    /// Renders every element with its `Display` implementation.
    pub fn to_strings(&self) -> Sequence<String> {
        self.map(|x| x.to_string())
    }
}

impl Add for &Sequence<i64> {
    type Output = Sequence<i64>;

    fn add(self, rhs: Self) -> Sequence<i64> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ints(elements: &[i64]) -> Sequence<i64> {
        Sequence::construct(elements.iter().copied())
    }

    fn floats(elements: &[f64]) -> Sequence<f64> {
        Sequence::construct(elements.iter().copied())
    }

    #[test]
    fn test_sum() {
        assert_eq!(ints(&[1, 2, 3, 4, 5]).sum(), 15);
        assert_eq!(Sequence::<i64>::Empty.sum(), 0);
        assert_eq!(ints(&[-4, 4, 7]).sum_via_fold_left(), 7);
    }

    #[test]
    fn test_product() {
        assert_eq!(floats(&[1.0, 2.0, 3.0, 4.0]).product(), 24.0);
        assert_eq!(Sequence::<f64>::Empty.product(), 1.0);
        assert_eq!(floats(&[1.0, 2.0, 0.0, 4.0]).product(), 0.0);
    }

    #[test]
    fn test_product_stops_at_zero() {
        let s = floats(&[3.0, 0.0, f64::NAN, f64::INFINITY]);
        assert_eq!(s.product(), 0.0);
        assert!(s.product_via_fold_left().is_nan());

        let negative_zero = floats(&[2.0, -0.0, f64::NAN]);
        assert_eq!(negative_zero.product(), 0.0);
    }

    #[test]
    fn test_add() {
        let a = ints(&[1, 2]);
        let b = ints(&[1, 2, 3]);
        assert_eq!(a.add(&b), ints(&[2, 4, 3]));
        assert_eq!(&a + &b, ints(&[2, 4, 3]));
        assert_eq!(b.add(&Sequence::Empty), b);
    }

    #[test]
    fn test_add_one_and_to_strings() {
        let s = ints(&[0, 1, 2]);
        assert_eq!(s.add_one(), ints(&[1, 2, 3]));
        assert_eq!(floats(&[1.5, 2.0]).to_strings().to_string(), "[1.5, 2]");
    }

    proptest! {
        #[test]
        fn test_sum_variants_agree(elements in prop::collection::vec(-1_000i64..1_000, 0..64)) {
            let s = ints(&elements);
            prop_assert_eq!(s.sum(), elements.iter().sum::<i64>());
            prop_assert_eq!(s.sum_via_fold_left(), s.sum());
        }

        #[test]
        fn test_product_of_small_integers_is_exact(elements in prop::collection::vec(-4i32..5, 0..12)) {
            let s: Sequence<f64> = elements.iter().map(|x| f64::from(*x)).collect();
            let expected: f64 = elements.iter().map(|x| f64::from(*x)).product();
            // Zero and -0.0 compare equal, so the short-circuit's sign does not matter here.
            prop_assert_eq!(s.product(), expected);
        }
    }
}
