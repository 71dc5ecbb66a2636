//! The capability shared by everything a semigroup can be generated from.
use std::hash::Hash;
use std::mem::{replace, swap};

use num_integer::Integer;
use num_traits::{FromPrimitive, ToPrimitive};

/// A value that can generate a finite semigroup.
///
/// An element is an opaque algebraic value with an associative product. Every element reports a
/// [`degree`][Element::degree] describing the size of its domain; only elements of equal degree
/// can be composed, and all generators fed to one semigroup must share a degree.
///
/// Products are computed with [`redefine`][Element::redefine], which writes `a * b` into an
/// existing receiver. This lets the enumeration loop reuse a single scratch element for the
/// millions of products it computes instead of allocating one per product. Elements stored in a
/// semigroup are never mutated after discovery; only scratch receivers are written to.
///
/// The `Eq`, `Ord` and `Hash` requirements give the enumeration engine its index table: two
/// elements are the same member of the semigroup exactly when they compare equal.
pub trait Element: Clone + Eq + Ord + Hash {
    /// The size of the domain this element is defined on.
    fn degree(&self) -> usize;

    /// The identity element of the same degree, when one exists for this element kind.
    fn identity(&self) -> Option<Self>;

    /// Compute the product `a * b` into `self`, reusing its storage.
    ///
    /// The convention throughout this crate is that `a * b` means "apply `a`, then `b`":
    /// for transformations, `(i)(a * b) = ((i)a)b`.
    fn redefine(&mut self, a: &Self, b: &Self);

    /// The product `a * b` as a new element.
    fn product(a: &Self, b: &Self) -> Self {
        let mut result = a.clone();
        result.redefine(a, b);
        result
    }

    /// Raise this element to a power by repeated squaring.
    ///
    /// Returns None for negative exponents, and for an exponent of zero when the element kind has
    /// no identity.
    fn pow<E>(&self, exponent: E) -> Option<Self>
    where
        E: Integer + FromPrimitive + ToPrimitive,
    {
        if exponent < E::zero() {
            return None;
        }
        match exponent.to_usize() {
            Some(0) => return self.identity(),
            Some(1) => return Some(self.clone()),
            _ => {}
        }

        let mut exp = exponent;
        let mut base = self.clone();
        let mut scratch = self.clone();
        let mut acc: Option<Self> = None;

        while exp > E::zero() {
            if exp.is_odd() {
                acc = Some(match acc.take() {
                    None => base.clone(),
                    Some(prev) => {
                        scratch.redefine(&prev, &base);
                        // The product becomes the accumulator, prev's storage becomes scratch
                        replace(&mut scratch, prev)
                    }
                });
            }
            exp = exp / E::from_usize(2).unwrap();
            if exp > E::zero() {
                scratch.redefine(&base, &base);
                swap(&mut base, &mut scratch);
            }
        }

        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::{prelude::*, *};

    use crate::transformation::Transformation;
    use crate::El;

    fn random_transformation(degree: usize) -> impl Strategy<Value = Transformation> {
        prop::collection::vec(0..degree as El, degree)
            .prop_map(|v| Transformation::from_images(v).unwrap())
    }

    #[test]
    fn pow_zero_is_identity() {
        let t = Transformation::from_images(vec![1, 1, 0]).unwrap();
        assert_eq!(t.pow(0usize), t.identity());
    }

    #[test]
    fn pow_negative_is_none() {
        let t = Transformation::from_images(vec![1, 1, 0]).unwrap();
        assert_eq!(t.pow(-1isize), None);
    }

    proptest! {
        #[test]
        fn pow_matches_repeated_product(
            t in random_transformation(5),
            exp in 1..64usize,
        ) {
            let mut by_hand = t.clone();
            for _ in 1..exp {
                by_hand = Transformation::product(&by_hand, &t);
            }
            prop_assert_eq!(t.pow(exp), Some(by_hand));
        }

        #[test]
        fn pow_adds_exponents(
            t in random_transformation(6),
            a in 1..32usize,
            b in 1..32usize,
        ) {
            let t_a = t.pow(a).unwrap();
            let t_b = t.pow(b).unwrap();
            prop_assert_eq!(
                Transformation::product(&t_a, &t_b),
                t.pow(a + b).unwrap()
            );
        }

        #[test]
        fn product_is_associative(
            a in random_transformation(6),
            b in random_transformation(6),
            c in random_transformation(6),
        ) {
            let ab_c = Transformation::product(&Transformation::product(&a, &b), &c);
            let a_bc = Transformation::product(&a, &Transformation::product(&b, &c));
            prop_assert_eq!(ab_c, a_bc);
        }
    }
}
