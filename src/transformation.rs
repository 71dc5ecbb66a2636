//! Transformations of finite sets.
use std::fmt;

use crate::element::Element;
use crate::error::Error;
use crate::semigroup::Semigroup;
use crate::El;

/// A transformation of a finite set.
///
/// A transformation is any function from a finite set to itself. In froidure these sets are always
/// {0, ..., n-1} for some n, called the degree of the transformation. A transformation is stored
/// as the vector of images of {0, ..., n-1}.
///
/// Unlike a permutation, a transformation need not be a bijection; the full transformation monoid
/// of degree n contains all n^n such functions.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transformation {
    images: Box<[El]>,
}

impl Transformation {
    /// Create a transformation from a vector containing the images of 0..n.
    ///
    /// Returns None if any image is outside {0, ..., n-1}.
    pub fn from_images(images: Vec<El>) -> Option<Transformation> {
        if images.iter().any(|&p_i| p_i as usize >= images.len()) {
            return None;
        }
        Some(Transformation {
            images: images.into_boxed_slice(),
        })
    }

    /// The image of a point under this transformation.
    ///
    /// Panics when the point is not in the domain.
    pub fn apply(&self, point: El) -> El {
        self.images[point as usize]
    }

    /// The images of 0..degree.
    pub fn images(&self) -> &[El] {
        &self.images
    }

    /// The number of distinct images.
    pub fn rank(&self) -> usize {
        let mut seen = vec![false; self.images.len()];
        let mut rank = 0;
        for &p_i in self.images.iter() {
            if !seen[p_i as usize] {
                seen[p_i as usize] = true;
                rank += 1;
            }
        }
        rank
    }
}

impl Element for Transformation {
    fn degree(&self) -> usize {
        self.images.len()
    }

    fn identity(&self) -> Option<Transformation> {
        Some(Transformation {
            images: (0..self.images.len() as El).collect(),
        })
    }

    fn redefine(&mut self, a: &Transformation, b: &Transformation) {
        debug_assert_eq!(a.degree(), b.degree());
        if self.images.len() != a.images.len() {
            self.images = vec![0; a.images.len()].into_boxed_slice();
        }
        for (target, &a_i) in self.images.iter_mut().zip(a.images.iter()) {
            *target = b.images[a_i as usize];
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Transformation({:?})", &self.images[..])
    }
}

impl fmt::Debug for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<Transformation> for Vec<El> {
    fn from(t: Transformation) -> Vec<El> {
        t.images.into_vec()
    }
}

/// The full transformation monoid of degree n, as a semigroup.
///
/// The returned semigroup is generated by at most three transformations and contains every
/// transformation of {0, ..., n-1}, so its size is n^n.
///
/// Panics when n is zero.
pub fn full_transformation_monoid(n: usize) -> Result<Semigroup<Transformation>, Error> {
    assert!(n >= 1);
    let gens = match n {
        1 => vec![Transformation::from_images(vec![0]).unwrap()],
        2 => vec![
            Transformation::from_images(vec![1, 0]).unwrap(),
            Transformation::from_images(vec![0, 0]).unwrap(),
        ],
        _ => {
            let mut swap: Vec<El> = (0..n as El).collect();
            swap.swap(0, 1);
            let mut collapse: Vec<El> = (0..n as El).collect();
            collapse[1] = 0;
            let cycle: Vec<El> = Some(n as El - 1).into_iter().chain(0..n as El - 1).collect();
            vec![
                Transformation::from_images(swap).unwrap(),
                Transformation::from_images(collapse).unwrap(),
                Transformation::from_images(cycle).unwrap(),
            ]
        }
    };
    Semigroup::new(gens)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::{prelude::*, *};

    fn random_transformation(degree: usize) -> impl Strategy<Value = Transformation> {
        prop::collection::vec(0..degree as El, degree)
            .prop_map(|v| Transformation::from_images(v).unwrap())
    }

    #[test]
    fn from_images_rejects_out_of_range() {
        assert!(Transformation::from_images(vec![0, 3, 1]).is_none());
        assert!(Transformation::from_images(vec![2, 1, 1]).is_some());
    }

    #[test]
    fn from_images_empty() {
        assert!(Transformation::from_images(vec![]).is_some());
    }

    #[test]
    fn fmt() {
        let t = Transformation::from_images(vec![2, 1, 1]).unwrap();
        assert_eq!(format!("{}", t), "Transformation([2, 1, 1])");
        assert_eq!(format!("{:?}", t), "Transformation([2, 1, 1])");
    }

    #[test]
    fn composition_order() {
        // a then b: (i)(a * b) = ((i)a)b
        let a = Transformation::from_images(vec![1, 1, 2]).unwrap();
        let b = Transformation::from_images(vec![2, 0, 1]).unwrap();
        assert_eq!(
            Transformation::product(&a, &b),
            Transformation::from_images(vec![0, 0, 1]).unwrap()
        );
        assert_eq!(
            Transformation::product(&b, &a),
            Transformation::from_images(vec![2, 1, 1]).unwrap()
        );
    }

    #[test]
    fn rank_counts_distinct_images() {
        assert_eq!(
            Transformation::from_images(vec![1, 1, 4, 5, 4, 5])
                .unwrap()
                .rank(),
            3
        );
        let id = Transformation::from_images(vec![0, 1, 2]).unwrap();
        assert_eq!(id.rank(), 3);
    }

    #[test]
    fn full_transformation_monoid_sizes() {
        assert_eq!(full_transformation_monoid(1).unwrap().size(), 1);
        assert_eq!(full_transformation_monoid(2).unwrap().size(), 4);
        assert_eq!(full_transformation_monoid(3).unwrap().size(), 27);
        assert_eq!(full_transformation_monoid(4).unwrap().size(), 256);
    }

    proptest! {
        #[test]
        fn identity_is_neutral(t in random_transformation(6)) {
            let id = t.identity().unwrap();
            prop_assert_eq!(&Transformation::product(&id, &t), &t);
            prop_assert_eq!(&Transformation::product(&t, &id), &t);
        }

        #[test]
        fn apply_matches_images(t in random_transformation(6), p in 0..6u32) {
            prop_assert_eq!(t.apply(p), t.images()[p as usize]);
        }

        #[test]
        fn redefine_reuses_storage(
            a in random_transformation(5),
            b in random_transformation(5),
            c in random_transformation(5),
        ) {
            // A stale receiver of the right degree is overwritten completely
            let mut target = c;
            target.redefine(&a, &b);
            prop_assert_eq!(target, Transformation::product(&a, &b));
        }
    }
}
