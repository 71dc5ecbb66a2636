//! Partial permutations of finite sets.
use std::fmt;

use crate::element::Element;
use crate::El;

/// Image value marking a point with no image.
pub const UNDEFINED: El = El::max_value();

/// A partial permutation of a finite set.
///
/// A partial permutation is an injective function from a subset of {0, ..., n-1} to
/// {0, ..., n-1}. It is stored as the vector of images of {0, ..., n-1}, with [`UNDEFINED`]
/// marking the points outside the domain.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartialPerm {
    images: Box<[El]>,
}

impl PartialPerm {
    /// Create a partial permutation from a vector containing the images of 0..n, with
    /// [`UNDEFINED`] for points outside the domain.
    ///
    /// Returns None if any defined image is out of range or repeated.
    pub fn from_images(images: Vec<El>) -> Option<PartialPerm> {
        let mut seen = vec![false; images.len()];
        for &p_i in images.iter() {
            if p_i == UNDEFINED {
                continue;
            }
            if p_i as usize >= images.len() || seen[p_i as usize] {
                return None;
            }
            seen[p_i as usize] = true;
        }
        Some(PartialPerm {
            images: images.into_boxed_slice(),
        })
    }

    /// Create a partial permutation of a given degree mapping `domain[i]` to `range[i]`.
    ///
    /// Returns None if the two slices differ in length, mention a point outside
    /// {0, ..., degree-1}, or repeat a point.
    pub fn from_domain_range(domain: &[El], range: &[El], degree: usize) -> Option<PartialPerm> {
        if domain.len() != range.len() {
            return None;
        }
        let mut images = vec![UNDEFINED; degree];
        let mut seen = vec![false; degree];
        for (&d, &r) in domain.iter().zip(range.iter()) {
            if d as usize >= degree || r as usize >= degree {
                return None;
            }
            if images[d as usize] != UNDEFINED || seen[r as usize] {
                return None;
            }
            images[d as usize] = r;
            seen[r as usize] = true;
        }
        Some(PartialPerm {
            images: images.into_boxed_slice(),
        })
    }

    /// The images of 0..degree, with [`UNDEFINED`] for points outside the domain.
    pub fn images(&self) -> &[El] {
        &self.images
    }

    /// The points with a defined image, in increasing order.
    pub fn domain(&self) -> Vec<El> {
        (0..self.images.len() as El)
            .filter(|&p| self.images[p as usize] != UNDEFINED)
            .collect()
    }

    /// The images of the domain points, in domain order.
    pub fn range(&self) -> Vec<El> {
        self.images
            .iter()
            .cloned()
            .filter(|&p_i| p_i != UNDEFINED)
            .collect()
    }

    /// The number of points with a defined image.
    pub fn rank(&self) -> usize {
        self.images.iter().filter(|&&p_i| p_i != UNDEFINED).count()
    }
}

impl Element for PartialPerm {
    fn degree(&self) -> usize {
        self.images.len()
    }

    fn identity(&self) -> Option<PartialPerm> {
        Some(PartialPerm {
            images: (0..self.images.len() as El).collect(),
        })
    }

    fn redefine(&mut self, a: &PartialPerm, b: &PartialPerm) {
        debug_assert_eq!(a.degree(), b.degree());
        if self.images.len() != a.images.len() {
            self.images = vec![UNDEFINED; a.images.len()].into_boxed_slice();
        }
        for (target, &a_i) in self.images.iter_mut().zip(a.images.iter()) {
            *target = if a_i == UNDEFINED {
                UNDEFINED
            } else {
                b.images[a_i as usize]
            };
        }
    }
}

impl fmt::Display for PartialPerm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PartialPerm({:?}, {:?}, {})",
            self.domain(),
            self.range(),
            self.images.len()
        )
    }
}

impl fmt::Debug for PartialPerm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_range_roundtrip() {
        let p = PartialPerm::from_domain_range(&[1, 2, 5], &[2, 3, 5], 6).unwrap();
        assert_eq!(p.domain(), vec![1, 2, 5]);
        assert_eq!(p.range(), vec![2, 3, 5]);
        assert_eq!(p.degree(), 6);
        assert_eq!(p.rank(), 3);
        assert_eq!(format!("{}", p), "PartialPerm([1, 2, 5], [2, 3, 5], 6)");
    }

    #[test]
    fn from_domain_range_rejects_bad_input() {
        // length mismatch
        assert!(PartialPerm::from_domain_range(&[0, 1], &[1], 3).is_none());
        // point beyond the degree
        assert!(PartialPerm::from_domain_range(&[0, 3], &[1, 2], 3).is_none());
        // repeated domain point
        assert!(PartialPerm::from_domain_range(&[0, 0], &[1, 2], 3).is_none());
        // repeated range point
        assert!(PartialPerm::from_domain_range(&[0, 1], &[2, 2], 3).is_none());
    }

    #[test]
    fn from_images_rejects_non_injective() {
        assert!(PartialPerm::from_images(vec![1, 1, UNDEFINED]).is_none());
        assert!(PartialPerm::from_images(vec![1, UNDEFINED, 0]).is_some());
    }

    #[test]
    fn composition_drops_points() {
        // 0 -> 1 composed with 1 -> 2 maps 0 -> 2; everything else is undefined
        let a = PartialPerm::from_domain_range(&[0], &[1], 3).unwrap();
        let b = PartialPerm::from_domain_range(&[1], &[2], 3).unwrap();
        let ab = PartialPerm::product(&a, &b);
        assert_eq!(ab.domain(), vec![0]);
        assert_eq!(ab.range(), vec![2]);
        let ba = PartialPerm::product(&b, &a);
        assert_eq!(ba.rank(), 0);
    }

    #[test]
    fn identity_is_neutral() {
        let p = PartialPerm::from_domain_range(&[0, 2], &[1, 2], 3).unwrap();
        let id = p.identity().unwrap();
        assert_eq!(id.domain(), vec![0, 1, 2]);
        assert_eq!(PartialPerm::product(&id, &p), p);
        assert_eq!(PartialPerm::product(&p, &id), p);
    }
}
