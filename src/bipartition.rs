//! Bipartitions of a doubled finite set.
use std::fmt;

use crate::element::Element;

/// A bipartition of degree n.
///
/// A bipartition is a partition of a set of 2n points into blocks. The first n points are the
/// "top" of the bipartition and the remaining n points the "bottom"; in the classical signed
/// notation the tops are 1, ..., n and the bottoms -1, ..., -n.
///
/// A bipartition is stored as a lookup table assigning a block index to each of the 2n points,
/// normalized so that block indices appear in increasing order of their first point. Two
/// bipartitions are equal exactly when their normalized lookup tables are.
///
/// The product of two bipartitions stacks them: the bottom of the left factor is glued to the
/// top of the right factor, and the blocks of the product are the connected components restricted
/// to the outer two rows.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bipartition {
    lookup: Box<[u32]>,
    nr_blocks: u32,
}

// Union-find with path halving, used for the stacked product.
fn find(parent: &mut [u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        let grandparent = parent[parent[x as usize] as usize];
        parent[x as usize] = grandparent;
        x = grandparent;
    }
    x
}

fn union(parent: &mut [u32], x: u32, y: u32) {
    let root_x = find(parent, x);
    let root_y = find(parent, y);
    if root_x != root_y {
        parent[root_y.max(root_x) as usize] = root_y.min(root_x);
    }
}

impl Bipartition {
    /// Create a bipartition from a block lookup table of length 2n.
    ///
    /// Block indices may be arbitrary values below 2n; the table is renormalized. Returns None if
    /// the length is odd or an index is out of range.
    pub fn from_lookup(lookup: Vec<u32>) -> Option<Bipartition> {
        if lookup.len() % 2 != 0 {
            return None;
        }
        if lookup.iter().any(|&b| b as usize >= lookup.len().max(1)) {
            return None;
        }
        Some(Self::normalize(lookup))
    }

    /// Create a bipartition from its blocks in signed notation: tops are 1, ..., n and bottoms
    /// -1, ..., -n.
    ///
    /// Returns None unless the blocks form a partition of exactly that set.
    pub fn from_blocks(blocks: &[Vec<i32>]) -> Option<Bipartition> {
        let count: usize = blocks.iter().map(|block| block.len()).sum();
        if count % 2 != 0 {
            return None;
        }
        let n = count / 2;
        let mut lookup = vec![u32::max_value(); count];
        for (index, block) in blocks.iter().enumerate() {
            for &v in block {
                if v == 0 || v.abs() as usize > n {
                    return None;
                }
                let point = if v > 0 {
                    v as usize - 1
                } else {
                    n + (-v) as usize - 1
                };
                if lookup[point] != u32::max_value() {
                    // repeated point
                    return None;
                }
                lookup[point] = index as u32;
            }
        }
        // count covers 2n points with no repeats, so none can be missing
        Some(Self::normalize(lookup))
    }

    // Relabel blocks in increasing order of first occurrence.
    fn normalize(lookup: Vec<u32>) -> Bipartition {
        let mut relabel = vec![u32::max_value(); lookup.len()];
        let mut normalized = vec![0; lookup.len()];
        let mut next_block = 0;
        for (point, &block) in lookup.iter().enumerate() {
            if relabel[block as usize] == u32::max_value() {
                relabel[block as usize] = next_block;
                next_block += 1;
            }
            normalized[point] = relabel[block as usize];
        }
        Bipartition {
            lookup: normalized.into_boxed_slice(),
            nr_blocks: next_block,
        }
    }

    /// The number of blocks.
    pub fn nr_blocks(&self) -> usize {
        self.nr_blocks as usize
    }

    /// The block index of a point in 0..2n (tops first, then bottoms).
    ///
    /// Panics when the point is out of range.
    pub fn block(&self, point: usize) -> u32 {
        self.lookup[point]
    }

    /// Whether a block contains both top and bottom points.
    ///
    /// Panics when the index is not a block index.
    pub fn is_transverse_block(&self, index: usize) -> bool {
        assert!(index < self.nr_blocks as usize);
        let n = self.lookup.len() / 2;
        let top = self.lookup[..n].iter().any(|&b| b as usize == index);
        let bottom = self.lookup[n..].iter().any(|&b| b as usize == index);
        top && bottom
    }

    /// The blocks in signed notation, ordered by block index, tops before bottoms within each
    /// block.
    pub fn blocks(&self) -> Vec<Vec<i32>> {
        let n = self.lookup.len() / 2;
        let mut blocks = vec![Vec::new(); self.nr_blocks as usize];
        for point in 0..n {
            blocks[self.lookup[point] as usize].push(point as i32 + 1);
        }
        for point in 0..n {
            blocks[self.lookup[n + point] as usize].push(-(point as i32 + 1));
        }
        blocks
    }
}

impl Element for Bipartition {
    fn degree(&self) -> usize {
        self.lookup.len() / 2
    }

    fn identity(&self) -> Option<Bipartition> {
        let n = self.degree();
        let mut lookup = Vec::with_capacity(2 * n);
        lookup.extend(0..n as u32);
        lookup.extend(0..n as u32);
        Some(Bipartition {
            lookup: lookup.into_boxed_slice(),
            nr_blocks: n as u32,
        })
    }

    fn redefine(&mut self, a: &Bipartition, b: &Bipartition) {
        debug_assert_eq!(a.degree(), b.degree());
        let n = a.degree() as u32;
        // Nodes: a's points are 0..2n, b's points are 2n..4n; a's bottom row is glued to b's top
        // row.
        let mut parent: Vec<u32> = (0..4 * n).collect();
        let mut first_of_block = vec![u32::max_value(); 2 * n as usize];
        for (point, &block) in a.lookup.iter().enumerate() {
            if first_of_block[block as usize] == u32::max_value() {
                first_of_block[block as usize] = point as u32;
            } else {
                union(&mut parent, first_of_block[block as usize], point as u32);
            }
        }
        let mut first_of_block = vec![u32::max_value(); 2 * n as usize];
        for (point, &block) in b.lookup.iter().enumerate() {
            if first_of_block[block as usize] == u32::max_value() {
                first_of_block[block as usize] = 2 * n + point as u32;
            } else {
                union(&mut parent, first_of_block[block as usize], 2 * n + point as u32);
            }
        }
        for i in 0..n {
            union(&mut parent, n + i, 2 * n + i);
        }

        // The product's points are a's top row followed by b's bottom row
        let mut block_of_root = vec![u32::max_value(); 4 * n as usize];
        let mut lookup = vec![0; 2 * n as usize];
        let mut next_block = 0;
        for (out, node) in (0..n).chain(3 * n..4 * n).enumerate() {
            let root = find(&mut parent, node);
            if block_of_root[root as usize] == u32::max_value() {
                block_of_root[root as usize] = next_block;
                next_block += 1;
            }
            lookup[out] = block_of_root[root as usize];
        }
        self.lookup = lookup.into_boxed_slice();
        self.nr_blocks = next_block;
    }
}

impl fmt::Display for Bipartition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bipartition({:?})", self.blocks())
    }
}

impl fmt::Debug for Bipartition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_blocks_roundtrip() {
        let b = Bipartition::from_blocks(&[vec![1, -1], vec![2, 3, -2], vec![-3]]).unwrap();
        assert_eq!(b.degree(), 3);
        assert_eq!(b.nr_blocks(), 3);
        assert_eq!(
            b.blocks(),
            vec![vec![1, -1], vec![2, 3, -2], vec![-3]]
        );
        assert_eq!(format!("{}", b), "Bipartition([[1, -1], [2, 3, -2], [-3]])");
    }

    #[test]
    fn from_lookup_normalizes() {
        // arbitrary block ids are relabeled in order of first occurrence
        let a = Bipartition::from_lookup(vec![5, 5, 2, 2, 5, 0]).unwrap();
        let b = Bipartition::from_lookup(vec![0, 0, 1, 1, 0, 2]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.nr_blocks(), 3);
        assert!(Bipartition::from_lookup(vec![0, 0, 1]).is_none());
        assert!(Bipartition::from_lookup(vec![4, 0]).is_none());
    }

    #[test]
    fn from_blocks_rejects_bad_input() {
        // 0 is not a point
        assert!(Bipartition::from_blocks(&[vec![0, 1], vec![-1, 2], vec![-2]]).is_none());
        // repeated point
        assert!(Bipartition::from_blocks(&[vec![1, 1], vec![-1, -2], vec![2]]).is_none());
        // point out of range
        assert!(Bipartition::from_blocks(&[vec![1, 3], vec![-1]]).is_none());
    }

    #[test]
    fn block_queries() {
        let b = Bipartition::from_blocks(&[vec![1, 2], vec![-2, -1, 3], vec![-3]]).unwrap();
        // points 0..3 are tops 1..3, points 3..6 are bottoms -1..-3
        assert_eq!(b.block(0), 0);
        assert_eq!(b.block(1), 0);
        assert_eq!(b.block(2), 1);
        assert_eq!(b.block(4), 1);
        assert!(!b.is_transverse_block(0));
        assert!(b.is_transverse_block(1));
        assert!(!b.is_transverse_block(2));
    }

    #[test]
    fn identity_is_neutral() {
        let b = Bipartition::from_blocks(&[vec![1, -1], vec![2, 3, -2], vec![-3]]).unwrap();
        let id = b.identity().unwrap();
        assert_eq!(Bipartition::product(&id, &b), b);
        assert_eq!(Bipartition::product(&b, &id), b);
    }

    #[test]
    fn stacked_product() {
        // a joins top 1 and 2 to bottom -1; b maps its tops into one block with -2.
        let a = Bipartition::from_blocks(&[vec![1, 2, -1], vec![-2]]).unwrap();
        let b = Bipartition::from_blocks(&[vec![1, -2], vec![2], vec![-1]]).unwrap();
        // Stacking: a's bottom -1 meets b's top 1, which is joined to b's bottom -2;
        // a's bottom -2 meets b's top 2, a singleton; b's bottom -1 is a singleton.
        let expected = Bipartition::from_blocks(&[vec![1, 2, -2], vec![-1]]).unwrap();
        assert_eq!(Bipartition::product(&a, &b), expected);
    }

    #[test]
    fn product_of_all_in_one_block() {
        let a = Bipartition::from_blocks(&[vec![1, 2, -1, -2]]).unwrap();
        assert_eq!(Bipartition::product(&a, &a), a);
        assert_eq!(a.nr_blocks(), 1);
        assert!(a.is_transverse_block(0));
    }
}
