//! Partitioned binary relations.
use std::fmt;

use crate::element::Element;
use crate::El;

/// A partitioned binary relation of degree n.
///
/// A partitioned binary relation (PBR) generalizes a bipartition: it is an arbitrary directed
/// graph on 2n points, where points 0..n are the "top" row and points n..2n the "bottom" row.
/// Adjacency need not be symmetric.
///
/// Each point's out-neighbours are stored as a sorted list. The product `a * b` glues a's bottom
/// row to b's top row and connects two outer points when there is a directed path between them
/// whose interior lies entirely in the glued middle rows.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pbr {
    adj: Box<[Vec<El>]>,
}

impl Pbr {
    /// Create a PBR from the out-neighbour lists of the points 0..2n, tops first.
    ///
    /// Returns None if the number of lists is odd, a neighbour is out of range, or a list repeats
    /// a neighbour. Lists are sorted internally.
    pub fn from_adjacencies(mut adj: Vec<Vec<El>>) -> Option<Pbr> {
        let nr_points = adj.len();
        if nr_points % 2 != 0 {
            return None;
        }
        for neighbours in adj.iter_mut() {
            if neighbours.iter().any(|&v| v as usize >= nr_points) {
                return None;
            }
            neighbours.sort();
            for pair in neighbours.windows(2) {
                if pair[0] == pair[1] {
                    return None;
                }
            }
        }
        Some(Pbr {
            adj: adj.into_boxed_slice(),
        })
    }

    /// The out-neighbours of a point in 0..2n, sorted.
    ///
    /// Panics when the point is out of range.
    pub fn neighbours(&self, point: usize) -> &[El] {
        &self.adj[point]
    }
}

// Exploration of a's graph during the product a * b. Edges to a's top row are outputs; edges to
// a's bottom row cross into b's top row.
fn follow_left(
    n: usize,
    point: usize,
    a: &Pbr,
    b: &Pbr,
    left_seen: &mut [bool],
    right_seen: &mut [bool],
    out: &mut Vec<El>,
) {
    for &next in a.adj[point].iter() {
        let next = next as usize;
        if next < n {
            out.push(next as El);
        } else if !right_seen[next - n] {
            right_seen[next - n] = true;
            follow_right(n, next - n, a, b, left_seen, right_seen, out);
        }
    }
}

// Exploration of b's graph. Edges to b's bottom row are outputs; edges to b's top row cross back
// into a's bottom row.
fn follow_right(
    n: usize,
    point: usize,
    a: &Pbr,
    b: &Pbr,
    left_seen: &mut [bool],
    right_seen: &mut [bool],
    out: &mut Vec<El>,
) {
    for &next in b.adj[point].iter() {
        let next = next as usize;
        if next >= n {
            out.push(next as El);
        } else if !left_seen[next] {
            left_seen[next] = true;
            follow_left(n, n + next, a, b, left_seen, right_seen, out);
        }
    }
}

impl Element for Pbr {
    fn degree(&self) -> usize {
        self.adj.len() / 2
    }

    fn identity(&self) -> Option<Pbr> {
        let n = self.degree();
        let adj: Vec<Vec<El>> = (0..2 * n)
            .map(|point| {
                if point < n {
                    vec![(point + n) as El]
                } else {
                    vec![(point - n) as El]
                }
            })
            .collect();
        Some(Pbr {
            adj: adj.into_boxed_slice(),
        })
    }

    fn redefine(&mut self, a: &Pbr, b: &Pbr) {
        debug_assert_eq!(a.degree(), b.degree());
        let n = a.degree();
        let mut adj: Vec<Vec<El>> = vec![Vec::new(); 2 * n];
        for point in 0..n {
            let mut left_seen = vec![false; n];
            let mut right_seen = vec![false; n];
            follow_left(n, point, a, b, &mut left_seen, &mut right_seen, &mut adj[point]);
        }
        for point in 0..n {
            let mut left_seen = vec![false; n];
            let mut right_seen = vec![false; n];
            follow_right(
                n,
                n + point,
                a,
                b,
                &mut left_seen,
                &mut right_seen,
                &mut adj[n + point],
            );
        }
        for neighbours in adj.iter_mut() {
            neighbours.sort();
            neighbours.dedup();
        }
        self.adj = adj.into_boxed_slice();
    }
}

impl fmt::Display for Pbr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PBR({:?})", &self.adj[..])
    }
}

impl fmt::Debug for Pbr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
