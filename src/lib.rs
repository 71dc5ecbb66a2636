//! A finite semigroup library
//!
//! This crate provides data structures and algorithms for enumerating finite semigroups: given a
//! set of generating elements, the [`Semigroup`](semigroup::Semigroup) engine incrementally
//! discovers every distinct product of generators, assigns each a stable position and answers
//! membership, factorisation and Cayley graph queries over the result.
//!
//! Several element kinds are provided (transformations, partial permutations, boolean matrices,
//! bipartitions and partitioned binary relations); anything implementing
//! [`Element`](element::Element) can generate a semigroup.
pub mod bipartition;
pub mod boolean_mat;
pub mod element;
pub mod error;
pub mod partial_perm;
pub mod pbr;
pub mod recvec;
pub mod report;
pub mod semigroup;
pub mod transformation;

pub use crate::element::Element;
pub use crate::error::Error;
pub use crate::semigroup::Semigroup;

/// Domain point.
///
/// Element domains are always {0, ..., n-1} for some n, and points are represented by non-negative
/// integers (`u32`).
pub type El = u32;

/// Generator index.
pub type Gen = u32;

/// Position of an element in the discovery order of a semigroup.
pub type Pos = u32;

/// A word over the generators of a semigroup, as a sequence of generator indices.
pub type Word = Vec<Gen>;
