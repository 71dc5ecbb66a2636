//! Error types.
use thiserror::Error;

/// Errors produced when constructing or querying a semigroup.
///
/// A membership or position query for an element outside the closure is not an error; those
/// queries return `Option` or `bool` instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The generating set was empty.
    #[error("the generating set must not be empty")]
    EmptyGeneratingSet,

    /// Two generators reported different degrees.
    #[error("generator degrees differ: expected {expected}, found {found}")]
    DegreeMismatch {
        /// Degree of the first generator.
        expected: usize,
        /// The incompatible degree.
        found: usize,
    },

    /// A queried position lies beyond the elements known so far.
    #[error("position {position} is out of range for {known} known elements")]
    OutOfRange {
        /// The queried position.
        position: usize,
        /// Number of elements discovered so far.
        known: usize,
    },

    /// The element kind has no identity element to adjoin.
    #[error("the element kind has no identity element")]
    NoIdentity,
}
