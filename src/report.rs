//! Enumeration progress reporting.
//!
//! Instead of a process-wide verbosity flag, progress is reported through an observer injected
//! into the semigroup with [`Semigroup::set_observer`](crate::semigroup::Semigroup::set_observer).
//! The engine also logs the same milestones through the `log` crate at debug level.

/// A snapshot of enumeration progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Number of distinct elements discovered so far.
    pub nr_elements: usize,
    /// Number of elements already expanded by every generator.
    pub nr_expanded: usize,
    /// Length of the longest factorisation word among the known elements.
    pub max_word_length: usize,
    /// Whether the closure is complete.
    pub done: bool,
}

/// An observer invoked at enumeration milestones.
///
/// Milestones are the completion of a breadth-first layer (all elements of a given word length)
/// and the end of each enumeration call. Any `FnMut(Progress)` closure is an observer.
pub trait Observer {
    /// Called with the current progress snapshot.
    fn update(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> Observer for F {
    fn update(&mut self, progress: Progress) {
        self(progress)
    }
}
