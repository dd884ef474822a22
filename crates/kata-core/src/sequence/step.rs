//! Pull protocol for lazy sequences.

use std::iter::FusedIterator;

/// Outcome of pulling one element from a lazy sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// The sequence produced a value and may have more.
    Yielded(T),
    /// The sequence is exhausted. Further pulls keep returning this.
    Exhausted,
}

impl<T> Step<T> {
    /// True once the sequence has nothing left to produce.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Step::Exhausted)
    }

    /// Convert into the `Option` shape used by `Iterator::next`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Yielded(value) => Some(value),
            Step::Exhausted => None,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Step::Yielded(v),
            None => Step::Exhausted,
        }
    }
}

/// A producer of values evaluated on demand.
///
/// Implemented for every [`FusedIterator`], which is what guarantees that
/// exhaustion is signalled once and then repeated for every later pull.
/// Infinite producers simply never return [`Step::Exhausted`].
/// A sequence is not restartable; build a new one to start over.
pub trait LazySequence: FusedIterator {
    /// Pull the next element.
    fn pull(&mut self) -> Step<Self::Item> {
        self.next().into()
    }
}

impl<I: FusedIterator> LazySequence for I {}
