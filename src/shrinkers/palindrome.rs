use super::*;
use alloc::vec::Vec;

/// A shrinker for palindromes that only ever produces palindromes.
///
/// See the [`palindrome()`] function to create new instances and for example
/// usage.
#[derive(Clone, Copy, Debug, Default)]
pub struct Palindrome {
    _private: (),
}

/// Create a shrinker that shrinks palindromes into smaller palindromes.
///
/// The candidates are produced by removing elements from the middle of the
/// sequence, one at a time:
///
/// * An odd-length sequence loses its middle element.
///
/// * An even-length sequence loses its two central elements, one after the
///   other, and each removal is its own candidate.
///
/// Removing from the center is the only single-element removal that keeps a
/// palindrome symmetric in general; removing from either end almost never
/// does. Each candidate is exactly one element shorter than the previous one,
/// so the stream ends after at most as many candidates as the input has
/// elements. A single-element sequence is already minimal and produces no
/// candidates at all.
///
/// The shrinker does not check candidates against any property; it is the
/// engine's job to re-evaluate each one. In debug builds, giving it a value
/// that is not a palindrome panics.
///
/// # Example
///
/// ```
/// use palinshrink::{shrinkers as s, Shrink};
///
/// let mut shrinker = s::palindrome();
///
/// let candidates: Vec<_> = shrinker.shrink(&vec![1, 2, 3, 2, 1]).collect();
/// assert_eq!(
///     candidates,
///     [
///         vec![1, 2, 2, 1],
///         vec![1, 2, 1],
///         vec![1, 1],
///         vec![1],
///         vec![],
///     ],
/// );
///
/// assert_eq!(shrinker.shrink(&vec![5]).count(), 0);
/// ```
pub fn palindrome() -> Palindrome {
    Palindrome { _private: () }
}

impl<T> Shrink<Vec<T>> for Palindrome
where
    T: Clone + PartialEq,
{
    type Candidates = PalindromeCandidates<T>;

    fn shrink(&mut self, value: &Vec<T>) -> Self::Candidates {
        PalindromeCandidates::new(value)
    }
}

/// The lazy sequence of candidates produced by the [`Palindrome`] shrinker.
///
/// Every call to `next` removes a single element from a private working copy
/// and returns a fresh copy of the result, so candidates stay valid no matter
/// how long the caller holds on to them.
#[derive(Clone, Debug)]
pub struct PalindromeCandidates<T> {
    working: Vec<T>,
    // Set between the two removals that peel the center pair of an
    // even-length sequence.
    peeling_pair: bool,
    done: bool,
}

impl<T> PalindromeCandidates<T>
where
    T: Clone + PartialEq,
{
    /// Create the candidates for the given palindrome.
    pub fn new(value: &[T]) -> Self {
        debug_assert!(
            is_palindrome(value, false),
            "the palindrome shrinker was given a value that is not a palindrome",
        );
        Self {
            working: value.to_vec(),
            peeling_pair: false,
            done: false,
        }
    }
}

impl<T> Iterator for PalindromeCandidates<T>
where
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let len = self.working.len();
        if self.done || len == 0 {
            return None;
        }

        if self.peeling_pair {
            self.peeling_pair = false;
        } else if len % 2 == 0 {
            self.peeling_pair = true;
        } else if len == 1 {
            self.done = true;
            return None;
        }

        // For odd lengths this is the middle element, and for even lengths
        // the left one of the two central elements. After removing the left
        // one, the right one moves into the same index.
        let index = (len - 1) / 2;
        crate::log::trace!("shrinking palindrome of length {len} at index {index}");
        self.working.remove(index);
        Some(self.working.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.working.len();
        let upper = if self.done || (len == 1 && !self.peeling_pair) {
            0
        } else {
            len
        };
        (0, Some(upper))
    }
}

impl<T> core::iter::FusedIterator for PalindromeCandidates<T> where T: Clone {}
