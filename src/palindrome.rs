//! Deciding whether a sequence is a palindrome.
//!
//! A palindrome is a sequence that is equal to its own reverse. Empty and
//! single-element sequences are always palindromes.
//!
//! The predicate has a *deliberate bug* mode, which makes it give wrong answers
//! for odd-length sequences. It exists so that tests can manufacture a property
//! that fails in a controlled way, and then watch the engine shrink the failing
//! input. See [`DeliberateBug`] for the exact shape of the bug.

/// Which shape of the deliberate off-by-one bug to inject.
///
/// In both shapes, the bug only affects odd-length sequences: instead of
/// comparing the first element to the last, the predicate compares the
/// *second* element to the last. The predicate then drops the first and last
/// elements and continues inward; the two shapes differ only in whether the
/// inner, still odd-length, remainders are compared with the bug as well.
///
/// ```
/// use palinshrink::{is_palindrome_with, DeliberateBug};
///
/// // The outer pair compares `2 == 2` with either bug shape.
/// let xs = [1, 2, 3, 2, 2];
///
/// // Then the inner remainder `[2, 3, 2]` is compared normally...
/// assert!(is_palindrome_with(&xs, Some(DeliberateBug::Outermost)));
///
/// // ...or with the bug again, comparing `3 == 2`.
/// assert!(!is_palindrome_with(&xs, Some(DeliberateBug::EveryLevel)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeliberateBug {
    /// Only the outermost comparison is wrong.
    ///
    /// This is the shape used by [`is_palindrome`] when its `introduce_bug`
    /// argument is `true`.
    #[default]
    Outermost,

    /// Every comparison on an odd-length remainder is wrong.
    EveryLevel,
}

/// Is `xs` a palindrome?
///
/// When `introduce_bug` is `true`, odd-length sequences are checked with the
/// [`DeliberateBug::Outermost`] defect. Even-length sequences, and sequences of
/// length zero or one, always get the correct answer.
///
/// # Example
///
/// ```
/// use palinshrink::is_palindrome;
///
/// assert!(is_palindrome(&[1, 2, 3, 2, 1], false));
/// assert!(!is_palindrome(&[1, 2, 3], false));
///
/// // The deliberate bug compares `2` to the last `1`.
/// assert!(!is_palindrome(&[1, 2, 1], true));
///
/// // Trivial sequences are always palindromes.
/// assert!(is_palindrome::<u8>(&[], true));
/// assert!(is_palindrome(&['x'], true));
/// ```
#[inline]
pub fn is_palindrome<T>(xs: &[T], introduce_bug: bool) -> bool
where
    T: PartialEq,
{
    let bug = if introduce_bug {
        Some(DeliberateBug::Outermost)
    } else {
        None
    };
    is_palindrome_with(xs, bug)
}

/// Is `xs` a palindrome, optionally checked with the given deliberate bug?
///
/// Passing `None` gives the correct answer for every input.
pub fn is_palindrome_with<T>(xs: &[T], bug: Option<DeliberateBug>) -> bool
where
    T: PartialEq,
{
    if xs.len() <= 1 {
        return true;
    }

    // Peeling a pair off both ends never changes the remainder's parity.
    let odd = xs.len() % 2 == 1;
    let mut lo = 0;
    let mut hi = xs.len() - 1;
    let mut outermost = true;

    while lo < hi {
        let buggy = odd
            && match bug {
                None => false,
                Some(DeliberateBug::Outermost) => outermost,
                Some(DeliberateBug::EveryLevel) => true,
            };
        let left = if buggy { lo + 1 } else { lo };
        if xs[left] != xs[hi] {
            return false;
        }
        lo += 1;
        hi -= 1;
        outermost = false;
    }

    true
}
