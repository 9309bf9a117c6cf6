//! The provided set of shrinkers and shrinker combinators.
//!
//! It is idiomatic to import this module with the alias `s`:
//!
//! ```rust
//! use palinshrink::shrinkers as s;
//! ```
//!
//! The most interesting shrinker here is [`palindrome()`], which only ever
//! produces palindromes from a palindrome. The others are the engine's
//! defaults for common types, plus [`none()`] and [`from_fn()`].

use super::*;
use core::marker::PhantomData;

mod core_impls;
mod palindrome;

pub use core_impls::*;
pub use palindrome::*;

/// Get the default shrinker for a given type.
///
/// # Example
///
/// ```
/// use palinshrink::{shrinkers as s, Shrink};
///
/// let mut shrinker = s::default::<Vec<u8>>();
///
/// let candidates: Vec<_> = shrinker.shrink(&vec![1, 2, 3]).collect();
/// assert_eq!(candidates, [vec![2, 3], vec![1, 3], vec![1, 2]]);
/// ```
pub fn default<T>() -> <T as DefaultShrink>::DefaultShrink
where
    T: DefaultShrink,
{
    T::DefaultShrink::default()
}

/// A shrinker that never produces any candidates.
///
/// See the [`none()`] function to create new instances and for example usage.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCandidates {
    _private: (),
}

/// Create a shrinker that never produces any candidates.
///
/// Checking a property with this shrinker reports the first failing input
/// exactly as it was generated.
///
/// # Example
///
/// ```
/// use palinshrink::{shrinkers as s, Shrink};
///
/// let mut shrinker = s::none();
/// assert_eq!(shrinker.shrink(&vec![1, 2, 1]).count(), 0);
/// ```
pub fn none() -> NoCandidates {
    NoCandidates { _private: () }
}

impl<T> Shrink<T> for NoCandidates {
    type Candidates = core::iter::Empty<T>;

    #[inline]
    fn shrink(&mut self, _value: &T) -> Self::Candidates {
        core::iter::empty()
    }
}

/// A shrinker that is implemented by a function.
///
/// See the [`from_fn()`] function to create new instances and for example
/// usage.
pub struct FromFn<F, I> {
    f: F,
    _candidates: PhantomData<fn() -> I>,
}

/// Create a shrinker from a function that returns the candidates for a value.
///
/// # Example
///
/// ```
/// use palinshrink::{shrinkers as s, Shrink};
///
/// // Shrink a string by dropping its last character.
/// let mut shrinker = s::from_fn(|x: &String| {
///     let mut x = x.clone();
///     x.pop().map(|_| x)
/// });
///
/// let candidates: Vec<_> = shrinker.shrink(&"abc".to_string()).collect();
/// assert_eq!(candidates, ["ab"]);
/// ```
pub fn from_fn<F, I, T>(f: F) -> FromFn<F, I>
where
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    FromFn {
        f,
        _candidates: PhantomData,
    }
}

impl<F, I, T> Shrink<T> for FromFn<F, I>
where
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    type Candidates = I::IntoIter;

    #[inline]
    fn shrink(&mut self, value: &T) -> Self::Candidates {
        (self.f)(value).into_iter()
    }
}
