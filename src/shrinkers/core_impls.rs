use super::*;
use alloc::vec::Vec;

/// The default shrinker for `Vec<T>` values.
///
/// See the [`elements()`] function to create new instances and for example
/// usage.
#[derive(Clone, Copy, Debug, Default)]
pub struct Elements {
    _private: (),
}

/// Create a shrinker that removes one element at a time from a `Vec<T>`.
///
/// Candidates are produced front to back: the first candidate is missing the
/// first element, the second candidate is missing the second element, and so
/// on. This is the general-purpose structural shrinker that the engine uses
/// for vectors by default. Unlike [`palindrome()`], it knows nothing about
/// symmetry, so shrinking a palindrome with it almost always produces
/// non-palindromes.
///
/// # Example
///
/// ```
/// use palinshrink::{shrinkers as s, Shrink};
///
/// let mut shrinker = s::elements();
///
/// let candidates: Vec<_> = shrinker.shrink(&vec!['a', 'b', 'a']).collect();
/// assert_eq!(candidates, [vec!['b', 'a'], vec!['a', 'a'], vec!['a', 'b']]);
/// ```
pub fn elements() -> Elements {
    Elements { _private: () }
}

impl<T> Shrink<Vec<T>> for Elements
where
    T: Clone,
{
    type Candidates = ElementsCandidates<T>;

    fn shrink(&mut self, value: &Vec<T>) -> Self::Candidates {
        ElementsCandidates {
            value: value.clone(),
            index: 0,
        }
    }
}

impl<T> DefaultShrink for Vec<T>
where
    T: Clone,
{
    type DefaultShrink = Elements;
}

/// The lazy sequence of candidates produced by the [`Elements`] shrinker.
#[derive(Clone, Debug)]
pub struct ElementsCandidates<T> {
    value: Vec<T>,
    index: usize,
}

impl<T> Iterator for ElementsCandidates<T>
where
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.index >= self.value.len() {
            return None;
        }
        let mut candidate = Vec::with_capacity(self.value.len() - 1);
        candidate.extend_from_slice(&self.value[..self.index]);
        candidate.extend_from_slice(&self.value[self.index + 1..]);
        self.index += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.value.len().saturating_sub(self.index);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for ElementsCandidates<T> where T: Clone {}

/// The default shrinker for `bool` values.
///
/// `true` shrinks to `false`, and `false` is already minimal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bool {
    _private: (),
}

/// Create a new `bool` shrinker.
///
/// # Example
///
/// ```
/// use palinshrink::{shrinkers as s, Shrink};
///
/// let mut shrinker = s::bool();
/// assert_eq!(shrinker.shrink(&true).collect::<Vec<_>>(), [false]);
/// assert_eq!(shrinker.shrink(&false).count(), 0);
/// ```
pub fn bool() -> Bool {
    Bool { _private: () }
}

impl Shrink<bool> for Bool {
    type Candidates = core::option::IntoIter<bool>;

    #[inline]
    fn shrink(&mut self, value: &bool) -> Self::Candidates {
        value.then_some(false).into_iter()
    }
}

impl DefaultShrink for bool {
    type DefaultShrink = Bool;
}

/// The lazy sequence of candidates produced by the integer shrinkers.
///
/// Candidates move toward zero: first zero itself, then values that close the
/// remaining distance by half, a quarter, and so on.
#[derive(Clone, Debug)]
pub struct TowardZero<T> {
    value: T,
    distance: T,
}

macro_rules! ints {
    (
        $(
            $fn_name:ident -> $ty_name:ident for $ty:ty ;
        )*
    ) => {
        $(
            /// A shrinker for
            #[doc = concat!("`", stringify!($ty), "`")]
            /// values.
            ///
            /// See the
            #[doc = concat!("[`", stringify!($fn_name), "()`]")]
            /// function to create new instances and for
            /// example usage.
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $ty_name {
                _private: (),
            }

            /// Create a new
            #[doc = concat!("`", stringify!($ty), "`")]
            /// shrinker.
            ///
            /// # Example
            ///
            /// ```
            /// use palinshrink::{shrinkers as s, Shrink};
            ///
            #[doc = concat!("let mut shrinker = s::", stringify!($fn_name), "();")]
            ///
            /// let candidates: Vec<_> = shrinker.shrink(&100).collect();
            /// assert_eq!(candidates, [0, 50, 75, 88, 94, 97, 99]);
            /// ```
            pub fn $fn_name() -> $ty_name {
                $ty_name { _private: () }
            }

            impl Shrink<$ty> for $ty_name {
                type Candidates = TowardZero<$ty>;

                #[inline]
                fn shrink(&mut self, value: &$ty) -> Self::Candidates {
                    TowardZero {
                        value: *value,
                        distance: *value,
                    }
                }
            }

            impl Iterator for TowardZero<$ty> {
                type Item = $ty;

                fn next(&mut self) -> Option<$ty> {
                    if self.distance == 0 {
                        return None;
                    }
                    let candidate = self.value - self.distance;
                    self.distance /= 2;
                    Some(candidate)
                }
            }

            impl DefaultShrink for $ty {
                type DefaultShrink = $ty_name;
            }
        )*
    };
}

ints! {
    u8 -> U8 for u8;
    u16 -> U16 for u16;
    u32 -> U32 for u32;
    u64 -> U64 for u64;
    u128 -> U128 for u128;
    usize -> Usize for usize;
    i8 -> I8 for i8;
    i16 -> I16 for i16;
    i32 -> I32 for i32;
    i64 -> I64 for i64;
    i128 -> I128 for i128;
    isize -> Isize for isize;
}
