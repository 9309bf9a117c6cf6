//! A small property-checking engine built on [`Generate`] and [`Shrink`].
//!
//! The primary entry point for this engine is the [`Check`] type.
//!
//! This engine is designed to be used for smoke tests inside `#[test]`
//! functions. It should compile and run quickly, and is therefore suitable for
//! quick (but relatively shallow) iteration cycles like `cargo test` runs and
//! CI.
//!
//! # Example
//!
//! ```
//! mod tests {
//!     use palinshrink::{check::Check, generators as g, is_palindrome, shrinkers as s};
//!
//!     fn test_palindromes_are_palindromes() {
//!         let result = Check::new()
//!             .iters(1000)
//!             .shrink_iters(1000)
//!             .run_with_shrinker(
//!                 g::palindrome(g::i32()),
//!                 s::palindrome(),
//!                 |xs: &Vec<i32>| {
//!                     if is_palindrome(xs, false) {
//!                         Ok(())
//!                     } else {
//!                         Err("not a palindrome!")
//!                     }
//!                 },
//!             );
//!         assert!(result.is_ok());
//!     }
//! }
//! ```

use super::*;
use std::any::Any;
use std::fmt::{self, Debug};
use std::panic;
use std::string::{String, ToString};

/// The result of running a check.
///
/// If the check passes, this is `Ok(())`.
///
/// If the check fails, this is `Err(CheckError::Failed(_))` with the shrunken
/// failing test case and an error message.
///
/// If there is some other kind of error while running the check, for example if
/// a generator was given an invalid range, then this is
/// `Err(CheckError::Error(_))`.
pub type CheckResult<T> = std::result::Result<(), CheckError<T>>;

/// An error when running a `Check`.
#[derive(Debug)]
pub enum CheckError<T> {
    /// The check failed.
    ///
    /// This indicates that the property being checked is not upheld for the
    /// given test case.
    Failed(CheckFailure<T>),

    /// An error occurred while running the check.
    Error(Error),
}

impl<T> From<Error> for CheckError<T> {
    fn from(v: Error) -> Self {
        Self::Error(v)
    }
}

impl<T> From<CheckFailure<T>> for CheckError<T> {
    fn from(v: CheckFailure<T>) -> Self {
        Self::Failed(v)
    }
}

impl<T> fmt::Display for CheckError<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Failed(failure) => fmt::Display::fmt(failure, f),
            CheckError::Error(e) => write!(f, "error while running check: {e}"),
        }
    }
}

impl<T> std::error::Error for CheckError<T> where T: Debug {}

impl<T> CheckError<T> {
    /// Unwrap the underlying `CheckError::Failed(_)` payload, panicking if this
    /// is not a `CheckError::Failed`.
    #[track_caller]
    pub fn unwrap_failed(self) -> CheckFailure<T> {
        match self {
            CheckError::Failed(f) => f,
            _ => panic!("CheckError::unwrap_failed called on non-failed CheckError"),
        }
    }

    /// Unwrap the underlying `CheckError::Error(_)` payload, panicking if this
    /// is not a `CheckError::Error(_)`.
    #[track_caller]
    pub fn unwrap_error(self) -> Error {
        match self {
            CheckError::Error(e) => e,
            _ => panic!("CheckError::unwrap_error called on non-error CheckError"),
        }
    }
}

/// A failing test case, after shrinking.
///
/// # Example
///
/// ```
/// use palinshrink::{check::Check, generators as g, shrinkers as s};
///
/// let failure = Check::new()
///     .run_with_shrinker(
///         g::just(vec![1, 2, 3, 2, 1]),
///         s::palindrome(),
///         |xs: &Vec<i32>| {
///             if xs.is_empty() {
///                 Ok(())
///             } else {
///                 Err("expected an empty sequence!")
///             }
///         },
///     )
///     .unwrap_err()
///     .unwrap_failed();
///
/// assert_eq!(failure.original, [1, 2, 3, 2, 1]);
/// assert_eq!(failure.value, [1]);
/// assert_eq!(failure.message, "expected an empty sequence!");
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub struct CheckFailure<T> {
    /// The generated input value that first triggered the failure.
    pub original: T,

    /// The smallest failing input value that shrinking found.
    ///
    /// This is always a value that failed the property; if no shrink
    /// candidate failed, then it is the same as `original`.
    pub value: T,

    /// The failure message for `value`.
    pub message: String,

    /// How many times a smaller failing value replaced the current one.
    pub shrinks: usize,
}

impl<T> fmt::Display for CheckFailure<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "property failed on input {:?}: {} (shrunk {} times from {:?})",
            self.value, self.message, self.shrinks, self.original,
        )
    }
}

/// A check that can be run to test a property.
///
/// # Example
///
/// ```
/// use palinshrink::{check::Check, generators as g, is_palindrome, shrinkers as s};
///
/// let failure = Check::new()
///     // Check the property on up to 1000 generated values.
///     .iters(1000)
///     // If we find a failing test case, try to shrink it down to a minimal
///     // failing test case by evaluating up to 1000 shrink candidates.
///     .shrink_iters(1000)
///     // Start with palindromes of up to 2 * 20 + 1 elements.
///     .start_size(20)
///     // Run the property check, with a deliberately buggy predicate.
///     .run_with_shrinker(
///         g::palindrome(g::i32()),
///         s::palindrome(),
///         |xs: &Vec<i32>| {
///             if is_palindrome(xs, true) {
///                 Ok(())
///             } else {
///                 Err("not a palindrome!")
///             }
///         },
///     )
///     .unwrap_err()
///     .unwrap_failed();
///
/// // The bug only shows up with odd-length inputs that have at least three
/// // elements, and palindrome shrinking finds the smallest one.
/// assert_eq!(failure.value.len(), 3);
/// ```
#[derive(Debug)]
pub struct Check {
    iters: usize,
    shrink_iters: usize,
    start_size: usize,
    end_size: usize,
    seed: Option<u64>,
}

impl Default for Check {
    fn default() -> Check {
        Check::new()
    }
}

impl Check {
    /// Create a new `Check`.
    pub fn new() -> Check {
        Check {
            iters: 1000,
            shrink_iters: 1000,
            start_size: DEFAULT_SIZE,
            end_size: 100,
            seed: None,
        }
    }

    /// Configure the number of test iterations to run.
    pub fn iters(&mut self, iters: usize) -> &mut Check {
        self.iters = iters;
        self
    }

    /// Configure the number of shrink candidates to evaluate before reporting
    /// the failure.
    ///
    /// Setting this to zero disables shrinking.
    pub fn shrink_iters(&mut self, shrink_iters: usize) -> &mut Check {
        self.shrink_iters = shrink_iters;
        self
    }

    /// Configure the size that generators are given for the first iteration.
    pub fn start_size(&mut self, size: usize) -> &mut Check {
        self.start_size = size;
        self
    }

    /// Configure the size that generators are given for the last iteration.
    ///
    /// The size grows linearly from the start size to the end size. If the
    /// end size is smaller than the start size, then the start size is used
    /// for every iteration.
    pub fn end_size(&mut self, size: usize) -> &mut Check {
        self.end_size = size;
        self
    }

    /// Configure the random number generator's seed.
    pub fn seed(&mut self, seed: u64) -> &mut Check {
        self.seed = Some(seed);
        self
    }

    /// Run this configured `Check`, generating values with the given
    /// `generator`, checking that the given `property` function returns
    /// `Ok(_)` for all of them, and shrinking failures with `T`'s default
    /// shrinker.
    pub fn run<G, T, S>(
        &self,
        generator: G,
        property: impl FnMut(&T) -> std::result::Result<(), S>,
    ) -> CheckResult<T>
    where
        G: Generate<T>,
        T: Clone + Debug + DefaultShrink,
        S: ToString,
    {
        self.run_with_shrinker(generator, shrinkers::default::<T>(), property)
    }

    /// Run this configured `Check`, generating values with the given
    /// `generator`, checking that the given `property` function returns
    /// `Ok(_)` for all of them, and shrinking failures with the given
    /// `shrinker`.
    pub fn run_with_shrinker<G, H, T, S>(
        &self,
        mut generator: G,
        mut shrinker: H,
        mut property: impl FnMut(&T) -> std::result::Result<(), S>,
    ) -> CheckResult<T>
    where
        G: Generate<T>,
        H: Shrink<T>,
        T: Clone + Debug,
        S: ToString,
    {
        let mut ctx = Context::new();
        if let Some(seed) = self.seed {
            ctx = ctx.seed(seed);
        }

        for i in 0..self.iters {
            ctx.set_size(self.size_for(i));
            let value = generator.generate(&mut ctx)?;
            crate::log::trace!("iteration {i}: checking {value:?}");

            if let Some(message) = evaluate(&mut property, &value) {
                crate::log::info!("failed on input {value:?}: {message}");
                return Err(self.shrink(&mut shrinker, value, &mut property, message).into());
            }
        }

        crate::log::debug!("property held for {} iterations", self.iters);
        Ok(())
    }

    fn size_for(&self, iter: usize) -> usize {
        if self.end_size <= self.start_size || self.iters <= 1 {
            return self.start_size;
        }
        // Widened so that huge end sizes cannot overflow; the quotient is at
        // most `growth`.
        let growth = (self.end_size - self.start_size) as u128;
        let step = growth * iter as u128 / (self.iters - 1) as u128;
        self.start_size + step as usize
    }

    fn shrink<H, T, S>(
        &self,
        shrinker: &mut H,
        original: T,
        property: &mut impl FnMut(&T) -> std::result::Result<(), S>,
        mut message: String,
    ) -> CheckFailure<T>
    where
        H: Shrink<T>,
        T: Clone + Debug,
        S: ToString,
    {
        let mut value = original.clone();
        let mut shrinks = 0;

        if self.shrink_iters > 0 {
            crate::log::info!("shrinking for up to {} iters...", self.shrink_iters);
        }

        let mut attempts = 0;
        'shrinking: while attempts < self.shrink_iters {
            let mut found_smaller = false;

            for candidate in shrinker.shrink(&value) {
                if attempts == self.shrink_iters {
                    break 'shrinking;
                }
                attempts += 1;

                // A passing candidate is thrown away; a failing one replaces
                // the current value and we ask for the next candidates.
                if let Some(msg) = evaluate(property, &candidate) {
                    crate::log::debug!("got failure for shrunken input {candidate:?}: {msg}");
                    value = candidate;
                    message = msg;
                    shrinks += 1;
                    found_smaller = true;
                    break;
                }
            }

            // Exhausted every candidate without another failure.
            if !found_smaller {
                break;
            }
        }

        crate::log::info!("shrunk failing input down to {value:?} in {shrinks} steps");
        CheckFailure {
            original,
            value,
            message,
            shrinks,
        }
    }
}

/// Evaluate the property on `value`, returning the failure message if it does
/// not hold. Panics count as failures.
fn evaluate<T, S>(
    property: &mut impl FnMut(&T) -> std::result::Result<(), S>,
    value: &T,
) -> Option<String>
where
    S: ToString,
{
    match panic::catch_unwind(panic::AssertUnwindSafe(|| property(value))) {
        Ok(Ok(())) => None,
        Ok(Err(message)) => Some(message.to_string()),
        Err(payload) => Some(panic_message(&*payload)),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("<panicked: {s}>")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("<panicked: {s}>")
    } else {
        "<panicked>".to_string()
    }
}
