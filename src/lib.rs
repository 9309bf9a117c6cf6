#![doc = include_str!("../README.md")]
#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

pub mod _guide;
pub mod error;
pub mod generators;
mod log;
pub mod palindrome;
mod rng;
pub mod shrinkers;

#[cfg(feature = "check")]
pub mod check;

pub use error::{Error, ErrorKind, ErrorMessage, Result};
pub use palindrome::{is_palindrome, is_palindrome_with, DeliberateBug};
pub use rng::Rng;

const DEFAULT_SIZE: usize = 20;

/// The context for generating a value.
///
/// A context holds the pseudorandom number generator that drives every random
/// choice, and the current *size*: the upper bound that generators of
/// collections use for their lengths. The [`Check`][crate::check::Check]
/// engine grows the size as it runs more iterations, so that early test cases
/// are small and later ones are larger.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, Context, Generate};
///
/// let mut ctx = Context::new().seed(0x12345678).size(5);
///
/// let xs = g::vec(g::u8()).generate(&mut ctx)?;
/// assert!(xs.len() <= 5);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Context {
    rng: Rng,
    size: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new context with the default seed and size.
    pub fn new() -> Self {
        Self {
            rng: Rng::default(),
            size: DEFAULT_SIZE,
        }
    }

    /// Reseed this context's random number generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Rng::new(seed);
        self
    }

    /// Configure this context's size.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Get this context's random number generator.
    #[inline]
    #[must_use]
    pub fn rng(&mut self) -> &mut Rng {
        &mut self.rng
    }

    /// Get the current size bound for generated collections.
    #[inline]
    #[must_use]
    pub fn current_size(&self) -> usize {
        self.size
    }

    #[inline]
    #[cfg_attr(not(feature = "check"), allow(dead_code))]
    pub(crate) fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

/// A generator of random `T` values.
///
/// Generators are the first half of a property check: they produce the test
/// cases that a property is evaluated against. See the
/// [`generators`][crate::generators] module for the built-in generators and
/// combinators.
///
/// # Example
///
/// A generator of even numbers:
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{Context, Generate, Result};
///
/// struct Evens;
///
/// impl Generate<u32> for Evens {
///     fn generate(&mut self, ctx: &mut Context) -> Result<u32> {
///         Ok(ctx.rng().gen_u32() & !1)
///     }
/// }
///
/// let mut ctx = Context::new();
/// let x = Evens.generate(&mut ctx)?;
/// assert_eq!(x % 2, 0);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub trait Generate<T> {
    /// Generate a new `T` value, using the given context's random number
    /// generator and size.
    fn generate(&mut self, ctx: &mut Context) -> Result<T>;

    /// Create a generator that chooses between this generator and `other`
    /// with equal probability.
    ///
    /// Use [`generators::weighted`] for anything other than a fair choice.
    ///
    /// # Example
    ///
    /// ```
    /// # fn foo() -> palinshrink::Result<()> {
    /// use palinshrink::{generators as g, Context, Generate};
    ///
    /// let mut generator = g::just(0).or(g::range(100..=200));
    ///
    /// let mut ctx = Context::new();
    /// let x = generator.generate(&mut ctx)?;
    /// assert!(x == 0 || (100..=200).contains(&x));
    /// # Ok(())
    /// # }
    /// # foo().unwrap();
    /// ```
    #[inline]
    #[must_use = "generators do nothing until you call their `generate` method"]
    fn or<G>(self, other: G) -> generators::Weighted<Self, G>
    where
        Self: Sized,
    {
        generators::weighted(1, self, 1, other)
    }

    /// Create a generator that applies `f` to every value that this generator
    /// produces.
    ///
    /// # Example
    ///
    /// ```
    /// # fn foo() -> palinshrink::Result<()> {
    /// use palinshrink::{generators as g, Context, Generate};
    ///
    /// let mut generator = g::range(0..=9).map(|x: u32| x * 2);
    ///
    /// let mut ctx = Context::new();
    /// let x = generator.generate(&mut ctx)?;
    /// assert_eq!(x % 2, 0);
    /// # Ok(())
    /// # }
    /// # foo().unwrap();
    /// ```
    #[inline]
    #[must_use = "generators do nothing until you call their `generate` method"]
    fn map<F, U>(self, f: F) -> generators::Map<Self, F, T>
    where
        Self: Sized,
        F: FnMut(T) -> U,
    {
        generators::Map {
            generator: self,
            f,
            _input: core::marker::PhantomData,
        }
    }
}

impl<G, T> Generate<T> for &mut G
where
    G: Generate<T>,
{
    fn generate(&mut self, ctx: &mut Context) -> Result<T> {
        (**self).generate(ctx)
    }
}

/// A trait for getting the default generator for a type.
pub trait DefaultGenerate: Sized {
    /// The default generator for this type.
    type DefaultGenerate: Generate<Self> + Default;
}

/// A shrinker: given a failing test case, produce smaller candidates.
///
/// The candidates are produced lazily, in order, and each candidate is an
/// independent, owned value: the engine pulls one candidate at a time,
/// re-evaluates the property on it, and stops pulling as soon as it finds a
/// candidate that still fails.
///
/// See the [`shrinkers`][crate::shrinkers] module for the built-in shrinkers,
/// including the palindrome-preserving [`shrinkers::palindrome`][crate::shrinkers::palindrome()].
///
/// # Example
///
/// ```
/// use palinshrink::{shrinkers as s, Shrink};
///
/// let mut shrinker = s::palindrome();
///
/// let candidates: Vec<_> = shrinker.shrink(&vec![7, 7]).collect();
/// assert_eq!(candidates, [vec![7], vec![]]);
/// ```
pub trait Shrink<T> {
    /// The lazy sequence of candidates produced for a single value.
    type Candidates: Iterator<Item = T>;

    /// Get the candidates that `value` may be shrunk to, in the order they
    /// should be tried.
    fn shrink(&mut self, value: &T) -> Self::Candidates;
}

impl<S, T> Shrink<T> for &mut S
where
    S: Shrink<T>,
{
    type Candidates = S::Candidates;

    fn shrink(&mut self, value: &T) -> Self::Candidates {
        (**self).shrink(value)
    }
}

/// A trait for getting the default shrinker for a type.
///
/// This is the shrinker that the [`Check`][crate::check::Check] engine uses
/// when it is not given one explicitly.
pub trait DefaultShrink: Sized {
    /// The default shrinker for this type.
    type DefaultShrink: Shrink<Self> + Default;
}

fn _static_assert_object_safety(_: &dyn Generate<u8>) {}
