use super::*;
use core::marker::PhantomData;

/// A generator combinator for choosing between two generators by weight.
///
/// See the [`weighted`] function and the [`or`][Generate::or] method on the
/// [`Generate`] trait for details and example usage.
#[derive(Clone, Debug)]
pub struct Weighted<G1, G2> {
    pub(crate) left: (u32, G1),
    pub(crate) right: (u32, G2),
}

/// Create a generator that delegates to `left` or `right`, choosing each with
/// probability proportional to its weight.
///
/// Generating fails with [`ErrorKind::InvalidWeights`] if both weights are
/// zero.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, Context, Generate};
///
/// // Mostly small numbers, occasionally large ones.
/// let mut generator = g::weighted(9, g::range(0..=9), 1, g::range(1000..=9999));
///
/// let mut ctx = Context::new();
/// for _ in 0..5 {
///     let x: i32 = generator.generate(&mut ctx)?;
///     println!("generated {x}");
/// }
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn weighted<G1, G2>(
    left_weight: u32,
    left: G1,
    right_weight: u32,
    right: G2,
) -> Weighted<G1, G2> {
    Weighted {
        left: (left_weight, left),
        right: (right_weight, right),
    }
}

impl<G1, G2, T> Generate<T> for Weighted<G1, G2>
where
    G1: Generate<T>,
    G2: Generate<T>,
{
    fn generate(&mut self, ctx: &mut Context) -> Result<T> {
        match ctx.rng().gen_weighted(self.left.0, self.right.0) {
            Some(true) => self.left.1.generate(ctx),
            Some(false) => self.right.1.generate(ctx),
            None => Err(Error::invalid_weights()),
        }
    }
}

/// A generator combinator for mapping a function over the values produced by
/// another generator.
///
/// See the [`map`][Generate::map] method on the [`Generate`] trait for details
/// and example usage.
pub struct Map<G, F, T> {
    pub(crate) generator: G,
    pub(crate) f: F,
    pub(crate) _input: PhantomData<fn(T)>,
}

impl<G, F, T, U> Generate<U> for Map<G, F, T>
where
    G: Generate<T>,
    F: FnMut(T) -> U,
{
    #[inline]
    fn generate(&mut self, ctx: &mut Context) -> Result<U> {
        let value = self.generator.generate(ctx)?;
        Ok((self.f)(value))
    }
}

/// A generator that always produces the same, given value.
///
/// This is useful for checking a property against one particular input, and
/// for providing base cases to combinators like [`weighted`].
///
/// See the [`just`] function for more information.
#[derive(Clone, Debug, Default)]
pub struct Just<T> {
    pub(crate) value: T,
}

/// Create a generator that always produces (a clone of) the given value.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, Context, Generate};
///
/// let mut generator = g::just(vec![1, 2, 1]);
///
/// let mut ctx = Context::new();
/// assert_eq!(generator.generate(&mut ctx)?, [1, 2, 1]);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn just<T>(value: T) -> Just<T> {
    Just { value }
}

impl<T> Generate<T> for Just<T>
where
    T: Clone,
{
    #[inline]
    fn generate(&mut self, _ctx: &mut Context) -> Result<T> {
        Ok(self.value.clone())
    }
}
