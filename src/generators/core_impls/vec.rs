use super::*;

/// A generator for `Vec<T>` values.
///
/// See the [`vec()`] function to create new instances and for example usage.
#[derive(Clone, Debug, Default)]
pub struct Vec<G> {
    element: G,
}

/// Create a generator of `Vec<T>` values out of a generator of `T` values.
///
/// The length of each generated vector is chosen uniformly between zero and
/// the context's [current size][Context::current_size], inclusive.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, Context, Generate};
///
/// let mut ctx = Context::new().size(3);
///
/// let xs = g::vec(g::range(0..=9)).generate(&mut ctx)?;
/// assert!(xs.len() <= 3);
/// assert!(xs.iter().all(|x| (0..=9).contains(x)));
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn vec<G>(element: G) -> Vec<G> {
    Vec { element }
}

impl<G, T> Generate<alloc::vec::Vec<T>> for Vec<G>
where
    G: Generate<T>,
{
    fn generate(&mut self, ctx: &mut Context) -> Result<alloc::vec::Vec<T>> {
        let size = ctx.current_size();
        let len = ctx.rng().gen_len(size);
        generate_n(&mut self.element, ctx, len)
    }
}

impl<T> DefaultGenerate for alloc::vec::Vec<T>
where
    T: DefaultGenerate,
{
    type DefaultGenerate = Vec<T::DefaultGenerate>;
}
