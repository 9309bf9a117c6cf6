use super::*;
use alloc::vec::Vec;

/// A generator for even-length palindromes.
///
/// See the [`even_palindrome()`] function to create new instances and for
/// example usage.
#[derive(Clone, Debug, Default)]
pub struct EvenPalindrome<G> {
    element: G,
}

/// Create a generator of even-length palindromes.
///
/// Each palindrome is an arbitrary prefix, whose length is chosen as in
/// [`vec()`], followed by the reverse of that prefix.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, is_palindrome, Context, Generate};
///
/// let mut ctx = Context::new();
///
/// let xs = g::even_palindrome(g::u8()).generate(&mut ctx)?;
/// assert_eq!(xs.len() % 2, 0);
/// assert!(is_palindrome(&xs, false));
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn even_palindrome<G>(element: G) -> EvenPalindrome<G> {
    EvenPalindrome { element }
}

impl<G, T> Generate<Vec<T>> for EvenPalindrome<G>
where
    G: Generate<T>,
    T: Clone,
{
    fn generate(&mut self, ctx: &mut Context) -> Result<Vec<T>> {
        even(&mut self.element, ctx)
    }
}

/// A generator for odd-length palindromes.
///
/// See the [`odd_palindrome()`] function to create new instances and for
/// example usage.
#[derive(Clone, Debug, Default)]
pub struct OddPalindrome<G> {
    element: G,
}

/// Create a generator of odd-length palindromes.
///
/// Each palindrome is an arbitrary prefix, whose length is chosen as in
/// [`vec()`], followed by a single pivot element, followed by the reverse of
/// the prefix.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, is_palindrome, Context, Generate};
///
/// let mut ctx = Context::new();
///
/// let xs = g::odd_palindrome(g::u8()).generate(&mut ctx)?;
/// assert_eq!(xs.len() % 2, 1);
/// assert!(is_palindrome(&xs, false));
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn odd_palindrome<G>(element: G) -> OddPalindrome<G> {
    OddPalindrome { element }
}

impl<G, T> Generate<Vec<T>> for OddPalindrome<G>
where
    G: Generate<T>,
    T: Clone,
{
    fn generate(&mut self, ctx: &mut Context) -> Result<Vec<T>> {
        odd(&mut self.element, ctx)
    }
}

/// A generator for palindromes of either parity.
///
/// See the [`palindrome()`] function to create new instances and for example
/// usage.
#[derive(Clone, Debug)]
pub struct Palindrome<G> {
    element: G,
    even_weight: u32,
    odd_weight: u32,
}

/// Create a generator of palindromes out of a generator of elements.
///
/// Each palindrome is built either like [`even_palindrome()`] or like
/// [`odd_palindrome()`]. By default both shapes are equally likely; use
/// [`Palindrome::weights`] to change their relative weights.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, is_palindrome, Context, Generate};
///
/// let mut generator = g::palindrome(g::range(b'a'..=b'z'));
///
/// let mut ctx = Context::new();
/// for _ in 0..10 {
///     let xs = generator.generate(&mut ctx)?;
///     assert!(is_palindrome(&xs, false));
///     println!("generated {:?}", String::from_utf8_lossy(&xs));
/// }
///
/// // Only odd-length palindromes.
/// let mut generator = g::palindrome(g::u8()).weights(0, 1);
/// assert_eq!(generator.generate(&mut ctx)?.len() % 2, 1);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn palindrome<G>(element: G) -> Palindrome<G> {
    Palindrome {
        element,
        even_weight: 50,
        odd_weight: 50,
    }
}

impl<G> Palindrome<G> {
    /// Configure the relative weights of even-length and odd-length
    /// palindromes.
    ///
    /// Generating fails with [`ErrorKind::InvalidWeights`] if both weights
    /// are zero.
    pub fn weights(mut self, even: u32, odd: u32) -> Self {
        self.even_weight = even;
        self.odd_weight = odd;
        self
    }
}

impl<G, T> Generate<Vec<T>> for Palindrome<G>
where
    G: Generate<T>,
    T: Clone,
{
    fn generate(&mut self, ctx: &mut Context) -> Result<Vec<T>> {
        match ctx.rng().gen_weighted(self.even_weight, self.odd_weight) {
            Some(true) => even(&mut self.element, ctx),
            Some(false) => odd(&mut self.element, ctx),
            None => Err(Error::invalid_weights()),
        }
    }
}

fn even<G, T>(element: &mut G, ctx: &mut Context) -> Result<Vec<T>>
where
    G: Generate<T>,
    T: Clone,
{
    let size = ctx.current_size();
    let len = ctx.rng().gen_len(size);
    let mut xs = generate_n(element, ctx, len)?;
    mirror(&mut xs, len);
    Ok(xs)
}

fn odd<G, T>(element: &mut G, ctx: &mut Context) -> Result<Vec<T>>
where
    G: Generate<T>,
    T: Clone,
{
    let size = ctx.current_size();
    let len = ctx.rng().gen_len(size);
    let mut xs = generate_n(element, ctx, len)?;
    xs.push(element.generate(ctx)?);
    mirror(&mut xs, len);
    Ok(xs)
}

// Append the reverse of `xs[..prefix_len]`.
fn mirror<T: Clone>(xs: &mut Vec<T>, prefix_len: usize) {
    xs.reserve(prefix_len);
    for i in (0..prefix_len).rev() {
        let x = xs[i].clone();
        xs.push(x);
    }
}
