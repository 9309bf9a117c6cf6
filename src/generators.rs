//! The provided set of generators and generator combinators.
//!
//! It is idiomatic to import this module with the alias `g`:
//!
//! ```rust
//! use palinshrink::generators as g;
//! ```
//!
//! The palindrome generators, [`palindrome()`], [`even_palindrome()`], and
//! [`odd_palindrome()`], build palindromes by construction out of any element
//! generator, so that a property over palindromes never has to filter out
//! non-palindromic inputs.

use super::*;

mod combinators;
mod core_impls;
mod palindromes;

pub use combinators::*;
pub use core_impls::*;
pub use palindromes::*;

/// Get the default generator for a given type.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, Context, Generate};
///
/// let mut generator = g::default::<Vec<u8>>();
///
/// let mut ctx = Context::new().size(4);
/// let xs = generator.generate(&mut ctx)?;
/// assert!(xs.len() <= 4);
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn default<T>() -> <T as DefaultGenerate>::DefaultGenerate
where
    T: DefaultGenerate,
{
    T::DefaultGenerate::default()
}

/// Generate exactly `len` elements with the given element generator.
pub(crate) fn generate_n<G, T>(
    element: &mut G,
    ctx: &mut Context,
    len: usize,
) -> Result<alloc::vec::Vec<T>>
where
    G: Generate<T>,
{
    let mut xs = alloc::vec::Vec::with_capacity(len);
    for _ in 0..len {
        xs.push(element.generate(ctx)?);
    }
    Ok(xs)
}
