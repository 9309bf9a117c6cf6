use super::*;
use core::ops;
use rand::Rng as _;

mod vec;
pub use vec::*;

/// The default generator for `bool` values.
///
/// See the [`bool()`] function to create new instances and for example usage.
#[derive(Clone, Debug, Default)]
pub struct Bool {
    _private: (),
}

/// Create a new `bool` generator.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, Context, Generate};
///
/// let mut ctx = Context::new();
/// let b = g::bool().generate(&mut ctx)?;
/// println!("generated {b}");
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn bool() -> Bool {
    Bool { _private: () }
}

impl Generate<bool> for Bool {
    #[inline]
    fn generate(&mut self, ctx: &mut Context) -> Result<bool> {
        Ok(ctx.rng().gen_bool())
    }
}

impl DefaultGenerate for bool {
    type DefaultGenerate = Bool;
}

macro_rules! ints {
    (
        $(
            $fn_name:ident -> $ty_name:ident : $method:ident for $ty:ty ;
        )*
    ) => {
        $(
            /// A generator for
            #[doc = concat!("`", stringify!($ty), "`")]
            /// values.
            ///
            /// See the
            #[doc = concat!("[`", stringify!($fn_name), "()`]")]
            /// function to create new instances and for
            /// example usage.
            #[derive(Clone, Debug, Default)]
            pub struct $ty_name {
                _private: (),
            }

            /// Create a new
            #[doc = concat!("`", stringify!($ty), "`")]
            /// generator, which produces values uniformly across the whole
            /// type.
            ///
            /// # Example
            ///
            /// ```
            /// # fn foo() -> palinshrink::Result<()> {
            /// use palinshrink::{generators as g, Context, Generate};
            ///
            /// let mut ctx = Context::new();
            #[doc = concat!("let x = g::", stringify!($fn_name), "().generate(&mut ctx)?;")]
            /// println!("generated {x}");
            /// # Ok(())
            /// # }
            /// # foo().unwrap();
            /// ```
            pub fn $fn_name() -> $ty_name {
                $ty_name { _private: () }
            }

            impl Generate<$ty> for $ty_name {
                #[inline]
                fn generate(&mut self, ctx: &mut Context) -> Result<$ty> {
                    Ok(ctx.rng().$method())
                }
            }

            impl DefaultGenerate for $ty {
                type DefaultGenerate = $ty_name;
            }

            impl Generate<$ty> for Range<$ty> {
                #[inline]
                fn generate(&mut self, ctx: &mut Context) -> Result<$ty> {
                    let start = *self.range.start();
                    let end = *self.range.end();
                    if start > end {
                        return Err(Error::invalid_range());
                    }
                    Ok(ctx.rng().inner().gen_range(start..=end))
                }
            }
        )*
    };
}

ints! {
    u8 -> U8 : gen_u8 for u8;
    u16 -> U16 : gen_u16 for u16;
    u32 -> U32 : gen_u32 for u32;
    u64 -> U64 : gen_u64 for u64;
    u128 -> U128 : gen_u128 for u128;
    usize -> Usize : gen_usize for usize;
    i8 -> I8 : gen_i8 for i8;
    i16 -> I16 : gen_i16 for i16;
    i32 -> I32 : gen_i32 for i32;
    i64 -> I64 : gen_i64 for i64;
    i128 -> I128 : gen_i128 for i128;
    isize -> Isize : gen_isize for isize;
}

/// A generator for values within a range.
///
/// See the [`range()`] function to create new instances and for example
/// usage.
#[derive(Clone, Debug)]
pub struct Range<T> {
    range: ops::RangeInclusive<T>,
}

/// Create a generator of integers in the given inclusive range.
///
/// Generating from an empty range, whose start is greater than its end,
/// fails with [`ErrorKind::InvalidRange`].
///
/// Small ranges are handy for element generators: with only a few possible
/// elements, arbitrary sequences are palindromes surprisingly often.
///
/// # Example
///
/// ```
/// # fn foo() -> palinshrink::Result<()> {
/// use palinshrink::{generators as g, Context, Generate};
///
/// let mut ctx = Context::new();
///
/// let x: i32 = g::range(1..=6).generate(&mut ctx)?;
/// assert!((1..=6).contains(&x));
///
/// let err = g::range(6..=1).generate(&mut ctx).unwrap_err();
/// assert!(err.is_invalid_range());
/// # Ok(())
/// # }
/// # foo().unwrap();
/// ```
pub fn range<T>(range: ops::RangeInclusive<T>) -> Range<T> {
    Range { range }
}
