//! A thin-but-stable wrapper over `rand::rngs::SmallRng` that provides a few
//! more conveniences for generating test cases.

use rand::{rngs::SmallRng, Rng as _, SeedableRng};

const DEFAULT_SEED: u64 = 0x12345678_12345678;

/// A pseudorandom number generator.
///
/// Not cryptographically secure.
///
/// You can attain a reference to an `Rng` via the
/// [`Context::rng`][crate::Context::rng] method.
#[derive(Clone, Debug)]
pub struct Rng {
    inner: SmallRng,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

macro_rules! gen_methods {
    ( $( $name:ident -> $ty:ty ; )* ) => {
        $(
            /// Generate a random
            #[doc = concat!("`", stringify!($ty), "`")]
            /// value.
            pub fn $name(&mut self) -> $ty {
                self.inner.gen()
            }
        )*
    };
}

impl Rng {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    pub(crate) fn inner(&mut self) -> &mut SmallRng {
        &mut self.inner
    }

    /// Generate a random length in the range `0..=max`.
    #[inline]
    pub fn gen_len(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Choose `true` with probability `weight / (weight + other)`.
    ///
    /// If both weights are zero, then `None` is returned.
    #[inline]
    pub fn gen_weighted(&mut self, weight: u32, other: u32) -> Option<bool> {
        let total = u64::from(weight) + u64::from(other);
        if total == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..total) < u64::from(weight))
    }

    gen_methods! {
        gen_bool -> bool;
        gen_u8 -> u8;
        gen_u16 -> u16;
        gen_u32 -> u32;
        gen_u64 -> u64;
        gen_u128 -> u128;
        gen_usize -> usize;
        gen_i8 -> i8;
        gen_i16 -> i16;
        gen_i32 -> i32;
        gen_i64 -> i64;
        gen_i128 -> i128;
        gen_isize -> isize;
    }
}
