#![allow(unused_macros, unused_imports)]

#[cfg(feature = "log")]
pub(crate) use ::log::{debug, info, trace, warn};

// Without the `log` feature, every logging macro expands to nothing.
#[cfg(not(feature = "log"))]
macro_rules! disabled {
    ($($tt:tt)*) => {};
}

#[cfg(not(feature = "log"))]
pub(crate) use {disabled as debug, disabled as info, disabled as trace, disabled as warn};
