// XXX: Keep this documented MSRV in sync with the `rust-version` in
// `Cargo.toml`.

/*!

# Cargo Features

**Note: the `check` feature is enabled by default. Disable default features to
use only the predicate, generators, and shrinkers in a `no_std` environment.**

The crate always depends on Rust's `alloc` crate, because generators and
shrinkers produce `Vec`s.

* **`std`**: Use features that the `std` crate provides, such as implementing
  `std::error::Error` for [`palinshrink::Error`][crate::Error].

* **`log`**: Enable logging with [the `log` crate](https://docs.rs/log). The
  [`Check`][crate::check::Check] engine logs each failure and shrink step, and
  the palindrome shrinker logs every element it removes at the `trace` level.

* **`check`**: Enable the `palinshrink::check` module for running property
  checks. Implies `std` and `log`.

# Minimum Supported Rust Version

The minimum supported Rust version (MSRV) is currently **1.80.0**.

The MSRV will never be increased in a patch release, but may be increased in a
minor release.

 */
