//! Error and result types for the `palinshrink` crate.
//!
//! Note that a property failing is *not* an error: failures are reported as
//! data, via [`CheckFailure`][crate::check::CheckFailure]. The errors in this
//! module describe misconfigured generators.

use core::fmt;

/// A result that is either `Ok(T)` or `Err(palinshrink::Error)`.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An error that can occur when using the `palinshrink` crate.
///
/// This type is a thin wrapper around [`ErrorKind`], which contains the
/// specific kind of error that occurred.
///
/// # Examples
///
/// ```
/// use palinshrink::{Error, ErrorKind};
///
/// let error: Error = {
///     // ...
/// #   Error::invalid_weights()
/// };
///
/// match error.kind() {
///     ErrorKind::InvalidRange => println!("bad range!"),
///     ErrorKind::InvalidWeights => println!("bad weights!"),
///     ErrorKind::Other(msg) => println!("other! {msg}"),
///
///     // The `ErrorKind` type is not exhaustive, so we always need a catch-all arm.
///     unknown => println!("unknown! {unknown:?}"),
/// }
/// ```
pub struct Error {
    // Boxed to keep `Result<T>` small.
    kind: alloc::boxed::Box<ErrorKind>,
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind: alloc::boxed::Box::new(kind),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ErrorKind::InvalidRange => {
                write!(f, "the generator was given an invalid range")
            }
            ErrorKind::InvalidWeights => {
                write!(f, "the generator was given weights that are all zero")
            }
            ErrorKind::Other(msg) => {
                write!(f, "an unknown error occurred: {msg}")
            }
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Returns a new error indicating that the given range is invalid.
    #[must_use]
    pub fn invalid_range() -> Self {
        ErrorKind::InvalidRange.into()
    }

    /// Returns a new error indicating that the given weights are all zero.
    #[must_use]
    pub fn invalid_weights() -> Self {
        ErrorKind::InvalidWeights.into()
    }

    /// Returns a new error with the given message.
    #[must_use]
    pub fn other(msg: impl Into<ErrorMessage>) -> Self {
        ErrorKind::Other(msg.into()).into()
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns `true` if the error's kind is
    /// [`InvalidRange`][ErrorKind::InvalidRange].
    #[must_use]
    pub fn is_invalid_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidRange)
    }

    /// Returns `true` if the error's kind is
    /// [`InvalidWeights`][ErrorKind::InvalidWeights].
    #[must_use]
    pub fn is_invalid_weights(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidWeights)
    }

    /// Returns `true` if the error's kind is
    /// [`Other`][ErrorKind::Other].
    #[must_use]
    pub fn is_other(&self) -> bool {
        matches!(self.kind(), ErrorKind::Other(_))
    }
}

/// The kind of an error that can occur when using the `palinshrink` crate.
///
/// This enum is not exhaustive, and new variants may be added in the future.
/// When matching on this enum, a catch-all arm should be used to handle any
/// new variants that are added.
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// A generator was given a range whose start is greater than its end.
    InvalidRange,

    /// A weighted generator was given weights that are all zero, so there is
    /// nothing it may choose.
    InvalidWeights,

    /// Some other error occurred.
    Other(ErrorMessage),
}

impl From<Error> for ErrorKind {
    #[inline]
    fn from(err: Error) -> Self {
        *err.kind
    }
}

/// A message that can be attached to an error.
///
/// This should only be used with `ErrorKind::Other` and in situations where
/// there is not a more-specific error kind to use.
///
/// This type is a thin wrapper around a borrowed or owned string.
///
/// # Examples
///
/// ```
/// use palinshrink::ErrorMessage;
///
/// let msg = ErrorMessage::new("something went wrong");
/// assert_eq!(msg.as_str(), "something went wrong");
/// ```
#[derive(Debug)]
pub struct ErrorMessage {
    inner: alloc::borrow::Cow<'static, str>,
}

impl ErrorMessage {
    /// Returns a new error message with the given string.
    #[must_use]
    pub fn new(msg: impl Into<ErrorMessage>) -> Self {
        msg.into()
    }

    /// Returns the message as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for ErrorMessage {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self {
            inner: alloc::borrow::Cow::Borrowed(s),
        }
    }
}

impl From<alloc::string::String> for ErrorMessage {
    #[inline]
    fn from(s: alloc::string::String) -> Self {
        Self {
            inner: alloc::borrow::Cow::Owned(s),
        }
    }
}
