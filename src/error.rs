//! Error types.
//!
//! The label codec fails with an [`Error`]. The domain driver wraps it into
//! a [`DomainError`] that also remembers which label of the domain could
//! not be processed.

use core::fmt;

//------------ Error ---------------------------------------------------------

/// Encoding or decoding a label failed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// Guarded arithmetic exceeded the 32 bit signed integer range.
    Overflow,

    /// The input was malformed.
    ///
    /// This happens for a non-basic character in the basic part of an
    /// encoded label, a character that isn’t a valid digit, an encoded
    /// label that ends in the middle of a variable-length integer, or a
    /// decoded value that isn’t a valid character.
    BadInput,
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Overflow => f.write_str("overflow"),
            Error::BadInput => f.write_str("bad input"),
        }
    }
}

impl std::error::Error for Error {}

//------------ DomainError ---------------------------------------------------

/// A label of a domain name could not be encoded or decoded.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DomainError {
    /// The zero-based index of the offending label.
    label: usize,

    /// The reason the label failed.
    error: Error,
}

impl DomainError {
    /// Creates a new error for the label with the given index.
    #[must_use]
    pub const fn new(label: usize, error: Error) -> Self {
        DomainError { label, error }
    }

    /// Returns the zero-based index of the offending label.
    pub fn label(&self) -> usize {
        self.label
    }

    /// Returns the codec error for the label.
    pub fn error(&self) -> Error {
        self.error
    }
}

//--- From

impl From<DomainError> for Error {
    fn from(err: DomainError) -> Error {
        err.error
    }
}

//--- Display and Error

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "label {}: {}", self.label, self.error)
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

//============ Testing =======================================================
