//! Configuration of the codec and domain driver.
//!
//! The defaults follow RFC 3492 and treat both the ACE prefix and the digits
//! of an encoded label case-insensitively. A [`Config`] can switch to the
//! behaviour of older encoders that operated on UTF-16 code units and only
//! accepted lowercase input.

//------------ CodeUnits -----------------------------------------------------

/// What a single code point of a Unicode label is.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CodeUnits {
    /// Every Unicode scalar value is one code point.
    ///
    /// This is what RFC 3492 prescribes.
    #[default]
    Scalar,

    /// Every UTF-16 code unit is one code point.
    ///
    /// Characters outside the Basic Multilingual Plane are encoded as two
    /// separate surrogate halves. The resulting labels differ from those
    /// of conforming encoders but are what some older implementations
    /// produced.
    Utf16,
}

//------------ Config --------------------------------------------------------

/// Configuration for encoding and decoding labels and domain names.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// What a code point is.
    code_units: CodeUnits,

    /// Only accept lowercase digits and ACE prefixes.
    strict_case: bool,
}

impl Config {
    /// Creates a new, default config.
    #[must_use]
    pub const fn new() -> Self {
        Config {
            code_units: CodeUnits::Scalar,
            strict_case: false,
        }
    }

    /// Creates the config matching legacy UTF-16 based encoders.
    ///
    /// Such encoders treat UTF-16 code units as code points and only accept
    /// lowercase digits and the lowercase ACE prefix `xn--` when decoding.
    #[must_use]
    pub const fn legacy() -> Self {
        Config {
            code_units: CodeUnits::Utf16,
            strict_case: true,
        }
    }

    /// Returns what a code point is.
    pub fn code_units(&self) -> CodeUnits {
        self.code_units
    }

    /// Sets what a code point is.
    ///
    /// The default is [`CodeUnits::Scalar`].
    pub fn set_code_units(&mut self, value: CodeUnits) {
        self.code_units = value
    }

    /// Returns whether decoding is case-sensitive.
    pub fn strict_case(&self) -> bool {
        self.strict_case
    }

    /// Sets whether decoding is case-sensitive.
    ///
    /// If set to `true`, uppercase letters are rejected as digits of an
    /// encoded label and only the lowercase ACE prefix `xn--` marks a label
    /// for decoding. Encoding always produces lowercase output regardless.
    ///
    /// The default is `false`.
    pub fn set_strict_case(&mut self, value: bool) {
        self.strict_case = value
    }
}

//============ Testing =======================================================
