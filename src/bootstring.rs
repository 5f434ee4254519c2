//! The Bootstring parameters and helpers for Punycode.
//!
//! Punycode is the instance of the Bootstring algorithm defined in
//! [RFC 3492]. This module contains the parameter values given in section 5
//! of the RFC together with the small numeric helpers shared by the encoder
//! and decoder: bias adaptation, the threshold function, and the mapping
//! between digit values and the characters representing them.
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492

use crate::error::Error;

//------------ Parameters ----------------------------------------------------

/// The number of digit values.
pub const BASE: u32 = 36;

/// The smallest threshold.
pub const TMIN: u32 = 1;

/// The largest threshold.
pub const TMAX: u32 = 26;

/// The skew applied during bias adaptation.
pub const SKEW: u32 = 38;

/// The damping factor used for the first bias adaptation.
pub const DAMP: u32 = 700;

/// The bias at the start of encoding or decoding.
pub const INITIAL_BIAS: u32 = 72;

/// The first code point considered for insertion.
pub const INITIAL_N: u32 = 0x80;

/// The character separating basic code points from the encoded deltas.
pub const DELIMITER: char = '-';

/// The ceiling for all guarded arithmetic.
///
/// The integers manipulated by the codec must fit into a signed 32 bit
/// integer. Anything larger is an overflow, even if the unsigned types we
/// calculate with could hold it.
pub const MAX_INT: u32 = i32::MAX as u32;

//------------ Helpers -------------------------------------------------------

/// Returns whether a code point is basic, i.e., plain ASCII.
pub fn is_basic(c: u32) -> bool {
    c < 0x80
}

/// Adapts the bias after a delta has been processed.
///
/// The `numpoints` argument is the number of code points handled so far,
/// including the one this delta belongs to. `first_time` needs to be `true`
/// for the very first delta of a label. See section 6.1 of RFC 3492.
pub fn adapt(delta: u32, numpoints: u32, first_time: bool) -> u32 {
    let mut delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / numpoints;
    let mut k = 0;
    while delta > ((BASE - TMIN) * TMAX) / 2 {
        delta /= BASE - TMIN;
        k += BASE;
    }
    k + ((BASE - TMIN + 1) * delta) / (delta + SKEW)
}

/// Returns the threshold for the digit at position `k` under `bias`.
///
/// Here, `k` is the running multiple of `BASE` of the digit, starting at
/// `BASE` for the least significant digit of an integer.
pub fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        TMIN
    } else if k >= bias + TMAX {
        TMAX
    } else {
        k - bias
    }
}

/// Returns the character representing a digit value.
///
/// Values 0 to 25 are represented by `a` to `z`, values 26 to 35 by `0` to
/// `9`. Only lowercase letters are ever produced.
pub fn digit_to_code_point(d: u32) -> Result<char, Error> {
    match d {
        // 'a'..'z'
        0..=25 => Ok(char::from(b'a' + d as u8)),
        // '0'..'9'
        26..=35 => Ok(char::from(b'0' + (d - 26) as u8)),
        _ => Err(Error::BadInput),
    }
}

/// Returns the digit value represented by a character.
///
/// Digits are case-insensitive unless `strict` is `true`, in which case
/// only lowercase letters are accepted.
pub fn code_point_to_digit(c: char, strict: bool) -> Result<u32, Error> {
    match c {
        '0'..='9' => Ok(c as u32 - '0' as u32 + 26),
        'a'..='z' => Ok(c as u32 - 'a' as u32),
        'A'..='Z' if !strict => Ok(c as u32 - 'A' as u32),
        _ => Err(Error::BadInput),
    }
}

//============ Testing =======================================================
