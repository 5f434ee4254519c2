//! Encoding and decoding of a single label with Punycode.
//!
//! Punycode is defined in [RFC 3492]. It represents a sequence of Unicode
//! code points using only ASCII letters, digits, and the hyphen. All basic
//! code points, i.e., ASCII characters, of the input are copied to the
//! output as is. If there were any, a hyphen follows as a delimiter. The
//! remaining code points are then represented as a sequence of deltas
//! encoding both the code point and its position in the label. Each delta
//! is written as a generalized variable-length integer whose digit
//! thresholds adapt to the deltas seen so far.
//!
//! The functions in this module deal with the part of a label after the ACE
//! prefix `xn--` only. Adding and recognizing the prefix is left to the
//! [domain][crate::domain] driver.
//!
//! The convenience functions [`encode_label`] and [`decode_label`] operate
//! on strings using the default [`Config`]. The `_with` variants take an
//! explicit config. The core algorithm is available through
//! [`encode_code_points`] and [`decode_code_points`] which operate on raw
//! code point values.
//!
//! All arithmetic on deltas is checked against the range of a signed 32 bit
//! integer. Exceeding it results in [`Error::Overflow`] rather than a
//! wrapped and therefore wrong result.
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492

use crate::bootstring::{
    adapt, code_point_to_digit, digit_to_code_point, is_basic, threshold,
    BASE, DELIMITER, INITIAL_BIAS, INITIAL_N, MAX_INT,
};
use crate::config::{CodeUnits, Config};
use crate::error::Error;

//------------ Convenience Functions -----------------------------------------

/// Encodes a Unicode label using the default config.
///
/// The label must not contain the label delimiter `.`. The result does not
/// contain the ACE prefix. An empty label results in an empty string.
pub fn encode_label(input: &str) -> Result<String, Error> {
    encode_label_with(input, &Config::new())
}

/// Encodes a Unicode label using the given config.
pub fn encode_label_with(
    input: &str,
    config: &Config,
) -> Result<String, Error> {
    let mut res = String::with_capacity(input.len());
    encode_label_into(input, config, &mut res)?;
    Ok(res)
}

/// Decodes a Punycode label using the default config.
///
/// The input must not start with the ACE prefix.
pub fn decode_label(input: &str) -> Result<String, Error> {
    decode_label_with(input, &Config::new())
}

/// Decodes a Punycode label using the given config.
pub fn decode_label_with(
    input: &str,
    config: &Config,
) -> Result<String, Error> {
    let mut res = String::with_capacity(input.len());
    decode_label_into(input, config, &mut res)?;
    Ok(res)
}

/// Encodes a Unicode label and appends the result to `target`.
///
/// If encoding fails, `target` is left unchanged.
pub fn encode_label_into(
    input: &str,
    config: &Config,
    target: &mut String,
) -> Result<(), Error> {
    let points: Vec<u32> = match config.code_units() {
        CodeUnits::Scalar => input.chars().map(u32::from).collect(),
        CodeUnits::Utf16 => input.encode_utf16().map(u32::from).collect(),
    };
    encode_code_points(&points, target)
}

/// Decodes a Punycode label and appends the result to `target`.
///
/// If decoding fails, `target` is left unchanged.
pub fn decode_label_into(
    input: &str,
    config: &Config,
    target: &mut String,
) -> Result<(), Error> {
    let points = decode_code_points(input.as_bytes(), config.strict_case())?;
    appending(target, |target| match config.code_units() {
        CodeUnits::Scalar => {
            for &point in &points {
                target.push(char::from_u32(point).ok_or(Error::BadInput)?);
            }
            Ok(())
        }
        CodeUnits::Utf16 => {
            let units = points
                .iter()
                .map(|&point| u16::try_from(point))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| Error::BadInput)?;
            for ch in char::decode_utf16(units) {
                target.push(ch.map_err(|_| Error::BadInput)?);
            }
            Ok(())
        }
    })
}

//------------ Encoding ------------------------------------------------------

/// Encodes a sequence of code points and appends the result to `target`.
///
/// The values in `input` are taken as code points without further checks,
/// so surrogate halves are encoded like any other value. The output only
/// contains the basic code points of the input, a hyphen as delimiter if
/// there were any, and the lowercase letters and digits of the encoded
/// deltas.
///
/// If encoding fails, `target` is left unchanged.
pub fn encode_code_points(
    input: &[u32],
    target: &mut String,
) -> Result<(), Error> {
    appending(target, |target| encode(input, target))
}

fn encode(input: &[u32], target: &mut String) -> Result<(), Error> {
    let len = u32::try_from(input.len()).map_err(|_| Error::Overflow)?;

    // Copy the basic code points.
    let mut basic = 0;
    for &ch in input {
        if is_basic(ch) {
            target.push(char::from(ch as u8));
            basic += 1;
        }
    }
    if basic > 0 {
        target.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic;

    while handled < len {
        // All code points below n have been handled. Find the next one.
        let m = input
            .iter()
            .copied()
            .filter(|&ch| ch >= n)
            .min()
            .ok_or(Error::BadInput)?;

        // Advance delta to the state <m, 0>.
        if m - n > (MAX_INT - delta) / (handled + 1) {
            return Err(Error::Overflow);
        }
        delta += (m - n) * (handled + 1);
        n = m;

        for &ch in input {
            if ch < n {
                delta = checked_add(delta, 1)?;
            }
            if ch == n {
                encode_integer(delta, bias, target)?;
                bias = adapt(delta, handled + 1, handled == basic);
                delta = 0;
                handled += 1;
            }
        }

        delta = checked_add(delta, 1)?;
        n = n.checked_add(1).ok_or(Error::Overflow)?;
    }
    Ok(())
}

/// Appends `delta` as a generalized variable-length integer.
fn encode_integer(
    delta: u32,
    bias: u32,
    target: &mut String,
) -> Result<(), Error> {
    let mut q = delta;
    let mut k = BASE;
    loop {
        let t = threshold(k, bias);
        if q < t {
            break;
        }
        target.push(digit_to_code_point(t + (q - t) % (BASE - t))?);
        q = (q - t) / (BASE - t);
        k += BASE;
    }
    target.push(digit_to_code_point(q)?);
    Ok(())
}

//------------ Decoding ------------------------------------------------------

/// Decodes a Punycode label into a sequence of code points.
///
/// If `strict` is `true`, only lowercase letters are accepted as digits.
/// The basic code points before the last delimiter are returned with their
/// case intact in either case.
///
/// The returned values are not checked for being valid characters. This is
/// left to the caller as it depends on what a code point is taken to be.
pub fn decode_code_points(
    input: &[u8],
    strict: bool,
) -> Result<Vec<u32>, Error> {
    let mut output = Vec::with_capacity(input.len());

    // Copy the basic code points before the last delimiter, if any. A
    // delimiter at the very start doesn’t count as it has nothing to
    // delimit.
    let input = match input.iter().rposition(|&b| b == DELIMITER as u8) {
        Some(pos) if pos > 0 => {
            for &b in &input[..pos] {
                if !is_basic(b.into()) {
                    return Err(Error::BadInput);
                }
                output.push(u32::from(b));
            }
            &input[pos + 1..]
        }
        _ => input,
    };

    let mut n = INITIAL_N;
    let mut i = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut input = input.iter();

    while !input.as_slice().is_empty() {
        // Decode a generalized variable-length integer and add it to i.
        let old_i = i;
        let mut w = 1u32;
        let mut k = BASE;
        loop {
            let &b = input.next().ok_or(Error::BadInput)?;
            let digit = code_point_to_digit(char::from(b), strict)?;
            if digit > (MAX_INT - i) / w {
                return Err(Error::Overflow);
            }
            i += digit * w;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            w = w
                .checked_mul(BASE - t)
                .filter(|&w| w <= MAX_INT)
                .ok_or(Error::Overflow)?;
            k += BASE;
        }

        let len = u32::try_from(output.len())
            .ok()
            .and_then(|len| checked_add(len, 1).ok())
            .ok_or(Error::Overflow)?;
        bias = adapt(i - old_i, len, old_i == 0);

        // i wraps around len, incrementing n each time.
        if i / len > MAX_INT - n {
            return Err(Error::Overflow);
        }
        n += i / len;
        i %= len;

        output.insert(i as usize, n);
        i += 1;
    }
    Ok(output)
}

//------------ Helpers -------------------------------------------------------

/// Adds two integers, failing if the sum exceeds `MAX_INT`.
fn checked_add(left: u32, right: u32) -> Result<u32, Error> {
    left.checked_add(right)
        .filter(|&sum| sum <= MAX_INT)
        .ok_or(Error::Overflow)
}

/// Runs `op` on `target`, removing anything it appended if it fails.
fn appending<F>(target: &mut String, op: F) -> Result<(), Error>
where
    F: FnOnce(&mut String) -> Result<(), Error>,
{
    let start = target.len();
    let res = op(target);
    if res.is_err() {
        target.truncate(start);
    }
    res
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode_chinese() {
        assert_eq!(encode_label("中文百度").unwrap(), "fiq841b68em2s");
        assert_eq!(
            encode_label("百度中文abc123").unwrap(),
            "abc123-9v7ip83i46m153b"
        );
        assert_eq!(encode_label("mañana").unwrap(), "maana-pta");
    }

    #[test]
    fn decode_chinese() {
        assert_eq!(decode_label("fiq841b68em2s").unwrap(), "中文百度");
        assert_eq!(
            decode_label("abc123-9v7ip83i46m153b").unwrap(),
            "百度中文abc123"
        );
        assert_eq!(decode_label("maana-pta").unwrap(), "mañana");
    }

    #[test]
    fn empty() {
        assert_eq!(encode_label("").unwrap(), "");
        assert_eq!(decode_label("").unwrap(), "");
    }

    #[test]
    fn single_code_point() {
        assert_eq!(encode_label("ü").unwrap(), "tda");
        assert_eq!(decode_label("tda").unwrap(), "ü");
        assert_eq!(encode_label("aü").unwrap(), "a-eha");
        assert_eq!(decode_label("a-eha").unwrap(), "aü");
    }

    #[test]
    fn basic_only() {
        assert_eq!(encode_label("abc").unwrap(), "abc-");
        assert_eq!(decode_label("abc-").unwrap(), "abc");
        assert_eq!(encode_label("a-b").unwrap(), "a-b-");
        assert_eq!(decode_label("a-b-").unwrap(), "a-b");
    }

    #[test]
    fn output_alphabet() {
        let encoded = encode_label("Ünïcödé-Wörld ☃").unwrap();
        assert!(encoded.bytes().all(|b| b.is_ascii()));
        let (_, tail) = encoded.rsplit_once('-').unwrap();
        assert!(tail
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        assert_eq!(decode_label(&encoded).unwrap(), "Ünïcödé-Wörld ☃");
    }

    #[test]
    fn uppercase_digits() {
        assert_eq!(decode_label("FIQ841B68EM2S").unwrap(), "中文百度");
        assert_eq!(
            decode_label_with("FIQ841B68EM2S", &Config::legacy()),
            Err(Error::BadInput)
        );

        // The basic part keeps its case.
        assert_eq!(decode_label("MAANA-PTA").unwrap(), "MAñANA");
    }

    #[test]
    fn bad_input() {
        // Non-basic code point in the basic part.
        assert_eq!(decode_label("é-abc"), Err(Error::BadInput));
        // Invalid digits.
        assert_eq!(decode_label("ab-c!d"), Err(Error::BadInput));
        assert_eq!(decode_label("-abc"), Err(Error::BadInput));
        assert_eq!(decode_label("ab-cé"), Err(Error::BadInput));
        // Truncated integer.
        assert_eq!(decode_label("9"), Err(Error::BadInput));
        assert_eq!(decode_label("abc-9"), Err(Error::BadInput));
    }

    #[test]
    fn overflow() {
        let mut long = "a".repeat(2000);
        long.push('\u{10FFFF}');
        assert_eq!(encode_label(&long), Err(Error::Overflow));

        assert_eq!(decode_label("99999999999"), Err(Error::Overflow));
    }

    #[test]
    fn code_point_overflow() {
        // A single delta that passes the digit checks but pushes n past
        // the integer range.
        let mut encoded = String::new();
        encode_integer(MAX_INT - 5, INITIAL_BIAS, &mut encoded).unwrap();
        assert_eq!(
            decode_code_points(encoded.as_bytes(), true),
            Err(Error::Overflow)
        );
    }

    #[test]
    fn beyond_unicode() {
        let mut encoded = String::new();
        encode_integer(0x10FFFF - INITIAL_N, INITIAL_BIAS, &mut encoded)
            .unwrap();
        assert_eq!(encoded, "dn32g");
        assert_eq!(
            decode_code_points(encoded.as_bytes(), true).unwrap(),
            [0x10FFFF]
        );
        assert_eq!(decode_label(&encoded).unwrap(), "\u{10FFFF}");

        let mut encoded = String::new();
        encode_integer(0x110000 - INITIAL_N, INITIAL_BIAS, &mut encoded)
            .unwrap();
        assert_eq!(encoded, "en32g");
        assert_eq!(
            decode_code_points(encoded.as_bytes(), true).unwrap(),
            [0x110000]
        );
        assert_eq!(decode_label(&encoded), Err(Error::BadInput));
        assert_eq!(
            decode_label_with(&encoded, &Config::legacy()),
            Err(Error::BadInput)
        );
    }

    #[test]
    fn failure_leaves_target() {
        let mut target = String::from("www.");
        assert_eq!(
            decode_label_into("ab-c!d", &Config::new(), &mut target),
            Err(Error::BadInput)
        );
        assert_eq!(target, "www.");

        let mut long = "a".repeat(2000);
        long.push('\u{10FFFF}');
        assert_eq!(
            encode_label_into(&long, &Config::new(), &mut target),
            Err(Error::Overflow)
        );
        assert_eq!(target, "www.");
    }

    #[test]
    fn supplementary() {
        let scalar = encode_label("a😀b").unwrap();
        assert_eq!(decode_label(&scalar).unwrap(), "a😀b");

        let legacy = Config::legacy();
        let utf16 = encode_label_with("a😀b", &legacy).unwrap();
        assert_ne!(scalar, utf16);
        assert_eq!(decode_label_with(&utf16, &legacy).unwrap(), "a😀b");

        // Lone surrogates and values beyond the BMP don’t decode.
        assert_eq!(decode_label(&utf16), Err(Error::BadInput));
        assert_eq!(decode_label_with(&scalar, &legacy), Err(Error::BadInput));
    }

    #[test]
    fn bmp_is_unaffected_by_code_units() {
        let legacy = Config::legacy();
        for label in ["中文百度", "百度中文abc123", "mañana", "ü"] {
            assert_eq!(
                encode_label(label).unwrap(),
                encode_label_with(label, &legacy).unwrap()
            );
        }
    }

    #[test]
    fn code_points() {
        let mut target = String::new();
        encode_code_points(&[0x4E2D, 0x6587, 0x767E, 0x5EA6], &mut target)
            .unwrap();
        assert_eq!(target, "fiq841b68em2s");
        assert_eq!(
            decode_code_points(b"fiq841b68em2s", true).unwrap(),
            [0x4E2D, 0x6587, 0x767E, 0x5EA6]
        );
    }
}
