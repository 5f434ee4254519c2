//! Converting entire domain names.
//!
//! A domain name is split into its labels at every full stop `.`. On
//! encoding, labels that consist of ASCII characters only are kept as they
//! are while all others are encoded with [Punycode][crate::punycode] and
//! receive the ACE prefix `xn--`. On decoding, labels starting with the ACE
//! prefix are decoded while all others are kept.
//!
//! Only the ASCII full stop separates labels. Other dots such as the
//! ideographic full stop U+3002 are not recognized and need to be mapped
//! beforehand if desired. Empty labels are kept, so a trailing dot or
//! consecutive dots in the input appear in the output as well.
//!
//! [`encode_domain`] and [`decode_domain`] stop at the first label that
//! fails and return an error identifying it. The `_lossy` variants instead
//! log the error and return the labels converted before the failing one.

use crate::config::Config;
use crate::error::DomainError;
use crate::punycode;
use tracing::{trace, warn};

//------------ Constants -----------------------------------------------------

/// The prefix of every encoded label.
pub const ACE_PREFIX: &str = "xn--";

/// The character separating labels.
pub const LABEL_DELIMITER: char = '.';

//------------ Convenience Functions -----------------------------------------

/// Returns whether a label starts with the ACE prefix.
///
/// The prefix is recognized case-insensitively unless the config asks for
/// strict case.
pub fn has_ace_prefix(label: &str, config: &Config) -> bool {
    match label.as_bytes().get(..ACE_PREFIX.len()) {
        Some(prefix) if config.strict_case() => {
            prefix == ACE_PREFIX.as_bytes()
        }
        Some(prefix) => prefix.eq_ignore_ascii_case(ACE_PREFIX.as_bytes()),
        None => false,
    }
}

/// Converts a domain name into its ASCII form using the default config.
///
/// A domain name that consists of ASCII characters only is returned
/// unchanged.
pub fn encode_domain(domain: &str) -> Result<String, DomainError> {
    encode_domain_with(domain, &Config::new())
}

/// Converts a domain name into its ASCII form using the given config.
pub fn encode_domain_with(
    domain: &str,
    config: &Config,
) -> Result<String, DomainError> {
    let mut res = String::with_capacity(domain.len());
    encode_labels(domain, config, &mut res)?;
    Ok(res)
}

/// Converts a domain name into its ASCII form, ignoring failures.
///
/// If a label cannot be encoded, the error is logged and the labels before
/// it are returned. Unlike older encoders, no dot is left after the last
/// of these labels, so a failure in the second label of a domain starting
/// with `www.` returns `www` rather than `www.`.
pub fn encode_domain_lossy(domain: &str, config: &Config) -> String {
    let mut res = String::with_capacity(domain.len());
    if let Err(err) = encode_labels(domain, config, &mut res) {
        warn!("Failed to encode domain {:?}: {}", domain, err);
    }
    res
}

/// Converts a domain name into its Unicode form using the default config.
pub fn decode_domain(domain: &str) -> Result<String, DomainError> {
    decode_domain_with(domain, &Config::new())
}

/// Converts a domain name into its Unicode form using the given config.
pub fn decode_domain_with(
    domain: &str,
    config: &Config,
) -> Result<String, DomainError> {
    let mut res = String::with_capacity(domain.len());
    decode_labels(domain, config, &mut res)?;
    Ok(res)
}

/// Converts a domain name into its Unicode form, ignoring failures.
///
/// If a label cannot be decoded, the error is logged and the labels before
/// it are returned. As with [`encode_domain_lossy`], there is no trailing
/// dot after them where older decoders would have left one.
pub fn decode_domain_lossy(domain: &str, config: &Config) -> String {
    let mut res = String::with_capacity(domain.len());
    if let Err(err) = decode_labels(domain, config, &mut res) {
        warn!("Failed to decode domain {:?}: {}", domain, err);
    }
    res
}

//------------ Label Processing ----------------------------------------------

/// Appends the encoded labels of `domain` to `target`.
///
/// On error, `target` contains the labels before the failed one.
fn encode_labels(
    domain: &str,
    config: &Config,
    target: &mut String,
) -> Result<(), DomainError> {
    if domain.is_ascii() {
        target.push_str(domain);
        return Ok(());
    }

    for_each_label(domain, target, |label, target| {
        if label.is_ascii() {
            target.push_str(label);
            return Ok(());
        }
        let start = target.len();
        target.push_str(ACE_PREFIX);
        punycode::encode_label_into(label, config, target)?;
        trace!("Encoded label {:?} as {:?}", label, &target[start..]);
        Ok(())
    })
}

/// Appends the decoded labels of `domain` to `target`.
///
/// On error, `target` contains the labels before the failed one.
fn decode_labels(
    domain: &str,
    config: &Config,
    target: &mut String,
) -> Result<(), DomainError> {
    for_each_label(domain, target, |label, target| {
        if !has_ace_prefix(label, config) {
            target.push_str(label);
            return Ok(());
        }
        let start = target.len();
        punycode::decode_label_into(
            &label[ACE_PREFIX.len()..],
            config,
            target,
        )?;
        trace!("Decoded label {:?} as {:?}", label, &target[start..]);
        Ok(())
    })
}

/// Runs `op` for every label, separating the output by dots.
///
/// If `op` fails, `target` is truncated to the output of the labels before
/// the failing one and the error is returned with the index of the label.
fn for_each_label<F>(
    domain: &str,
    target: &mut String,
    mut op: F,
) -> Result<(), DomainError>
where
    F: FnMut(&str, &mut String) -> Result<(), crate::error::Error>,
{
    let start = target.len();
    for (idx, label) in domain.split(LABEL_DELIMITER).enumerate() {
        let mark = target.len();
        if idx > 0 {
            target.push(LABEL_DELIMITER);
        }
        if let Err(err) = op(label, target) {
            // The first label leaves nothing but what was there before.
            target.truncate(if idx > 0 { mark } else { start });
            return Err(DomainError::new(idx, err));
        }
    }
    Ok(())
}

//============ Testing =======================================================
