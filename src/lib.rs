//! Punycode encoding and decoding of internationalized domain names.
//!
//! Internationalized domain names contain characters beyond ASCII. Since
//! the DNS itself only deals in ASCII host names, such names are carried
//! in an ASCII-compatible encoding: every label containing non-ASCII
//! characters is transformed with the Punycode algorithm defined in
//! [RFC 3492] and prefixed with `xn--`.
//!
//! This crate provides that transformation in both directions:
//!
//! ```
//! use idna_punycode::{decode_domain, encode_domain};
//!
//! let ascii = encode_domain("www.中文百度.com.cn").unwrap();
//! assert_eq!(ascii, "www.xn--fiq841b68em2s.com.cn");
//! assert_eq!(decode_domain(&ascii).unwrap(), "www.中文百度.com.cn");
//! ```
//!
//! It does not perform any of the mapping, normalization, or validation
//! steps of IDNA. Input is taken as is.
//!
//! # Modules
//!
//! * [bootstring] contains the Punycode parameters and the numeric helpers
//!   of the algorithm,
//! * [punycode] encodes and decodes a single label,
//! * [domain] converts entire domain names label by label,
//! * [config] allows switching to the behaviour of legacy encoders, and
//! * [error] contains the error types.
//!
//! # Reference of Feature Flags
//!
//! * `logging`: Adds the `logging` module with a helper that installs a
//!   [tracing-subscriber](https://github.com/tokio-rs/tracing) subscriber.
//!   The library itself always emits its events via `tracing`.
//! * `serde`: Enables serializing and deserializing the config via
//!   [serde](https://serde.rs/).
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bootstring;
pub mod config;
pub mod domain;
pub mod error;
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;
pub mod punycode;

pub use self::config::{CodeUnits, Config};
pub use self::domain::{
    decode_domain, decode_domain_lossy, decode_domain_with, encode_domain,
    encode_domain_lossy, encode_domain_with,
};
pub use self::error::{DomainError, Error};
pub use self::punycode::{decode_label, encode_label};
