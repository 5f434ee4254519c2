//! Converts domain names between their Unicode and ASCII forms.
//!
//! Names that contain an ACE label are decoded, all others are encoded.
use std::env;

use idna_punycode::domain::has_ace_prefix;
use idna_punycode::logging::init_logging;
use idna_punycode::{decode_domain_with, encode_domain_with, Config};

fn parse_opt(config: &mut Config, arg: &str) {
    match arg {
        "+legacy" => *config = Config::legacy(),
        "+strict" => config.set_strict_case(true),
        _ => {
            println!("Warning: ignoring unknown option {}", arg);
        }
    }
}

fn convert(name: &str, config: &Config) {
    let decode = name.split('.').any(|label| has_ace_prefix(label, config));
    let res = if decode {
        decode_domain_with(name, config)
    } else {
        encode_domain_with(name, config)
    };
    match res {
        Ok(converted) => println!("{} -> {}", name, converted),
        Err(err) => println!("{}: {}", name, err),
    }
}

fn main() {
    init_logging();

    let mut config = Config::new();
    let mut names = Vec::new();
    for arg in env::args().skip(1) {
        if arg.starts_with('+') {
            parse_opt(&mut config, &arg)
        } else {
            names.push(arg)
        }
    }
    if names.is_empty() {
        println!("Usage: idn [+legacy] [+strict] <domain>...");
        return;
    }

    for name in names {
        convert(&name, &config)
    }
}
