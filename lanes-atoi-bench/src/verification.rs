//! Correctness verification against the standard library parser.
//!
//! Every corpus string is parsed three ways (SWAR, naive, `str::parse`) and the
//! results must agree. Malformed inputs must be rejected by both custom parsers
//! with identical errors. Both checks run once for `u64` and once for `i64`.

use std::fmt::Debug;
use std::str::FromStr;

use crate::atoi::ParseError;

/// A parser under verification.
pub type ParseFn<T> = fn(&[u8]) -> Result<T, ParseError>;

/// One input on which the parsers disagreed.
#[derive(Debug, Clone)]
pub struct Mismatch<T> {
    pub input: String,
    pub swar: Result<T, ParseError>,
    pub naive: Result<T, ParseError>,
    pub std: Option<T>,
}

/// Outcome of a verification pass.
#[derive(Debug)]
pub struct VerificationReport<T> {
    pub checked: usize,
    pub rejected: usize,
    pub mismatches: Vec<Mismatch<T>>,
}

impl<T> Default for VerificationReport<T> {
    fn default() -> Self {
        Self {
            checked: 0,
            rejected: 0,
            mismatches: Vec::new(),
        }
    }
}

impl<T> VerificationReport<T> {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Parses every corpus entry with all three parsers and records disagreements.
pub fn verify_against_std<T>(
    corpus: &[String],
    swar_parse: ParseFn<T>,
    naive_parse: ParseFn<T>,
) -> VerificationReport<T>
where
    T: FromStr + PartialEq + Debug,
{
    let mut report = VerificationReport::default();

    for input in corpus {
        let swar = swar_parse(input.as_bytes());
        let naive = naive_parse(input.as_bytes());
        let std = input.trim_start().parse::<T>().ok();

        report.checked += 1;
        if swar.as_ref().ok() != std.as_ref() || swar != naive {
            log::warn!("mismatch on {:?}: swar={:?} naive={:?} std={:?}", input, swar, naive, std);
            report.mismatches.push(Mismatch {
                input: input.clone(),
                swar,
                naive,
                std,
            });
        }
    }

    report
}

/// Checks that both custom parsers reject every malformed input the same way.
pub fn verify_rejections<T>(
    inputs: &[&str],
    swar_parse: ParseFn<T>,
    naive_parse: ParseFn<T>,
) -> VerificationReport<T>
where
    T: PartialEq + Debug,
{
    let mut report = VerificationReport::default();

    for &input in inputs {
        let swar = swar_parse(input.as_bytes());
        let naive = naive_parse(input.as_bytes());

        report.checked += 1;
        if swar.is_err() && swar == naive {
            if let Err(e) = &swar {
                log::debug!("rejected {:?}: {}", input, e);
            }
            report.rejected += 1;
        } else {
            log::warn!("{:?} not rejected consistently: swar={:?} naive={:?}", input, swar, naive);
            report.mismatches.push(Mismatch {
                input: input.to_string(),
                swar,
                naive,
                std: None,
            });
        }
    }

    report
}
