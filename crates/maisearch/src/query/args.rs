use std::str::FromStr;

use crate::catalog::BpmFilter;
use crate::error::{Error, Result};

pub const CONSTANT_USAGE: &str = "usage:\n  base <constant> [page]\n  base <low> <high> [page]";
pub const BPM_USAGE: &str = "usage:\n  bpm <bpm>\n  bpm <low> <high> [page]";
pub const ARTIST_USAGE: &str = "usage: artist <name> [page]";
pub const CHARTER_USAGE: &str = "usage: charter <name> [page]";

fn number<T: FromStr>(token: &str, usage: &'static str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::malformed(usage, format!("'{}' is not a valid number", token)))
}

fn page(token: &str, usage: &'static str) -> Result<usize> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::malformed(
            usage,
            format!("'{}' is not a page number", token),
        ));
    }
    number(token, usage)
}

fn constant(token: &str) -> Result<f64> {
    let value: f64 = number(token, CONSTANT_USAGE)?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::malformed(
            CONSTANT_USAGE,
            format!("'{}' is not a valid constant", token),
        ));
    }
    Ok(value)
}

/// Constant-range listing arguments.
///
/// `<c>`, `<c> <page>`, `<low> <high>` (the second value has a decimal
/// point) or `<low> <high> <page>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantQuery {
    pub low: f64,
    pub high: f64,
    pub page: usize,
}

impl ConstantQuery {
    pub fn parse(input: &str) -> Result<Self> {
        let args: Vec<&str> = input.split_whitespace().collect();
        let (low, high, page_no) = match args.as_slice() {
            [c] => {
                let c = constant(c)?;
                (c, c, 1)
            }
            [low, second] if second.contains('.') => (constant(low)?, constant(second)?, 1),
            [c, page_no] => {
                let c = constant(c)?;
                (c, c, page(page_no, CONSTANT_USAGE)?)
            }
            [low, high, page_no] => (
                constant(low)?,
                constant(high)?,
                page(page_no, CONSTANT_USAGE)?,
            ),
            _ => {
                return Err(Error::malformed(
                    CONSTANT_USAGE,
                    format!("expected 1 to 3 arguments, got {}", args.len()),
                ));
            }
        };

        let (low, high) = if low > high { (high, low) } else { (low, high) };
        Ok(Self {
            low,
            high,
            page: page_no,
        })
    }
}

/// BPM listing arguments.
///
/// `<bpm>`, `<a> <b>` (a range, or bpm `a` on page `b` when `a > b`) or
/// `<low> <high> <page>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BpmQuery {
    pub filter: BpmFilter,
    pub page: usize,
}

impl BpmQuery {
    pub fn parse(input: &str) -> Result<Self> {
        let args: Vec<&str> = input.split_whitespace().collect();
        let (filter, page_no) = match args.as_slice() {
            [bpm] => (BpmFilter::Exact(number(bpm, BPM_USAGE)?), 1),
            [a, b] => {
                let a: u32 = number(a, BPM_USAGE)?;
                let b: u32 = number(b, BPM_USAGE)?;
                if a > b {
                    (BpmFilter::Exact(a), b as usize)
                } else {
                    (BpmFilter::Range(a, b), 1)
                }
            }
            [low, high, page_no] => {
                let low: u32 = number(low, BPM_USAGE)?;
                let high: u32 = number(high, BPM_USAGE)?;
                (
                    BpmFilter::Range(low.min(high), low.max(high)),
                    page(page_no, BPM_USAGE)?,
                )
            }
            _ => {
                return Err(Error::malformed(
                    BPM_USAGE,
                    format!("expected 1 to 3 arguments, got {}", args.len()),
                ));
            }
        };

        Ok(Self {
            filter,
            page: page_no,
        })
    }
}

/// Artist or charter listing arguments: `<name> [page]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    pub name: String,
    pub page: usize,
}

impl NameQuery {
    pub fn parse(input: &str, usage: &'static str) -> Result<Self> {
        let args: Vec<&str> = input.split_whitespace().collect();
        let (name, page_no) = match args.as_slice() {
            [name] => (*name, 1),
            [name, page_no] => (*name, page(page_no, usage)?),
            _ => {
                return Err(Error::malformed(
                    usage,
                    format!("expected 1 or 2 arguments, got {}", args.len()),
                ));
            }
        };

        Ok(Self {
            name: name.to_string(),
            page: page_no,
        })
    }
}
