//! Trace text loading.
//!
//! Parses the multi-test-case trace format: a leading count `T`, then per
//! case a header `S P K N` (address-space bits, page size in KiB, TLB
//! capacity, reference count) followed by `N` hexadecimal addresses. Tokens
//! are whitespace-separated and may span lines freely.
//!
//! The address-space bit width `S` is carried by the format but unused here:
//! page numbers derive from the page shift alone. Headers are validated as
//! configurations before any replay begins, so a zero capacity in the input
//! is rejected with a proper error instead of undefined eviction behavior.

use std::fmt::Display;
use std::str::FromStr;

use crate::common::{SimError, VirtAddr, Vpn};
use crate::config::Config;

/// One test case parsed from the trace text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Per-case configuration taken from the `S P K N` header.
    pub config: Config,
    /// Raw referenced addresses, in trace order.
    pub refs: Vec<VirtAddr>,
}

impl TestCase {
    /// Narrows the raw addresses to page numbers using the case's page shift.
    pub fn vpns(&self) -> Vec<Vpn> {
        let shift = self.config.page_shift();
        self.refs.iter().map(|addr| addr.vpn(shift)).collect()
    }
}

/// Whitespace token stream with 1-based line tracking for error reports.
struct Tokens<'a> {
    tokens: Vec<(usize, &'a str)>,
    cursor: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let tokens = input
            .lines()
            .enumerate()
            .flat_map(|(idx, line)| line.split_whitespace().map(move |tok| (idx + 1, tok)))
            .collect();
        Self { tokens, cursor: 0 }
    }

    fn exhausted(&self) -> bool {
        self.cursor == self.tokens.len()
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |&(line, _)| line)
    }

    fn next(&mut self, what: impl Display) -> Result<(usize, &'a str), SimError> {
        let Some(&(line, tok)) = self.tokens.get(self.cursor) else {
            return Err(SimError::Parse {
                line: self.last_line(),
                reason: format!("unexpected end of input, expected {what}"),
            });
        };
        self.cursor += 1;
        Ok((line, tok))
    }

    fn decimal<T: FromStr>(&mut self, what: impl Display) -> Result<T, SimError> {
        let (line, tok) = self.next(&what)?;
        tok.parse().map_err(|_| SimError::Parse {
            line,
            reason: format!("expected {what}, found `{tok}`"),
        })
    }

    fn hex(&mut self) -> Result<u64, SimError> {
        let (line, tok) = self.next("a hex address")?;
        let digits = tok
            .strip_prefix("0x")
            .or_else(|| tok.strip_prefix("0X"))
            .unwrap_or(tok);
        u64::from_str_radix(digits, 16).map_err(|_| SimError::Parse {
            line,
            reason: format!("expected a hex address, found `{tok}`"),
        })
    }
}

/// Parses the multi-test-case trace format.
///
/// Tokens past the final test case are ignored, matching the classic driver.
///
/// # Errors
///
/// Returns [`SimError::Parse`] with line context for truncated or malformed
/// input, and the configuration validation errors for a header whose
/// capacity or page size is out of range.
pub fn parse_trace(input: &str) -> Result<Vec<TestCase>, SimError> {
    let mut tokens = Tokens::new(input);
    let case_count: usize = tokens.decimal("the test case count")?;
    let mut cases = Vec::with_capacity(case_count);
    for _ in 0..case_count {
        let _address_space_bits: u64 = tokens.decimal("the address-space bit count")?;
        let page_size_kib: u64 = tokens.decimal("the page size in KiB")?;
        let capacity: usize = tokens.decimal("the TLB capacity")?;
        let ref_count: usize = tokens.decimal("the reference count")?;

        let config = Config {
            capacity,
            page_size_kib,
        };
        config.validate()?;

        let mut refs = Vec::with_capacity(ref_count);
        for _ in 0..ref_count {
            refs.push(VirtAddr::new(tokens.hex()?));
        }
        cases.push(TestCase { config, refs });
    }
    Ok(cases)
}

/// Parses a bare whitespace-separated list of hex addresses (no headers).
///
/// Used with an externally supplied configuration when the input is a plain
/// address list rather than the full test-case format.
///
/// # Errors
///
/// Returns [`SimError::Parse`] if any token is not a hex address.
pub fn parse_refs(input: &str) -> Result<Vec<VirtAddr>, SimError> {
    let mut tokens = Tokens::new(input);
    let mut refs = Vec::new();
    while !tokens.exhausted() {
        refs.push(VirtAddr::new(tokens.hex()?));
    }
    Ok(refs)
}
