//! Lenient parsing of raw quantity and sell price input
//!
//! Only the leading numeric part of the text counts: `"12abc"` is 12,
//! `"  -5"` is -5 and text with no leading number is NaN.

use regex::Regex;

pub struct InputParser {
    int_re: Regex,
    decimal_re: Regex,
}

impl InputParser {
    pub fn new() -> crate::error::Result<Self> {
        Ok(Self {
            int_re: Regex::new(r"^\s*([+-]?[0-9]+)")?,
            decimal_re: Regex::new(r"^\s*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")?,
        })
    }

    pub fn parse_int(&self, raw: &str) -> f64 {
        self.int_re
            .captures(raw)
            .and_then(|cap| cap[1].parse::<f64>().ok())
            .map(f64::trunc)
            .unwrap_or(f64::NAN)
    }

    pub fn parse_decimal(&self, raw: &str) -> f64 {
        self.decimal_re
            .captures(raw)
            .and_then(|cap| cap[1].parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }
}
