//! Decimal-degree text grammar: `[+-]? digits ('.' digits)?`.

use geodist_core::constants::MAX_FRACTION_DIGITS;

use crate::{Axis, CoordinateError};

/// A syntactically valid decimal number split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalText<'a> {
    pub negative: bool,
    pub integer: &'a str,
    pub fraction: Option<&'a str>,
}

impl<'a> DecimalText<'a> {
    /// Split `text` into sign, integer and fraction; `None` if it is not a plain decimal.
    pub fn parse(text: &'a str) -> Option<Self> {
        let negative = text.starts_with('-');
        let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        if !is_digits(integer) || fraction.is_some_and(|f| !is_digits(f)) {
            return None;
        }

        Some(DecimalText {
            negative,
            integer,
            fraction,
        })
    }

    pub fn fraction_digits(&self) -> usize {
        self.fraction.map(str::len).unwrap_or(0)
    }

    /// Apply the precision and range rules of `axis`, yielding degrees.
    pub fn check(&self, axis: Axis, text: &str) -> Result<f64, CoordinateError> {
        let digits = self.fraction_digits();
        if digits > MAX_FRACTION_DIGITS {
            return Err(CoordinateError::TooPrecise {
                axis,
                value: text.to_string(),
                digits,
            });
        }

        let out_of_range = || CoordinateError::OutOfRange {
            axis,
            value: text.to_string(),
            bound: axis.bound(),
        };
        if self.integer.len() > axis.integer_digits() {
            return Err(out_of_range());
        }

        let value: f64 = text.parse().map_err(|_| CoordinateError::NotANumber {
            axis,
            value: text.to_string(),
        })?;
        if value.abs() > axis.bound() {
            return Err(out_of_range());
        }
        Ok(value)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
