//! Coordinate inputs and decimal-degree validation.
//!
//! Validation works on the decimal text of a value rather than on the parsed float, so a
//! value carrying more than six fractional digits is rejected even when it lies inside the
//! numeric range.

mod text;

use std::fmt;

use geodist_core::constants::{LATITUDE_BOUND, LONGITUDE_BOUND};
use serde::Serialize;
use thiserror::Error;

pub use text::DecimalText;

/// Which axis of a coordinate a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute value accepted on this axis (degrees).
    pub fn bound(self) -> f64 {
        match self {
            Axis::Latitude => LATITUDE_BOUND,
            Axis::Longitude => LONGITUDE_BOUND,
        }
    }

    /// Largest number of integer digits accepted on this axis.
    pub fn integer_digits(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// A coordinate value as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateValue {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Collections are never a valid coordinate component.
    Composite(Vec<CoordinateValue>),
}

impl CoordinateValue {
    /// Decimal text that validation operates on; `None` for composites and non-finite floats.
    pub fn to_decimal_text(&self) -> Option<String> {
        match self {
            CoordinateValue::Integer(v) => Some(v.to_string()),
            CoordinateValue::Float(v) if v.is_finite() => Some(v.to_string()),
            CoordinateValue::Float(_) => None,
            CoordinateValue::Text(s) => Some(s.clone()),
            CoordinateValue::Composite(_) => None,
        }
    }
}

impl fmt::Display for CoordinateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateValue::Integer(v) => write!(f, "{v}"),
            CoordinateValue::Float(v) => write!(f, "{v}"),
            CoordinateValue::Text(s) => write!(f, "{s:?}"),
            CoordinateValue::Composite(items) => write!(f, "[{} items]", items.len()),
        }
    }
}

macro_rules! integer_values {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CoordinateValue {
                fn from(v: $ty) -> Self {
                    CoordinateValue::Integer(i64::from(v))
                }
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for CoordinateValue {
    fn from(v: f64) -> Self {
        CoordinateValue::Float(v)
    }
}

impl From<f32> for CoordinateValue {
    fn from(v: f32) -> Self {
        // f32 -> f64 widening would print binary noise ("45.5" stays, "45.1" does not).
        CoordinateValue::Text(v.to_string())
    }
}

impl From<&str> for CoordinateValue {
    fn from(v: &str) -> Self {
        CoordinateValue::Text(v.to_string())
    }
}

impl From<String> for CoordinateValue {
    fn from(v: String) -> Self {
        CoordinateValue::Text(v)
    }
}

impl From<&String> for CoordinateValue {
    fn from(v: &String) -> Self {
        CoordinateValue::Text(v.clone())
    }
}

impl<T: Into<CoordinateValue>> From<Vec<T>> for CoordinateValue {
    fn from(items: Vec<T>) -> Self {
        CoordinateValue::Composite(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CoordinateValue> + Clone> From<&[T]> for CoordinateValue {
    fn from(items: &[T]) -> Self {
        CoordinateValue::Composite(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<CoordinateValue>, const N: usize> From<[T; N]> for CoordinateValue {
    fn from(items: [T; N]) -> Self {
        CoordinateValue::Composite(items.into_iter().map(Into::into).collect())
    }
}

/// Reasons a coordinate component is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("invalid coordinate format: {axis} must be a scalar, got a collection")]
    Composite { axis: Axis },
    #[error("invalid coordinate format: {axis} {value} is not a decimal-degree number")]
    NotANumber { axis: Axis, value: String },
    #[error(
        "invalid coordinate format: {axis} {value} has {digits} fractional digits (at most 6 allowed)"
    )]
    TooPrecise {
        axis: Axis,
        value: String,
        digits: usize,
    },
    #[error("invalid coordinate format: {axis} {value} is outside [-{bound}, {bound}]")]
    OutOfRange { axis: Axis, value: String, bound: f64 },
}

/// Parse and validate a value for `axis`, returning it in decimal degrees.
pub fn parse_axis(value: &CoordinateValue, axis: Axis) -> Result<f64, CoordinateError> {
    if matches!(value, CoordinateValue::Composite(_)) {
        return Err(CoordinateError::Composite { axis });
    }
    let text = value
        .to_decimal_text()
        .ok_or_else(|| CoordinateError::NotANumber {
            axis,
            value: value.to_string(),
        })?;
    let decimal = DecimalText::parse(&text).ok_or_else(|| CoordinateError::NotANumber {
        axis,
        value: text.clone(),
    })?;
    decimal.check(axis, &text)
}

/// Parse and validate a latitude.
pub fn parse_latitude(value: &CoordinateValue) -> Result<f64, CoordinateError> {
    parse_axis(value, Axis::Latitude)
}

/// Parse and validate a longitude.
pub fn parse_longitude(value: &CoordinateValue) -> Result<f64, CoordinateError> {
    parse_axis(value, Axis::Longitude)
}

pub fn is_valid_latitude(value: impl Into<CoordinateValue>) -> bool {
    parse_latitude(&value.into()).is_ok()
}

pub fn is_valid_longitude(value: impl Into<CoordinateValue>) -> bool {
    parse_longitude(&value.into()).is_ok()
}

/// True when both components are valid. Never fails.
pub fn is_valid_coordinate(
    latitude: impl Into<CoordinateValue>,
    longitude: impl Into<CoordinateValue>,
) -> bool {
    is_valid_latitude(latitude) && is_valid_longitude(longitude)
}

/// Alias of [`is_valid_coordinate`].
pub fn is_coordinate(
    latitude: impl Into<CoordinateValue>,
    longitude: impl Into<CoordinateValue>,
) -> bool {
    is_valid_coordinate(latitude, longitude)
}

/// A validated point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Validate numeric degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        Self::parse(latitude, longitude)
    }

    /// Validate any supported input form.
    pub fn parse(
        latitude: impl Into<CoordinateValue>,
        longitude: impl Into<CoordinateValue>,
    ) -> Result<Self, CoordinateError> {
        let latitude = parse_latitude(&latitude.into())?;
        let longitude = parse_longitude(&longitude.into())?;
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }
}
