//! Core constants, linear units, and rounding primitives shared across the geodistance workspace.

/// Geodetic and formatting constants.
pub mod constants {
    /// WGS-84 equatorial radius (m), used as the spherical Earth radius.
    pub const EARTH_RADIUS_M: f64 = 6_378_137.0;
    /// Largest number of fractional digits accepted in a decimal-degree value.
    pub const MAX_FRACTION_DIGITS: usize = 6;
    /// Absolute latitude bound (degrees).
    pub const LATITUDE_BOUND: f64 = 90.0;
    /// Absolute longitude bound (degrees).
    pub const LONGITUDE_BOUND: f64 = 180.0;
    /// Smallest `decimals` value that triggers rounding.
    pub const MIN_DECIMALS: u32 = 1;
    /// Largest `decimals` value that triggers rounding.
    pub const MAX_DECIMALS: u32 = 9;
}

/// Degree to radian helper.
pub mod angle {
    /// Convert decimal degrees to radians.
    #[inline]
    pub fn to_radians(degrees: f64) -> f64 {
        degrees.to_radians()
    }
}

/// The fixed table of supported linear units.
pub mod units {
    use std::fmt;
    use std::str::FromStr;

    use serde::Serialize;
    use thiserror::Error;

    /// Unit symbols and their size in metres, in canonical order.
    pub const UNIT_TABLE: [(&str, f64); 6] = [
        ("m", 1.0),
        ("km", 1_000.0),
        ("ft", 0.3048),
        ("yd", 0.9144),
        ("mi", 1_609.344),
        ("nm", 1_852.0),
    ];

    /// A supported linear unit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub enum Unit {
        #[serde(rename = "m")]
        Meter,
        #[serde(rename = "km")]
        Kilometer,
        #[serde(rename = "ft")]
        Foot,
        #[serde(rename = "yd")]
        Yard,
        #[serde(rename = "mi")]
        Mile,
        #[serde(rename = "nm")]
        NauticalMile,
    }

    /// Symbol was not found in [`UNIT_TABLE`].
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[error("unsupported unit '{0}' (expected one of: {supported})", supported = Unit::supported_symbols())]
    pub struct UnknownUnit(pub String);

    impl Unit {
        /// Every unit, in the order of [`UNIT_TABLE`].
        pub const ALL: [Unit; 6] = [
            Unit::Meter,
            Unit::Kilometer,
            Unit::Foot,
            Unit::Yard,
            Unit::Mile,
            Unit::NauticalMile,
        ];

        fn index(self) -> usize {
            match self {
                Unit::Meter => 0,
                Unit::Kilometer => 1,
                Unit::Foot => 2,
                Unit::Yard => 3,
                Unit::Mile => 4,
                Unit::NauticalMile => 5,
            }
        }

        /// Lower-case symbol, e.g. `"km"`.
        pub fn symbol(self) -> &'static str {
            UNIT_TABLE[self.index()].0
        }

        /// Number of metres in one unit.
        pub fn meters_per_unit(self) -> f64 {
            UNIT_TABLE[self.index()].1
        }

        /// Resolve a symbol, ignoring ASCII case.
        pub fn from_symbol(symbol: &str) -> Option<Unit> {
            Unit::ALL
                .into_iter()
                .find(|unit| unit.symbol().eq_ignore_ascii_case(symbol))
        }

        /// Comma separated list of supported symbols for diagnostics.
        pub fn supported_symbols() -> String {
            UNIT_TABLE
                .iter()
                .map(|(symbol, _)| *symbol)
                .collect::<Vec<_>>()
                .join(", ")
        }

        /// Express a length in metres in this unit.
        #[inline]
        pub fn convert_meters(self, meters: f64) -> f64 {
            meters / self.meters_per_unit()
        }

        /// Express a length in this unit in metres.
        #[inline]
        pub fn to_meters(self, value: f64) -> f64 {
            value * self.meters_per_unit()
        }
    }

    impl fmt::Display for Unit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.symbol())
        }
    }

    impl FromStr for Unit {
        type Err = UnknownUnit;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Unit::from_symbol(s).ok_or_else(|| UnknownUnit(s.to_string()))
        }
    }
}

/// Decimal rounding with explicit behaviour at the halfway point.
pub mod rounding {
    use serde::{Deserialize, Serialize};

    use super::constants::{MAX_DECIMALS, MIN_DECIMALS};

    /// Significant digits kept when stripping binary noise before tie detection.
    const PRE_ROUND_DIGITS: i32 = 15;

    /// How an exact tie at the target digit is resolved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum RoundingMode {
        /// Ties go away from zero.
        #[default]
        HalfUp,
        /// Ties go toward zero.
        HalfDown,
    }

    impl From<bool> for RoundingMode {
        fn from(round_up: bool) -> Self {
            if round_up {
                RoundingMode::HalfUp
            } else {
                RoundingMode::HalfDown
            }
        }
    }

    /// Whether `decimals` requests rounding at all.
    #[inline]
    pub fn decimals_in_range(decimals: u32) -> bool {
        (MIN_DECIMALS..=MAX_DECIMALS).contains(&decimals)
    }

    /// Round `value` to `decimals` fractional digits.
    ///
    /// `None` or a count outside `[1, 9]` leaves the value untouched. Only an exact
    /// tie at the target digit depends on `mode`; everything else rounds to nearest.
    pub fn round_decimals(value: f64, decimals: Option<u32>, mode: RoundingMode) -> f64 {
        let Some(places) = decimals.filter(|d| decimals_in_range(*d)) else {
            return value;
        };
        if !value.is_finite() || value == 0.0 {
            return value;
        }

        let scale = 10f64.powi(places as i32);
        let scaled = pre_round(value * scale);
        let magnitude = scaled.abs();
        let whole = magnitude.trunc();
        let fraction = magnitude - whole;

        let away = match mode {
            RoundingMode::HalfUp => fraction >= 0.5,
            RoundingMode::HalfDown => fraction > 0.5,
        };
        let rounded = if away { whole + 1.0 } else { whole };
        rounded.copysign(value) / scale
    }

    /// Snap to 15 significant digits so that e.g. `1.005 * 100` reads as the tie `100.5`.
    fn pre_round(value: f64) -> f64 {
        let exponent = value.abs().log10().floor() as i32;
        let shift = PRE_ROUND_DIGITS - 1 - exponent;
        if !(1..=300).contains(&shift) {
            return value;
        }
        let factor = 10f64.powi(shift);
        (value * factor).round() / factor
    }
}
