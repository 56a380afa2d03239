//! Stateful calculator: compute once, then convert the stored distance as often as needed.
//!
//! Each instance is meant to be owned by a single flow. Sharing one across threads needs a
//! lock around the `calculate`-then-convert sequence.

use geodist_config::ConversionConfig;
use geodist_coords::{CoordinateValue, is_valid_coordinate};
use geodist_distance::{Conversions, Distance, Measurement, convert, convert_all, convert_many};
use tracing::debug;

use crate::Error;
use crate::report::convert_with;

/// Holds the most recent successful measurement.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    last: Option<Measurement>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate both endpoints and store the distance between them.
    ///
    /// On error the previously stored distance is kept.
    pub fn calculate(
        &mut self,
        from_lat: impl Into<CoordinateValue>,
        from_lon: impl Into<CoordinateValue>,
        to_lat: impl Into<CoordinateValue>,
        to_lon: impl Into<CoordinateValue>,
    ) -> Result<&mut Self, Error> {
        let measurement = Measurement::from_raw(from_lat, from_lon, to_lat, to_lon)?;
        debug!(meters = measurement.meters(), "calculator updated");
        self.last = Some(measurement);
        Ok(self)
    }

    /// Last computed distance in metres; 0 before any calculation.
    pub fn distance(&self) -> f64 {
        self.current().meters()
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        self.last.as_ref()
    }

    fn current(&self) -> Distance {
        self.last
            .as_ref()
            .map(Measurement::distance)
            .unwrap_or_default()
    }

    /// Stored distance in `unit`. A zero distance returns 0 for any unit string.
    pub fn to(&self, unit: &str, decimals: Option<u32>, round_up: bool) -> Result<f64, Error> {
        Ok(convert(self.current(), unit, decimals, round_up.into())?)
    }

    /// Stored distance in each of `units`, keyed as requested. Empty when the distance is zero.
    pub fn to_many<I, S>(
        &self,
        units: I,
        decimals: Option<u32>,
        round_up: bool,
    ) -> Result<Conversions, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(convert_many(
            self.current(),
            units,
            decimals,
            round_up.into(),
        )?)
    }

    /// Stored distance in every supported unit. Empty when the distance is zero.
    pub fn to_all(&self, decimals: Option<u32>, round_up: bool) -> Conversions {
        convert_all(self.current(), decimals, round_up.into())
    }

    /// Stored distance reported as `config` describes.
    pub fn convert_with(&self, config: &ConversionConfig) -> Result<Conversions, Error> {
        Ok(convert_with(self.current(), config)?)
    }

    /// Whether the pair is a valid coordinate. Never fails.
    pub fn is_coordinate(
        latitude: impl Into<CoordinateValue>,
        longitude: impl Into<CoordinateValue>,
    ) -> bool {
        is_valid_coordinate(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_calculator_reports_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.distance(), 0.0);
        assert!(calc.measurement().is_none());
        assert_eq!(calc.to("km", None, true).unwrap(), 0.0);
        assert!(calc.to_all(None, true).is_empty());
    }

    #[test]
    fn failed_calculation_keeps_previous_distance() {
        let mut calc = Calculator::new();
        calc.calculate(45.4987, -73.5703, 45.5569, -73.7480).unwrap();
        let before = calc.distance();
        assert!(calc.calculate(91, 0, 0, 0).is_err());
        assert_eq!(calc.distance(), before);
    }

    #[test]
    fn each_calculation_overwrites() {
        let mut calc = Calculator::new();
        calc.calculate(45.4987, -73.5703, 45.5569, -73.7480).unwrap();
        assert!(calc.distance() > 0.0);
        calc.calculate(10, 10, 10, 10).unwrap();
        assert_eq!(calc.distance(), 0.0);
    }
}
