//! A computed distance bundled with its endpoints.

use geodist_coords::{Coordinate, CoordinateError, CoordinateValue};
use geodist_core::rounding::RoundingMode;
use serde::Serialize;

use crate::compute::{Distance, compute_distance};
use crate::convert::{Conversions, UnitError, convert, convert_all, convert_many};

/// Immutable result of a distance computation, convertible into any unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    origin: Coordinate,
    destination: Coordinate,
    distance: Distance,
}

impl Measurement {
    pub fn between(origin: Coordinate, destination: Coordinate) -> Self {
        Measurement {
            origin,
            destination,
            distance: compute_distance(&origin, &destination),
        }
    }

    /// Validate four raw components and measure between them.
    pub fn from_raw(
        from_lat: impl Into<CoordinateValue>,
        from_lon: impl Into<CoordinateValue>,
        to_lat: impl Into<CoordinateValue>,
        to_lon: impl Into<CoordinateValue>,
    ) -> Result<Self, CoordinateError> {
        let origin = Coordinate::parse(from_lat, from_lon)?;
        let destination = Coordinate::parse(to_lat, to_lon)?;
        Ok(Self::between(origin, destination))
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn meters(&self) -> f64 {
        self.distance.meters()
    }

    pub fn to(
        &self,
        unit: &str,
        decimals: Option<u32>,
        mode: impl Into<RoundingMode>,
    ) -> Result<f64, UnitError> {
        convert(self.distance, unit, decimals, mode.into())
    }

    pub fn to_many<I, S>(
        &self,
        units: I,
        decimals: Option<u32>,
        mode: impl Into<RoundingMode>,
    ) -> Result<Conversions, UnitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        convert_many(self.distance, units, decimals, mode.into())
    }

    pub fn to_all(&self, decimals: Option<u32>, mode: impl Into<RoundingMode>) -> Conversions {
        convert_all(self.distance, decimals, mode.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_from_raw_input() {
        let m = Measurement::from_raw("45.4987", "-73.5703", 45.5569, -73.748).unwrap();
        let km = m.to("km", Some(3), true).unwrap();
        assert!((km - 15.298).abs() < 0.001, "km = {km}");
        assert_eq!(m.origin().latitude, 45.4987);
        assert_eq!(m.destination().longitude, -73.748);
    }

    #[test]
    fn invalid_endpoint_is_a_coordinate_error() {
        let err = Measurement::from_raw(45.0, -73.0, 95.0, -73.0).unwrap_err();
        assert!(matches!(err, CoordinateError::OutOfRange { .. }));
    }

    #[test]
    fn zero_measurement_conventions() {
        let m = Measurement::from_raw(45.5, -73.5, 45.5, -73.5).unwrap();
        assert_eq!(m.meters(), 0.0);
        assert_eq!(m.to("km", None, true), Ok(0.0));
        assert!(m.to_all(None, true).is_empty());
        assert!(m.to_many(["km", "mi"], None, true).unwrap().is_empty());
    }
}
