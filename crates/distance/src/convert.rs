//! Unit conversion of computed distances, with optional decimal rounding.

use geodist_core::rounding::{RoundingMode, round_decimals};
use geodist_core::units::{Unit, UnknownUnit};
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;
use tracing::trace;

use crate::compute::Distance;

/// Errors raised when a requested unit is not part of the unit table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("invalid unit '{unit}', supported units are: {supported}")]
    Unsupported { unit: String, supported: String },
}

impl From<UnknownUnit> for UnitError {
    fn from(err: UnknownUnit) -> Self {
        UnitError::Unsupported {
            unit: err.0,
            supported: Unit::supported_symbols(),
        }
    }
}

/// Ordered unit → value mapping. Keys keep the spelling and order they were requested in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversions {
    entries: Vec<(String, f64)>,
}

impl Conversions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; an overwritten key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<(String, f64)> {
        self.entries
    }
}

impl IntoIterator for Conversions {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Conversions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Express `distance` in a known unit.
pub fn convert_unit(
    distance: Distance,
    unit: Unit,
    decimals: Option<u32>,
    mode: RoundingMode,
) -> f64 {
    let raw = unit.convert_meters(distance.meters());
    let value = round_decimals(raw, decimals, mode);
    trace!(%unit, raw, value, ?decimals, ?mode, "converted distance");
    value
}

/// Express `distance` in the unit named by `symbol` (case-insensitive).
///
/// A zero distance returns `0.0` before the symbol is looked at, so an unknown symbol
/// only fails once there is something to convert.
pub fn convert(
    distance: Distance,
    symbol: &str,
    decimals: Option<u32>,
    mode: RoundingMode,
) -> Result<f64, UnitError> {
    if distance.is_zero() {
        return Ok(0.0);
    }
    let unit: Unit = symbol.parse()?;
    Ok(convert_unit(distance, unit, decimals, mode))
}

/// Convert into each requested unit in order. The first unknown symbol aborts the batch.
///
/// A zero distance yields an empty mapping.
pub fn convert_many<I, S>(
    distance: Distance,
    symbols: I,
    decimals: Option<u32>,
    mode: RoundingMode,
) -> Result<Conversions, UnitError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Conversions::new();
    if distance.is_zero() {
        return Ok(out);
    }
    for symbol in symbols {
        let symbol = symbol.as_ref();
        out.insert(symbol, convert(distance, symbol, decimals, mode)?);
    }
    Ok(out)
}

/// Convert into every supported unit, in table order. A zero distance yields an empty mapping.
pub fn convert_all(distance: Distance, decimals: Option<u32>, mode: RoundingMode) -> Conversions {
    let mut out = Conversions::new();
    if distance.is_zero() {
        return out;
    }
    for unit in Unit::ALL {
        out.insert(unit.symbol(), convert_unit(distance, unit, decimals, mode));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_UP: RoundingMode = RoundingMode::HalfUp;

    #[test]
    fn converts_with_table_factors() {
        let d = Distance::from_meters(1_852.0);
        assert_eq!(convert(d, "nm", None, HALF_UP).unwrap(), 1.0);
        assert_eq!(convert(d, "km", None, HALF_UP).unwrap(), 1.852);
        assert_eq!(convert(d, "M", None, HALF_UP).unwrap(), 1_852.0);
        let ft = convert(d, "ft", None, HALF_UP).unwrap();
        assert!((ft * 0.3048 - 1_852.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_unit_names_symbol_and_table() {
        let err = convert(Distance::from_meters(10.0), "parsec", None, HALF_UP).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("parsec"));
        assert!(message.contains("m, km, ft, yd, mi, nm"));
    }

    #[test]
    fn zero_distance_skips_unit_check() {
        assert_eq!(convert(Distance::ZERO, "bogus", Some(2), HALF_UP), Ok(0.0));
        assert!(convert_many(Distance::ZERO, ["bogus"], None, HALF_UP)
            .unwrap()
            .is_empty());
        assert!(convert_all(Distance::ZERO, None, HALF_UP).is_empty());
    }

    #[test]
    fn many_keeps_request_order_and_spelling() {
        let d = Distance::from_meters(5_000.0);
        let out = convert_many(d, ["MI", "m", "Km"], Some(2), HALF_UP).unwrap();
        let keys: Vec<_> = out.keys().collect();
        assert_eq!(keys, ["MI", "m", "Km"]);
        assert_eq!(out.get("Km"), Some(5.0));
        assert_eq!(out.get("MI"), Some(3.11));
    }

    #[test]
    fn many_aborts_on_first_bad_unit() {
        let d = Distance::from_meters(5_000.0);
        let err = convert_many(d, ["km", "league", "xx"], None, HALF_UP).unwrap_err();
        assert_eq!(
            err,
            UnitError::Unsupported {
                unit: "league".into(),
                supported: Unit::supported_symbols(),
            }
        );
    }

    #[test]
    fn duplicate_keys_overwrite_in_place() {
        let mut out = Conversions::new();
        out.insert("km", 1.0);
        out.insert("m", 2.0);
        out.insert("km", 3.0);
        assert_eq!(out.clone().into_vec(), vec![("km".into(), 3.0), ("m".into(), 2.0)]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let out = convert_all(Distance::from_meters(1_000.0), Some(3), HALF_UP);
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(
            json,
            r#"{"m":1000.0,"km":1.0,"ft":3280.84,"yd":1093.613,"mi":0.621,"nm":0.54}"#
        );
    }
}
