//! Great-circle distance between geographic coordinates, reported in linear units.
//!
//! The member crates do the work: `geodist_coords` validates decimal-degree input,
//! `geodist_distance` measures and converts, `geodist_config` loads reporting preferences.
//! This crate re-exports them and adds the stateful [`Calculator`] front-end.
//!
//! ```
//! use geodistance::Measurement;
//!
//! let hop = Measurement::from_raw(45.4987, -73.5703, 45.5569, -73.7480)?;
//! let km = hop.to("km", Some(3), true)?;
//! assert!((km - 15.298).abs() < 0.001);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod calculator;
mod error;
pub mod report;

pub use calculator::Calculator;
pub use error::Error;
pub use geodist_config::{ConfigError, ConversionConfig, load_config};
pub use geodist_coords::{
    Axis, Coordinate, CoordinateError, CoordinateValue, is_coordinate, is_valid_coordinate,
    is_valid_latitude, is_valid_longitude, parse_latitude, parse_longitude,
};
pub use geodist_core::constants::EARTH_RADIUS_M;
pub use geodist_core::rounding::RoundingMode;
pub use geodist_core::units::{UNIT_TABLE, Unit};
pub use geodist_distance::{
    Conversions, Distance, Measurement, UnitError, compute_distance, convert, convert_all,
    convert_many, convert_unit,
};
pub use report::convert_with;
