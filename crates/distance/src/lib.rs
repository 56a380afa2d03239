//! Great-circle distance on a spherical Earth and conversion into linear units.
//!
//! [`compute_distance`] produces a [`Distance`] value, [`convert`] turns one into any
//! supported unit, and [`Measurement`] bundles both for chained use.

pub mod compute;
pub mod convert;
pub mod measurement;

pub use compute::{Distance, compute_distance};
pub use convert::{Conversions, UnitError, convert, convert_all, convert_many, convert_unit};
pub use geodist_core::rounding::RoundingMode;
pub use geodist_core::units::Unit;
pub use measurement::Measurement;
