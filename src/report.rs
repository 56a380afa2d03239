//! Applying a loaded [`ConversionConfig`] to a distance.

use geodist_config::ConversionConfig;
use geodist_distance::{Conversions, Distance, UnitError, convert_all, convert_many};
use tracing::debug;

/// Convert `distance` as described by `config`.
///
/// An empty unit list reports every unit. Zero distances produce an empty mapping either way.
pub fn convert_with(
    distance: Distance,
    config: &ConversionConfig,
) -> Result<Conversions, UnitError> {
    let mode = config.rounding_mode();
    let report = if config.units.is_empty() {
        convert_all(distance, config.decimals, mode)
    } else {
        convert_many(distance, &config.units, config.decimals, mode)?
    };
    debug!(entries = report.len(), "applied conversion config");
    Ok(report)
}
