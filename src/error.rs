use geodist_config::ConfigError;
use geodist_coords::CoordinateError;
use geodist_distance::UnitError;

/// Top-level error covering every failure the library can report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidCoordinateFormat(#[from] CoordinateError),
    #[error(transparent)]
    InvalidUnit(#[from] UnitError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
