use std::io::Write;

use geodistance::{Calculator, ConfigError, ConversionConfig, Error, load_config};

fn config_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn montreal_hop() -> Calculator {
    let mut calc = Calculator::new();
    calc.calculate(45.4987, -73.5703, 45.5569, -73.7480)
        .expect("valid coordinates");
    calc
}

#[test]
fn toml_config_selects_units_and_rounding() {
    let file = config_file(".toml", "decimals = 2\nunits = [\"mi\", \"km\"]\n");
    let config = load_config(file.path()).expect("config loads");
    let report = montreal_hop().convert_with(&config).unwrap();
    let entries = report.into_vec();
    assert_eq!(entries, vec![("mi".to_string(), 9.51), ("km".to_string(), 15.3)]);
}

#[test]
fn yaml_config_without_units_reports_everything() {
    let file = config_file(".yml", "decimals: 1\nround_up: false\n");
    let config = load_config(file.path()).expect("config loads");
    let report = montreal_hop().convert_with(&config).unwrap();
    let keys: Vec<_> = report.keys().collect();
    assert_eq!(keys, ["m", "km", "ft", "yd", "mi", "nm"]);
}

#[test]
fn default_config_on_zero_distance_is_empty() {
    let mut calc = Calculator::new();
    calc.calculate(0, 0, 0, 0).unwrap();
    let report = calc.convert_with(&ConversionConfig::default()).unwrap();
    assert!(report.is_empty());
}

#[test]
fn unvalidated_config_surfaces_unit_error() {
    let config = ConversionConfig {
        units: vec!["league".into()],
        ..ConversionConfig::default()
    };
    let err = montreal_hop().convert_with(&config).unwrap_err();
    assert!(matches!(err, Error::InvalidUnit(_)));
}

#[test]
fn config_errors_convert_into_crate_error() {
    let file = config_file(".toml", "units = 5\n");
    let err: Error = load_config(file.path()).unwrap_err().into();
    assert!(matches!(err, Error::Config(ConfigError::Toml(_))));
}

#[test]
fn report_serializes_in_request_order() {
    let file = config_file(".toml", "decimals = 3\nunits = [\"nm\", \"m\"]\n");
    let config = load_config(file.path()).unwrap();
    let report = montreal_hop().convert_with(&config).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.starts_with("{\"nm\":8.26"), "json = {json}");
    assert!(json.contains("\"m\":"));
}
