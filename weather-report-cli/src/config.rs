//! Input file loading and parsing
//!
//! The CLI consumes one TOML file per submission: a `[features]` table with
//! the named numeric fields (absent names keep the form's 0.0 sentinel,
//! exactly like an untouched form field) and an optional `[predictions]`
//! table carrying the raw outputs of the four external models.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use weather_report_core::{FeatureSet, RawPrediction};

/// One submission (loaded from input.toml)
#[derive(Debug, Clone, Deserialize)]
pub struct InputFile {
    /// Named feature values; keys must be required feature names
    pub features: BTreeMap<String, f64>,

    /// Raw model outputs, if inference has already been run externally
    #[serde(default)]
    pub predictions: Option<PredictionsConfig>,
}

/// Raw outputs of the four external predictors
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionsConfig {
    /// Rainfall regression output, log1p domain
    pub rainfall_log: f64,
    /// Temperature regression output (°C)
    pub temperature: f64,
    /// Rain-occurrence classifier code (0 or 1)
    pub rain_code: i64,
    /// Temperature-class classifier code (0, 1 or 2)
    pub temp_code: i64,
}

impl PredictionsConfig {
    pub fn to_raw(&self) -> RawPrediction {
        RawPrediction {
            rainfall_log: self.rainfall_log,
            temperature_c: self.temperature,
            rain_code: self.rain_code,
            temp_code: self.temp_code,
        }
    }
}

impl InputFile {
    /// Build the canonical feature set from the named entries
    pub fn feature_set(&self) -> Result<FeatureSet> {
        let features = FeatureSet::from_entries(
            self.features.iter().map(|(name, value)| (name.as_str(), *value)),
        )
        .context("Invalid [features] table")?;
        Ok(features)
    }
}

/// Load a submission from a TOML file
pub fn load_input(path: &Path) -> Result<InputFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {:?}", path))?;

    let input: InputFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse input file: {:?}", path))?;

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_deserialization() {
        let toml_content = r#"
            [features]
            latitude = 12.9716
            longitude = 77.5946
            "air_quality_PM2.5" = 22.0

            [predictions]
            rainfall_log = 1.486
            temperature = 29.5
            rain_code = 1
            temp_code = 1
        "#;

        let input: InputFile = toml::from_str(toml_content).unwrap();
        assert_eq!(input.features.len(), 3);
        assert_eq!(input.features["air_quality_PM2.5"], 22.0);

        let predictions = input.predictions.unwrap();
        assert_eq!(predictions.rain_code, 1);

        let features = InputFile {
            features: [("latitude".to_string(), 12.9716)].into_iter().collect(),
            predictions: None,
        }
        .feature_set()
        .unwrap();
        assert_eq!(features.get("latitude"), Some(12.9716));
        assert_eq!(features.get("humidity"), Some(0.0)); // sentinel default
    }

    #[test]
    fn test_unknown_feature_name_is_an_error() {
        let input = InputFile {
            features: [("windspeed".to_string(), 1.0)].into_iter().collect(),
            predictions: None,
        };
        assert!(input.feature_set().is_err());
    }
}
