//! Feature set model
//!
//! Defines the fixed 14-parameter input vector consumed by the predictors
//! and rendered in the report, together with the static unit/description
//! lookup used for report annotation.
//!
//! The set of feature names is closed: a `FeatureSet` always holds exactly
//! these 14 values, in this order. A field the user never filled keeps the
//! form's sentinel default of 0.0.

use crate::types::{ReportError, Result};

/// Number of required input features
pub const FEATURE_COUNT: usize = 14;

/// Sentinel value carried by form fields the user never filled
pub const SENTINEL_DEFAULT: f64 = 0.0;

/// The required feature names, in canonical (form and inference) order
pub const REQUIRED_FEATURES: [&str; FEATURE_COUNT] = [
    "latitude",
    "longitude",
    "humidity",
    "wind_kph",
    "cloud",
    "pressure_mb",
    "uv_index",
    "feels_like_celsius",
    "air_quality_Carbon_Monoxide",
    "air_quality_Ozone",
    "air_quality_Nitrogen_dioxide",
    "air_quality_Sulphur_dioxide",
    "air_quality_PM2.5",
    "air_quality_PM10",
];

/// Unit/description string for a feature name, used only for report
/// annotation. Returns an empty string for unknown names.
pub fn description(name: &str) -> &'static str {
    match name {
        "latitude" => "Degrees North",
        "longitude" => "Degrees East",
        "humidity" => "Percentage (%)",
        "wind_kph" => "Kilometers per Hour",
        "cloud" => "Percentage (%)",
        "pressure_mb" => "Millibars",
        "uv_index" => "UV Index Scale",
        "feels_like_celsius" => "Degrees Celsius",
        "air_quality_Carbon_Monoxide" => "μg/m³",
        "air_quality_Ozone" => "μg/m³",
        "air_quality_Nitrogen_dioxide" => "μg/m³",
        "air_quality_Sulphur_dioxide" => "μg/m³",
        "air_quality_PM2.5" => "μg/m³",
        "air_quality_PM10" => "μg/m³",
        _ => "",
    }
}

/// Human-readable display name: underscores become spaces, then each word
/// is title-cased (first alphabetic character uppercased, the rest
/// lowercased). `air_quality_PM2.5` → `Air Quality Pm2.5`.
pub fn display_name(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The 14-value numeric input vector for inference
///
/// Immutable once constructed; values are stored in canonical order so that
/// iteration, the report table and the inference vector all agree.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    values: [f64; FEATURE_COUNT],
}

impl FeatureSet {
    /// Build a feature set from values given in canonical order
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Result<Self> {
        for (i, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ReportError::NonFiniteValue {
                    name: REQUIRED_FEATURES[i].to_string(),
                    value: *value,
                });
            }
        }
        Ok(Self { values })
    }

    /// Build a feature set from named entries
    ///
    /// Mirrors the submission form: names absent from the input keep the
    /// sentinel default. Unknown names, duplicate names and non-finite
    /// values are errors.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut values = [SENTINEL_DEFAULT; FEATURE_COUNT];
        let mut seen = [false; FEATURE_COUNT];

        for (name, value) in entries {
            let name = name.as_ref();
            let index = REQUIRED_FEATURES
                .iter()
                .position(|f| *f == name)
                .ok_or_else(|| ReportError::UnknownFeature(name.to_string()))?;
            if seen[index] {
                return Err(ReportError::DuplicateFeature(name.to_string()));
            }
            if !value.is_finite() {
                return Err(ReportError::NonFiniteValue {
                    name: name.to_string(),
                    value,
                });
            }
            values[index] = value;
            seen[index] = true;
        }

        Ok(Self { values })
    }

    /// Value of a feature by name
    pub fn get(&self, name: &str) -> Option<f64> {
        REQUIRED_FEATURES
            .iter()
            .position(|f| *f == name)
            .map(|i| self.values[i])
    }

    /// The numeric vector in canonical order, as fed to the predictors
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Iterate over (name, value) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        REQUIRED_FEATURES
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (*name, *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("latitude"), "Latitude");
        assert_eq!(display_name("uv_index"), "Uv Index");
        assert_eq!(display_name("feels_like_celsius"), "Feels Like Celsius");
        assert_eq!(
            display_name("air_quality_Carbon_Monoxide"),
            "Air Quality Carbon Monoxide"
        );
        assert_eq!(display_name("air_quality_PM2.5"), "Air Quality Pm2.5");
    }

    #[test]
    fn test_descriptions_cover_all_features() {
        for name in REQUIRED_FEATURES {
            assert!(!description(name).is_empty(), "no description for {}", name);
        }
        assert_eq!(description("not_a_feature"), "");
    }

    #[test]
    fn test_from_entries_defaults_missing_names() {
        let features =
            FeatureSet::from_entries([("latitude", 12.9716), ("humidity", 65.0)]).unwrap();
        assert_eq!(features.get("latitude"), Some(12.9716));
        assert_eq!(features.get("humidity"), Some(65.0));
        assert_eq!(features.get("longitude"), Some(SENTINEL_DEFAULT));
        assert_eq!(features.get("air_quality_PM10"), Some(SENTINEL_DEFAULT));
    }

    #[test]
    fn test_from_entries_rejects_unknown_name() {
        let err = FeatureSet::from_entries([("windspeed", 1.0)]).unwrap_err();
        assert!(matches!(err, ReportError::UnknownFeature(name) if name == "windspeed"));
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let err =
            FeatureSet::from_entries([("latitude", 1.0), ("latitude", 2.0)]).unwrap_err();
        assert!(matches!(err, ReportError::DuplicateFeature(name) if name == "latitude"));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let err = FeatureSet::from_entries([("cloud", f64::NAN)]).unwrap_err();
        assert!(matches!(err, ReportError::NonFiniteValue { .. }));

        let mut values = [1.0; FEATURE_COUNT];
        values[3] = f64::INFINITY;
        assert!(FeatureSet::from_values(values).is_err());
    }

    #[test]
    fn test_iteration_is_canonical_order() {
        let features = FeatureSet::from_values([
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0,
        ])
        .unwrap();
        let names: Vec<&str> = features.iter().map(|(name, _)| name).collect();
        assert_eq!(names, REQUIRED_FEATURES.to_vec());
        assert_eq!(features.values()[12], 13.0); // air_quality_PM2.5
    }
}
