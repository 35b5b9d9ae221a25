//! Prediction result model and the inference boundary
//!
//! The predictive models themselves live outside this library. What lives
//! here is the seam: the `Predictor` trait each external model is invoked
//! through, the raw (pre-transform) output record, and the mapping from raw
//! outputs to the displayable `PredictionResult`, which inverts the log1p
//! transform on the rainfall regression and maps classifier codes to
//! their labels.

use crate::features::{FeatureSet, FEATURE_COUNT};
use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Untransformed outputs of the four predictors
///
/// `rainfall_log` is in the log1p domain; the caller-visible millimetre
/// value is recovered in [`PredictionResult::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    /// Rainfall regression output (log1p domain)
    pub rainfall_log: f64,
    /// Temperature regression output (°C)
    pub temperature_c: f64,
    /// Rain-occurrence classifier code (expected 0 or 1)
    pub rain_code: i64,
    /// Temperature-class classifier code (expected 0, 1 or 2)
    pub temp_code: i64,
}

/// Rain-occurrence label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RainOccurrence {
    NoRain,
    Rain,
    /// Classifier produced a code outside the known enumeration
    Unknown,
}

impl RainOccurrence {
    /// Map a classifier code to its label (0 → NoRain, 1 → Rain)
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => RainOccurrence::NoRain,
            1 => RainOccurrence::Rain,
            _ => RainOccurrence::Unknown,
        }
    }
}

impl fmt::Display for RainOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RainOccurrence::NoRain => write!(f, "No Rain"),
            RainOccurrence::Rain => write!(f, "Rain"),
            RainOccurrence::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Temperature classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempClass {
    Cold,
    Moderate,
    Hot,
    /// Classifier produced a code outside the known enumeration
    Unknown,
}

impl TempClass {
    /// Map a classifier code to its label (0 → Cold, 1 → Moderate, 2 → Hot)
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => TempClass::Cold,
            1 => TempClass::Moderate,
            2 => TempClass::Hot,
            _ => TempClass::Unknown,
        }
    }
}

impl fmt::Display for TempClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempClass::Cold => write!(f, "Cold"),
            TempClass::Moderate => write!(f, "Moderate"),
            TempClass::Hot => write!(f, "Hot"),
            TempClass::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The four-field output of inference, ready for display
///
/// Produced once per successful inference and read-only thereafter; both
/// report renderers consume it without modifying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted rainfall amount in millimetres (non-negative)
    pub rainfall_mm: f64,
    /// Predicted temperature in °C
    pub temperature_c: f64,
    /// Rain-occurrence label
    pub rain_class: RainOccurrence,
    /// Temperature-class label
    pub temp_class: TempClass,
}

impl PredictionResult {
    /// Build a displayable result from raw predictor outputs
    ///
    /// Inverts the log1p transform on the rainfall regression output and
    /// clamps at zero to keep the non-negative invariant.
    pub fn from_raw(raw: &RawPrediction) -> Self {
        Self {
            rainfall_mm: raw.rainfall_log.exp_m1().max(0.0),
            temperature_c: raw.temperature_c,
            rain_class: RainOccurrence::from_code(raw.rain_code),
            temp_class: TempClass::from_code(raw.temp_code),
        }
    }
}

/// A single external prediction model
///
/// Each of the four models accepts the 14-feature numeric vector in
/// canonical order and returns one scalar. Classifier outputs are rounded
/// to the nearest integer code by the caller.
pub trait Predictor {
    /// Run the model on one feature vector
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64>;
}

/// Run the four predictors against a complete feature set
///
/// Blocking and stateless: four independent calls, then one assembly step.
/// The caller is expected to have validated completeness first; this
/// function does not re-check.
pub fn run_inference(
    rain_regressor: &dyn Predictor,
    temp_regressor: &dyn Predictor,
    rain_classifier: &dyn Predictor,
    temp_classifier: &dyn Predictor,
    features: &FeatureSet,
) -> Result<PredictionResult> {
    let vector = features.values();

    let rainfall_log = rain_regressor.predict(vector)?;
    let temperature_c = temp_regressor.predict(vector)?;
    let rain_code = rain_classifier.predict(vector)?.round() as i64;
    let temp_code = temp_classifier.predict(vector)?.round() as i64;

    log::debug!(
        "Inference outputs: rainfall_log={:.4}, temperature={:.4}, rain_code={}, temp_code={}",
        rainfall_log,
        temperature_c,
        rain_code,
        temp_code
    );

    Ok(PredictionResult::from_raw(&RawPrediction {
        rainfall_log,
        temperature_c,
        rain_code,
        temp_code,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureSet;

    struct Constant(f64);

    impl Predictor for Constant {
        fn predict(&self, _features: &[f64; FEATURE_COUNT]) -> Result<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_label_mappings() {
        assert_eq!(RainOccurrence::from_code(0).to_string(), "No Rain");
        assert_eq!(RainOccurrence::from_code(1).to_string(), "Rain");
        assert_eq!(RainOccurrence::from_code(7).to_string(), "Unknown");

        assert_eq!(TempClass::from_code(0).to_string(), "Cold");
        assert_eq!(TempClass::from_code(1).to_string(), "Moderate");
        assert_eq!(TempClass::from_code(2).to_string(), "Hot");
        assert_eq!(TempClass::from_code(-1).to_string(), "Unknown");
    }

    #[test]
    fn test_from_raw_inverts_log_transform() {
        let raw = RawPrediction {
            rainfall_log: 2.0_f64.ln_1p(),
            temperature_c: 29.5,
            rain_code: 1,
            temp_code: 1,
        };
        let result = PredictionResult::from_raw(&raw);
        assert!((result.rainfall_mm - 2.0).abs() < 1e-9);
        assert_eq!(result.temperature_c, 29.5);
        assert_eq!(result.rain_class, RainOccurrence::Rain);
        assert_eq!(result.temp_class, TempClass::Moderate);
    }

    #[test]
    fn test_rainfall_clamped_non_negative() {
        let raw = RawPrediction {
            rainfall_log: -0.5,
            temperature_c: 10.0,
            rain_code: 0,
            temp_code: 0,
        };
        let result = PredictionResult::from_raw(&raw);
        assert_eq!(result.rainfall_mm, 0.0);
    }

    #[test]
    fn test_run_inference_assembles_result() {
        let features = FeatureSet::from_values([1.0; FEATURE_COUNT]).unwrap();
        let result = run_inference(
            &Constant(3.42_f64.ln_1p()),
            &Constant(29.5),
            &Constant(1.0),
            &Constant(1.2), // rounds to 1
            &features,
        )
        .unwrap();
        assert!((result.rainfall_mm - 3.42).abs() < 1e-9);
        assert_eq!(result.rain_class, RainOccurrence::Rain);
        assert_eq!(result.temp_class, TempClass::Moderate);
    }
}
