//! Weather Report Core Library
//!
//! A stateless, reusable library for turning one weather-feature submission
//! plus one set of model outputs into a human-readable report.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on validation and
//! rendering:
//! - Models the fixed 14-feature input vector and its unit annotations
//! - Classifies a submission as Empty, Partial or Complete before inference
//! - Maps raw model outputs (log1p rainfall, classifier codes) to
//!   displayable values and labels
//! - Renders the report as a self-contained HTML document and as a PDF,
//!   with an ordered engine fallback for the PDF
//!
//! The library does NOT:
//! - Train or evaluate the predictive models
//! - Load or deserialize model files
//! - Persist anything, or manage sessions
//!
//! Form collection and file delivery are in the application layer
//! (weather-report-cli).
//!
//! # Example Usage
//!
//! ```
//! use weather_report_core::{check, Completeness, FeatureSet};
//! use weather_report_core::{render_html, PredictionResult, RawPrediction};
//!
//! let features = FeatureSet::from_entries([
//!     ("latitude", 12.9716),
//!     ("longitude", 77.5946),
//!     ("humidity", 65.0),
//!     ("wind_kph", 10.0),
//!     ("cloud", 40.0),
//!     ("pressure_mb", 1012.0),
//!     ("uv_index", 5.0),
//!     ("feels_like_celsius", 29.5),
//!     ("air_quality_Carbon_Monoxide", 0.3),
//!     ("air_quality_Ozone", 18.2),
//!     ("air_quality_Nitrogen_dioxide", 12.1),
//!     ("air_quality_Sulphur_dioxide", 4.5),
//!     ("air_quality_PM2.5", 22.0),
//!     ("air_quality_PM10", 35.0),
//! ]).unwrap();
//!
//! assert_eq!(check(&features), Completeness::Complete);
//!
//! let prediction = PredictionResult::from_raw(&RawPrediction {
//!     rainfall_log: 1.486,
//!     temperature_c: 29.5,
//!     rain_code: 1,
//!     temp_code: 1,
//! });
//! let html = render_html(&features, &prediction);
//! assert!(html.contains("Rain"));
//! ```

// Public modules
pub mod features;
pub mod prediction;
pub mod report;
pub mod types;
pub mod validator;

// Re-export main types for convenience
pub use features::{
    description, display_name, FeatureSet, FEATURE_COUNT, REQUIRED_FEATURES, SENTINEL_DEFAULT,
};
pub use prediction::{
    run_inference, PredictionResult, Predictor, RainOccurrence, RawPrediction, TempClass,
};
pub use report::{detect_engine, render_download, render_html, render_pdf, PdfEngine};
pub use types::{
    EngineAttempt, ReportDownload, ReportError, Result, HTML_FALLBACK_FILE_NAME, HTML_MIME,
    PDF_FILE_NAME, PDF_MIME,
};
pub use validator::{check, Completeness, REQUIRED_COUNT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
