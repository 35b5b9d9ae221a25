//! Paginated report rendering
//!
//! Producing the PDF is the one part of a request that depends on system
//! state, so it is modelled as an ordered list of renderer strategies. Each
//! engine either yields the document bytes or an error; the invoker walks
//! the list and falls through to the next engine on any failure. When every
//! engine fails the caller gets one error carrying each engine's diagnostic
//! so an operator can spot missing system dependencies.
//!
//! Engine order:
//! 1. `wkhtmltopdf`: converts the markup document with the external
//!    wkhtmltopdf binary (faithful to the HTML styling).
//! 2. `native`: builds the document directly with lopdf; always available.

pub mod native;
pub mod wkhtmltopdf;

pub use native::NativeEngine;
pub use wkhtmltopdf::WkhtmltopdfEngine;

use crate::features::FeatureSet;
use crate::prediction::PredictionResult;
use crate::types::{EngineAttempt, ReportError, Result};

/// Errors raised by a single PDF engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine not available: {0}")]
    Unavailable(String),

    #[error("failed to run converter: {0}")]
    Io(#[from] std::io::Error),

    #[error("converter exited with {status}: {stderr}")]
    Converter { status: String, stderr: String },

    #[error("converter produced no output")]
    EmptyOutput,

    #[error("document encoding failed: {0}")]
    Encode(String),
}

/// One strategy for producing the paginated document
pub trait PdfEngine {
    /// Short engine name used in logs and diagnostics
    fn name(&self) -> &'static str;

    /// Cheap availability probe; unavailable engines are skipped
    fn is_available(&self) -> bool {
        true
    }

    /// Render the paginated document for one (features, prediction) pair
    fn render(
        &self,
        features: &FeatureSet,
        prediction: &PredictionResult,
    ) -> std::result::Result<Vec<u8>, EngineError>;
}

/// The default engine chain, in fallback order
pub fn default_engines() -> Vec<Box<dyn PdfEngine>> {
    vec![
        Box::new(WkhtmltopdfEngine::new()),
        Box::new(NativeEngine::new()),
    ]
}

/// Render the paginated document with the default engine chain
pub fn render_pdf(features: &FeatureSet, prediction: &PredictionResult) -> Result<Vec<u8>> {
    render_with_engines(&default_engines(), features, prediction)
}

/// Render with an explicit engine chain
///
/// Tries each engine in order and returns the first non-empty output.
/// Failures are logged and collected; if no engine succeeds the combined
/// diagnostics are returned so the caller can degrade to the markup
/// document.
pub fn render_with_engines(
    engines: &[Box<dyn PdfEngine>],
    features: &FeatureSet,
    prediction: &PredictionResult,
) -> Result<Vec<u8>> {
    let mut attempts = Vec::new();

    for engine in engines {
        if !engine.is_available() {
            log::info!("Skipping unavailable PDF engine: {}", engine.name());
            attempts.push(EngineAttempt {
                engine: engine.name(),
                detail: "not available on this system".to_string(),
            });
            continue;
        }

        log::info!("Rendering PDF with {} engine", engine.name());
        match engine.render(features, prediction) {
            Ok(bytes) if !bytes.is_empty() => {
                log::info!(
                    "PDF rendered with {} engine ({} bytes)",
                    engine.name(),
                    bytes.len()
                );
                return Ok(bytes);
            }
            Ok(_) => {
                log::warn!("{} engine produced no output", engine.name());
                attempts.push(EngineAttempt {
                    engine: engine.name(),
                    detail: EngineError::EmptyOutput.to_string(),
                });
            }
            Err(e) => {
                log::warn!("{} engine failed: {}", engine.name(), e);
                attempts.push(EngineAttempt {
                    engine: engine.name(),
                    detail: e.to_string(),
                });
            }
        }
    }

    Err(ReportError::PdfEngine { attempts })
}

/// Describe which engine would serve a request, for operator diagnostics
pub fn detect_engine() -> String {
    match wkhtmltopdf::find_in_path("wkhtmltopdf") {
        Some(path) => format!("wkhtmltopdf ({})", path.display()),
        None => "native (lopdf)".to_string(),
    }
}
