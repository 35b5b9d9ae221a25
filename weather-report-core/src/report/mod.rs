//! Report rendering
//!
//! Transforms a validated feature set plus a prediction result into a
//! human-readable document in two target formats: the markup (HTML)
//! document and the paginated (PDF) document. Both renderers are pure
//! functions of their two inputs and display the same values with the same
//! formatting, so the two representations stay in sync.

pub mod html;
pub mod pdf;

pub use html::render_html;
pub use pdf::{default_engines, detect_engine, render_pdf, PdfEngine};

use crate::features::FeatureSet;
use crate::prediction::PredictionResult;
use crate::types::ReportDownload;

/// Produce the downloadable report, degrading on paginated-render failure
///
/// Tries the PDF engine chain; if no engine succeeds the failure is logged
/// with its per-engine diagnostics and the markup document is offered as
/// the substitute download. Never fails the request.
pub fn render_download(features: &FeatureSet, prediction: &PredictionResult) -> ReportDownload {
    match pdf::render_pdf(features, prediction) {
        Ok(bytes) => ReportDownload::pdf(bytes),
        Err(e) => {
            log::error!("Paginated render failed, offering markup substitute: {}", e);
            ReportDownload::html_fallback(html::render_html(features, prediction))
        }
    }
}
