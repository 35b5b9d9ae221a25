//! Core types shared across the report library
//!
//! This module defines the error type, the crate-wide `Result` alias and the
//! delivery-side types (file names, MIME types, download payloads) used when
//! handing a rendered report to the hosting layer.

use std::fmt;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// File name offered for the paginated report download
pub const PDF_FILE_NAME: &str = "weather_prediction_report.pdf";

/// MIME type of the paginated report
pub const PDF_MIME: &str = "application/pdf";

/// File name offered when the paginated render fails and the markup
/// document is served as a substitute
pub const HTML_FALLBACK_FILE_NAME: &str = "weather_report.html";

/// MIME type of the markup report
pub const HTML_MIME: &str = "text/html";

/// Errors that can occur while building or rendering a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unknown feature name: {0}")]
    UnknownFeature(String),

    #[error("Duplicate feature name: {0}")]
    DuplicateFeature(String),

    #[error("Non-finite value for feature {name}: {value}")]
    NonFiniteValue { name: String, value: f64 },

    #[error("Inference failed for {target}: {detail}")]
    Inference {
        target: &'static str,
        detail: String,
    },

    #[error("No PDF engine succeeded: {}", format_attempts(.attempts))]
    PdfEngine { attempts: Vec<EngineAttempt> },

    #[error("PDF encoding failed: {0}")]
    PdfEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One failed attempt at producing the paginated document
///
/// Collected so an operator can diagnose missing system dependencies
/// (e.g. wkhtmltopdf not installed) from a single error message.
#[derive(Debug, Clone)]
pub struct EngineAttempt {
    /// Engine name (e.g. "wkhtmltopdf", "native")
    pub engine: &'static str,
    /// Human-readable failure detail
    pub detail: String,
}

impl fmt::Display for EngineAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.engine, self.detail)
    }
}

fn format_attempts(attempts: &[EngineAttempt]) -> String {
    attempts
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A rendered report ready to be offered as a file download
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDownload {
    /// Suggested file name for the download
    pub file_name: &'static str,
    /// MIME type declaration
    pub mime_type: &'static str,
    /// Document bytes
    pub bytes: Vec<u8>,
}

impl ReportDownload {
    /// Wrap paginated-document bytes as a PDF download
    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self {
            file_name: PDF_FILE_NAME,
            mime_type: PDF_MIME,
            bytes,
        }
    }

    /// Wrap the markup document as the fallback HTML download
    pub fn html_fallback(html: String) -> Self {
        Self {
            file_name: HTML_FALLBACK_FILE_NAME,
            mime_type: HTML_MIME,
            bytes: html.into_bytes(),
        }
    }
}
