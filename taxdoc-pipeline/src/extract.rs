use async_trait::async_trait;
use thiserror::Error;

use crate::document::ExtractedDocument;

/// Errors that can occur while extracting figures from a document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document could not be classified as a supported tax form.
    #[error("document is not a supported tax form (W-2, 1099-NEC, 1099-INT)")]
    UnsupportedDocument,

    /// The extraction service failed or returned malformed output.
    #[error("extraction service error: {0}")]
    Service(String),
}

/// Boundary to the external document-understanding service.
///
/// One implementation wraps the hosted model endpoint; tests and the
/// offline CLI use [`FixtureExtractor`]. Implementations must be safe to
/// share across tasks.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Extracts structured figures from one document's text.
    async fn extract(&self, document_text: &str) -> Result<ExtractedDocument, ExtractError>;
}

/// Extractor that parses the document text as an [`ExtractedDocument`]
/// JSON fixture.
///
/// Stands in for the hosted extraction service wherever the service
/// itself is out of reach: unit tests, integration tests, and the
/// offline `taxdoc-estimate` binary.
#[derive(Debug, Clone, Default)]
pub struct FixtureExtractor;

#[async_trait]
impl DocumentExtractor for FixtureExtractor {
    async fn extract(&self, document_text: &str) -> Result<ExtractedDocument, ExtractError> {
        serde_json::from_str(document_text).map_err(|err| ExtractError::Service(err.to_string()))
    }
}
