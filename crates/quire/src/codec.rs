//! Conversion entry points bound to a configuration.

use std::collections::HashMap;

use quire_config::CodecConfig;
use quire_delta::DeltaOp;
use quire_model::Document;

use crate::error::CodecError;

/// Document codec.
///
/// Holds the configuration every conversion uses. Conversions are pure and
/// build all intermediate structures per call, so a codec can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given configuration.
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Parse an HTML fragment into a document.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Html`] if the markup is malformed or nested deeper
    /// than the configured limit.
    pub fn html_to_document(&self, html: &str) -> Result<Document, CodecError> {
        let segments = quire_html::html_to_segments(html, &self.config)?;
        tracing::debug!(segments = segments.len(), "Parsed HTML document");
        Ok(Document::new(segments))
    }

    /// Render a document as HTML.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Html`] wrapping a validation error if the
    /// document's format ranges or header levels are invalid.
    pub fn document_to_html(&self, document: &Document) -> Result<String, CodecError> {
        Ok(quire_html::document_to_html(document, &self.config)?)
    }

    /// Parse an HTML fragment into document JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Html`] if the markup cannot be parsed.
    pub fn html_to_json(&self, html: &str) -> Result<String, CodecError> {
        Ok(self.html_to_document(html)?.to_json()?)
    }

    /// Read and validate document JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Model`] for malformed JSON and
    /// [`CodecError::Validation`] for documents violating range or header
    /// invariants.
    pub fn json_to_document(&self, json: &str) -> Result<Document, CodecError> {
        let document = Document::from_json(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Render document JSON as HTML.
    ///
    /// # Errors
    ///
    /// See [`Codec::json_to_document`].
    pub fn json_to_html(&self, json: &str) -> Result<String, CodecError> {
        let document = self.json_to_document(json)?;
        self.document_to_html(&document)
    }

    /// Build a document from an operation stream.
    ///
    /// `assets` maps image sources to the asset ids returned by the upload
    /// step; images without an entry are left out.
    #[must_use]
    pub fn delta_to_document(&self, ops: &[DeltaOp], assets: &HashMap<String, String>) -> Document {
        Document::new(quire_delta::delta_to_segments(
            ops,
            assets,
            &self.config.spoiler,
        ))
    }

    /// Build a document from operation stream JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Delta`] if the JSON is not an operation stream.
    pub fn delta_json_to_document(
        &self,
        json: &str,
        assets: &HashMap<String, String>,
    ) -> Result<Document, CodecError> {
        let ops = quire_delta::parse_ops(json)?;
        Ok(self.delta_to_document(&ops, assets))
    }
}
