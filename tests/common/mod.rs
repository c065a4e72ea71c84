#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use offerpdf::{OfferDocumentData, OfferPipelineBuilder, RenderError};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render an offer with the default pipeline
pub fn generate_pdf(doc: &OfferDocumentData) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = OfferPipelineBuilder::new().build()?.render(doc)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Render an offer given as JSON with the default pipeline
pub fn generate_pdf_from_json(value: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = offerpdf::render_offer_json(value)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Render and keep the raw error, for tests that inspect failure variants
pub fn try_render(doc: &OfferDocumentData) -> Result<Vec<u8>, RenderError> {
    offerpdf::render_offer(doc)
}
