// src/pipeline/orchestrator.rs
use crate::error::RenderError;
use log::{debug, info};
use offerpdf_layout::LayoutEngine;
use offerpdf_render_lopdf::{render_to_vec, DocumentInfo};
use offerpdf_types::OfferDocumentData;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;

#[cfg(feature = "parallel-render")]
use rayon::prelude::*;

/// Lays out and writes offers. Cheap to clone; clones share the layout engine.
#[derive(Debug, Clone)]
pub struct OfferPipeline {
    engine: Arc<LayoutEngine>,
    producer: String,
}

impl OfferPipeline {
    pub(crate) fn new(engine: Arc<LayoutEngine>, producer: String) -> Self {
        Self { engine, producer }
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Renders one offer to PDF bytes.
    pub fn render(&self, doc: &OfferDocumentData) -> Result<Vec<u8>, RenderError> {
        let start = Instant::now();
        let page = self.engine.layout(doc);
        let bytes = render_to_vec(&page, self.engine.fonts(), &self.document_info(doc))?;
        info!(
            "Rendered offer '{}' ({} items, {} bytes) in {:.2?}",
            doc.header.offer_number,
            doc.items.len(),
            bytes.len(),
            start.elapsed()
        );
        Ok(bytes)
    }

    /// Renders an offer given as JSON. `null` is rejected as a missing document.
    pub fn render_json(&self, value: &Value) -> Result<Vec<u8>, RenderError> {
        if value.is_null() {
            return Err(RenderError::MissingDocument);
        }
        let doc = OfferDocumentData::deserialize(value)?;
        self.render(&doc)
    }

    pub fn render_to_writer<W: Write>(&self, doc: &OfferDocumentData, mut writer: W) -> Result<(), RenderError> {
        let bytes = self.render(doc)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// A convenience method that creates the output file, and its parent directories.
    pub fn render_to_file<P: AsRef<Path>>(&self, doc: &OfferDocumentData, path: P) -> Result<(), RenderError> {
        let output_path = path.as_ref();
        if let Some(parent_dir) = output_path.parent() {
            fs::create_dir_all(parent_dir)?;
        }
        let file = fs::File::create(output_path)?;
        self.render_to_writer(doc, io::BufWriter::new(file))
    }

    /// Renders on the blocking pool so async callers are not stalled by layout.
    pub async fn generate(&self, doc: OfferDocumentData) -> Result<Vec<u8>, RenderError> {
        let pipeline = self.clone();
        task::spawn_blocking(move || pipeline.render(&doc)).await?
    }

    /// Renders every offer independently; results keep the input order.
    pub fn render_batch(&self, docs: &[OfferDocumentData]) -> Vec<Result<Vec<u8>, RenderError>> {
        debug!("Rendering batch of {} offers", docs.len());

        #[cfg(feature = "parallel-render")]
        let results: Vec<_> = docs.par_iter().map(|doc| self.render(doc)).collect();

        #[cfg(not(feature = "parallel-render"))]
        let results: Vec<_> = docs.iter().map(|doc| self.render(doc)).collect();

        results
    }

    fn document_info(&self, doc: &OfferDocumentData) -> DocumentInfo {
        let labels = &self.engine.config().labels;
        DocumentInfo {
            title: format!("{} {} {}", labels.title, labels.number, doc.header.offer_number),
            author: doc.header.author.clone(),
            subject: doc.subject.clone(),
            producer: self.producer.clone(),
        }
    }
}

/// Renders an offer with the standard layout and fonts.
pub fn render_offer(doc: &OfferDocumentData) -> Result<Vec<u8>, RenderError> {
    super::OfferPipelineBuilder::new().build()?.render(doc)
}

/// JSON entry point for [`render_offer`].
pub fn render_offer_json(value: &Value) -> Result<Vec<u8>, RenderError> {
    super::OfferPipelineBuilder::new().build()?.render_json(value)
}
