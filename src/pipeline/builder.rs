// src/pipeline/builder.rs
use super::orchestrator::OfferPipeline;
use crate::error::RenderError;
use offerpdf_layout::{FontProvider, LayoutConfig, LayoutEngine, StandardFontProvider};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

pub const DEFAULT_PRODUCER: &str = "offerpdf";

/// A builder for creating an `OfferPipeline`.
pub struct OfferPipelineBuilder {
    layout_config: LayoutConfig,
    font_provider: Box<dyn FontProvider>,
    producer: String,
}

impl Default for OfferPipelineBuilder {
    fn default() -> Self {
        Self {
            layout_config: LayoutConfig::default(),
            font_provider: Box::new(StandardFontProvider),
            producer: DEFAULT_PRODUCER.to_string(),
        }
    }
}

impl OfferPipelineBuilder {
    /// Creates a builder with the standard layout and the built-in fonts.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the whole layout constants table.
    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.layout_config = config;
        self
    }

    /// Loads layout constants from a JSON file. Fields missing from the file
    /// keep their defaults.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, RenderError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            RenderError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read layout config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.layout_config = LayoutConfig::from_json(&source)
            .map_err(|e| RenderError::Config(format!("'{}': {}", path_ref.display(), e)))?;
        log::info!("Loaded layout config from '{}'.", path_ref.display());
        Ok(self)
    }

    pub fn with_font_provider<F: FontProvider + 'static>(mut self, provider: F) -> Self {
        self.font_provider = Box::new(provider);
        self
    }

    /// Sets the `Producer` entry of the PDF information dictionary.
    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    /// Resolves fonts and validates the layout config.
    pub fn build(self) -> Result<OfferPipeline, RenderError> {
        log::info!(
            "Building offer pipeline with '{}' / '{}' from the {} font provider.",
            self.layout_config.fonts.regular,
            self.layout_config.fonts.bold,
            self.font_provider.name()
        );
        let engine = LayoutEngine::new(self.layout_config, self.font_provider.as_ref())?;
        Ok(OfferPipeline::new(Arc::new(engine), self.producer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offerpdf_layout::FontError;
    use std::io::Write;

    #[test]
    fn default_builder_succeeds() {
        assert!(OfferPipelineBuilder::new().build().is_ok());
    }

    #[test]
    fn unknown_font_is_a_font_error() {
        let mut config = LayoutConfig::default();
        config.fonts.regular = "Garamond".into();
        let err = OfferPipelineBuilder::new().with_layout_config(config).build().unwrap_err();
        assert!(matches!(err, RenderError::Font(FontError::NotFound(ref name)) if name == "Garamond"));
    }

    #[test]
    fn config_file_overrides_only_given_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"vatRatePercent": 10.0, "labels": {{"title": "OFFERTA"}}}}"#).unwrap();
        let pipeline = OfferPipelineBuilder::new().with_config_file(file.path()).unwrap().build().unwrap();
        let config = pipeline.engine().config();
        assert_eq!(config.vat_rate_percent, 10.0);
        assert_eq!(config.labels.title, "OFFERTA");
        assert_eq!(config.labels.net, LayoutConfig::default().labels.net);
    }

    #[test]
    fn malformed_config_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = OfferPipelineBuilder::new().with_config_file(file.path()).err().unwrap();
        assert!(matches!(err, RenderError::Config(_)));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let err = OfferPipelineBuilder::new()
            .with_config_file("/nonexistent/layout.json")
            .err()
            .unwrap();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
