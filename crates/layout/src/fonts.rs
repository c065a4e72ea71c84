//! Font metrics for text measurement.
//!
//! The layout engine only needs advance widths, never glyph outlines: offers are
//! drawn with the PDF standard fonts, which every viewer ships. A
//! [`FontProvider`] resolves a PostScript name to its width table once per
//! render, before any layout happens.

use crate::afm;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Error type for font loading operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("Font not found: {0}")]
    NotFound(String),
}

/// Which face of the configured family a text run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    #[default]
    Regular,
    Bold,
}

/// Per-glyph advance widths for one font face.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    postscript_name: String,
    ascii: &'static [u16; 95],
    extra: &'static [(char, u16)],
    missing_width: u16,
}

impl FontMetrics {
    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    /// Advance width of a single character in thousandths of an em.
    pub fn glyph_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.ascii[code - 32];
        }
        self.extra
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, w)| *w)
            .unwrap_or(self.missing_width)
    }

    /// Width of `text` in points when set at `size` points.
    pub fn width_of_text_at_size(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.glyph_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }
}

/// A trait for resolving font names to metrics.
///
/// # Implementations
///
/// - [`StandardFontProvider`]: the built-in PDF standard fonts
pub trait FontProvider: Send + Sync + Debug {
    /// Load the metrics for the font with the given PostScript name.
    fn load_font(&self, name: &str) -> Result<FontMetrics, FontError>;

    /// Check if a font can be loaded.
    fn has_font(&self, name: &str) -> bool {
        self.load_font(name).is_ok()
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Serves the standard Type1 fonts used by offers.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardFontProvider;

impl FontProvider for StandardFontProvider {
    fn load_font(&self, name: &str) -> Result<FontMetrics, FontError> {
        let (ascii, extra, missing_width) = match name {
            "Helvetica" => (&afm::HELVETICA, afm::HELVETICA_EXTRA, 556),
            "Helvetica-Bold" => (&afm::HELVETICA_BOLD, afm::HELVETICA_BOLD_EXTRA, 556),
            "Courier" => (&afm::COURIER, &[][..], 600),
            other => return Err(FontError::NotFound(other.to_string())),
        };
        Ok(FontMetrics {
            postscript_name: name.to_string(),
            ascii,
            extra,
            missing_width,
        })
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

/// The two faces every offer uses.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSet {
    pub regular: FontMetrics,
    pub bold: FontMetrics,
}

impl FontSet {
    pub fn load(
        provider: &dyn FontProvider,
        regular: &str,
        bold: &str,
    ) -> Result<Self, FontError> {
        log::debug!("Loading fonts '{}' and '{}' from {} provider", regular, bold, provider.name());
        Ok(Self {
            regular: provider.load_font(regular)?,
            bold: provider.load_font(bold)?,
        })
    }

    pub fn metrics(&self, role: FontRole) -> &FontMetrics {
        match role {
            FontRole::Regular => &self.regular,
            FontRole::Bold => &self.bold,
        }
    }
}
