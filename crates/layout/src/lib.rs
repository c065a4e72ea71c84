use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Font error: {0}")]
    Font(#[from] FontError),
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

mod afm;
pub mod config;
pub mod cursor;
pub(crate) mod engine;
pub mod fonts;
pub mod output;
pub mod sections;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::cursor::{LayoutContext, LayoutCursor, SectionOutput};
pub use self::engine::LayoutEngine;
pub use self::fonts::{FontError, FontMetrics, FontProvider, FontRole, FontSet, StandardFontProvider};
pub use self::output::{DrawOp, LineOp, PageLayout, RectOp, SectionSpan, Stroke, TextRun};
pub use self::sections::SectionKind;

// Geometry and color come from the types crate so renderers see one definition.
pub use offerpdf_types::{Color, Point, Rect, Size};
