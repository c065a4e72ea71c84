//! The vertical cursor and the context shared by the section renderers.
//!
//! Sections never mutate shared state: each takes the cursor by value and
//! returns the advanced cursor together with the operations it produced.

use crate::config::LayoutConfig;
use crate::fonts::{FontRole, FontSet};
use crate::output::{DrawOp, LineOp, RectOp, Stroke, TextRun};
use crate::text::sanitize;
use offerpdf_types::{Color, Point, Rect};

/// Top edge of the next section, in PDF user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    y: f32,
}

impl LayoutCursor {
    pub fn at(y: f32) -> Self {
        Self { y }
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Moves the cursor down the page by `height`.
    pub fn advance(self, height: f32) -> Self {
        Self { y: self.y - height }
    }
}

/// The result of placing one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutput {
    pub cursor: LayoutCursor,
    pub ops: Vec<DrawOp>,
}

impl SectionOutput {
    /// A skipped section: nothing drawn, cursor unchanged.
    pub fn skipped(cursor: LayoutCursor) -> Self {
        Self {
            cursor,
            ops: Vec::new(),
        }
    }
}

/// Read-only inputs every section renderer needs.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub config: &'a LayoutConfig,
    pub fonts: &'a FontSet,
}

impl<'a> LayoutContext<'a> {
    pub fn new(config: &'a LayoutConfig, fonts: &'a FontSet) -> Self {
        Self { config, fonts }
    }

    pub fn measure(&self, text: &str, size: f32, font: FontRole) -> f32 {
        self.fonts.metrics(font).width_of_text_at_size(text, size)
    }

    /// A left-aligned text run with its baseline at `y`.
    pub fn text(&self, x: f32, y: f32, size: f32, font: FontRole, color: Color, content: &str) -> DrawOp {
        let content = sanitize(content).into_owned();
        let width = self.measure(&content, size, font);
        DrawOp::Text(TextRun {
            x,
            y,
            size,
            font,
            color,
            content,
            width,
        })
    }

    /// A text run whose right edge sits at `right`.
    pub fn text_right(&self, right: f32, y: f32, size: f32, font: FontRole, color: Color, content: &str) -> DrawOp {
        let content = sanitize(content);
        let width = self.measure(&content, size, font);
        self.text(right - width, y, size, font, color, &content)
    }

    pub fn fill_rect(&self, rect: Rect, color: Color) -> DrawOp {
        DrawOp::Rect(RectOp {
            rect,
            fill: Some(color),
            stroke: None,
        })
    }

    pub fn rect(&self, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) -> DrawOp {
        DrawOp::Rect(RectOp { rect, fill, stroke })
    }

    pub fn hline(&self, x1: f32, x2: f32, y: f32, thickness: f32, color: Color) -> DrawOp {
        DrawOp::Line(LineOp {
            start: Point::new(x1, y),
            end: Point::new(x2, y),
            thickness,
            color,
        })
    }
}
