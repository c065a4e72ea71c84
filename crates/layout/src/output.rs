//! Output types from the layout engine.
//!
//! A laid-out offer is a flat list of absolutely positioned drawing operations
//! in PDF user space (origin bottom-left). The renderer turns them into a
//! content stream without any further measuring.

use crate::fonts::FontRole;
use crate::sections::SectionKind;
use offerpdf_types::{Color, Point, Rect, Size};

/// A single run of text drawn at a baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    /// Baseline y.
    pub y: f32,
    pub size: f32,
    pub font: FontRole,
    pub color: Color,
    pub content: String,
    /// Measured advance width at `size`.
    pub width: f32,
}

impl TextRun {
    /// Approximate ink box: baseline minus descender up to the cap height.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y - self.size * 0.2, self.width, self.size * 0.95)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// A rectangle that is filled, outlined, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct RectOp {
    pub rect: Rect,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineOp {
    pub start: Point,
    pub end: Point,
    pub thickness: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Rect(RectOp),
    Line(LineOp),
}

impl DrawOp {
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            DrawOp::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<&RectOp> {
        match self {
            DrawOp::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// Lowest y this operation touches.
    pub fn min_y(&self) -> f32 {
        match self {
            DrawOp::Text(t) => t.bounds().y,
            DrawOp::Rect(r) => r.rect.y,
            DrawOp::Line(l) => l.start.y.min(l.end.y),
        }
    }

    /// Highest y this operation touches.
    pub fn max_y(&self) -> f32 {
        match self {
            DrawOp::Text(t) => t.bounds().top(),
            DrawOp::Rect(r) => r.rect.top(),
            DrawOp::Line(l) => l.start.y.max(l.end.y),
        }
    }
}

/// Where one section landed on the page and which operations it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub kind: SectionKind,
    /// Cursor position before the section was placed.
    pub top: f32,
    /// Cursor position after the section was placed.
    pub bottom: f32,
    /// Index range into [`PageLayout::ops`].
    pub ops: std::ops::Range<usize>,
}

/// The complete, single-page result of laying out one offer.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub size: Size,
    pub ops: Vec<DrawOp>,
    pub sections: Vec<SectionSpan>,
    /// Lowest y the flowing sections may reach before colliding with the footer.
    pub content_bottom: f32,
}

impl PageLayout {
    pub fn section(&self, kind: SectionKind) -> Option<&SectionSpan> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Operations emitted by one section, empty when the section was skipped.
    pub fn section_ops(&self, kind: SectionKind) -> &[DrawOp] {
        self.section(kind)
            .map(|s| &self.ops[s.ops.clone()])
            .unwrap_or(&[])
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(DrawOp::as_text)
    }

    /// True when flowing content ran past the space reserved above the footer.
    /// Nothing is moved to another page; the overflow is drawn where it falls.
    pub fn overflowed(&self) -> bool {
        self.sections
            .iter()
            .filter(|s| s.kind != SectionKind::Footer)
            .any(|s| s.bottom < self.content_bottom)
    }
}
