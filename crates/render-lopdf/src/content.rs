//! Turns a laid-out page into a PDF content stream.
//!
//! Layout coordinates are already in PDF user space, so operations map onto
//! operators one to one. Graphics state is tracked so that repeated font,
//! color and line width settings are written only once.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use offerpdf_layout::{DrawOp, FontRole, LineOp, PageLayout, RectOp, TextRun};
use offerpdf_types::Color;

/// Resource name of the font used for `role` in the page's font dictionary.
pub fn font_resource_name(role: FontRole) -> &'static str {
    match role {
        FontRole::Regular => "F1",
        FontRole::Bold => "F2",
    }
}

pub fn page_content(page: &PageLayout) -> Content {
    let mut ctx = PageContext::new();
    for op in &page.ops {
        ctx.draw(op);
    }
    ctx.finish()
}

#[derive(Default, Clone, PartialEq)]
struct GraphicsState {
    font: Option<(FontRole, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

struct PageContext {
    content: Content,
    state: GraphicsState,
}

impl PageContext {
    fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Text(text) => self.draw_text(text),
            DrawOp::Rect(rect) => self.draw_rect(rect),
            DrawOp::Line(line) => self.draw_line(line),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn set_font(&mut self, role: FontRole, size: f32) {
        if self.state.font != Some((role, size)) {
            self.push(
                "Tf",
                vec![Object::Name(font_resource_name(role).as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some((role, size));
        }
    }

    fn draw_rect(&mut self, op: &RectOp) {
        let operator = match (op.fill, op.stroke) {
            (Some(_), Some(_)) => "B",
            (Some(_), None) => "f",
            (None, Some(_)) => "S",
            (None, None) => return,
        };
        if let Some(fill) = op.fill {
            self.set_fill_color(fill);
        }
        if let Some(stroke) = op.stroke {
            self.set_stroke_color(stroke.color);
            self.set_line_width(stroke.width);
        }
        let r = op.rect;
        self.push("re", vec![r.x.into(), r.y.into(), r.width.into(), r.height.into()]);
        self.push(operator, vec![]);
    }

    fn draw_line(&mut self, op: &LineOp) {
        self.set_stroke_color(op.color);
        self.set_line_width(op.thickness);
        self.push("m", vec![op.start.x.into(), op.start.y.into()]);
        self.push("l", vec![op.end.x.into(), op.end.y.into()]);
        self.push("S", vec![]);
    }

    fn draw_text(&mut self, text: &TextRun) {
        if text.content.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(text.font, text.size);
        self.set_fill_color(text.color);
        self.push("Td", vec![text.x.into(), text.y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }
}

/// Encodes text for a font using `WinAnsiEncoding`.
///
/// Latin-1 printable characters map to themselves, the typographic characters
/// WinAnsi places in 0x80..=0x9F get their codes there, anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => c as u8,
        _ => match c {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        },
    }
}
