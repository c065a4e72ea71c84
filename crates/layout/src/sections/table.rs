use crate::cursor::{LayoutContext, LayoutCursor, SectionOutput};
use crate::fonts::FontRole;
use crate::output::{DrawOp, Stroke};
use crate::text::{format_currency, format_quantity, truncate_chars};
use offerpdf_types::{OfferDocumentData, Rect};

/// Line-item table: one header row, then one fixed-height row per item.
///
/// Even rows (0-based) get a light tint, every row gets a border. Cell text is
/// cut to a fixed character count; nothing wraps inside the table. With no
/// items, a single full-width row carries the offer description instead.
pub fn layout_table(ctx: &LayoutContext<'_>, cursor: LayoutCursor, doc: &OfferDocumentData) -> SectionOutput {
    let cfg = &ctx.config.table;
    let palette = &ctx.config.palette;
    let labels = &ctx.config.labels;
    let left = ctx.config.content_left();
    let width = cfg.width();
    let offsets = cfg.column_offsets();
    let column_right = |col: usize| {
        let next = offsets.get(col + 1).copied().unwrap_or(width);
        left + next - cfg.cell_padding
    };
    let border = Some(Stroke {
        color: palette.border,
        width: cfg.border_width,
    });

    let mut ops = Vec::new();
    let mut y = cursor.y();

    // Header row
    let header_bottom = y - cfg.header_height;
    ops.push(ctx.rect(
        Rect::new(left, header_bottom, width, cfg.header_height),
        Some(palette.primary),
        border,
    ));
    let baseline = header_bottom + cfg.baseline_offset + (cfg.header_height - cfg.row_height) / 2.0;
    let header_color = palette.on_primary;
    ops.push(ctx.text(left + cfg.cell_padding, baseline, cfg.font_size, FontRole::Bold, header_color, &labels.description));
    for (col, label) in [(1, &labels.quantity), (2, &labels.unit_price), (3, &labels.line_total)] {
        ops.push(ctx.text_right(column_right(col), baseline, cfg.font_size, FontRole::Bold, header_color, label));
    }
    y = header_bottom;

    if doc.items.is_empty() {
        let text = truncate_cell(doc.description.trim(), cfg.fallback_max_chars, &doc.header.offer_number);
        let row_bottom = y - cfg.row_height;
        ops.push(row_rect(ctx, 0, Rect::new(left, row_bottom, width, cfg.row_height), border));
        ops.push(ctx.text(
            left + cfg.cell_padding,
            row_bottom + cfg.baseline_offset,
            cfg.font_size,
            FontRole::Regular,
            palette.text,
            &text,
        ));
        y = row_bottom;
    }

    for (index, item) in doc.items.iter().enumerate() {
        let row_bottom = y - cfg.row_height;
        let baseline = row_bottom + cfg.baseline_offset;
        ops.push(row_rect(ctx, index, Rect::new(left, row_bottom, width, cfg.row_height), border));

        let description = truncate_cell(&item.description, cfg.description_max_chars, &doc.header.offer_number);
        ops.push(ctx.text(left + cfg.cell_padding, baseline, cfg.font_size, FontRole::Regular, palette.text, &description));
        let cells = [
            (1, format_quantity(item.quantity)),
            (2, format_currency(item.unit_price)),
            (3, format_currency(item.line_total())),
        ];
        for (col, value) in cells {
            ops.push(ctx.text_right(column_right(col), baseline, cfg.font_size, FontRole::Regular, palette.text, &value));
        }
        y = row_bottom;
    }

    let height = cursor.y() - y;
    SectionOutput {
        cursor: cursor.advance(height + ctx.config.page.section_gap),
        ops,
    }
}

fn row_rect(ctx: &LayoutContext<'_>, index: usize, rect: Rect, border: Option<Stroke>) -> DrawOp {
    let tint = (index % 2 == 0).then_some(ctx.config.palette.zebra);
    ctx.rect(rect, tint, border)
}

fn truncate_cell(text: &str, max_chars: usize, offer_number: &str) -> String {
    let cut = truncate_chars(text, max_chars);
    if cut.len() < text.len() {
        log::warn!(
            "Offer '{}': table cell truncated to {} characters: '{}'",
            offer_number,
            max_chars,
            text
        );
    }
    cut.into_owned()
}
