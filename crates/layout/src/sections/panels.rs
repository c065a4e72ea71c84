use crate::cursor::{LayoutContext, LayoutCursor, SectionOutput};
use crate::fonts::FontRole;
use crate::text::{break_lines, truncate_chars};
use offerpdf_types::{OfferDocumentData, Rect};

/// Bulleted "what's included" grid.
///
/// Item `i` goes to column `i % columns`, row `i / columns`. Only the first
/// `max_items` entries are printed; the panel height is fixed. A blank entry
/// keeps its cell and prints a bare bullet.
pub fn layout_inclusions(ctx: &LayoutContext<'_>, cursor: LayoutCursor, doc: &OfferDocumentData) -> SectionOutput {
    let cfg = &ctx.config.inclusions;
    let palette = &ctx.config.palette;
    let items = &doc.inclusions;
    if items.iter().all(|s| s.trim().is_empty()) {
        return SectionOutput::skipped(cursor);
    }
    if items.len() > cfg.max_items {
        log::warn!(
            "Offer '{}' lists {} inclusions, only the first {} are printed",
            doc.header.offer_number,
            items.len(),
            cfg.max_items
        );
    }

    let left = ctx.config.content_left();
    let width = ctx.config.content_width();
    let height = cfg.height();
    let top = cursor.y();
    let columns = cfg.columns.max(1);
    let column_width = (width - 2.0 * cfg.padding) / columns as f32;

    let mut ops = vec![ctx.fill_rect(Rect::new(left, top - height, width, height), palette.panel)];
    ops.push(ctx.text(
        left + cfg.padding,
        top - 14.0,
        cfg.font_size + 1.0,
        FontRole::Bold,
        palette.primary,
        &ctx.config.labels.inclusions,
    ));

    for (index, item) in items.iter().take(cfg.max_items).enumerate() {
        let (column, row) = grid_cell(index, columns);
        let x = left + cfg.padding + column as f32 * column_width;
        let baseline = top - cfg.title_height - row as f32 * cfg.row_height - cfg.font_size;
        let item = item.trim();
        let text = if item.is_empty() {
            cfg.bullet.clone()
        } else {
            format!("{} {}", cfg.bullet, truncate_chars(item, cfg.max_chars))
        };
        ops.push(ctx.text(x, baseline, cfg.font_size, FontRole::Regular, palette.text, &text));
    }

    SectionOutput {
        cursor: cursor.advance(height + ctx.config.page.section_gap),
        ops,
    }
}

/// Column and row of the `index`-th item in a grid filled row by row.
pub fn grid_cell(index: usize, columns: usize) -> (usize, usize) {
    (index % columns, index / columns)
}

/// Free-text exclusions, wrapped to the panel width. This is the one panel
/// whose height follows its content.
pub fn layout_exclusions(ctx: &LayoutContext<'_>, cursor: LayoutCursor, doc: &OfferDocumentData) -> SectionOutput {
    let cfg = &ctx.config.exclusions;
    let palette = &ctx.config.palette;
    let text = doc.exclusions.trim();
    if text.is_empty() {
        return SectionOutput::skipped(cursor);
    }

    let left = ctx.config.content_left();
    let width = ctx.config.content_width();
    let lines = break_lines(text, width - 2.0 * cfg.padding, cfg.font_size, &ctx.fonts.regular);
    let height = cfg.title_height + lines.len() as f32 * cfg.line_height + cfg.padding;
    let top = cursor.y();

    let mut ops = vec![ctx.fill_rect(Rect::new(left, top - height, width, height), palette.panel)];
    ops.push(ctx.text(
        left + cfg.padding,
        top - 14.0,
        cfg.font_size + 1.0,
        FontRole::Bold,
        palette.primary,
        &ctx.config.labels.exclusions,
    ));
    for (i, line) in lines.iter().enumerate() {
        let baseline = top - cfg.title_height - i as f32 * cfg.line_height - cfg.font_size;
        ops.push(ctx.text(left + cfg.padding, baseline, cfg.font_size, FontRole::Regular, palette.text, &line.text));
    }

    SectionOutput {
        cursor: cursor.advance(height + ctx.config.page.section_gap),
        ops,
    }
}
