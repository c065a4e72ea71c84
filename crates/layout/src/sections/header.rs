use crate::cursor::{LayoutContext, LayoutCursor, SectionOutput};
use crate::fonts::FontRole;
use crate::text::{break_lines, clip_to_width, format_date};
use offerpdf_types::{OfferDocumentData, Rect};

/// Colored band with title, number and date, followed by the customer block.
pub fn layout_header(ctx: &LayoutContext<'_>, cursor: LayoutCursor, doc: &OfferDocumentData) -> SectionOutput {
    let cfg = &ctx.config.header;
    let palette = &ctx.config.palette;
    let labels = &ctx.config.labels;
    let left = ctx.config.content_left();
    let right = ctx.config.content_right();
    let top = cursor.y();
    let mut ops = Vec::new();

    // Band
    let band_bottom = top - cfg.band_height;
    ops.push(ctx.fill_rect(
        Rect::new(left, band_bottom, ctx.config.content_width(), cfg.band_height),
        palette.primary,
    ));
    let title_baseline = top - cfg.band_height / 2.0 - cfg.title_size * 0.35;
    ops.push(ctx.text(
        left + cfg.padding,
        title_baseline,
        cfg.title_size,
        FontRole::Bold,
        palette.on_primary,
        &labels.title,
    ));

    let meta_right = right - cfg.padding;
    let mut meta_baseline = top - cfg.padding - cfg.meta_size;
    let meta_lines = [
        (FontRole::Bold, format!("{} {}", labels.number, doc.header.offer_number)),
        (FontRole::Regular, format!("{}: {}", labels.date, format_date(doc.header.issue_date))),
    ];
    for (font, line) in meta_lines {
        let line = fit_meta(ctx, &line, cfg.meta_size, font, &doc.header.offer_number);
        ops.push(ctx.text_right(meta_right, meta_baseline, cfg.meta_size, font, palette.on_primary, line));
        meta_baseline -= cfg.meta_size * 1.5;
    }
    if !doc.header.author.trim().is_empty() {
        let line = format!("{}: {}", labels.author, doc.header.author.trim());
        let size = cfg.meta_size * 0.9;
        let line = fit_meta(ctx, &line, size, FontRole::Regular, &doc.header.offer_number);
        ops.push(ctx.text_right(meta_right, meta_baseline, size, FontRole::Regular, palette.on_primary, line));
    }

    // Customer block, right half of the page
    let block_top = band_bottom;
    let block_x = left + ctx.config.content_width() * 0.55;
    let block_width = right - block_x;
    let label_size = cfg.customer_text_size - 1.0;
    ops.push(ctx.text(block_x, block_top - 16.0, label_size, FontRole::Regular, palette.muted, &labels.customer));
    ops.push(ctx.text(
        block_x,
        block_top - 31.0,
        cfg.customer_name_size,
        FontRole::Bold,
        palette.text,
        &doc.header.customer.name,
    ));

    let address_lines = break_lines(
        &doc.header.customer.address,
        block_width,
        cfg.customer_text_size,
        &ctx.fonts.regular,
    );
    if address_lines.len() > cfg.max_address_lines {
        log::warn!(
            "Customer address of offer '{}' needs {} lines, only {} are printed",
            doc.header.offer_number,
            address_lines.len(),
            cfg.max_address_lines
        );
    }
    let mut baseline = block_top - 45.0;
    for line in address_lines.iter().take(cfg.max_address_lines) {
        ops.push(ctx.text(block_x, baseline, cfg.customer_text_size, FontRole::Regular, palette.text, &line.text));
        baseline -= cfg.address_line_height;
    }

    SectionOutput {
        cursor: cursor.advance(cfg.band_height + cfg.customer_height + ctx.config.page.section_gap),
        ops,
    }
}

/// Clips a line of the number/date column to `meta_width`.
fn fit_meta<'t>(ctx: &LayoutContext<'_>, line: &'t str, size: f32, font: FontRole, offer_number: &str) -> &'t str {
    let max_width = ctx.config.header.meta_width;
    let clipped = clip_to_width(line, max_width, size, ctx.fonts.metrics(font));
    if clipped.len() < line.len() {
        log::warn!("Header line '{}' of offer '{}' clipped to {}pt", line, offer_number, max_width);
    }
    clipped
}
