use crate::cursor::{LayoutContext, LayoutCursor, SectionOutput};
use crate::fonts::FontRole;
use crate::text::format_currency;
use offerpdf_types::OfferDocumentData;

/// Right-aligned net / tax / gross block. The gross row is set larger and
/// bold, under a horizontal rule.
pub fn layout_totals(ctx: &LayoutContext<'_>, cursor: LayoutCursor, doc: &OfferDocumentData) -> SectionOutput {
    let cfg = &ctx.config.totals;
    let palette = &ctx.config.palette;
    let labels = &ctx.config.labels;
    let totals = doc.effective_totals(ctx.config.vat_rate_percent);

    let right = ctx.config.content_right();
    let left = right - cfg.width;
    let top = cursor.y() - cfg.top_gap;
    let mut ops = Vec::new();

    let rows = [(&labels.net, totals.net), (&labels.tax, totals.tax)];
    for (i, (label, amount)) in rows.into_iter().enumerate() {
        let baseline = top - i as f32 * cfg.row_height - cfg.font_size;
        ops.push(ctx.text(left, baseline, cfg.font_size, FontRole::Regular, palette.muted, label));
        ops.push(ctx.text_right(right, baseline, cfg.font_size, FontRole::Regular, palette.text, &format_currency(amount)));
    }

    let rule_y = top - 2.0 * cfg.row_height - 3.0;
    ops.push(ctx.hline(left, right, rule_y, cfg.rule_thickness, palette.text));

    let gross_baseline = top - 2.0 * cfg.row_height - cfg.gross_row_height + 7.0;
    ops.push(ctx.text(left, gross_baseline, cfg.gross_font_size, FontRole::Bold, palette.primary, &labels.gross));
    ops.push(ctx.text_right(
        right,
        gross_baseline,
        cfg.gross_font_size,
        FontRole::Bold,
        palette.primary,
        &format_currency(totals.gross),
    ));

    let height = cfg.top_gap + 2.0 * cfg.row_height + cfg.gross_row_height;
    SectionOutput {
        cursor: cursor.advance(height + ctx.config.page.section_gap),
        ops,
    }
}
