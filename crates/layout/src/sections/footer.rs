use crate::cursor::{LayoutContext, LayoutCursor, SectionOutput};
use crate::fonts::FontRole;
use offerpdf_types::OfferDocumentData;

/// Footer band anchored to the bottom margin. The incoming cursor is ignored;
/// the returned cursor is the bottom margin itself.
pub fn layout_footer(ctx: &LayoutContext<'_>, _cursor: LayoutCursor, doc: &OfferDocumentData) -> SectionOutput {
    let cfg = &ctx.config.footer;
    let palette = &ctx.config.palette;
    let labels = &ctx.config.labels;
    let left = ctx.config.content_left();
    let right = ctx.config.content_right();
    let bottom = ctx.config.page.margin_bottom;
    let top = bottom + cfg.height;

    let baseline = bottom + cfg.font_size;
    let reference = format!("{} {} {}", labels.title, labels.number, doc.header.offer_number);
    let ops = vec![
        ctx.hline(left, right, top - 4.0, cfg.rule_thickness, palette.muted),
        ctx.text(left, baseline, cfg.font_size, FontRole::Bold, palette.muted, &reference),
        ctx.text_right(right, baseline, cfg.font_size, FontRole::Regular, palette.muted, &labels.footer_note),
    ];

    SectionOutput {
        cursor: LayoutCursor::at(bottom),
        ops,
    }
}
