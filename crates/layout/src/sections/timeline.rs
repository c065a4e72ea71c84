use crate::cursor::{LayoutContext, LayoutCursor, SectionOutput};
use crate::fonts::FontRole;
use crate::text::truncate_chars;
use offerpdf_types::{OfferDocumentData, Rect, TimelineKind};

/// Lead-time panel: up to three label/value columns.
pub fn layout_timeline(ctx: &LayoutContext<'_>, cursor: LayoutCursor, doc: &OfferDocumentData) -> SectionOutput {
    let cfg = &ctx.config.timeline;
    let palette = &ctx.config.palette;
    let labels = &ctx.config.labels;
    let entries = doc.timeline.entries();
    if entries.is_empty() {
        return SectionOutput::skipped(cursor);
    }

    let left = ctx.config.content_left();
    let width = ctx.config.content_width();
    let top = cursor.y();
    let column_width = (width - 2.0 * cfg.padding) / 3.0;

    let mut ops = vec![ctx.fill_rect(Rect::new(left, top - cfg.height, width, cfg.height), palette.panel)];
    ops.push(ctx.text(left + cfg.padding, top - 14.0, cfg.title_size, FontRole::Bold, palette.primary, &labels.timeline));

    for (column, (kind, value)) in entries.into_iter().enumerate() {
        let x = left + cfg.padding + column as f32 * column_width;
        let label = match kind {
            TimelineKind::Production => &labels.production,
            TimelineKind::Delivery => &labels.delivery,
            TimelineKind::Installation => &labels.installation,
        };
        ops.push(ctx.text(x, top - 32.0, cfg.label_size, FontRole::Regular, palette.muted, label));
        ops.push(ctx.text(
            x,
            top - 46.0,
            cfg.value_size,
            FontRole::Bold,
            palette.text,
            &truncate_chars(value, cfg.max_chars),
        ));
    }

    SectionOutput {
        cursor: cursor.advance(cfg.height + ctx.config.page.section_gap),
        ops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::DrawOp;
    use crate::sections::test_support::{config, document, fonts};
    use offerpdf_types::TimelineFields;

    #[test]
    fn present_entries_fill_columns_in_order() {
        let (config, fonts) = (config(), fonts());
        let ctx = LayoutContext::new(&config, &fonts);
        let doc = document().with_timeline(TimelineFields {
            production: Some("4 settimane".into()),
            delivery: None,
            installation: Some("2 giorni".into()),
        });
        let out = layout_timeline(&ctx, LayoutCursor::at(300.0), &doc);
        let texts: Vec<_> = out.ops.iter().filter_map(DrawOp::as_text).map(|t| t.content.as_str()).collect();
        assert_eq!(texts, vec!["Tempistiche", "Produzione", "4 settimane", "Installazione", "2 giorni"]);
        assert_eq!(out.cursor.y(), 300.0 - 56.0 - 12.0);
    }

    #[test]
    fn missing_timeline_is_skipped() {
        let (config, fonts) = (config(), fonts());
        let ctx = LayoutContext::new(&config, &fonts);
        let out = layout_timeline(&ctx, LayoutCursor::at(300.0), &document());
        assert!(out.ops.is_empty());
        assert_eq!(out.cursor.y(), 300.0);
    }
}
