use crate::cursor::{LayoutContext, LayoutCursor, SectionOutput};
use crate::fonts::FontRole;
use crate::text::break_lines;
use offerpdf_types::OfferDocumentData;

/// Subject line plus the wrapped description.
///
/// When the offer has no line items the description is printed by the table
/// as its fallback row instead, so it is not repeated here.
pub fn layout_subject(ctx: &LayoutContext<'_>, cursor: LayoutCursor, doc: &OfferDocumentData) -> SectionOutput {
    let cfg = &ctx.config.subject;
    let palette = &ctx.config.palette;
    let left = ctx.config.content_left();

    let subject = doc.subject.trim();
    let description = if doc.items.is_empty() { "" } else { doc.description.trim() };
    if subject.is_empty() && description.is_empty() {
        return SectionOutput::skipped(cursor);
    }

    let mut ops = Vec::new();
    let mut height = 0.0;

    if !subject.is_empty() {
        let text_x = left + cfg.label_width;
        let lines = break_lines(
            subject,
            ctx.config.content_width() - cfg.label_width,
            cfg.font_size,
            &ctx.fonts.bold,
        );
        ops.push(ctx.text(
            left,
            cursor.y() - cfg.font_size,
            cfg.font_size,
            FontRole::Bold,
            palette.muted,
            &ctx.config.labels.subject,
        ));
        for line in &lines {
            ops.push(ctx.text(
                text_x,
                cursor.y() - height - cfg.font_size,
                cfg.font_size,
                FontRole::Bold,
                palette.text,
                &line.text,
            ));
            height += cfg.line_height;
        }
    }

    if !description.is_empty() {
        let lines = break_lines(
            description,
            ctx.config.content_width(),
            cfg.description_size,
            &ctx.fonts.regular,
        );
        for line in &lines {
            ops.push(ctx.text(
                left,
                cursor.y() - height - cfg.description_size,
                cfg.description_size,
                FontRole::Regular,
                palette.text,
                &line.text,
            ));
            height += cfg.description_line_height;
        }
    }

    SectionOutput {
        cursor: cursor.advance(height + ctx.config.page.section_gap),
        ops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{config, document, fonts};

    #[test]
    fn long_description_wraps_within_content_width() {
        let (config, fonts) = (config(), fonts());
        let ctx = LayoutContext::new(&config, &fonts);
        let doc = document().with_description(
            "Fornitura e posa in opera di serramenti in PVC bianco con vetrocamera basso emissivo, \
             controtelai, coprifili e soglie, compresi trasporto, scarico al piano e smaltimento \
             dei serramenti esistenti secondo normativa vigente.",
        );
        let out = layout_subject(&ctx, LayoutCursor::at(600.0), &doc);
        let runs: Vec<_> = out.ops.iter().filter_map(|op| op.as_text()).collect();
        // label + subject + at least two description lines
        assert!(runs.len() >= 4);
        for run in &runs {
            assert!(run.x + run.width <= config.content_right() + 0.01);
        }
        let expected_height = 15.0 + (runs.len() - 2) as f32 * 13.0 + 12.0;
        assert!((600.0 - out.cursor.y() - expected_height).abs() < 1e-3);
    }

    #[test]
    fn description_is_left_to_the_table_when_there_are_no_items() {
        let (config, fonts) = (config(), fonts());
        let ctx = LayoutContext::new(&config, &fonts);
        let doc = document()
            .with_subject("")
            .with_items(vec![])
            .with_description("Fornitura completa");
        let out = layout_subject(&ctx, LayoutCursor::at(600.0), &doc);
        assert!(out.ops.is_empty());
        assert_eq!(out.cursor.y(), 600.0);
    }
}
