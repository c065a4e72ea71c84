use crate::config::LayoutConfig;
use crate::cursor::{LayoutContext, LayoutCursor};
use crate::fonts::{FontProvider, FontSet};
use crate::output::{PageLayout, SectionSpan};
use crate::sections::{self, SectionKind};
use crate::LayoutError;
use offerpdf_types::OfferDocumentData;

/// Lays out offers on a single fixed-size page.
///
/// Fonts are resolved once, when the engine is built. `layout` is then a pure
/// function of the document: it holds no state between calls, so one engine
/// can serve any number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    fonts: FontSet,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, provider: &dyn FontProvider) -> Result<Self, LayoutError> {
        validate(&config)?;
        let fonts = FontSet::load(provider, &config.fonts.regular, &config.fonts.bold)?;
        Ok(Self { config, fonts })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn layout(&self, doc: &OfferDocumentData) -> PageLayout {
        let ctx = LayoutContext::new(&self.config, &self.fonts);
        let mut cursor = LayoutCursor::at(self.config.page.height - self.config.page.margin_top);
        let mut ops = Vec::new();
        let mut spans = Vec::new();

        for (kind, section) in sections::FLOW {
            let top = cursor.y();
            let output = section(&ctx, cursor, doc);
            log::debug!(
                "Offer '{}': {:?} placed {} ops between y={:.1} and y={:.1}",
                doc.header.offer_number,
                kind,
                output.ops.len(),
                top,
                output.cursor.y()
            );
            let start = ops.len();
            ops.extend(output.ops);
            spans.push(SectionSpan {
                kind,
                top,
                bottom: output.cursor.y(),
                ops: start..ops.len(),
            });
            cursor = output.cursor;
        }

        let footer_top = self.config.content_bottom();
        let footer = sections::layout_footer(&ctx, cursor, doc);
        let start = ops.len();
        ops.extend(footer.ops);
        spans.push(SectionSpan {
            kind: SectionKind::Footer,
            top: footer_top,
            bottom: footer.cursor.y(),
            ops: start..ops.len(),
        });

        let page = PageLayout {
            size: self.config.page_size(),
            ops,
            sections: spans,
            content_bottom: footer_top,
        };
        if page.overflowed() {
            log::warn!(
                "Offer '{}' does not fit on one page: content reaches y={:.1}, footer starts at y={:.1}",
                doc.header.offer_number,
                cursor.y(),
                footer_top
            );
        }
        page
    }
}

fn validate(config: &LayoutConfig) -> Result<(), LayoutError> {
    let page = &config.page;
    if page.width <= 0.0 || page.height <= 0.0 {
        return Err(LayoutError::InvalidConfig(format!(
            "page size must be positive, got {}x{}",
            page.width, page.height
        )));
    }
    if config.content_width() <= 0.0 {
        return Err(LayoutError::InvalidConfig("horizontal margins leave no content width".into()));
    }
    if config.inclusions.columns == 0 {
        return Err(LayoutError::InvalidConfig("inclusion grid needs at least one column".into()));
    }
    if config.table.width() > config.content_width() + 0.01 {
        log::warn!(
            "Table columns ({:.1}pt) are wider than the content area ({:.1}pt)",
            config.table.width(),
            config.content_width()
        );
    }
    Ok(())
}
