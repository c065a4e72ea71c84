//! Section renderers, one per horizontal band of the offer page.
//!
//! Each renderer is a pure function of the shared context, the cursor and the
//! document. It returns the cursor advanced past its band plus the drawing
//! operations it produced, so the engine only has to chain them.

mod footer;
mod header;
mod panels;
mod subject;
mod table;
mod timeline;
mod totals;

pub use footer::layout_footer;
pub use header::layout_header;
pub use panels::{layout_exclusions, layout_inclusions};
pub use subject::layout_subject;
pub use table::layout_table;
pub use timeline::layout_timeline;
pub use totals::layout_totals;

use crate::cursor::{LayoutContext, LayoutCursor, SectionOutput};
use offerpdf_types::OfferDocumentData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Subject,
    Table,
    Totals,
    Inclusions,
    Exclusions,
    Timeline,
    Footer,
}

pub type SectionFn = fn(&LayoutContext<'_>, LayoutCursor, &OfferDocumentData) -> SectionOutput;

/// The flowing sections in page order. The footer is anchored separately.
pub const FLOW: [(SectionKind, SectionFn); 7] = [
    (SectionKind::Header, layout_header),
    (SectionKind::Subject, layout_subject),
    (SectionKind::Table, layout_table),
    (SectionKind::Totals, layout_totals),
    (SectionKind::Inclusions, layout_inclusions),
    (SectionKind::Exclusions, layout_exclusions),
    (SectionKind::Timeline, layout_timeline),
];

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::LayoutConfig;
    use crate::fonts::{FontSet, StandardFontProvider};
    use chrono::NaiveDate;
    use offerpdf_types::{LineItem, OfferDocumentData};

    pub fn fonts() -> FontSet {
        FontSet::load(&StandardFontProvider, "Helvetica", "Helvetica-Bold").unwrap()
    }

    pub fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    pub fn document() -> OfferDocumentData {
        OfferDocumentData::new(
            "OFF-2024-017",
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            "Serramenti Bianchi S.r.l.",
        )
        .with_subject("Sostituzione serramenti piano terra")
        .with_items(vec![
            LineItem::new("Finestra PVC 2 ante 120x140", 2.0, 100.0),
            LineItem::new("Portafinestra PVC 80x220", 1.0, 250.5),
            LineItem::new("Smaltimento vecchi infissi", 1.0, 10.0),
        ])
    }
}
