//! Single-page A4 offer PDFs.
//!
//! ```no_run
//! use offerpdf::{render_offer, LineItem, NaiveDate, OfferDocumentData};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let offer = OfferDocumentData::new("OFF-2024-017", date, "Serramenti Bianchi S.r.l.")
//!     .with_items(vec![LineItem::new("Finestra PVC 120x140", 2.0, 100.0)]);
//! let pdf = render_offer(&offer).unwrap();
//! std::fs::write("offer.pdf", pdf).unwrap();
//! ```

pub mod error;
pub mod pipeline;

pub use error::RenderError;
pub use pipeline::{render_offer, render_offer_json, OfferPipeline, OfferPipelineBuilder};

pub use offerpdf_layout::{
    DrawOp, FontError, FontMetrics, FontProvider, LayoutConfig, LayoutEngine, LayoutError, PageLayout, RectOp,
    SectionKind, StandardFontProvider, TextRun,
};
pub use chrono::NaiveDate;
pub use offerpdf_render_lopdf::DocumentInfo;
pub use offerpdf_types::{
    Color, Customer, DocumentHeader, LineItem, OfferDocumentData, TimelineFields, TimelineKind, Totals,
};
