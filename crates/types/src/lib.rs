//! Foundation types shared by the offer layout and rendering crates.

pub mod color;
pub mod document;
pub mod geometry;

pub use color::Color;
pub use document::{
    Customer, DocumentHeader, LineItem, OfferDocumentData, TimelineFields, TimelineKind, Totals,
};
pub use geometry::{Point, Rect, Size};
