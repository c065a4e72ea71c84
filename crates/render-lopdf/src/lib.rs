//! Deterministic PDF output for laid-out offers.
//!
//! The layout crate produces absolutely positioned drawing operations; this
//! crate maps them onto `lopdf` content operators and serializes a single-page
//! document with the standard Type1 fonts.

mod content;
mod error;
mod renderer;
mod writer;

pub use content::{font_resource_name, page_content, to_win_ansi};
pub use error::PdfWriteError;
pub use renderer::{render_to_vec, DocumentInfo, LopdfRenderer};
pub use writer::PdfObjectWriter;
