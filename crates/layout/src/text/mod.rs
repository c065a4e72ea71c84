//! Text measurement helpers: line breaking and value formatting.

pub mod format;
pub mod wrapper;

pub use format::{format_currency, format_date, format_quantity, sanitize, truncate_chars};
pub use wrapper::{break_lines, clip_to_width, wrap_text, LineLayout};
