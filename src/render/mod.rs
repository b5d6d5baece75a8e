//! Label rendering
//!
//! Layout onto a backend-neutral sheet, then PDF, bitmap or SVG output.

pub mod layout;
pub mod pdf;
pub mod raster;
pub mod sheet;

pub use layout::{layout_label, linear_entries, linear_paragraph, portion_summary, PortionSummary};
pub use pdf::render_pdf;
pub use raster::{encode_jpeg, encode_png, render_bitmap, render_svg};
pub use sheet::{estimate_text_width, wrap_text, Align, Element, LabelSheet};
