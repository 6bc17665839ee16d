//! Document export: one proposal (or the whole current view) to a PDF.
//!
//! Split in two so the interesting part stays testable without fonts:
//! - [`layout`] is pure formatting: the fixed field order, the
//!   present-fields-only rule and the numbered document listing, as plain
//!   `"Label: value"` lines grouped per record.
//! - [`pdf`] feeds that layout to genpdf, one record per page, and writes
//!   the file. It needs a `./fonts` directory with the Arial or
//!   LiberationSans family at runtime.

pub mod layout;
pub mod pdf;

pub use layout::{export_file_name, export_lines, record_lines};
pub use pdf::export_to_pdf;
