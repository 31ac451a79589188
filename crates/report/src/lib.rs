//! `jewelai-report` — turns an analytics snapshot into a readable document.
//!
//! The document model is format-neutral; [`render_markdown`] is the only
//! renderer shipped. Currency formatting lives here, not in the analytics
//! layer, which only produces raw numbers.

pub mod builder;
pub mod currency;
pub mod document;
pub mod error;

pub use builder::{ReportBuilder, report_file_name};
pub use currency::format_inr;
pub use document::{Block, ReportDocument, Run, Table, render_markdown};
pub use error::ReportError;
