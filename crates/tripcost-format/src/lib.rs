//! Output formatters for the tripcost travel budget estimator.
//!
//! This crate provides formatters for writing estimates and destination
//! comparisons:
//!
//! - [`TextFormatter`] - Human readable report in a display currency
//! - [`JsonFormatter`] - Compact or pretty JSON
//! - [`CsvFormatter`] - One row per cost category or destination

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod text;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use text::TextFormatter;
