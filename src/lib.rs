//! # addrbench
//!
//! Evaluation toolkit for multinational address parsing.
//!
//! - **Countries**: Fixed allowlists of trained and zero-shot evaluation
//!   countries with ISO 3166 display-name resolution
//! - **Evaluation**: Per-country test orchestration behind an
//!   [`AddressParser`](eval::AddressParser) trait seam
//! - **Reports**: Two-countries-per-row fasttext/bpemb comparison tables
//!   rendered as Markdown and Sphinx RST
//!
//! ## Quick Start
//!
//! ```rust
//! use addrbench::country::{display_name_for_file, is_trained_file};
//!
//! assert!(is_trained_file("de.p"));
//! assert_eq!(display_name_for_file("ru.p").unwrap(), "Russia");
//! ```
//!
//! ## Generating comparison tables
//!
//! ```rust,ignore
//! use addrbench::report::{write_tables, TableFormat};
//!
//! write_tables("noisy", "results", "tables", &[TableFormat::Markdown, TableFormat::Rst])?;
//! ```
//!
//! ## Design Philosophy
//!
//! - **Model stays external**: the trained parser is reached only through
//!   the `AddressParser` trait; this crate never does inference itself
//! - **Order is data**: results JSON files are read with key order
//!   preserved, since row pairing in the published tables follows it
//! - **Explicit errors**: unknown country codes, missing files, and
//!   mismatched result sets are descriptive errors, not panics

#![warn(missing_docs)]

pub mod cli;
pub mod country;
mod error;
pub mod eval;
pub mod report;

pub use error::{Error, Result};
