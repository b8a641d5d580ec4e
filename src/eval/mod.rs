//! Evaluation: per-country test orchestration and results aggregation.
//!
//! The trained model itself lives outside this crate. It is reached
//! through the [`AddressParser`] trait, which keeps this module limited
//! to resolving which file to test and collecting the aggregate numbers.

pub mod results;
pub mod runner;

pub use results::{results_path, Embedding, ResultSet};
pub use runner::{evaluate_country, AddressParser, CountryDataset, TestMetrics, TestOptions};
