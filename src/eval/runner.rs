//! Per-country test orchestration.
//!
//! Resolves which pickled test file to evaluate and forwards the call to
//! the trained parser. The parser is reached through the [`AddressParser`]
//! trait so the actual model (and its dataset deserialization) stays
//! outside this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::output::log_info;
use crate::country::display_name_for_file;
use crate::{Error, Result};

/// Resolved handle for one country's test dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDataset {
    /// Path of the pickled test file.
    pub path: PathBuf,
    /// Lower-case alpha-2 code, e.g. `"de"`.
    pub code: String,
    /// Cleaned display name, e.g. `"Germany"`.
    pub country: String,
}

impl CountryDataset {
    /// Resolve a `<iso2>.p` file inside a dataset directory.
    ///
    /// The file must exist and the code must have a display-name entry.
    pub fn resolve(directory: impl AsRef<Path>, file: &str) -> Result<Self> {
        let country = display_name_for_file(file)?;
        let path = directory.as_ref().join(file);
        if !path.is_file() {
            return Err(Error::dataset(format!(
                "test file not found: {}",
                path.display()
            )));
        }
        Ok(Self {
            path,
            code: file.trim_end_matches(".p").to_lowercase(),
            country,
        })
    }
}

/// Arguments forwarded to the model's test call.
#[derive(Debug, Clone, Serialize)]
pub struct TestOptions {
    /// Inference batch size.
    pub batch_size: usize,
    /// Data-loading worker count.
    pub num_workers: usize,
    /// Checkpoint to evaluate (path or tag understood by the model).
    pub checkpoint: String,
    /// Directory the model writes its test logs into.
    pub logging_path: PathBuf,
    /// Suppress per-country progress messages.
    pub quiet: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            batch_size: 2048,
            num_workers: 4,
            checkpoint: "best".to_string(),
            logging_path: PathBuf::from("checkpoints"),
            quiet: false,
        }
    }
}

/// Aggregate metrics returned by one test call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestMetrics {
    /// Metric name → value, as reported by the model.
    pub values: BTreeMap<String, f64>,
}

impl TestMetrics {
    /// Accuracy percentage, when the model reported one.
    pub fn accuracy(&self) -> Option<f64> {
        self.values.get("test_accuracy").copied()
    }
}

/// Seam to the external trained address parser.
pub trait AddressParser {
    /// Human-readable model identifier (e.g. `"fasttext"`).
    fn name(&self) -> &str;

    /// Run the model over a country's test dataset and return aggregate
    /// metrics.
    fn test_on(&self, dataset: &CountryDataset, opts: &TestOptions) -> Result<TestMetrics>;
}

/// Compute the results over one country's data.
///
/// Resolves the dataset, announces which country is being tested, and
/// returns the metrics together with the cleaned display name.
pub fn evaluate_country<P: AddressParser + ?Sized>(
    parser: &P,
    directory: impl AsRef<Path>,
    file: &str,
    opts: &TestOptions,
) -> Result<(TestMetrics, String)> {
    let dataset = CountryDataset::resolve(directory, file)?;
    log_info(
        &format!("Testing on test files {}", dataset.country),
        opts.quiet,
    );
    let metrics = parser.test_on(&dataset, opts)?;
    Ok((metrics, dataset.country))
}
