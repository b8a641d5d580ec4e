//! Per-country accuracy results stored as JSON.
//!
//! One file per data type and embedding variant, named
//! `<data_type>_test_results_<embedding>.json`, mapping country display
//! name to an accuracy percentage. Key order in the file is meaningful:
//! the comparison tables pair rows in exactly that order.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Embedding variant of the trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Embedding {
    /// fastText subword embeddings.
    FastText,
    /// Byte-pair embeddings (BPEmb).
    BPEmb,
}

impl Embedding {
    /// File-name suffix used by the results files.
    pub fn suffix(self) -> &'static str {
        match self {
            Embedding::FastText => "fasttext",
            Embedding::BPEmb => "bpemb",
        }
    }
}

impl std::fmt::Display for Embedding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Path of the results file for a data type and embedding variant.
pub fn results_path(
    results_dir: impl AsRef<Path>,
    data_type: &str,
    embedding: Embedding,
) -> PathBuf {
    results_dir
        .as_ref()
        .join(format!("{}_test_results_{}.json", data_type, embedding.suffix()))
}

/// Ordered country → accuracy mapping loaded from one results file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    entries: Vec<(String, f64)>,
}

impl ResultSet {
    /// Build a result set from ordered (country, accuracy) pairs.
    pub fn from_entries(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Load a results file, preserving key order.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::results(format!("failed to read {}: {}", path.display(), e)))?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| Error::results(format!("failed to parse {}: {}", path.display(), e)))?;

        let obj = value.as_object().ok_or_else(|| {
            Error::results(format!("{}: expected a JSON object at top level", path.display()))
        })?;

        let mut entries = Vec::with_capacity(obj.len());
        for (country, accuracy) in obj {
            let accuracy = accuracy.as_f64().ok_or_else(|| {
                Error::results(format!(
                    "{}: accuracy for {:?} is not a number",
                    path.display(),
                    country
                ))
            })?;
            entries.push((country.clone(), accuracy));
        }
        Ok(Self { entries })
    }

    /// Number of countries in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set holds no countries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (country, accuracy) pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(c, a)| (c.as_str(), *a))
    }

    /// Accuracy for a country, if present.
    pub fn get(&self, country: &str) -> Option<f64> {
        self.entries.iter().find(|(c, _)| c == country).map(|(_, a)| *a)
    }
}
