//! Info command - version and evaluation setup

use crate::cli::output::color;
use crate::country::{TRAINED_FILES, ZERO_SHOT_FILES};
use crate::eval::Embedding;
use crate::report::COLUMNS;

pub fn run() -> Result<(), String> {
    println!();
    println!("{}", color("1;36", "addrbench"));
    println!("  Address-parsing evaluation: results aggregation + comparison tables");
    println!();
    println!("{}:", color("1;33", "Version"));
    println!("  {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}:", color("1;33", "Evaluation setup"));
    println!("  Trained countries:   {}", TRAINED_FILES.len());
    println!("  Zero-shot countries: {}", ZERO_SHOT_FILES.len());
    println!(
        "  Embeddings:          {}, {}",
        Embedding::FastText,
        Embedding::BPEmb
    );
    println!("  Table columns:       {} (repeated twice)", COLUMNS.join(" | "));
    println!();
    Ok(())
}
