//! Command implementations for the addrbench CLI
//!
//! Each command has its own module/file for better organization.

pub mod countries;
pub mod info;
pub mod tables;

// Re-export argument types for parser
pub use countries::CountriesArgs;
pub use tables::TablesArgs;
