//! CLI module for the addrbench binary.
//!
//! This module contains the command-line interface structure, argument
//! parsing, and command routing. Individual command implementations are in
//! the `commands` submodule.

pub mod commands;
pub mod output;
pub mod parser;

pub use output::*;
pub use parser::*;
