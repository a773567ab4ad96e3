//! Terminal output formatting
//!
//! Coloured tiles and result printing for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_outcome, print_statistics};
