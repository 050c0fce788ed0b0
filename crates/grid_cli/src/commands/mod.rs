//! CLI command implementations
//!
//! Each submodule implements one command and returns the text to print.

pub mod grid;
pub mod show;
pub mod value;
