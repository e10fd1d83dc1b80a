//! Command-line interface modules for labelgen
//!
//! This module contains all CLI command implementations.

pub mod generate;
