//! Exalt tools - helper utilities for compressor evaluation
//!
//! This library backs two small command-line tools:
//! - `fibseq` prints generalized Fibonacci sequences of a given order, the
//!   weights behind Fibonacci codes
//! - `bpc-summary` compares the sizes of files sharing a base name across
//!   several suffixes and reports bits-per-character against a baseline

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod fibonacci;
pub mod json_output;
pub mod scan;
pub mod stats;
