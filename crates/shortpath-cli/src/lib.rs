//! Shortpath CLI library.
//!
//! This crate provides the command-line plumbing for the shortpath tools:
//! graph construction from repeated `--vertex`/`--edge` flags and output
//! formatting for paths and distance tables.

pub mod graph_args;
pub mod output;
