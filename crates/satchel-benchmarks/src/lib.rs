//! satchel benchmarking suite
//!
//! Benchmarks for dot-notation traversal, random string generation and
//! document parsing.

pub mod common;

pub use common::*;
