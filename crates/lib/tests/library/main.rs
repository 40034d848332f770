//! Library integration tests.

mod common;
mod graph_tests;
mod parse_tests;
