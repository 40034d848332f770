//! CLI integration tests.

mod check_tests;
mod order_tests;
