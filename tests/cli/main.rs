//! End-to-end tests for notereport commands

mod filter;
mod load;
mod report;
mod support;
