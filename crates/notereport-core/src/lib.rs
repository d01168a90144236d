//! Notereport Core Library
//!
//! Builds notes reports over a qualitative research database: which notes
//! are in scope, what they are attached to, which ones the user selected,
//! and how the result is laid out as styled text.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod report;
pub mod repository;
