//! Integration test suite for the featconf CLI.
//!
//! Each module exercises one command end to end against a temp-dir project
//! containing a catalog manifest and, where relevant, an override file.

mod common;

mod configure;
mod list;
mod resolve;
