//! Testing infrastructure for folio integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `assertions`: checks over `--format json` output
//! - `fixtures`: image files and raw storage values

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
