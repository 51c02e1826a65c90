//! File discovery and per-file processing for the `docstrict` binary.

mod discovery;
mod processing;

pub use discovery::*;
pub use processing::*;
