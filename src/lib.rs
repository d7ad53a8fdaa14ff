//! Purpose: Library crate behind the `sync-manifest-json` CLI and its tests.
//! Exports: `core` (manifest load, render, convert, errors) and `manifest_paths`.
//! Role: Keeps the converter testable without spawning the binary.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod core;
mod json;
pub mod manifest_paths;

pub use crate::core::convert::{ConvertOutcome, OUTPUT_FILE_NAME, convert};
pub use crate::core::error::{Error, ErrorKind, to_exit_code};
pub use crate::core::manifest::{Manifest, Record};
