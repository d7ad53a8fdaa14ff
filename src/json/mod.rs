//! Purpose: Internal JSON parsing boundary for manifest decoding.
//! Exports: `parse` module with decode and diagnostic helpers.
//! Role: Single seam for parser details so callsites avoid ad hoc decode logic.
//! Invariants: Manifest JSON decoding goes through this module.

pub(crate) mod parse;
