//! Purpose: Render manifest records into the legacy `SHELLY_MJS.md` text layout.
//! Exports: `BLOCK_SEPARATOR`, `render_record`, `render_document`.
//! Role: Render stage of the converter; pure string building, no I/O.
//! Invariants: Block layout is `<fname>: <title>\n===\n<description>\n\n`, byte for byte.
//! Invariants: Blocks appear in manifest order; text is copied without escaping.
use crate::core::manifest::{Manifest, Record};

pub const BLOCK_SEPARATOR: &str = "===";

pub fn render_record(record: &Record, out: &mut String) {
    out.push_str(&record.fname);
    out.push_str(": ");
    out.push_str(&record.title);
    out.push('\n');
    out.push_str(BLOCK_SEPARATOR);
    out.push('\n');
    out.push_str(&record.description);
    out.push_str("\n\n");
}

pub fn render_document(manifest: &Manifest) -> String {
    let mut out = String::new();
    for record in manifest.records() {
        render_record(record, &mut out);
    }
    out
}
