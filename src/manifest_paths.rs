//! Purpose: Resolve the default manifest location from the tool's own install path.
//! Exports: `DEFAULT_MANIFEST_FILE_NAME`, `default_manifest_path`, `default_manifest_path_for`.
//! Role: Keep CLI default-path semantics in one place.
//! Invariants: Default manifest is `examples-manifest.json` one directory above the tool's directory.

use std::path::{Path, PathBuf};

use crate::core::error::{Error, ErrorKind};

pub const DEFAULT_MANIFEST_FILE_NAME: &str = "examples-manifest.json";

pub fn default_manifest_path() -> Result<PathBuf, Error> {
    let exe = std::env::current_exe().map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to locate the running executable")
            .with_hint("Pass the manifest path explicitly.")
            .with_source(err)
    })?;
    Ok(default_manifest_path_for(&exe))
}

pub fn default_manifest_path_for(exe: &Path) -> PathBuf {
    let tool_dir = exe.parent().unwrap_or(exe);
    let root = tool_dir.parent().unwrap_or(tool_dir);
    root.join(DEFAULT_MANIFEST_FILE_NAME)
}
