//! Purpose: Run the single Load -> Render -> Write pass for one manifest.
//! Exports: `OUTPUT_FILE_NAME`, `ConvertOutcome`, `convert`, `output_path_for`, `write_document`.
//! Role: Converter entrypoint used by the CLI; owns output placement and replacement.
//! Invariants: Output lands beside the input as `SHELLY_MJS.md`.
//! Invariants: An empty manifest writes nothing; an existing output is left untouched.
//! Invariants: An existing output is truncated and rewritten in place, never swapped out.
//! Notes: Concurrent runs on the same output are last-write-wins; an interrupted run
//! Notes: may leave a partially written output.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::error::{Error, ErrorKind};
use crate::core::manifest::Manifest;
use crate::core::render::render_document;

pub const OUTPUT_FILE_NAME: &str = "SHELLY_MJS.md";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConvertOutcome {
    Written { path: PathBuf, records: usize },
    EmptyManifest,
}

pub fn convert(input: &Path) -> Result<ConvertOutcome, Error> {
    let manifest = Manifest::load(input)?;
    tracing::debug!(
        input = %input.display(),
        records = manifest.len(),
        "loaded manifest"
    );
    if manifest.is_empty() {
        return Ok(ConvertOutcome::EmptyManifest);
    }

    let output = output_path_for(input);
    write_document(&output, &render_document(&manifest))?;
    Ok(ConvertOutcome::Written {
        path: output,
        records: manifest.len(),
    })
}

/// `SHELLY_MJS.md` in the input's parent directory, or the current
/// directory when the input is a bare file name.
pub fn output_path_for(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(OUTPUT_FILE_NAME),
        _ => PathBuf::from(OUTPUT_FILE_NAME),
    }
}

/// Truncates and writes `path` in place, following an existing symlink and
/// keeping the file's mode, ownership and hard links.
pub fn write_document(path: &Path, contents: &str) -> Result<(), Error> {
    let write_err = |message: &str, source: std::io::Error| {
        Error::new(ErrorKind::Io)
            .with_message(message.to_string())
            .with_path(path)
            .with_source(source)
    };

    let mut file =
        File::create(path).map_err(|err| write_err("failed to open output file", err))?;
    file.write_all(contents.as_bytes())
        .map_err(|err| write_err("failed to write output", err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ConvertOutcome, OUTPUT_FILE_NAME, convert, output_path_for, write_document};
    use crate::core::error::ErrorKind;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[test]
    fn output_sits_beside_input() {
        assert_eq!(
            output_path_for(Path::new("/repo/examples-manifest.json")),
            PathBuf::from("/repo/SHELLY_MJS.md")
        );
        assert_eq!(
            output_path_for(Path::new("../examples-manifest.json")),
            PathBuf::from("../SHELLY_MJS.md")
        );
    }

    #[test]
    fn bare_file_name_writes_to_current_dir() {
        assert_eq!(
            output_path_for(Path::new("examples-manifest.json")),
            PathBuf::from(OUTPUT_FILE_NAME)
        );
    }

    #[test]
    fn convert_writes_blocks() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("examples-manifest.json");
        fs::write(
            &input,
            r#"[{"fname": "a.js", "title": "Title", "description": "Desc"}]"#,
        )
        .expect("write");

        let outcome = convert(&input).expect("convert");
        let output = temp.path().join(OUTPUT_FILE_NAME);
        assert_eq!(
            outcome,
            ConvertOutcome::Written {
                path: output.clone(),
                records: 1
            }
        );
        assert_eq!(
            fs::read_to_string(output).expect("read"),
            "a.js: Title\n===\nDesc\n\n"
        );
    }

    #[test]
    fn empty_manifest_keeps_existing_output() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("examples-manifest.json");
        let output = temp.path().join(OUTPUT_FILE_NAME);
        fs::write(&input, "[]").expect("write");
        fs::write(&output, "previous").expect("write");

        assert_eq!(convert(&input).expect("convert"), ConvertOutcome::EmptyManifest);
        assert_eq!(fs::read_to_string(output).expect("read"), "previous");
    }

    #[test]
    fn missing_field_writes_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("examples-manifest.json");
        fs::write(
            &input,
            r#"[{"fname": "a.js", "title": "A", "description": "d"}, {"fname": "b.js"}]"#,
        )
        .expect("write");

        let err = convert(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert!(!temp.path().join(OUTPUT_FILE_NAME).exists());
    }

    #[test]
    fn write_replaces_existing_file_in_place() {
        let temp = tempfile::tempdir().expect("tempdir");
        let output = temp.path().join(OUTPUT_FILE_NAME);
        fs::write(&output, "old contents that are longer").expect("write");

        write_document(&output, "new").expect("write document");
        assert_eq!(fs::read_to_string(&output).expect("read"), "new");

        let entries: Vec<_> = fs::read_dir(temp.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from(OUTPUT_FILE_NAME)]);
    }

    #[cfg(unix)]
    #[test]
    fn write_follows_symlinked_output() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("real.md");
        let output = temp.path().join(OUTPUT_FILE_NAME);
        fs::write(&target, "old").expect("write");
        std::os::unix::fs::symlink(&target, &output).expect("symlink");

        write_document(&output, "a.js: A\n===\nd\n\n").expect("write document");

        let meta = fs::symlink_metadata(&output).expect("metadata");
        assert!(meta.file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(&target).expect("read"),
            "a.js: A\n===\nd\n\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn write_keeps_existing_mode_and_hard_links() {
        use std::os::unix::fs::{MetadataExt, PermissionsExt};

        let temp = tempfile::tempdir().expect("tempdir");
        let output = temp.path().join(OUTPUT_FILE_NAME);
        let linked = temp.path().join("linked.md");
        fs::write(&output, "old").expect("write");
        fs::set_permissions(&output, fs::Permissions::from_mode(0o600)).expect("chmod");
        fs::hard_link(&output, &linked).expect("hard link");

        write_document(&output, "new").expect("write document");

        let meta = fs::metadata(&output).expect("metadata");
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
        assert_eq!(meta.ino(), fs::metadata(&linked).expect("linked").ino());
        assert_eq!(fs::read_to_string(&linked).expect("read"), "new");
    }
}
