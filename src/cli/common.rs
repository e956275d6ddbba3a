//! Common utilities shared across CLI commands.
//!
//! This is the whole I/O boundary: documents come in through
//! [`read_document`], go out through [`apply_edit`], and everything in
//! between is a pure string transform.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::cli::args::EditIoArgs;
use crate::utils::plural_count;
use crate::{debug, log};

/// Expand CLI paths, reading them from stdin when `-` is passed.
pub fn collect_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        bail!("no input files");
    }

    for path in &paths {
        if !path.is_file() {
            bail!("not a file: {}", path.display());
        }
    }

    Ok(paths)
}

/// Read file paths from stdin, one per line
fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

/// Read a whole document into memory.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Run a pure transform over every input document and write the results.
///
/// In-place rewrite is the default (what the editing commands exist for);
/// `--output` redirects a single input to a new file, `--dry` prints each
/// transformed document to stdout and writes nothing.
pub fn apply_edit(
    io_args: &EditIoArgs,
    module: &str,
    transform: impl Fn(&str) -> Result<String>,
) -> Result<()> {
    let paths = collect_paths(&io_args.paths)?;
    if io_args.output.is_some() && paths.len() > 1 {
        bail!("--output requires a single input file");
    }

    let mut updated = 0usize;
    for path in &paths {
        let document = read_document(path)?;
        let transformed = transform(&document)
            .with_context(|| format!("failed to transform {}", path.display()))?;

        if io_args.dry {
            let mut stdout = io::stdout().lock();
            stdout.write_all(transformed.as_bytes())?;
            continue;
        }

        // Skip the write when an in-place edit changed nothing; an explicit
        // --output always produces its file.
        if io_args.output.is_none() && transformed == document {
            debug!(module; "{}: unchanged", path.display());
            continue;
        }

        let target = io_args.output.as_deref().unwrap_or(path);
        std::fs::write(target, &transformed)
            .with_context(|| format!("failed to write {}", target.display()))?;
        debug!(module; "wrote {}", target.display());
        updated += 1;
    }

    if !io_args.dry {
        log!(module; "updated {} of {}", updated, plural_count(paths.len(), "file"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_args(paths: Vec<PathBuf>) -> EditIoArgs {
        EditIoArgs {
            paths,
            output: None,
            dry: false,
        }
    }

    #[test]
    fn test_collect_paths_rejects_missing_file() {
        let result = collect_paths(&[PathBuf::from("no/such/file.svg")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_edit_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.svg");
        std::fs::write(&path, "<svg>old</svg>").unwrap();

        apply_edit(&io_args(vec![path.clone()]), "test", |doc| {
            Ok(doc.replace("old", "new"))
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg>new</svg>");
    }

    #[test]
    fn test_apply_edit_output_redirect() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.svg");
        let output = dir.path().join("b.svg");
        std::fs::write(&input, "<svg/>").unwrap();

        let args = EditIoArgs {
            paths: vec![input.clone()],
            output: Some(output.clone()),
            dry: false,
        };
        apply_edit(&args, "test", |doc| Ok(doc.to_string())).unwrap();

        // source untouched, copy produced even though nothing changed
        assert_eq!(std::fs::read_to_string(&input).unwrap(), "<svg/>");
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "<svg/>");
    }

    #[test]
    fn test_apply_edit_output_rejects_multiple_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.svg");
        let b = dir.path().join("b.svg");
        std::fs::write(&a, "<svg/>").unwrap();
        std::fs::write(&b, "<svg/>").unwrap();

        let args = EditIoArgs {
            paths: vec![a, b],
            output: Some(dir.path().join("out.svg")),
            dry: false,
        };
        let result = apply_edit(&args, "test", |doc| Ok(doc.to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_edit_unchanged_skips_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.svg");
        std::fs::write(&path, "<svg/>").unwrap();
        let before = std::fs::metadata(&path).unwrap().modified().unwrap();

        apply_edit(&io_args(vec![path.clone()]), "test", |doc| {
            Ok(doc.to_string())
        })
        .unwrap();

        let after = std::fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }
}
