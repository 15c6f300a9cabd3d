use anyhow::{Context, Result};
use std::path::Path;

/// How a directory entry participates in validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Header,
    Implementation,
    Ignored,
}

/// A directory entry selected for validation.
#[derive(Debug)]
pub struct SourceFile {
    pub name: String,
    pub kind: SourceKind,
}

/// Classify a file name by suffix.
pub fn classify(name: &str) -> SourceKind {
    if name.ends_with(".h") {
        SourceKind::Header
    } else if name.ends_with(".c") {
        SourceKind::Implementation
    } else {
        SourceKind::Ignored
    }
}

/// Enumerate the source directory, dropping entries with unrecognized
/// suffixes. Order is whatever the directory listing yields; no sorting.
pub fn list(dir: &Path) -> Result<Vec<SourceFile>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read source directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let kind = classify(&name);
        if kind == SourceKind::Ignored {
            continue;
        }
        files.push(SourceFile { name, kind });
    }
    Ok(files)
}
