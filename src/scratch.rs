use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Scratch translation unit for header checks.
///
/// A header cannot be compiled standalone, so a minimal program that includes
/// it is synthesized into this file. One scratch file exists per run; it is
/// truncated and rewritten for each header and removed when the guard drops,
/// on every exit path.
pub struct Scratch {
    path: PathBuf,
}

impl Scratch {
    /// Create the scratch file, truncating any leftover from a prior run.
    pub fn create(path: &Path) -> Result<Self> {
        std::fs::write(path, "")
            .with_context(|| format!("failed to create scratch file {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the scratch file as a translation unit that includes `header`.
    pub fn write_unit(&self, header: &Path, entry_stub: &str) -> Result<()> {
        let code = format!("#include \"{}\"\n{}\n", header.display(), entry_stub);
        std::fs::write(&self.path, code)
            .with_context(|| format!("failed to write scratch file {}", self.path.display()))
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
