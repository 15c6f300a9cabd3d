use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::config::Config;
use crate::scratch::Scratch;
use crate::sources::SourceFile;

/// Outcome of one syntax-only compile: the file checked and whatever the
/// compiler printed. An empty capture is a clean compile.
#[derive(Debug)]
pub struct CompileResult {
    pub file: SourceFile,
    pub output: Vec<u8>,
}

impl CompileResult {
    pub fn succeeded(&self) -> bool {
        self.output.is_empty()
    }
}

/// Builds and runs syntax-only compiler invocations from a Config.
pub struct Compiler<'a> {
    config: &'a Config,
}

impl<'a> Compiler<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Syntax-check a header by compiling a synthesized unit that includes it.
    pub fn check_header(&self, file: SourceFile, scratch: &Scratch) -> Result<CompileResult> {
        let header = self.config.source_dir.join(&file.name);
        scratch.write_unit(&header, &self.config.entry_stub)?;
        let output = self.run(scratch.path())?;
        Ok(CompileResult { file, output })
    }

    /// Syntax-check an implementation file directly.
    pub fn check_implementation(&self, file: SourceFile) -> Result<CompileResult> {
        let unit = self.config.source_dir.join(&file.name);
        let output = self.run(&unit)?;
        Ok(CompileResult { file, output })
    }

    /// One discrete argument per flag and path, never a shell string, so
    /// file names with spaces pass through intact.
    fn command(&self, unit: &Path) -> Command {
        let mut cmd = Command::new(&self.config.compiler);
        cmd.args(&self.config.flags);
        cmd.arg(unit);
        for dir in &self.config.include_paths {
            cmd.arg("-I").arg(dir);
        }
        for dir in &self.config.library_paths {
            cmd.arg("-L").arg(dir);
        }
        for lib in &self.config.libraries {
            cmd.arg(format!("-l{}", lib));
        }
        cmd
    }

    /// Run one invocation to completion and return its combined output.
    /// A process that cannot start or exits non-zero is fatal; diagnostics
    /// from a zero-exit run are captured output, not an error.
    fn run(&self, unit: &Path) -> Result<Vec<u8>> {
        let output = self
            .command(unit)
            .output()
            .with_context(|| format!("failed to run {}", self.config.compiler))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} exited with {} on {}:\n{}{}",
                self.config.compiler,
                output.status,
                unit.display(),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
            );
        }

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Ok(combined)
    }
}
