//! The compile-and-report loop.
//!
//! Strictly sequential: one file at a time, each compile blocking until the
//! external process exits. A spawn failure or non-zero compiler exit aborts
//! the run; the scratch guard still releases its file on that path.

use anyhow::Result;

use crate::compile::{CompileResult, Compiler};
use crate::config::Config;
use crate::scratch::Scratch;
use crate::sources::{self, SourceKind};

pub struct Validator {
    config: Config,
}

impl Validator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Check every recognized file in the source directory, in listing order,
    /// printing one report line per file.
    pub fn run(&self) -> Result<()> {
        let files = sources::list(&self.config.source_dir)?;
        let scratch = Scratch::create(&self.config.scratch_file)?;
        let compiler = Compiler::new(&self.config);

        let mut checked = 0usize;
        for file in files {
            let result = match file.kind {
                SourceKind::Header => compiler.check_header(file, &scratch)?,
                SourceKind::Implementation => compiler.check_implementation(file)?,
                SourceKind::Ignored => continue,
            };
            print!("{}", render(&result));
            checked += 1;
        }

        eprintln!(
            "Checked {} files in {}",
            checked,
            self.config.source_dir.display()
        );
        Ok(())
    }
}

/// Per-file report line. Diagnostics keep the compiler's own text.
fn render(result: &CompileResult) -> String {
    if result.succeeded() {
        return format!("Compiled '{}'\n", result.file.name);
    }
    let mut line = format!(
        "Compiled '{}' with output!\n{}",
        result.file.name,
        String::from_utf8_lossy(&result.output)
    );
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SourceFile;
    use std::fs;
    use tempfile::TempDir;

    fn result(name: &str, output: &[u8]) -> CompileResult {
        CompileResult {
            file: SourceFile {
                name: name.to_string(),
                kind: SourceKind::Implementation,
            },
            output: output.to_vec(),
        }
    }

    #[test]
    fn render_clean() {
        assert_eq!(render(&result("baz.c", b"")), "Compiled 'baz.c'\n");
    }

    #[test]
    fn render_with_diagnostics() {
        let rendered = render(&result("bar.h", b"warning: unused variable 'x'\n"));
        assert_eq!(
            rendered,
            "Compiled 'bar.h' with output!\nwarning: unused variable 'x'\n"
        );
    }

    #[test]
    fn render_terminates_unterminated_diagnostics() {
        let rendered = render(&result("bar.h", b"warning: trailing"));
        assert!(rendered.ends_with("warning: trailing\n"));
    }

    #[test]
    fn run_removes_the_scratch_file_on_success() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.c"), "int x;\n").unwrap();
        fs::write(src.join("b.h"), "typedef int b_t;\n").unwrap();

        let scratch = dir.path().join("tempmain.c");
        let config = Config {
            source_dir: src,
            scratch_file: scratch.clone(),
            compiler: "true".to_string(),
            flags: Vec::new(),
            ..Config::default()
        };
        Validator::new(config).run().unwrap();
        assert!(!scratch.exists());
    }

    #[test]
    fn run_removes_the_scratch_file_on_fatal_error() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.c"), "int x;\n").unwrap();

        let scratch = dir.path().join("tempmain.c");
        let config = Config {
            source_dir: src,
            scratch_file: scratch.clone(),
            compiler: "/nonexistent/gcc".to_string(),
            ..Config::default()
        };
        assert!(Validator::new(config).run().is_err());
        assert!(!scratch.exists());
    }

    #[test]
    fn run_on_empty_directory_still_cleans_up() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();

        let scratch = dir.path().join("tempmain.c");
        let config = Config {
            source_dir: src,
            scratch_file: scratch.clone(),
            compiler: "/nonexistent/gcc".to_string(),
            ..Config::default()
        };
        // No recognized files means the compiler is never spawned.
        Validator::new(config).run().unwrap();
        assert!(!scratch.exists());
    }
}
