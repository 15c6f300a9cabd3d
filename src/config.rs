use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "syncheck.toml";

/// Toolchain and layout settings for a validation run.
///
/// Everything the run depends on lives here; the Validator receives one of
/// these at construction and reads no other state.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for sources.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Scratch translation unit used for header checks.
    #[serde(default = "default_scratch_file")]
    pub scratch_file: PathBuf,
    /// Compiler executable, resolved through PATH.
    #[serde(default = "default_compiler")]
    pub compiler: String,
    /// Flags passed before the unit; must keep the compiler in syntax-only mode.
    #[serde(default = "default_flags")]
    pub flags: Vec<String>,
    /// Include search paths (-I).
    #[serde(default)]
    pub include_paths: Vec<PathBuf>,
    /// Library search paths (-L).
    #[serde(default)]
    pub library_paths: Vec<PathBuf>,
    /// Libraries to link against (-l).
    #[serde(default)]
    pub libraries: Vec<String>,
    /// Entry point appended to the scratch unit so a header compiles standalone.
    #[serde(default = "default_entry_stub")]
    pub entry_stub: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            scratch_file: default_scratch_file(),
            compiler: default_compiler(),
            flags: default_flags(),
            include_paths: Vec::new(),
            library_paths: Vec::new(),
            libraries: Vec::new(),
            entry_stub: default_entry_stub(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_scratch_file() -> PathBuf {
    PathBuf::from("tempmain.c")
}

fn default_compiler() -> String {
    "gcc".to_string()
}

fn default_flags() -> Vec<String> {
    vec!["-Wall".to_string(), "-fsyntax-only".to_string(), "-g".to_string()]
}

fn default_entry_stub() -> String {
    "int main(void) { return 0; }".to_string()
}

/// Load config from an explicit path, from ./syncheck.toml, or defaults.
/// An explicit path that cannot be read is an error; the fallback file is
/// optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => {
            let fallback = Path::new(CONFIG_FILE);
            if !fallback.exists() {
                return Ok(Config::default());
            }
            fallback
        }
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config in {}", path.display()))
}
