mod compile;
mod config;
mod scratch;
mod sources;
mod validator;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "syncheck", version, about = "Syntax-check every C source and header in a directory")]
struct Cli {
    /// Source directory to scan (overrides the configured one)
    dir: Option<PathBuf>,
    /// Path to a config file (defaults to ./syncheck.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.dir {
        config.source_dir = dir;
    }

    validator::Validator::new(config).run()
}
