//! Workspace tasks: `cargo run -p navcam-xtask -- <task>`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use navcam::options::Options;

#[derive(Parser)]
#[command(about = "navcam workspace tasks")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Write the options JSON schema.
    Schema {
        /// Output path.
        #[arg(long, default_value = "assets/options.schema.json")]
        out: PathBuf,
    },
    /// Write the default options as a TOML preset.
    Preset {
        /// Output path.
        #[arg(long, default_value = "assets/presets/default.toml")]
        out: PathBuf,
    },
    /// Parse a preset and report any error.
    Check {
        /// Preset to validate.
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().task {
        Task::Schema { out } => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, schema)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("wrote {}", out.display());
        }
        Task::Preset { out } => {
            Options::default()
                .save(&out)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("wrote {}", out.display());
        }
        Task::Check { path } => {
            let opts = Options::load(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            println!("{}", toml::to_string_pretty(&opts)?);
        }
    }
    Ok(())
}
