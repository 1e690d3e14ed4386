//! CLI commands.

mod config;
mod ids;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use routeid::Codec;
use tracing::debug;

use crate::config::Config;
use crate::output::OutputFormat;

/// routeid CLI - Generate and decode storage-routed identifiers.
#[derive(Debug, Parser)]
#[command(name = "routeid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Path to a JSON config file.
    #[arg(long, global = true, env = "ROUTEID_CONFIG")]
    config: Option<PathBuf>,

    /// ID alphabet, overriding the config file.
    #[arg(long, global = true, env = "ROUTEID_CHARACTERS")]
    characters: Option<String>,

    /// Raw ID length, overriding the config file.
    #[arg(long, global = true, env = "ROUTEID_LENGTH")]
    length: Option<usize>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate fresh identifiers.
    Generate(ids::GenerateCommand),

    /// Encode a raw ID and storage ID into a full ID.
    Encode(ids::EncodeCommand),

    /// Decode full IDs into raw ID and storage ID.
    Decode(ids::DecodeCommand),

    /// Show or initialize the ID configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Log filter requested on the command line.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        if let Commands::Version = self.command {
            println!("routeid {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        let format = OutputFormat::from_flag(&self.format);
        let config =
            Config::load(self.config.as_deref())?.with_overrides(self.characters, self.length);

        let codec = Arc::new(config.codec()?);
        debug!(
            alphabet_len = codec.alphabet().len(),
            length = codec.length(),
            "codec ready"
        );

        let ctx = CommandContext {
            config,
            config_path: self.config,
            codec,
            format,
        };

        match self.command {
            Commands::Generate(cmd) => cmd.run(ctx),
            Commands::Encode(cmd) => cmd.run(ctx),
            Commands::Decode(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => Ok(()),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub codec: Arc<Codec>,
    pub format: OutputFormat,
}

impl CommandContext {
    /// The config file in use, explicit or default.
    pub fn resolve_config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => crate::config::default_path(),
        }
    }
}
