//! Config commands (show or persist the effective ID configuration).

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Show or initialize the ID configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration.
    Show,

    /// Write the effective configuration to the config file.
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    characters: String,
    alphabet_size: usize,
    length: usize,
    full_length: usize,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Init { force } => init(ctx, force),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        path: ctx.resolve_config_path()?.display().to_string(),
        characters: ctx.codec.alphabet().to_string(),
        alphabet_size: ctx.codec.alphabet().len(),
        length: ctx.codec.length(),
        full_length: ctx.codec.full_length(),
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!("characters: {}", view.characters);
            println!("alphabet_size: {}", view.alphabet_size);
            println!("length: {}", view.length);
            println!("full_length: {}", view.full_length);
        }
    }

    Ok(())
}

fn init(ctx: CommandContext, force: bool) -> Result<()> {
    let path = ctx.resolve_config_path()?;
    if path.exists() && !force {
        anyhow::bail!(
            "Config file {} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    ctx.config.save_to(&path)?;

    match ctx.format {
        OutputFormat::Json => {
            print_single(&serde_json::json!({ "ok": true, "path": path.display().to_string() }))
        }
        OutputFormat::Table => print_success(&format!("Wrote config to {}", path.display())),
    }

    Ok(())
}
