//! Identifier commands: generate, encode, decode.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use routeid::{Codec, Identifier, StorageId};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// One identifier, as printed by every command here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct IdRow {
    #[tabled(rename = "Full ID", display = "display_option")]
    full_id: Option<String>,

    #[tabled(rename = "Raw ID")]
    raw_id: String,

    #[tabled(rename = "Storage", display = "display_option")]
    storage: Option<String>,
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

impl IdRow {
    fn from_identifier(id: &mut Identifier) -> Result<Self> {
        let full_id = match id.storage() {
            Some(_) => Some(id.full()?.to_string()),
            None => None,
        };
        Ok(Self {
            full_id,
            raw_id: id.raw().to_string(),
            storage: id.storage().map(|s| s.to_string()),
        })
    }
}

/// Generate fresh identifiers.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Storage ID to encode into each identifier.
    ///
    /// Without it only raw IDs are generated.
    #[arg(long, short)]
    storage: Option<StorageId>,

    /// Number of identifiers to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
}

impl GenerateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = generate(&ctx.codec, self.storage, self.count)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn generate(codec: &Arc<Codec>, storage: Option<StorageId>, count: usize) -> Result<Vec<IdRow>> {
    (0..count)
        .map(|_| {
            let mut id = Identifier::generate(Arc::clone(codec));
            if let Some(storage) = storage {
                id.set_storage(storage).map_err(CliError::from)?;
            }
            IdRow::from_identifier(&mut id)
        })
        .collect()
}

/// Encode a raw ID and storage ID into a full ID.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Raw ID.
    raw: String,

    /// Storage ID (one character from the alphabet).
    storage: StorageId,
}

impl EncodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let row = encode(&ctx.codec, &self.raw, self.storage)?;
        print_output(&[row], ctx.format);
        Ok(())
    }
}

fn encode(codec: &Codec, raw: &str, storage: StorageId) -> Result<IdRow> {
    let full = codec
        .encode(raw, storage)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to encode raw ID '{raw}'"))?;
    Ok(IdRow {
        full_id: Some(full),
        raw_id: raw.to_string(),
        storage: Some(storage.to_string()),
    })
}

/// Decode full IDs into raw ID and storage ID.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Full IDs to decode.
    #[arg(required = true)]
    ids: Vec<String>,
}

impl DecodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = decode(&ctx.codec, &self.ids)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn decode(codec: &Arc<Codec>, ids: &[String]) -> Result<Vec<IdRow>> {
    ids.iter()
        .map(|input| {
            let mut id = Identifier::parse(Arc::clone(codec), input)
                .map_err(|e| CliError::malformed(input.as_str(), e))?;
            IdRow::from_identifier(&mut id)
        })
        .collect()
}
