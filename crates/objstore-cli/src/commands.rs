use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use colored::Colorize;
use objstore_json::{FileRecordStore, RecordStore, StoreConfig};
use objstore_types::{Identity, Record};
use serde_json::{json, Value};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref(), cli.root)?;
    let store = FileRecordStore::with_config(config)
        .context("failed to open record store")?;

    let output = match cli.command {
        Command::Put(args) => cmd_put(&store, args, cli.format)?,
        Command::Get(args) => cmd_get(&store, args, cli.format)?,
        Command::Delete(args) => cmd_delete(&store, args, cli.format)?,
    };
    println!("{output}");
    Ok(())
}

/// Resolve the store configuration: the TOML file if given, else defaults,
/// with `--root` taking precedence over either.
pub fn load_config(path: Option<&Path>, root: Option<PathBuf>) -> anyhow::Result<StoreConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => StoreConfig::default(),
    };
    if let Some(root) = root {
        config.root = root;
    }
    Ok(config)
}

fn cmd_put(store: &impl RecordStore, args: PutArgs, format: OutputFormat) -> anyhow::Result<String> {
    let value: Value = serde_json::from_str(&args.properties)
        .context("properties are not valid JSON")?;
    let Value::Object(properties) = value else {
        bail!("properties must be a JSON object");
    };

    let id = args.id.unwrap_or_else(Identity::new);
    let record = store.put(Record::with_properties(id, properties))?;

    Ok(match format {
        OutputFormat::Text => format!("{} Stored {}", "✓".green().bold(), record.id.to_string().yellow()),
        OutputFormat::Json => json!({ "id": record.id, "stored": true }).to_string(),
    })
}

fn cmd_get(store: &impl RecordStore, args: GetArgs, format: OutputFormat) -> anyhow::Result<String> {
    let record = store.get(&args.id)?;
    Ok(match format {
        OutputFormat::Text => serde_json::to_string_pretty(&record.properties)?,
        OutputFormat::Json => json!({ "id": record.id, "properties": record.properties }).to_string(),
    })
}

fn cmd_delete(store: &impl RecordStore, args: DeleteArgs, format: OutputFormat) -> anyhow::Result<String> {
    store.delete(&args.id)?;
    Ok(match format {
        OutputFormat::Text => format!("{} Deleted {}", "✓".green().bold(), args.id.to_string().yellow()),
        OutputFormat::Json => json!({ "id": args.id, "deleted": true }).to_string(),
    })
}
