use std::path::Path;

use anyhow::{Context, Result};
use global_search_core::RecordFamily;
use global_search_serializers::{Config, JsonFormat, SerializerRegistry};
use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub struct SerializeOptions {
    pub family: RecordFamily,
    pub list: bool,
    pub total: Option<usize>,
    pub pretty: bool,
}

/// Serialize the record(s) in `path` with the family's adapter and print
/// the result.
pub fn run_serialize(config: &Config, options: &SerializeOptions, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {}", path.display()))?;
    let input: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record file: {}", path.display()))?;

    let installed = config.families()?;
    let format = JsonFormat {
        pretty: options.pretty,
    };
    let registry = SerializerRegistry::install(SerializerRegistry::probe(&installed, format))?;
    let adapter = registry.get(options.family);

    let result = if options.list {
        let Value::Array(records) = input else {
            anyhow::bail!("Expected a JSON array of records with --list");
        };
        log::info!(
            "Serializing {} {} records from {}",
            records.len(),
            options.family,
            path.display()
        );
        adapter.serialize_object_list(&records, options.total)
    } else {
        log::info!("Serializing {} record from {}", options.family, path.display());
        adapter.serialize_object(&input)
    };
    let output = result.with_context(|| format!("Failed to serialize {}", path.display()))?;

    println!("{output}");
    Ok(())
}
