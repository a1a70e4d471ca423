use anyhow::Result;
use global_search_core::RecordFamily;
use global_search_serializers::{Adapter, Config, SerializerRegistry};

/// List every record family with its adapter state.
pub fn show_families(config: &Config) -> Result<()> {
    let installed = config.families()?;
    let registry = SerializerRegistry::probe(&installed, config.json_format());

    println!("Record families:");
    for family in RecordFamily::ALL {
        match registry.get(family) {
            Adapter::Available(serializer) => println!(
                "  {:<8} available    ({}, {})",
                family,
                serializer.schema_name(),
                serializer.mimetype()
            ),
            Adapter::Unsupported(_) => println!("  {:<8} unsupported", family),
        }
    }

    if registry.available().next().is_none() {
        println!("\nNo families installed. Set installed_families in the config file.");
    }

    Ok(())
}
