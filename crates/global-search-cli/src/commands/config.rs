use anyhow::Result;
use global_search_serializers::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    let families = config.families()?;
    let names: Vec<&str> = families.iter().map(|f| f.as_str()).collect();

    println!("Settings:");
    println!("  installed_families: {}", names.join(", "));
    println!("  pretty: {}", config.pretty);
    println!("  log_level: {}", config.log_level);
    println!("  log_coloured: {}", config.log_coloured);

    println!("\nPriority: CLI args > ENV vars (GS_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure global-search.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
