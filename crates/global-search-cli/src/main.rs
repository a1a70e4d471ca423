use anyhow::Result;
use clap::Parser;
use global_search_core::RecordFamily;
use global_search_serializers::Config;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "global-search", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Print the display label of path-like vocabulary values
    ///
    /// Takes the last '/'-separated segment, uppercases its first letter and
    /// spreads CamelCase words: "https://example.org/vocab/OpenAccess"
    /// becomes "Open Access".
    Label {
        /// Values to relabel
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Apply the global-search rights policy to a list of rights
    ///
    /// Link-form entries (containing "http") are dropped, entries mentioning
    /// "access" are relabelled, everything else is kept.
    Rights {
        /// Rights entries, in upstream order
        values: Vec<String>,
    },
    /// Apply the global-search types policy to a list of resource types
    Types {
        /// Resource type entries, in upstream order
        values: Vec<String>,
    },
    /// Serialize a record (or a list of records) to Dublin Core JSON
    ///
    /// The input file holds one upstream record as a JSON object, or with
    /// --list a JSON array of records. Dublin Core elements are read from
    /// the record's "metadata" object, or from the top level.
    Serialize {
        /// Record family (lom, marc21, rdm)
        #[arg(long, short)]
        family: RecordFamily,

        /// Treat the input as a list of records
        #[arg(long)]
        list: bool,

        /// Total hit count reported for a list (defaults to its length)
        #[arg(long, requires = "list")]
        total: Option<usize>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Path to the JSON input
        path: PathBuf,
    },
    /// Show which record families can be serialized
    Families,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    let level = if verbose {
        twyg::LogLevel::Debug
    } else {
        commands::parse_log_level(&config.log_level)
    };

    let opts = twyg::OptsBuilder::new()
        .coloured(config.log_coloured)
        .level(level)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logging options: {e}"))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Failed to set up logging: {e}"))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    setup_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Label { values } => commands::print_labels(&values),
        Commands::Rights { values } => commands::print_rights(values)?,
        Commands::Types { values } => commands::print_types(values)?,
        Commands::Serialize {
            family,
            list,
            total,
            pretty,
            path,
        } => {
            let options = commands::SerializeOptions {
                family,
                list,
                total,
                pretty: pretty || config.pretty,
            };
            commands::run_serialize(&config, &options, &path)?;
        }
        Commands::Families => commands::show_families(&config)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
