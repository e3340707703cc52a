//! HostScope CLI
//!
//! Offline commands against the same data and views the server uses:
//! - List countries
//! - Render a page to HTML
//! - Try the display formatters
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use hostscope::config::{generate_default_config, Config};
use hostscope::data::DataStore;
use hostscope::flags::{FlagCdnClient, FlagResolver};
use hostscope::format::{format_count, format_money, format_percent, format_score};
use hostscope::logging::{init_logging, with_bootstrap_logging};
use hostscope::views::{ViewContext, ViewRouter};

#[derive(Parser)]
#[command(name = "hostscope-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Offline tools for the World Cup host feasibility explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List countries with their headline figures
    Countries,

    /// Render a page exactly as the server would
    Render {
        /// Country to show; omit for the landing page
        #[arg(short = 'C', long)]
        country: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Format a value the way the dashboard does
    Format {
        /// Formatter to apply
        kind: FormatKind,
        /// Value to format
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatKind {
    Money,
    Percent,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => with_bootstrap_logging(Config::load_default),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Countries => {
            let store = DataStore::from_config(&config.data);
            let countries = store.countries()?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&*countries)?);
            } else if countries.is_empty() {
                println!("No countries in {}", store.countries_path().display());
            } else {
                println!(
                    "{:<24} {:<6} {:>15} {:>12} {:>10}",
                    "Name", "Flag", "Population", "GDP", "Score"
                );
                println!("{}", "-".repeat(71));
                for country in countries.iter() {
                    println!(
                        "{:<24} {:<6} {:>15} {:>12} {:>10}",
                        country.name,
                        country.flag_code().unwrap_or("-"),
                        format_count(country.population),
                        format_money(Some(country.gdp_usd)),
                        format_score(country.feasibility_score)
                    );
                }
            }
        }

        Commands::Render { country, output } => {
            let store = DataStore::from_config(&config.data);
            let client = FlagCdnClient::new(&config.flags)?;
            let flags = FlagResolver::new(Arc::new(client), config.assets.flags_dir())
                .cache_failures(config.flags.cache_failures);

            let mut router = ViewRouter::new();
            if let Some(name) = country.as_deref() {
                if store.country(name)?.is_none() {
                    bail!("Country '{}' not found in {}", name, store.countries_path().display());
                }
                router.select(name);
            }

            let ctx = ViewContext {
                store: &store,
                flags: &flags,
                assets: &config.assets,
            };
            let html = router.render(&ctx).await?.to_html();

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Page written to: {:?}", path);
                }
                None => println!("{}", html),
            }
        }

        Commands::Format { kind, value } => {
            let text = match kind {
                FormatKind::Money => format_money(Some(value)),
                FormatKind::Percent => format_percent(Some(value)),
            };
            println!("{}", text);
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &config)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Config written to: {:?}", path);
            } else {
                println!("{}", config);
            }
        }
    }

    Ok(())
}
