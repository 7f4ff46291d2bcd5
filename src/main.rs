//! Talks Catalog - bilingual talks and presentations catalog
//!
//! Entry point for the `talks` binary. Handles CLI argument parsing,
//! logging initialization, and dispatching to the library.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use talks_catalog::audit;
use talks_catalog::config::Config;
use talks_catalog::migrate;
use talks_catalog::preferences::{JsonPreferenceStore, PreferenceStore};
use talks_catalog::source::{DataSource, TalkSource};
use talks_catalog::state::{FilterMessage, Message, Route};
use talks_catalog::summary::ResultSummary;
use talks_catalog::{Catalog, Lang};

#[derive(Parser)]
#[command(name = "talks")]
#[command(version)]
#[command(about = "Bilingual talks and presentations catalog")]
#[command(long_about = None)]
struct Cli {
    /// Talk data file or http(s) URL
    #[arg(long, global = true, value_name = "PATH|URL")]
    data: Option<String>,

    /// Render in this language without changing the saved preference
    #[arg(long, global = true, value_enum)]
    lang: Option<LangArg>,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the filtered talk list
    List {
        /// Only talks from this year
        #[arg(long)]
        year: Option<String>,

        /// Only talks delivered in this language (Spanish, English)
        #[arg(long)]
        talk_language: Option<String>,

        /// Only talks of this type (talk, workshop, podcast, panel)
        #[arg(long = "type")]
        talk_type: Option<String>,

        /// Only core talks
        #[arg(long)]
        core: bool,

        /// Free text search
        #[arg(short, long)]
        search: Option<String>,

        /// Print the results summary instead of the page
        #[arg(long)]
        summary_only: bool,
    },

    /// Render the detail page of one talk
    Detail {
        /// Talk identifier, e.g. 2024-madrid
        #[arg(value_name = "ID")]
        id: Option<String>,
    },

    /// Show or change the preferred language
    Lang {
        #[arg(value_enum, value_name = "LANG")]
        language: Option<LangArg>,
    },

    /// Report missing Spanish translations
    Audit,

    /// Print the effective configuration
    Config {
        /// Write the effective configuration, including --data, to config.json
        #[arg(long)]
        save: bool,
    },

    /// Convert legacy single-language data to the bilingual layout
    Migrate {
        #[arg(value_name = "IN")]
        input: PathBuf,

        #[arg(value_name = "OUT")]
        destination: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    Es,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Es => Lang::Es,
            LangArg::En => Lang::En,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = Config::load().unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        Config::default()
    });
    if let Some(data) = &cli.data {
        config.data.source = data.clone();
    }

    match cli.command {
        Commands::List {
            year,
            talk_language,
            talk_type,
            core,
            search,
            summary_only,
        } => {
            let messages = [
                FilterMessage::Year(year),
                FilterMessage::TalkLanguage(talk_language),
                FilterMessage::Type(talk_type),
                FilterMessage::CoreOnly(core),
                FilterMessage::Search(search.unwrap_or_default()),
            ];

            let mut catalog = open_catalog(config, cli.lang, Route::List)?;
            let source = source_for(&catalog.config);
            let loaded = catalog.load(&source).await;
            for msg in messages {
                catalog.dispatch(Message::Filter(msg));
            }

            let output = if summary_only {
                let state = catalog.state();
                format!(
                    "{}\n",
                    ResultSummary::from_talks(state.visible_talks()).render(state.lang)
                )
            } else {
                catalog.render()
            };
            write_output(cli.output.as_deref(), &output)?;
            exit_on_load_failure(loaded);
        }
        Commands::Detail { id } => {
            let mut catalog = open_catalog(config, cli.lang, Route::Detail(id))?;
            let source = source_for(&catalog.config);
            let loaded = catalog.load(&source).await;
            write_output(cli.output.as_deref(), &catalog.render())?;
            exit_on_load_failure(loaded);
        }
        Commands::Lang { language } => {
            let mut store = JsonPreferenceStore::in_config_dir()?;
            match language {
                Some(lang) => {
                    let lang = Lang::from(lang);
                    store.set(lang).with_context(|| {
                        format!("Could not save preference to {}", store.path().display())
                    })?;
                    log::info!("Preferred language set to '{}'", lang);
                    println!("{}", lang);
                }
                None => println!("{}", store.get()),
            }
        }
        Commands::Audit => {
            let source = source_for(&config);
            let talks = source.fetch().await.map_err(|e| {
                log::error!("Failed to load talks from {}: {}", source.describe(), e);
                anyhow::anyhow!(e.user_message())
            })?;
            write_output(cli.output.as_deref(), &audit::audit(&talks).to_string())?;
        }
        Commands::Config { save } => {
            if save {
                let path = config.save()?;
                println!("Configuration saved to {}", path.display());
            } else {
                let json = serde_json::to_string_pretty(&config)?;
                write_output(cli.output.as_deref(), &format!("{}\n", json))?;
            }
        }
        Commands::Migrate { input, destination } => {
            let count = migrate::migrate_file(&input, &destination)?;
            println!("Migrated {} talks", count);
            println!("   Input:  {}", input.display());
            println!("   Output: {}", destination.display());
        }
    }

    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,talks_catalog=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

fn open_catalog(
    config: Config,
    lang: Option<LangArg>,
    route: Route,
) -> Result<Catalog<JsonPreferenceStore>> {
    let store = JsonPreferenceStore::in_config_dir()?;
    let mut catalog = Catalog::new(store, config).with_route(route);
    if let Some(lang) = lang {
        catalog.override_language(lang.into());
    }
    Ok(catalog)
}

fn source_for(config: &Config) -> DataSource {
    DataSource::from_location(&config.data.source)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Could not write {}", path.display())),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

/// The error page has already been written; report and exit non-zero
fn exit_on_load_failure(loaded: talks_catalog::error::LoadResult<()>) {
    if let Err(e) = loaded {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}
