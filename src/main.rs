//! Crafting Profit Calculator
//!
//! Prices crafting recipes against marketplace sell prices, in Portuguese,
//! English, Spanish or Polish.

mod calculator;
mod catalog;
mod db;
mod error;
mod formatter;
mod input;
mod locales;
mod models;
mod sample;
mod session;
mod translator;
mod view;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

use crate::locales::Language;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "craft-profit")]
#[command(about = "Crafting profitability calculator for marketplace recipes")]
struct Cli {
    /// Directory holding recipes.json, items.json and locales/
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Path to the SQLite preference database
    #[arg(long, default_value = "craft_prefs.db")]
    database: PathBuf,

    /// Language for this run only (pt, en, es, pl)
    #[arg(short, long)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all recipes
    Recipes,

    /// Price a batch of one recipe
    Price {
        /// Recipe position, label key or short name (e.g. "2", "sword")
        recipe: String,

        /// Number of units to craft (clamped to 1..=100)
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        qty: String,

        /// Sell price per unit
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        price: String,
    },

    /// Show the saved language, or switch to and save a new one
    Lang {
        /// Language code (pt, en, es, pl)
        code: Option<String>,
    },

    /// List locale files available in the data directory
    Languages,

    /// Initialize empty preference database
    Init,

    /// Write sample data into the data directory
    LoadSample,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Save `target` as the language, loading only the target locale.
///
/// Returns `false` when `target` is already the saved language.
fn change_language(conn: &Connection, data_dir: &Path, target: Language) -> Result<bool> {
    if db::load_language(conn)? == target {
        return Ok(false);
    }

    let session = Session::start(data_dir, target)?;
    if let Some(active) = session.language() {
        db::store_language(conn, active)?;
    }
    Ok(true)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let conn = Connection::open(&cli.database)?;
    db::init_schema(&conn)?;

    let language = match &cli.lang {
        Some(code) => Language::parse(code)?,
        None => db::load_language(&conn)?,
    };

    match cli.command {
        Commands::Recipes => {
            let session = Session::start(&cli.data_dir, language)?;
            println!("{}\n", session.title());
            let entries = session.recipe_list();
            if entries.is_empty() {
                println!("No recipes in {}. Run 'load-sample' first.", cli.data_dir.display());
            }
            for entry in entries {
                println!("{}", entry);
            }
        }

        Commands::Price { recipe, qty, price } => {
            let mut session = Session::start(&cli.data_dir, language)?;
            session.select_recipe(&recipe)?;
            if let Some(panel) = session.panel(&qty, &price) {
                print!("{}", panel);
            }
        }

        Commands::Lang { code: None } => {
            println!("{}", db::load_language(&conn)?);
        }

        Commands::Lang { code: Some(code) } => {
            let target = Language::parse(&code)?;
            if change_language(&conn, &cli.data_dir, target)? {
                println!("Language set to {} ({})", target, target.locale_tag().as_str());
            } else {
                println!("Language already {}", target);
            }
        }

        Commands::Languages => {
            let found = locales::discover(&cli.data_dir)?;
            if found.is_empty() {
                println!("No locale files in {}. Run 'load-sample' first.", cli.data_dir.display());
            }
            for lang in found {
                let marker = if lang == language { "*" } else { " " };
                println!("{} {} {}", marker, lang, lang.locale_tag().as_str());
            }
        }

        Commands::Init => {
            println!("Database initialized at: {}", cli.database.display());
        }

        Commands::LoadSample => {
            sample::write_sample_data(&cli.data_dir)?;
            println!("Sample data written to {}", cli.data_dir.display());
        }
    }

    Ok(())
}
