#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod direction;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anatomy_core::{CoverageReport, Explorer, Language, SystemCatalog, TranslationTable};
use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Explorer built from the command line, handed to the root component
static INITIAL_EXPLORER: OnceLock<Explorer> = OnceLock::new();

/// Get the explorer the app starts with (embedded content if unset)
pub fn initial_explorer() -> Explorer {
    INITIAL_EXPLORER.get().cloned().unwrap_or_else(|| {
        tracing::error!("Explorer content was not loaded before launch");
        Explorer::default()
    })
}

/// Human Biology Explorer - interactive anatomy
#[derive(Parser, Debug)]
#[command(name = "anatomy-explorer")]
#[command(about = "Human Biology Explorer - interactive bilingual anatomy")]
struct Args {
    /// Initial language (en or ar)
    #[arg(short, long, default_value = "en")]
    lang: Language,

    /// Translation table JSON (default: embedded table)
    #[arg(long)]
    translations: Option<PathBuf>,

    /// System catalog JSON (default: embedded catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_content(args: &Args) -> Result<(TranslationTable, SystemCatalog)> {
    let translations = match &args.translations {
        Some(path) => TranslationTable::from_path(path)
            .with_context(|| format!("Failed to load translations from {}", path.display()))?,
        None => TranslationTable::builtin().context("Embedded translations are invalid")?,
    };
    let catalog = match &args.catalog {
        Some(path) => SystemCatalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => SystemCatalog::builtin().context("Embedded catalog is invalid")?,
    };
    Ok((translations, catalog))
}

fn main() -> Result<()> {
    let args = Args::parse();
    anatomy_core::logging::init(args.verbose.max(1));

    let (translations, catalog) = load_content(&args)?;

    // Missing keys only degrade to raw keys on screen; report them while developing
    if cfg!(debug_assertions) {
        let issues = CoverageReport::check(&translations, &catalog).log();
        if issues > 0 {
            tracing::warn!("{} translation coverage issue(s), raw keys will be shown", issues);
        }
    }

    tracing::info!(
        "Starting with {} systems, language '{}'",
        catalog.len(),
        args.lang
    );

    let explorer = Explorer::new(Arc::new(translations), Arc::new(catalog), args.lang);
    let _ = INITIAL_EXPLORER.set(explorer);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Human Biology Explorer")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
