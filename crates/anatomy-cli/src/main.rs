//! Anatomy Explorer CLI
//!
//! Thin wrapper around anatomy-core for inspecting and validating the
//! explorer's translation table and system catalog.
//!
//! ## Usage
//!
//! ```bash
//! # List the systems in the catalog
//! anatomy systems
//!
//! # Show the detail panel for a system, in Arabic
//! anatomy --lang ar show heart
//!
//! # Resolve a single translation key
//! anatomy translate skeleton_desc
//!
//! # List every key of a language
//! anatomy keys
//!
//! # Check translation coverage (non-zero exit on problems)
//! anatomy --translations ./my-translations.json check
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anatomy_core::{
    CoverageReport, Explorer, Language, PanelView, SystemCatalog, TranslationTable,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

/// Anatomy Explorer - content inspection
#[derive(Parser)]
#[command(name = "anatomy")]
#[command(version = "0.1.0")]
#[command(about = "Anatomy Explorer - inspect and validate explorer content")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Display language (en or ar)
    #[arg(short, long, global = true, default_value = "en")]
    lang: Language,

    /// Translation table JSON (default: embedded table)
    #[arg(long, global = true)]
    translations: Option<PathBuf>,

    /// System catalog JSON (default: embedded catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List systems in catalog order
    Systems,

    /// Show the resolved detail panel for a system
    Show {
        /// System identifier (e.g. heart)
        id: String,
    },

    /// Resolve a translation key (prints the key itself when missing)
    Translate {
        /// Translation key
        key: String,
    },

    /// List every key defined for the selected language
    Keys,

    /// Check that both languages define the same keys and that every
    /// catalog key resolves
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    anatomy_core::logging::init(cli.verbose);

    let explorer = load_explorer(&cli)?;

    match cli.command {
        Commands::Systems => cmd_systems(&explorer),
        Commands::Show { id } => cmd_show(explorer, &id),
        Commands::Translate { key } => cmd_translate(&explorer, &key),
        Commands::Keys => cmd_keys(&explorer),
        Commands::Check => cmd_check(&explorer),
    }
}

fn load_explorer(cli: &Cli) -> Result<Explorer> {
    let translations = match &cli.translations {
        Some(path) => TranslationTable::from_path(path)
            .with_context(|| format!("Failed to load translations from {}", path.display()))?,
        None => TranslationTable::builtin().context("Embedded translations are invalid")?,
    };
    let catalog = match &cli.catalog {
        Some(path) => SystemCatalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => SystemCatalog::builtin().context("Embedded catalog is invalid")?,
    };
    tracing::debug!(
        systems = catalog.len(),
        keys = translations.len(cli.lang),
        "content loaded"
    );
    Ok(Explorer::new(Arc::new(translations), Arc::new(catalog), cli.lang))
}

fn cmd_systems(explorer: &Explorer) -> Result<()> {
    let cards = explorer.overview();
    println!("Systems ({}):", cards.len());
    for card in cards {
        println!("  {:<12} {}", card.id, card.title);
    }
    Ok(())
}

fn cmd_show(mut explorer: Explorer, id: &str) -> Result<()> {
    explorer.select(id);
    let Some(panel) = explorer.panel() else {
        bail!("Unknown system: {}", id);
    };
    print_panel(&panel);
    Ok(())
}

fn print_panel(panel: &PanelView) {
    println!("{}", panel.title);
    println!("  ID: {}", panel.id);
    println!("  Direction: {}", panel.direction);
    println!("  Image: {}", panel.image);
    if let Some(secondary) = &panel.secondary_image {
        println!("  Secondary image: {}", secondary);
    }
    println!();
    println!("{}", panel.description);
    if let Some(facts) = &panel.facts {
        println!();
        println!("{}", facts);
    }

    if !panel.cells.is_empty() {
        println!();
        println!("{}:", panel.cell_types_heading);
        for cell in &panel.cells {
            println!("  - {}: {}", cell.name, cell.description);
        }
    }

    for section in &panel.sections {
        println!();
        println!("{}:", section.title);
        for item in &section.items {
            if section.show_item_names {
                println!("  - {}: {}", item.name, item.description);
            } else {
                println!("  {}", item.description);
            }
        }
    }

    if let Some(animation) = panel.animation {
        println!();
        println!("Animation: {:?} ({} phases)", animation, animation.phases().len());
    }
}

fn cmd_translate(explorer: &Explorer, key: &str) -> Result<()> {
    println!("{}", explorer.t(key));
    Ok(())
}

fn cmd_keys(explorer: &Explorer) -> Result<()> {
    for key in explorer.translations().keys(explorer.language()) {
        println!("{}", key);
    }
    Ok(())
}

fn cmd_check(explorer: &Explorer) -> Result<()> {
    let report = CoverageReport::check(explorer.translations(), explorer.catalog());
    if report.is_clean() {
        println!(
            "OK: {} systems, {} keys per language",
            explorer.catalog().len(),
            explorer.translations().len(Language::English)
        );
        return Ok(());
    }

    for issue in &report.issues {
        println!("  {}", issue);
    }
    bail!("{} coverage issue(s) found", report.issues.len());
}
