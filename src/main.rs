//! Command line lookup of site translations.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use site_i18n::config::ConfigManager;
use site_i18n::{
    LocaleResolver,
    TranslationStore,
    Translator,
};
use tracing_subscriber::EnvFilter;

/// Resolve the locale of a page and print its translations.
#[derive(Debug, Parser)]
#[command(name = "site-i18n", version, about)]
struct Cli {
    /// Site root containing `.site-i18n.json`
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// List keys that the resolved locale lacks
    #[arg(long)]
    missing: bool,

    /// Page path, e.g. `/nl/about`
    path: String,

    /// Translation keys to look up
    keys: Vec<String>,
}

/// Entry point.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run(&Cli::parse(), &mut std::io::stdout().lock())
}

/// Prints the resolved locale, then one `key = value` line per key, then
/// `missing: <key>` lines when `--missing` is set.
fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let mut config_manager = ConfigManager::new();
    config_manager
        .load_settings(Some(cli.root.clone()))
        .with_context(|| format!("Failed to load settings from {}", cli.root.display()))?;
    tracing::debug!(site_root = ?config_manager.site_root(), "Using site root");

    let store = match config_manager.translations_dir() {
        Some(dir) => TranslationStore::load_from_dir(&dir)?,
        None => TranslationStore::bundled()?,
    };

    let settings = config_manager.get_settings();
    let locale = LocaleResolver::from_settings(settings).resolve(cli.path.as_str());
    tracing::debug!(path = %cli.path, %locale, "Resolved locale");

    writeln!(out, "{locale} ({})", locale.display_name())?;

    let translator = Translator::from_settings(&store, locale, settings);
    for key in &cli.keys {
        writeln!(out, "{key} = {}", translator.t(key))?;
    }

    if cli.missing {
        for key in store.missing_keys(locale, &settings.key_separator) {
            writeln!(out, "missing: {key}")?;
        }
    }

    Ok(())
}
