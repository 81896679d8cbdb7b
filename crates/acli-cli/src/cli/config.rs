//! The `config` command group - persistent key/value settings.
//!
//! Settings live in a single JSON file, `~/.acli_config.json` by default
//! or wherever `ACLI_CONFIG_PATH` points. The environment is read here
//! and passed into the core path resolver, which stays pure.

use acli_core::{paths, ConfigStore};
use clap::Subcommand;
use std::env;

use super::prompt;
use crate::ui::{StyledOutput, Table};

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,
        /// Configuration value to set (will prompt if not provided)
        value: Option<String>,
    },
    /// Retrieve a configuration value
    Get {
        /// Configuration key to retrieve
        key: String,
    },
    /// Display all configuration values in a formatted table
    List,
    /// Reset configuration to default values
    Reset,
}

/// Build the store over the resolved file path, honoring the
/// `ACLI_CONFIG_PATH` override when set.
fn store_from_env() -> ConfigStore {
    let override_path = env::var(paths::CONFIG_PATH_ENV).ok();
    ConfigStore::new(paths::resolve(override_path.as_deref()))
}

/// Dispatch a `config` subcommand.
pub fn run(command: ConfigCommand, verbose: bool) -> Result<(), String> {
    let store = store_from_env();
    let out = StyledOutput::default_theme();

    if verbose {
        eprintln!(
            "[verbose] Using configuration file {}",
            store.path().display()
        );
    }

    match command {
        ConfigCommand::Set { key, value } => set(&store, &out, &key, value),
        ConfigCommand::Get { key } => get(&store, &out, &key),
        ConfigCommand::List => list(&store, &out),
        ConfigCommand::Reset => reset(&store, &out),
    }
}

/// Set a key, prompting for the value when it was not given on the
/// command line. The raw text is coerced to bool, int, float, or string.
fn set(
    store: &ConfigStore,
    out: &StyledOutput,
    key: &str,
    value: Option<String>,
) -> Result<(), String> {
    let raw = match value {
        Some(v) => v,
        None => prompt::read_value(key).map_err(|e| e.to_string())?,
    };

    let coerced = store.set(key, &raw).map_err(|e| e.to_string())?;

    out.success(&format!(
        "Configuration saved to {}",
        store.path().display()
    ));
    out.success(&format!("Set {} = {}", key, coerced));
    Ok(())
}

/// Print the value of a single key.
fn get(store: &ConfigStore, out: &StyledOutput, key: &str) -> Result<(), String> {
    let value = store.get(key).map_err(|e| e.to_string())?;
    out.plain(&format!("{} = {}", key, value));
    Ok(())
}

/// Render every setting as a Key / Value / Type table, sorted by key.
fn list(store: &ConfigStore, out: &StyledOutput) -> Result<(), String> {
    let config = store.list().map_err(|e| e.to_string())?;

    if config.is_empty() {
        out.warning("No configuration settings found.");
        return Ok(());
    }

    let mut table = Table::new("Configuration Settings", &["Key", "Value", "Type"]);
    for (key, value) in &config {
        table.add_row(&[
            key.clone(),
            value.to_string(),
            value.type_name().to_string(),
        ]);
    }
    out.plain(&table.render());
    Ok(())
}

/// Reset to defaults after a confirmation prompt. Declining is a normal,
/// successful outcome.
fn reset(store: &ConfigStore, out: &StyledOutput) -> Result<(), String> {
    let confirmed =
        prompt::confirm("Are you sure you want to reset all configuration to defaults?")
            .map_err(|e| e.to_string())?;

    if !confirmed {
        out.warning("Reset cancelled.");
        return Ok(());
    }

    store.reset().map_err(|e| e.to_string())?;
    out.success(&format!(
        "Configuration saved to {}",
        store.path().display()
    ));
    out.success("Configuration reset to defaults.");
    Ok(())
}
