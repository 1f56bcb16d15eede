//! config command - Get, set, or list configuration values

use crate::controller::Context;
use crate::core::config::{Config, FileConfig};
use anyhow::{Context as _, Result};

/// Get a configuration value, defaults applied.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load(ctx.config.as_deref()).context("Failed to load config")?;
    println!("{}", config.value(key)?);
    Ok(())
}

/// Set a configuration value.
///
/// Writes to `--config` if given (creating it if needed), otherwise to the
/// file the config was loaded from, otherwise `~/.shoestock/config.toml`.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let (mut file, path) = match &ctx.config {
        Some(path) if !path.exists() => (FileConfig::default(), path.clone()),
        _ => {
            let config = Config::load(ctx.config.as_deref()).context("Failed to load config")?;
            let path = config.write_path()?;
            (config.file, path)
        }
    };

    file.set(key, value)?;
    Config::write(&path, &file).context("Failed to write config")?;

    if !ctx.quiet {
        println!("Set {} = {}", key, value);
    }
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let config = Config::load(ctx.config.as_deref()).context("Failed to load config")?;

    println!("# Shoe inventory configuration");
    match config.loaded_from() {
        Some(path) => println!("# loaded from {}", path.display()),
        None => println!("# no config file, using defaults"),
    }
    for key in FileConfig::KEYS {
        println!("{} = {}", key, config.value(key)?);
    }
    Ok(())
}
