//! craftdex - Extract crafting data and item icons from a Minecraft client jar
//!
//! This tool scans the client jar for crafting recipes, item-tag groups,
//! textures and the localization table, resolves an icon for every item any
//! recipe touches, and writes three static JSON files for a downstream
//! recipe browser.

use anyhow::{bail, Context, Result};
use clap::Parser;
use craftdex_core::Pipeline;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Default client jar location inside a MultiMC installation, relative to
/// the user's home directory
const DEFAULT_JAR_SUFFIX: &str =
    ".local/share/multimc/libraries/com/mojang/minecraft/1.18.1/minecraft-1.18.1-client.jar";

/// Extract crafting recipes, item tags and icons from a Minecraft client jar
#[derive(Parser, Debug)]
#[command(name = "craftdex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the client jar (defaults to the MultiMC library location)
    jar: Option<PathBuf>,

    /// Output directory for the three JSON files
    #[arg(short, long, default_value = "static")]
    output: PathBuf,

    /// Working directory for extracted textures
    #[arg(short, long, default_value = "tmp")]
    workdir: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    let jar = match cli.jar {
        Some(path) => path,
        None => default_jar_path().context("cannot determine the default jar path")?,
    };
    if !jar.is_file() {
        bail!("client jar not found: {}", jar.display());
    }

    let pipeline = Pipeline::new(&jar, &cli.output, &cli.workdir);
    let summary = pipeline
        .run()
        .with_context(|| format!("extraction from {} failed", jar.display()))?;

    info!(
        "done: {} recipes, {} tags, {} items ({} textures extracted)",
        summary.recipes, summary.tags, summary.items, summary.textures
    );
    Ok(())
}

/// Resolves the default MultiMC client jar path under the home directory
fn default_jar_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_JAR_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_jar_path_is_absolute() {
        if let Some(path) = default_jar_path() {
            assert!(path.is_absolute());
            assert!(path.ends_with(DEFAULT_JAR_SUFFIX));
        }
    }
}
