//! Command-line interface for medialib.
//!
//! Provides commands for rendering the library page, listing the
//! classified catalog, and inspecting the resolved configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, Overrides, ResolvedConfig};
use crate::error::LibraryResult;
use crate::library::Catalog;
use crate::pipeline::generate;

/// medialib - Static HTML page for a movie and TV catalog
#[derive(Parser, Debug)]
#[command(name = "medialib")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input media catalog (JSON object of records)
    #[arg(long = "config", global = true, env = "MEDIALIB_CONFIG")]
    pub input: Option<PathBuf>,

    /// Output HTML file
    #[arg(long, global = true, env = "MEDIALIB_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Settings file (searched for as .medialib/settings.yaml if not given)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Render the catalog to an HTML page (default)
    Render,

    /// List catalog entries by category without writing anything
    List,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let config = config::resolve(Overrides {
            input: self.input,
            output: self.output,
            settings: self.settings,
        })?;

        match self.command.unwrap_or(Commands::Render) {
            Commands::Render => render(&config),
            Commands::List => list(&config),
            Commands::Config => {
                println!("{}", config);
                Ok(())
            }
        }
    }
}

fn render(config: &ResolvedConfig) -> Result<()> {
    let summary = generate(&config.input, &config.output, &config.render)
        .with_context(|| format!("Failed to generate library from {}", config.input.display()))?;

    println!("{}", summary);
    Ok(())
}

fn list(config: &ResolvedConfig) -> Result<()> {
    let catalog = Catalog::load(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;

    let lines = list_lines(&catalog)
        .with_context(|| format!("Failed to list {}", config.input.display()))?;
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

/// Lines printed by `medialib list`
pub fn list_lines(catalog: &Catalog) -> LibraryResult<Vec<String>> {
    let mut lines = vec![format!("Movies ({})", catalog.movies.len())];
    lines.extend(catalog.movies.iter().map(|movie| format!("  {}", movie.describe())));

    lines.push(String::new());
    lines.push(format!("TV Shows ({})", catalog.tv_shows.len()));
    for episode in &catalog.tv_shows {
        lines.push(format!("  {}", episode.describe()?));
    }

    if catalog.skipped > 0 {
        lines.push(String::new());
        lines.push(format!(
            "{} record(s) with unrecognized match_type skipped",
            catalog.skipped
        ));
    }

    Ok(lines)
}
