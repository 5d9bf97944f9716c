//! Configuration for medialib paths and rendering.
//!
//! Configuration sources (highest priority first):
//! 1. CLI flags (--config, --output)
//! 2. Environment variables (MEDIALIB_CONFIG, MEDIALIB_OUTPUT), via clap
//! 3. Settings file (.medialib/settings.yaml)
//! 4. Defaults (config.json, output/index.html)
//!
//! Settings file discovery:
//! - Searches current directory and parents for .medialib/settings.yaml
//! - Paths in the settings file are relative to the directory holding .medialib/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::render::RenderOptions;

/// Directory searched for in the current directory and its parents
pub const SETTINGS_DIR: &str = ".medialib";

/// Settings file name inside [`SETTINGS_DIR`]
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Raw settings file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub paths: PathsSettings,
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsSettings {
    /// Input catalog (relative to the project root)
    pub input: Option<String>,
    /// Output page (relative to the project root)
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderSettings {
    pub image_base_url: Option<String>,
    pub page_title: Option<String>,
    pub heading: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub settings: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Path to settings file (if found)
    pub settings_file: Option<PathBuf>,
    pub render: RenderOptions,
}

impl std::fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "input:          {}", self.input.display())?;
        writeln!(f, "output:         {}", self.output.display())?;
        match &self.settings_file {
            Some(path) => writeln!(f, "settings file:  {}", path.display())?,
            None => writeln!(f, "settings file:  (none)")?,
        }
        writeln!(f, "image base url: {}", self.render.image_base_url)?;
        writeln!(f, "page title:     {}", self.render.page_title)?;
        write!(f, "heading:        {}", self.render.heading)
    }
}

/// Find settings file by searching current directory and parents
fn find_settings_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let path = current.join(SETTINGS_DIR).join(SETTINGS_FILE);
        if path.exists() {
            return Some(path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse settings file
fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    // An empty file is valid and means "all defaults"
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}

/// Directory that relative settings paths resolve against
fn settings_base_dir(settings_path: &Path) -> PathBuf {
    let parent = settings_path.parent().unwrap_or(Path::new("."));
    if parent.file_name().is_some_and(|name| name == SETTINGS_DIR) {
        parent.parent().unwrap_or(Path::new(".")).to_path_buf()
    } else {
        parent.to_path_buf()
    }
}

fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Resolve configuration from overrides, the settings file, and defaults
pub fn resolve(overrides: Overrides) -> Result<ResolvedConfig> {
    let settings_file = match overrides.settings.clone() {
        Some(path) => Some(path),
        None => find_settings_file(),
    };
    resolve_with(overrides, settings_file)
}

fn resolve_with(overrides: Overrides, settings_file: Option<PathBuf>) -> Result<ResolvedConfig> {
    let (settings, base_dir) = match settings_file {
        Some(ref path) => (load_settings_file(path)?, Some(settings_base_dir(path))),
        None => (SettingsFile::default(), None),
    };

    let from_settings = |value: &Option<String>| -> Option<PathBuf> {
        let value = value.as_deref()?;
        Some(match base_dir {
            Some(ref base) => resolve_path(base, value),
            None => PathBuf::from(value),
        })
    };

    let input = overrides
        .input
        .or_else(|| from_settings(&settings.paths.input))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    let output = overrides
        .output
        .or_else(|| from_settings(&settings.paths.output))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let defaults = RenderOptions::default();
    let render = RenderOptions {
        image_base_url: settings
            .render
            .image_base_url
            .unwrap_or(defaults.image_base_url),
        page_title: settings.render.page_title.unwrap_or(defaults.page_title),
        heading: settings.render.heading.unwrap_or(defaults.heading),
    };

    Ok(ResolvedConfig {
        input,
        output,
        settings_file,
        render,
    })
}
