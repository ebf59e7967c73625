//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navchrome/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{BarStyleKind, ContainerStyleKind};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavChromeConfig {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppearanceConfig {
    pub bar_style: Option<BarStyleKind>,
    pub container_style: Option<ContainerStyleKind>,
    pub accent_color: Option<String>,
    pub menu_item: Option<String>,
    pub trailing_item: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PresentationConfig {
    pub popover_max_height: Option<u16>,
    pub dim_overlay: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ACCENT_COLOR: Color = Color::Black;
pub const DEFAULT_POPOVER_MAX_HEIGHT: u16 = 12;
pub const DEFAULT_MENU_ITEM: &str = "≡";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub bar_style: BarStyleKind,
    pub container_style: ContainerStyleKind,
    pub accent_color: Color,
    pub menu_item: Option<String>,
    pub trailing_item: Option<String>,
    pub popover_max_height: u16,
    pub dim_overlay: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&NavChromeConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line. `None` = flag not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub bar_style: Option<BarStyleKind>,
    pub container_style: Option<ContainerStyleKind>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.navchrome/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navchrome").join("config.toml"))
}

/// Load config from `~/.navchrome/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavChromeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NavChromeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavChromeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NavChromeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<NavChromeConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# navchrome configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [appearance]
# bar_style = "default"          # "default" or "accent"  (NAVCHROME_BAR_STYLE)
# container_style = "stacked"    # "stacked" or "overlay" (NAVCHROME_CONTAINER_STYLE)
# accent_color = "black"         # color name or "#rrggbb" (NAVCHROME_ACCENT_COLOR)
# menu_item = "≡"                # shown by the accent style when there is no back item
# trailing_item = ""

# [presentation]
# popover_max_height = 12        # rows
# dim_overlay = true
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NavChromeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

fn resolve_with_env(
    config: &NavChromeConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let appearance = &config.appearance;

    // Bar style: CLI → env → config → default
    let bar_style = cli
        .bar_style
        .or_else(|| env_enum(&env, "NAVCHROME_BAR_STYLE"))
        .or(appearance.bar_style)
        .unwrap_or_default();

    // Container style: CLI → env → config → default
    let container_style = cli
        .container_style
        .or_else(|| env_enum(&env, "NAVCHROME_CONTAINER_STYLE"))
        .or(appearance.container_style)
        .unwrap_or_default();

    // Accent color: env → config → default
    let accent_color = env("NAVCHROME_ACCENT_COLOR")
        .or_else(|| appearance.accent_color.clone())
        .map(|raw| parse_color(&raw))
        .unwrap_or(DEFAULT_ACCENT_COLOR);

    let menu_item = appearance
        .menu_item
        .clone()
        .or_else(|| Some(DEFAULT_MENU_ITEM.to_string()))
        .filter(|item| !item.is_empty());

    ResolvedConfig {
        bar_style,
        container_style,
        accent_color,
        menu_item,
        trailing_item: appearance.trailing_item.clone().filter(|item| !item.is_empty()),
        popover_max_height: config
            .presentation
            .popover_max_height
            .unwrap_or(DEFAULT_POPOVER_MAX_HEIGHT)
            .max(1),
        dim_overlay: config.presentation.dim_overlay.unwrap_or(true),
    }
}

fn env_enum<T: clap::ValueEnum>(env: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = env(name)?;
    match T::from_str(&raw, true) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", name, raw, e);
            None
        }
    }
}

fn parse_color(raw: &str) -> Color {
    Color::from_str(raw).unwrap_or_else(|_| {
        warn!("Unrecognized color {:?}, using default accent", raw);
        DEFAULT_ACCENT_COLOR
    })
}
