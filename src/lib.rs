//! navchrome library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which navigation bar layout to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarStyleKind {
    /// Back chevron, centered title, subtitle beneath.
    #[default]
    Default,
    /// Fixed-width item groups, menu item, accent tint fallback.
    Accent,
}

/// How the navigation bar and content share the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStyleKind {
    /// Bar above content.
    #[default]
    Stacked,
    /// Content fills the screen, bar drawn over its top rows.
    Overlay,
}
