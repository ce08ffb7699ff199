use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::probe::theme_probe::ThemeProbe;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown appearance `{0}` (expected system, dark or light)")]
pub struct ParseAppearanceError(String);

/// A stored theme preference. `System` follows the OS setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    System,
    Dark,
    Light,
}

impl Appearance {
    pub const ALL: &[Appearance] = &[Appearance::System, Appearance::Dark, Appearance::Light];

    /// Whether to present the dark variant; only `System` consults the probe.
    pub fn resolve_dark(self, probe: &ThemeProbe) -> bool {
        match self {
            Appearance::System => probe.is_dark_mode(),
            _ => self.apply(false),
        }
    }

    /// Like [`Appearance::resolve_dark`], for an already-probed system value.
    pub fn apply(self, system_dark: bool) -> bool {
        match self {
            Appearance::Dark => true,
            Appearance::Light => false,
            Appearance::System => system_dark,
        }
    }
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Appearance::System => write!(f, "system"),
            Appearance::Dark => write!(f, "dark"),
            Appearance::Light => write!(f, "light"),
        }
    }
}

impl std::str::FromStr for Appearance {
    type Err = ParseAppearanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Appearance::ALL
            .iter()
            .copied()
            .find(|a| a.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAppearanceError(s.to_string()))
    }
}
