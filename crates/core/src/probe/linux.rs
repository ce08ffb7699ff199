use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::command::domain::command_runner::{query, query_contains, CommandRunner};
use crate::shared::constants::{
    CURRENT_DESKTOP_QUERY, DARK_THEME_PATTERN, GNOME_DATA_DIRS_QUERY, GNOME_PROCESS_QUERY,
    GNOME_THEME_QUERY, KDE_DATA_DIRS_QUERY, KDE_LOOK_AND_FEEL_FALLBACK_QUERY,
    KDE_LOOK_AND_FEEL_QUERY, KDE_PROCESS_QUERY,
};

/// Linux desktop environments whose theme settings can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesktopEnvironment {
    Gnome,
    Kde,
}

impl DesktopEnvironment {
    pub const ALL: &[DesktopEnvironment] = &[DesktopEnvironment::Gnome, DesktopEnvironment::Kde];

    /// Token looked for in the detection probes' output.
    fn token(self) -> &'static str {
        match self {
            DesktopEnvironment::Gnome => "gnome",
            DesktopEnvironment::Kde => "kde",
        }
    }

    /// Detection probes, tried in order until one mentions the token.
    fn probes(self) -> [&'static str; 3] {
        match self {
            DesktopEnvironment::Gnome => [
                CURRENT_DESKTOP_QUERY,
                GNOME_DATA_DIRS_QUERY,
                GNOME_PROCESS_QUERY,
            ],
            DesktopEnvironment::Kde => {
                [CURRENT_DESKTOP_QUERY, KDE_DATA_DIRS_QUERY, KDE_PROCESS_QUERY]
            }
        }
    }

    /// Heuristic: true if any probe's output contains the desktop's name.
    pub fn is_running(self, runner: &dyn CommandRunner) -> bool {
        self.probes()
            .iter()
            .any(|probe| query_contains(runner, probe, self.token()))
    }

    /// Whether this desktop's own settings name a dark theme.
    pub fn is_dark_theme(self, runner: &dyn CommandRunner) -> bool {
        match self {
            DesktopEnvironment::Gnome => is_gnome_dark_mode(runner),
            DesktopEnvironment::Kde => is_kde_dark_mode(runner),
        }
    }
}

impl std::fmt::Display for DesktopEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesktopEnvironment::Gnome => write!(f, "GNOME"),
            DesktopEnvironment::Kde => write!(f, "KDE"),
        }
    }
}

/// Dark if GNOME runs a dark GTK theme, else if KDE runs a dark look-and-feel.
pub fn is_dark_mode(runner: &dyn CommandRunner) -> bool {
    DesktopEnvironment::ALL
        .iter()
        .any(|de| de.is_running(runner) && de.is_dark_theme(runner))
}

pub fn is_gnome(runner: &dyn CommandRunner) -> bool {
    DesktopEnvironment::Gnome.is_running(runner)
}

pub fn is_kde(runner: &dyn CommandRunner) -> bool {
    DesktopEnvironment::Kde.is_running(runner)
}

/// Every desktop environment whose detection heuristic fires.
pub fn detect_desktops(runner: &dyn CommandRunner) -> Vec<DesktopEnvironment> {
    DesktopEnvironment::ALL
        .iter()
        .copied()
        .filter(|de| de.is_running(runner))
        .collect()
}

pub fn is_gnome_dark_mode(runner: &dyn CommandRunner) -> bool {
    matches_dark_theme(&query(runner, GNOME_THEME_QUERY))
}

/// Prefers `lookandfeeltool`; falls back to the KDE config file when it prints nothing.
pub fn is_kde_dark_mode(runner: &dyn CommandRunner) -> bool {
    let current = query(runner, KDE_LOOK_AND_FEEL_QUERY);
    let package = if current.is_empty() {
        query(runner, KDE_LOOK_AND_FEEL_FALLBACK_QUERY)
    } else {
        current
    };
    package.to_lowercase().contains("dark")
}

fn dark_theme_regex() -> &'static Regex {
    static DARK_THEME: OnceLock<Regex> = OnceLock::new();
    DARK_THEME.get_or_init(|| Regex::new(DARK_THEME_PATTERN).expect("dark theme pattern is valid"))
}

fn matches_dark_theme(theme: &str) -> bool {
    dark_theme_regex().is_match(theme)
}
