use serde::Serialize;

use crate::command::domain::command_runner::CommandRunner;
use crate::command::infrastructure::system_command_runner::SystemCommandRunner;
use crate::probe::linux::{self, DesktopEnvironment};
use crate::probe::{macos, windows};
use crate::shared::platform_kind::PlatformKind;

/// Point-in-time summary of what the probe saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeReport {
    pub platform: PlatformKind,
    /// Detected desktop environments; always empty off Linux.
    pub desktops: Vec<DesktopEnvironment>,
    pub dark: bool,
}

/// Answers "is the OS using a dark theme?" by querying system utilities.
///
/// Nothing is cached: every call re-derives the platform and re-runs the
/// commands, so results follow live system state.
pub struct ThemeProbe {
    runner: Box<dyn CommandRunner>,
    os_name: Option<String>,
}

impl ThemeProbe {
    /// Probe backed by real subprocesses on the running OS.
    pub fn new() -> Self {
        Self::with_runner(Box::new(SystemCommandRunner::new()))
    }

    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            os_name: None,
        }
    }

    /// Classify the platform from `os_name` instead of the build target.
    pub fn with_os_name(mut self, os_name: impl Into<String>) -> Self {
        self.os_name = Some(os_name.into());
        self
    }

    pub fn platform(&self) -> PlatformKind {
        match &self.os_name {
            Some(name) => PlatformKind::from_os_name(name),
            None => PlatformKind::current(),
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        let platform = self.platform();
        let runner = self.runner.as_ref();
        let dark = match platform {
            PlatformKind::Windows => windows::is_dark_mode(runner),
            PlatformKind::MacOS => macos::is_dark_mode(runner),
            PlatformKind::Linux => linux::is_dark_mode(runner),
            PlatformKind::Unknown => false,
        };
        log::debug!("{platform} dark mode: {dark}");
        dark
    }

    /// Desktop environments detected on Linux; empty elsewhere.
    pub fn desktops(&self) -> Vec<DesktopEnvironment> {
        match self.platform() {
            PlatformKind::Linux => linux::detect_desktops(self.runner.as_ref()),
            _ => Vec::new(),
        }
    }

    pub fn report(&self) -> ThemeReport {
        ThemeReport {
            platform: self.platform(),
            desktops: self.desktops(),
            dark: self.is_dark_mode(),
        }
    }
}

impl Default for ThemeProbe {
    fn default() -> Self {
        Self::new()
    }
}
