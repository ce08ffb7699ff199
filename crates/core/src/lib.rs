//! Detects whether the host operating system is using a dark UI theme.
//!
//! Detection shells out to the platform's own settings utilities (`reg`,
//! `defaults`, `gsettings`, `lookandfeeltool`) and pattern-matches their
//! output. All process access goes through [`CommandRunner`], so the
//! decision logic can be driven by canned outputs.

pub mod command;
pub mod probe;
pub mod shared;

pub use command::domain::command_runner::{CommandError, CommandRunner};
pub use command::infrastructure::system_command_runner::SystemCommandRunner;
pub use probe::appearance::{Appearance, ParseAppearanceError};
pub use probe::linux::DesktopEnvironment;
pub use probe::theme_probe::{ThemeProbe, ThemeReport};
pub use shared::platform_kind::PlatformKind;

/// Returns `true` if the live system reports a dark UI theme.
///
/// Best effort: any failure to query the system reads as "not dark".
pub fn is_dark_mode() -> bool {
    ThemeProbe::new().is_dark_mode()
}
