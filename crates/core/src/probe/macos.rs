use crate::command::domain::command_runner::{query, CommandRunner};
use crate::shared::constants::{MACOS_DARK_VALUE, MACOS_THEME_QUERY};

/// `AppleInterfaceStyle` is only set while dark mode is on, and then to exactly `Dark`.
pub fn is_dark_mode(runner: &dyn CommandRunner) -> bool {
    query(runner, MACOS_THEME_QUERY) == MACOS_DARK_VALUE
}
