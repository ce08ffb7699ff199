use crate::command::domain::command_runner::{query, CommandRunner};
use crate::shared::constants::{REG_DWORD_TOKEN, WINDOWS_THEME_QUERY};

/// Reads `AppsUseLightTheme` from the current user's personalization key.
///
/// DWORD 0 means apps use the dark theme; anything else, or no readable
/// value, counts as light.
pub fn is_dark_mode(runner: &dyn CommandRunner) -> bool {
    let output = query(runner, WINDOWS_THEME_QUERY);
    apps_use_light_theme(&output) == Some(0)
}

/// Extracts the hexadecimal value following `REG_DWORD` in `reg query` output.
///
/// The two characters after the token (normally `0x`) are skipped without
/// being checked.
pub fn apps_use_light_theme(output: &str) -> Option<i32> {
    let p = output.find(REG_DWORD_TOKEN)?;
    let value = output[p + REG_DWORD_TOKEN.len()..].trim();
    let digits = value.get(2..)?;
    i32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::test_support::CannedRunner;
    use rstest::rstest;

    const REG_OUTPUT_DARK: &str = "HKEY_CURRENT_USER\\Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize\n    AppsUseLightTheme    REG_DWORD    0x0";
    const REG_OUTPUT_LIGHT: &str = "HKEY_CURRENT_USER\\Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize\n    AppsUseLightTheme    REG_DWORD    0x1";

    #[rstest]
    #[case("REG_DWORD    0x0", Some(0))]
    #[case("REG_DWORD    0x1", Some(1))]
    #[case("REG_DWORD 0xff", Some(255))]
    #[case(REG_OUTPUT_DARK, Some(0))]
    #[case("AppsUseLightTheme    REG_SZ    0x0", None)]
    #[case("REG_DWORD    0xzz", None)]
    #[case("REG_DWORD    0x", None)]
    #[case("REG_DWORD", None)]
    #[case("REG_DWORD    0x0\nsomething else", None)]
    #[case("", None)]
    fn test_apps_use_light_theme(#[case] output: &str, #[case] expected: Option<i32>) {
        assert_eq!(apps_use_light_theme(output), expected);
    }

    #[rstest]
    #[case(REG_OUTPUT_DARK, true)]
    #[case(REG_OUTPUT_LIGHT, false)]
    #[case("ERROR: The system was unable to find the specified registry key or value.", false)]
    #[case("REG_DWORD    garbage", false)]
    fn test_is_dark_mode(#[case] output: &str, #[case] expected: bool) {
        let runner = CannedRunner::new().with(WINDOWS_THEME_QUERY, output);
        assert_eq!(is_dark_mode(&runner), expected);
    }

    #[test]
    fn test_command_failure_is_light() {
        assert!(!is_dark_mode(&CannedRunner::new()));
    }

    #[test]
    fn test_queries_registry_once() {
        let runner = CannedRunner::new().with(WINDOWS_THEME_QUERY, REG_OUTPUT_DARK);
        is_dark_mode(&runner);
        assert_eq!(runner.calls(), vec![WINDOWS_THEME_QUERY.to_string()]);
    }
}
