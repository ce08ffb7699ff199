// Command lines are passed to the platform shell verbatim.

pub const WINDOWS_THEME_QUERY: &str = r#"reg query "HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize" /v AppsUseLightTheme"#;
pub const REG_DWORD_TOKEN: &str = "REG_DWORD";

pub const MACOS_THEME_QUERY: &str = "defaults read -g AppleInterfaceStyle";
pub const MACOS_DARK_VALUE: &str = "Dark";

pub const GNOME_THEME_QUERY: &str = "gsettings get org.gnome.desktop.interface gtk-theme";
/// Matched against the whole output. Case folding is ASCII-only and `.` does
/// not cross newlines.
pub const DARK_THEME_PATTERN: &str = r"\A.*(?i-u:dark).*\z";

pub const KDE_LOOK_AND_FEEL_QUERY: &str = "lookandfeeltool --current";
pub const KDE_LOOK_AND_FEEL_FALLBACK_QUERY: &str =
    "kreadconfig5 --group KDE --key LookAndFeelPackage";

pub const CURRENT_DESKTOP_QUERY: &str = "echo $XDG_CURRENT_DESKTOP";
pub const GNOME_DATA_DIRS_QUERY: &str = "echo $XDG_DATA_DIRS | grep -Eo 'gnome'";
pub const GNOME_PROCESS_QUERY: &str = r#"ps -e | grep -E -i "gnome""#;
pub const KDE_DATA_DIRS_QUERY: &str = "echo $XDG_DATA_DIRS | grep -Eo 'kde'";
pub const KDE_PROCESS_QUERY: &str = r#"ps -e | grep -E -i "kde""#;
