use serde::{Deserialize, Serialize};

/// Operating system family, as far as theme detection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Windows,
    MacOS,
    Linux,
    Unknown,
}

impl PlatformKind {
    /// Classifies an OS name by case-insensitive substring.
    ///
    /// Checked in order: "win", then "mac", then "nix" or "nux".
    pub fn from_os_name(os_name: &str) -> Self {
        let os = os_name.to_lowercase();
        if os.contains("win") {
            PlatformKind::Windows
        } else if os.contains("mac") {
            PlatformKind::MacOS
        } else if os.contains("nix") || os.contains("nux") {
            PlatformKind::Linux
        } else {
            PlatformKind::Unknown
        }
    }

    /// Platform of the running process, from [`std::env::consts::OS`].
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }
}

impl std::fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformKind::Windows => write!(f, "Windows"),
            PlatformKind::MacOS => write!(f, "macOS"),
            PlatformKind::Linux => write!(f, "Linux"),
            PlatformKind::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Windows 10", PlatformKind::Windows)]
    #[case("windows", PlatformKind::Windows)]
    #[case("Mac OS X", PlatformKind::MacOS)]
    #[case("macos", PlatformKind::MacOS)]
    #[case("Linux", PlatformKind::Linux)]
    #[case("linux", PlatformKind::Linux)]
    #[case("Unix", PlatformKind::Linux)]
    #[case("AIX", PlatformKind::Unknown)]
    #[case("plan9", PlatformKind::Unknown)]
    #[case("", PlatformKind::Unknown)]
    fn test_from_os_name(#[case] name: &str, #[case] expected: PlatformKind) {
        assert_eq!(PlatformKind::from_os_name(name), expected);
    }

    #[test]
    fn test_win_takes_precedence_over_other_tokens() {
        // "darwin" contains "win"; ordering is part of the contract.
        assert_eq!(PlatformKind::from_os_name("Darwin"), PlatformKind::Windows);
    }

    #[test]
    fn test_current_matches_build_target() {
        let current = PlatformKind::current();
        if cfg!(target_os = "windows") {
            assert_eq!(current, PlatformKind::Windows);
        } else if cfg!(target_os = "macos") {
            assert_eq!(current, PlatformKind::MacOS);
        } else if cfg!(target_os = "linux") {
            assert_eq!(current, PlatformKind::Linux);
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&PlatformKind::MacOS).unwrap();
        assert_eq!(json, "\"macos\"");
    }
}
