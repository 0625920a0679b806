//! Shared value types.

use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// A target UI technology.
///
/// Selecting a platform picks the backend renderer and root template; it never
/// changes the view tree being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    /// SwiftUI-style declarative source.
    MacOS,
    /// WinUI XAML markup.
    Windows,
    /// GTK-style imperative description.
    Linux,
}

impl Platform {
    /// Every platform, in declaration order.
    pub const ALL: [Platform; 3] = [Platform::MacOS, Platform::Windows, Platform::Linux];

    /// Lowercase identifier, also accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MacOS => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }

    /// Name of the UI technology emitted for this platform.
    pub fn framework(&self) -> &'static str {
        match self {
            Self::MacOS => "SwiftUI",
            Self::Windows => "XAML",
            Self::Linux => "GTK",
        }
    }

    /// Directory name used under `Build/` for generated projects.
    pub fn build_dir(&self) -> &'static str {
        match self {
            Self::MacOS => "macOS",
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "macos" | "mac" | "swiftui" => Ok(Self::MacOS),
            "windows" | "win" | "xaml" | "winui" => Ok(Self::Windows),
            "linux" | "gtk" => Ok(Self::Linux),
            _ => Err(CoreError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}
