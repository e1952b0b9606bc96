//! Target platform identifiers.
//!
//! The set of platforms the host engine can build for. Not every platform in
//! the model has prebuilt FMOD binaries — see [`crate::naming`] for which do.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// A platform the host engine can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetPlatform {
    Win32,
    Win64,
    Mac,
    Linux,
    Android,
    Ios,
    #[serde(rename = "xboxone")]
    XboxOne,
    Ps4,
    /// Recognized by the host but no FMOD binaries ship for it.
    Html5,
    /// Recognized by the host but no FMOD binaries ship for it.
    #[serde(rename = "winrt")]
    WinRt,
}

impl TargetPlatform {
    /// All platforms in the model, in a stable listing order.
    pub fn all() -> &'static [TargetPlatform] {
        &[
            TargetPlatform::Win32,
            TargetPlatform::Win64,
            TargetPlatform::Mac,
            TargetPlatform::Linux,
            TargetPlatform::Android,
            TargetPlatform::Ios,
            TargetPlatform::XboxOne,
            TargetPlatform::Ps4,
            TargetPlatform::Html5,
            TargetPlatform::WinRt,
        ]
    }

    /// The directory name used for this platform's prebuilt binaries,
    /// matching the layout of the plugin's `Lib/` tree.
    pub fn lib_dir_name(&self) -> &'static str {
        match self {
            TargetPlatform::Win32 => "Win32",
            TargetPlatform::Win64 => "Win64",
            TargetPlatform::Mac => "Mac",
            TargetPlatform::Linux => "Linux",
            TargetPlatform::Android => "Android",
            TargetPlatform::Ios => "IOS",
            TargetPlatform::XboxOne => "XboxOne",
            TargetPlatform::Ps4 => "PS4",
            TargetPlatform::Html5 => "HTML5",
            TargetPlatform::WinRt => "WinRT",
        }
    }

    /// The kebab-case name used on the command line and in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetPlatform::Win32 => "win32",
            TargetPlatform::Win64 => "win64",
            TargetPlatform::Mac => "mac",
            TargetPlatform::Linux => "linux",
            TargetPlatform::Android => "android",
            TargetPlatform::Ios => "ios",
            TargetPlatform::XboxOne => "xboxone",
            TargetPlatform::Ps4 => "ps4",
            TargetPlatform::Html5 => "html5",
            TargetPlatform::WinRt => "winrt",
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetPlatform {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "win32" => Ok(TargetPlatform::Win32),
            "win64" => Ok(TargetPlatform::Win64),
            "mac" => Ok(TargetPlatform::Mac),
            "linux" => Ok(TargetPlatform::Linux),
            "android" => Ok(TargetPlatform::Android),
            "ios" => Ok(TargetPlatform::Ios),
            "xboxone" | "xbox-one" => Ok(TargetPlatform::XboxOne),
            "ps4" => Ok(TargetPlatform::Ps4),
            "html5" => Ok(TargetPlatform::Html5),
            "winrt" | "win-rt" => Ok(TargetPlatform::WinRt),
            _ => Err(TargetError::UnknownPlatform { name: s.to_string() }),
        }
    }
}
