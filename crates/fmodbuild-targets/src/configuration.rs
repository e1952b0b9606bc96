//! Build configurations and the link flavor they select.
//!
//! FMOD ships three flavors of each binary: a debug build, a logging build,
//! and a release build. The host's five build configurations collapse onto
//! those three flavors: debug configurations link the debug binaries, the
//! shipping configuration links the release binaries, and everything else
//! links the logging binaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// A build configuration of the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildConfiguration {
    Debug,
    DebugGame,
    Development,
    Testing,
    Shipping,
}

/// The flavor of the prebuilt FMOD binaries selected by a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkFlavor {
    Debug,
    Logging,
    Release,
}

impl BuildConfiguration {
    /// All configurations in the model.
    pub fn all() -> &'static [BuildConfiguration] {
        &[
            BuildConfiguration::Debug,
            BuildConfiguration::DebugGame,
            BuildConfiguration::Development,
            BuildConfiguration::Testing,
            BuildConfiguration::Shipping,
        ]
    }

    /// The link flavor this configuration selects. The three cases are
    /// mutually exclusive and exhaustive: debug configurations map to
    /// [`LinkFlavor::Debug`], shipping to [`LinkFlavor::Release`], and every
    /// other configuration to [`LinkFlavor::Logging`].
    pub fn link_flavor(&self) -> LinkFlavor {
        match self {
            BuildConfiguration::Debug | BuildConfiguration::DebugGame => LinkFlavor::Debug,
            BuildConfiguration::Shipping => LinkFlavor::Release,
            _ => LinkFlavor::Logging,
        }
    }

    /// The kebab-case name used on the command line and in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "debug",
            BuildConfiguration::DebugGame => "debug-game",
            BuildConfiguration::Development => "development",
            BuildConfiguration::Testing => "testing",
            BuildConfiguration::Shipping => "shipping",
        }
    }
}

impl LinkFlavor {
    /// The suffix letter inserted into library file names for this flavor.
    /// Release binaries carry no suffix.
    pub fn suffix_letter(&self) -> &'static str {
        match self {
            LinkFlavor::Debug => "D",
            LinkFlavor::Logging => "L",
            LinkFlavor::Release => "",
        }
    }

    /// The preprocessor define communicating this flavor to the native code.
    pub fn link_define(&self) -> &'static str {
        match self {
            LinkFlavor::Debug => "FMODSTUDIO_LINK_DEBUG=1",
            LinkFlavor::Logging => "FMODSTUDIO_LINK_LOGGING=1",
            LinkFlavor::Release => "FMODSTUDIO_LINK_RELEASE=1",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildConfiguration {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildConfiguration::Debug),
            "debug-game" | "debuggame" => Ok(BuildConfiguration::DebugGame),
            "development" => Ok(BuildConfiguration::Development),
            "testing" => Ok(BuildConfiguration::Testing),
            "shipping" => Ok(BuildConfiguration::Shipping),
            _ => Err(TargetError::UnknownConfiguration { name: s.to_string() }),
        }
    }
}
