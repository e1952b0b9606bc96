//! Error types for target model operations.

use std::path::PathBuf;

use crate::platform::TargetPlatform;

/// Errors that can occur while resolving target model data.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// No prebuilt FMOD binaries exist for this platform. Fatal: proceeding
    /// would produce an unlinkable build.
    #[error("unsupported platform {platform}: no prebuilt FMOD binaries exist for it")]
    UnsupportedPlatform {
        /// The platform that has no binaries.
        platform: TargetPlatform,
    },

    /// A platform name that is not part of the model at all.
    #[error("unknown platform name: '{name}'")]
    UnknownPlatform {
        /// The unrecognized name.
        name: String,
    },

    /// A configuration name that is not part of the model.
    #[error("unknown build configuration: '{name}'")]
    UnknownConfiguration {
        /// The unrecognized name.
        name: String,
    },

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing descriptor files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Descriptor file not found.
    #[error("descriptor file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },
}

/// Result type for target model operations.
pub type Result<T> = std::result::Result<T, TargetError>;
