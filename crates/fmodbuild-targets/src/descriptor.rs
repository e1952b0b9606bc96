//! Target descriptors and their TOML form.
//!
//! A descriptor captures everything the planner needs from the host for one
//! invocation: platform, configuration, and the editor-build flag. It can be
//! built directly or loaded from a small `.toml` file checked in next to a
//! project.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::configuration::{BuildConfiguration, LinkFlavor};
use crate::error::{Result, TargetError};
use crate::platform::TargetPlatform;

/// Immutable description of one build invocation, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetDescriptor {
    /// Platform being built for.
    pub platform: TargetPlatform,
    /// Build configuration.
    pub configuration: BuildConfiguration,
    /// Whether the editor is part of this build.
    #[serde(default)]
    pub with_editor: bool,
}

impl TargetDescriptor {
    /// Construct a descriptor for a non-editor build.
    pub fn new(platform: TargetPlatform, configuration: BuildConfiguration) -> Self {
        Self {
            platform,
            configuration,
            with_editor: false,
        }
    }

    /// Same descriptor with the editor flag set.
    pub fn with_editor(mut self) -> Self {
        self.with_editor = true;
        self
    }

    /// The link flavor this build selects.
    pub fn link_flavor(&self) -> LinkFlavor {
        self.configuration.link_flavor()
    }
}

/// Load a descriptor from a `.toml` file.
pub fn load_descriptor_toml(path: &Path) -> Result<TargetDescriptor> {
    if !path.exists() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_descriptor_toml(&content)
}

/// Parse a descriptor from a TOML string.
pub fn parse_descriptor_toml(toml_str: &str) -> Result<TargetDescriptor> {
    let descriptor: TargetDescriptor = toml::from_str(toml_str)?;
    Ok(descriptor)
}

/// Serialize a descriptor to pretty TOML.
pub fn descriptor_to_toml(descriptor: &TargetDescriptor) -> Result<String> {
    let toml_str = toml::to_string_pretty(descriptor)?;
    Ok(toml_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_defaults_to_non_editor() {
        let d = TargetDescriptor::new(TargetPlatform::Win64, BuildConfiguration::Development);
        assert!(!d.with_editor);
        assert!(d.with_editor().with_editor);
    }

    #[test]
    fn parse_minimal_descriptor() {
        let d = parse_descriptor_toml(
            r#"
platform = "win64"
configuration = "development"
"#,
        )
        .unwrap();
        assert_eq!(d.platform, TargetPlatform::Win64);
        assert_eq!(d.configuration, BuildConfiguration::Development);
        assert!(!d.with_editor);
        assert_eq!(d.link_flavor(), LinkFlavor::Logging);
    }

    #[test]
    fn descriptor_toml_round_trip() {
        let d = TargetDescriptor::new(TargetPlatform::Android, BuildConfiguration::Shipping)
            .with_editor();
        let toml_str = descriptor_to_toml(&d).unwrap();
        let back = parse_descriptor_toml(&toml_str).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn load_missing_descriptor_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such.toml");
        let err = load_descriptor_toml(&missing).unwrap_err();
        assert!(matches!(err, TargetError::NotFound { .. }));
        assert!(err.to_string().contains("no-such.toml"));
    }

    #[test]
    fn load_descriptor_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipping.toml");
        std::fs::write(&path, "platform = \"ios\"\nconfiguration = \"shipping\"\n").unwrap();

        let d = load_descriptor_toml(&path).unwrap();
        assert_eq!(d.platform, TargetPlatform::Ios);
        assert_eq!(d.link_flavor(), LinkFlavor::Release);
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(parse_descriptor_toml("platform = [[[").is_err());
    }
}
