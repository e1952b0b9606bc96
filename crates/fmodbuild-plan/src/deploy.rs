//! Android deploy manifest.
//!
//! Android's packaging step reads a fixed three-line manifest beside the
//! binaries: the packaged Java archive, then the two shared-library names
//! for the selected flavor.

use std::path::{Path, PathBuf};

use serde::Serialize;

use fmodbuild_targets::LinkFlavor;

use crate::error::{PlanError, Result};

/// Fixed first line of the manifest: the packaged asset name.
pub const DEPLOY_JAR_NAME: &str = "fmod.jar";

/// A planned deploy-manifest write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployManifest {
    /// Where the manifest is written.
    pub path: PathBuf,
    /// The exact lines to write.
    pub lines: Vec<String>,
}

impl DeployManifest {
    /// Plan the manifest for one flavor at `path`.
    pub fn for_flavor(path: impl Into<PathBuf>, flavor: LinkFlavor) -> Self {
        let letter = flavor.suffix_letter();
        Self {
            path: path.into(),
            lines: vec![
                DEPLOY_JAR_NAME.to_string(),
                format!("libfmod{letter}.so"),
                format!("libfmodstudio{letter}.so"),
            ],
        }
    }

    /// Write the manifest, creating its parent directory if needed.
    pub fn write(&self) -> Result<()> {
        let io = |source| PlanError::ManifestWrite {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        let mut content = self.lines.join("\n");
        content.push('\n');
        std::fs::write(&self.path, content).map_err(io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn logging_flavor_produces_the_three_fixed_lines() {
        let manifest = DeployManifest::for_flavor(Path::new("deploy.txt"), LinkFlavor::Logging);
        assert_eq!(
            manifest.lines,
            vec!["fmod.jar", "libfmodL.so", "libfmodstudioL.so"]
        );
    }

    #[test]
    fn release_flavor_drops_the_letter() {
        let manifest = DeployManifest::for_flavor(Path::new("deploy.txt"), LinkFlavor::Release);
        assert_eq!(
            manifest.lines,
            vec!["fmod.jar", "libfmod.so", "libfmodstudio.so"]
        );
    }

    #[test]
    fn write_creates_parent_and_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lib").join("Android").join("deploy.txt");
        let manifest = DeployManifest::for_flavor(&path, LinkFlavor::Debug);
        manifest.write().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "fmod.jar\nlibfmodD.so\nlibfmodstudioD.so\n");
    }

    #[test]
    fn write_failure_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the destination makes the write fail.
        let path = dir.path().join("deploy.txt");
        std::fs::create_dir(&path).unwrap();

        let manifest = DeployManifest::for_flavor(&path, LinkFlavor::Logging);
        let err = manifest.write().unwrap_err();
        assert!(err.to_string().contains("deploy.txt"));
    }
}
