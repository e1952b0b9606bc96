//! `fmodbuild.toml` manifest parsing and project configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use fmodbuild_plan::ModuleKind;

/// The top-level manifest structure for a plugin project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FmodbuildManifest {
    /// Plugin metadata (required).
    pub plugin: PluginConfig,
    /// Default target/configuration for `fmodbuild plan`.
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,
    /// Per-module extra dependency declarations.
    #[serde(default)]
    pub modules: HashMap<String, ModuleOverride>,
}

/// Plugin metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginConfig {
    /// Plugin name (required).
    pub name: String,
    /// Directory containing the module sources, relative to the manifest.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
}

fn default_source_dir() -> String {
    "Source".to_string()
}

/// Defaults section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DefaultsConfig {
    /// Default target platform name.
    #[serde(default)]
    pub target: Option<String>,
    /// Default build configuration name.
    #[serde(default)]
    pub config: Option<String>,
}

/// Extra dependencies merged into one module's resolved plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleOverride {
    /// Additional public dependency module names.
    #[serde(default)]
    pub extra_public_dependencies: Vec<String>,
    /// Additional private dependency module names.
    #[serde(default)]
    pub extra_private_dependencies: Vec<String>,
}

impl FmodbuildManifest {
    /// Search upward from `start_dir` for an `fmodbuild.toml`, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("fmodbuild.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: FmodbuildManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing fmodbuild.toml")
    }

    /// The default target name from the manifest, if any.
    pub fn default_target(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.target.as_deref())
    }

    /// The default configuration name from the manifest, if any.
    pub fn default_config(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.config.as_deref())
    }

    /// The source directory of `module`, relative to `project_dir`.
    pub fn module_dir(&self, project_dir: &Path, module: ModuleKind) -> PathBuf {
        project_dir
            .join(&self.plugin.source_dir)
            .join(module.module_name())
    }

    /// Extra dependency overrides declared for `module`.
    pub fn module_override(&self, module: ModuleKind) -> Option<&ModuleOverride> {
        self.modules.get(module.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[plugin]
name = "FMODStudio"
source-dir = "Source"

[defaults]
target = "win64"
config = "development"

[modules.runtime]
extra-private-dependencies = ["Projects"]

[modules.editor]
extra-private-dependencies = ["Sequencer", "MovieScene"]
"#;
        let manifest = FmodbuildManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.plugin.name, "FMODStudio");
        assert_eq!(manifest.default_target(), Some("win64"));
        assert_eq!(manifest.default_config(), Some("development"));
        let editor = manifest.module_override(ModuleKind::Editor).unwrap();
        assert_eq!(
            editor.extra_private_dependencies,
            vec!["Sequencer", "MovieScene"]
        );
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = FmodbuildManifest::from_str("[plugin]\nname = \"FMODStudio\"\n").unwrap();
        assert_eq!(manifest.plugin.source_dir, "Source");
        assert!(manifest.defaults.is_none());
        assert!(manifest.default_target().is_none());
        assert!(manifest.module_override(ModuleKind::Runtime).is_none());
    }

    #[test]
    fn module_dir_joins_source_dir_and_module_name() {
        let manifest = FmodbuildManifest::from_str("[plugin]\nname = \"FMODStudio\"\n").unwrap();
        let dir = manifest.module_dir(Path::new("/plugins/FMODStudio"), ModuleKind::Editor);
        assert_eq!(
            dir,
            Path::new("/plugins/FMODStudio/Source/FMODStudioEditor")
        );
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(FmodbuildManifest::from_str("not toml [[[").is_err());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("fmodbuild.toml"),
            "[plugin]\nname = \"FMODStudio\"\n",
        )
        .unwrap();

        let nested = dir.path().join("Source").join("FMODStudio");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = FmodbuildManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.plugin.name, "FMODStudio");
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_absent_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FmodbuildManifest::find_and_load(dir.path()).unwrap();
        // The walk may leave the scratch tree and reach the filesystem root;
        // whatever it finds out there, nothing inside the scratch tree counts.
        if let Some((_, found_dir)) = result {
            assert!(!found_dir.starts_with(dir.path()));
        }
    }
}
