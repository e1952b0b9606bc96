//! Plugin module kinds and their declared dependencies.
//!
//! The plugin is built as four host modules. Their include paths and
//! inter-module dependency names are fixed data; only the runtime and
//! headset modules touch native libraries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The modules that make up the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    /// The runtime module that links and loads the FMOD binaries.
    Runtime,
    /// Editor-only integration; depends on the runtime module.
    Editor,
    /// Audio-link bridge into the host's audio routing.
    AudioLink,
    /// VR-headset spatializer add-on; Windows-only native library.
    Headset,
}

impl ModuleKind {
    /// All module kinds, in build order.
    pub fn all() -> &'static [ModuleKind] {
        &[
            ModuleKind::Runtime,
            ModuleKind::Editor,
            ModuleKind::AudioLink,
            ModuleKind::Headset,
        ]
    }

    /// The host module name this kind registers as.
    pub fn module_name(&self) -> &'static str {
        match self {
            ModuleKind::Runtime => "FMODStudio",
            ModuleKind::Editor => "FMODStudioEditor",
            ModuleKind::AudioLink => "FMODAudioLink",
            ModuleKind::Headset => "FMODStudioHeadset",
        }
    }

    /// Private include paths, relative to the plugin's `Source/` directory.
    pub fn private_include_paths(&self) -> &'static [&'static str] {
        match self {
            ModuleKind::Runtime => &["FMODStudio/Private", "FMODStudio/Public/FMOD"],
            ModuleKind::Editor => &[
                "FMODStudioEditor/Private",
                "FMODStudio/Private",
                "FMODStudio/Private/FMOD",
            ],
            ModuleKind::AudioLink => &["FMODAudioLink/Private"],
            ModuleKind::Headset => &["FMODStudioHeadset/Private"],
        }
    }

    /// Public dependency module names.
    pub fn public_dependencies(&self) -> &'static [&'static str] {
        match self {
            ModuleKind::Runtime => &["Core", "CoreUObject", "Engine"],
            ModuleKind::Editor | ModuleKind::Headset => {
                &["Core", "CoreUObject", "Engine", "FMODStudio"]
            }
            ModuleKind::AudioLink => &["FMODStudio"],
        }
    }

    /// Private dependency module names for a non-editor build.
    pub fn private_dependencies(&self) -> &'static [&'static str] {
        match self {
            ModuleKind::Runtime | ModuleKind::Headset => &[],
            ModuleKind::Editor => &[
                "UnrealEd",
                "Slate",
                "SlateCore",
                "InputCore",
                "Settings",
                "EditorStyle",
                "LevelEditor",
                "AssetTools",
                "AssetRegistry",
                "PropertyEditor",
                "WorkspaceMenuStructure",
            ],
            ModuleKind::AudioLink => &["AudioLinkCore", "AudioLinkEngine", "SignalProcessing"],
        }
    }

    /// Additional public dependencies when the editor is part of the build.
    /// The headset module exposes its editor integration publicly.
    pub fn editor_public_dependencies(&self) -> &'static [&'static str] {
        match self {
            ModuleKind::Headset => &["UnrealEd", "Slate", "SlateCore", "Settings"],
            _ => &[],
        }
    }

    /// Additional private dependencies when the editor is part of the build.
    pub fn editor_private_dependencies(&self) -> &'static [&'static str] {
        match self {
            ModuleKind::Runtime => &["AssetRegistry", "UnrealEd"],
            _ => &[],
        }
    }

    /// Whether this module links the FMOD core/studio libraries.
    pub fn links_fmod_libraries(&self) -> bool {
        matches!(self, ModuleKind::Runtime)
    }

    /// The kebab-case name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Runtime => "runtime",
            ModuleKind::Editor => "editor",
            ModuleKind::AudioLink => "audiolink",
            ModuleKind::Headset => "headset",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "runtime" => Ok(ModuleKind::Runtime),
            "editor" => Ok(ModuleKind::Editor),
            "audiolink" | "audio-link" => Ok(ModuleKind::AudioLink),
            "headset" => Ok(ModuleKind::Headset),
            _ => Err(format!("unknown module kind: '{s}'")),
        }
    }
}
