//! Concrete library file names.
//!
//! A file name is `{prefix}{base}{config letter}{mid}{extension}` — e.g. the
//! win64 logging build of the core library links `fmodL64_vc.lib` and loads
//! `fmodL64.dll` at runtime.

use fmodbuild_targets::{LinkFlavor, NamingParts};

/// Base name of the core audio-engine library.
pub const FMOD_BASE: &str = "fmod";
/// Base name of the studio (event system) library.
pub const FMOD_STUDIO_BASE: &str = "fmodstudio";

/// The four concrete file names for one platform/flavor combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryNames {
    /// Core library handed to the linker.
    pub fmod_link: String,
    /// Studio library handed to the linker.
    pub fmodstudio_link: String,
    /// Core library loaded at runtime; `None` on static-linking platforms.
    pub fmod_runtime: Option<String>,
    /// Studio library loaded at runtime; `None` on static-linking platforms.
    pub fmodstudio_runtime: Option<String>,
}

impl LibraryNames {
    /// Format the file names for one platform/flavor combination.
    pub fn format(parts: &NamingParts, flavor: LinkFlavor) -> Self {
        Self {
            fmod_link: format_name(parts, flavor, FMOD_BASE, parts.link_extension),
            fmodstudio_link: format_name(parts, flavor, FMOD_STUDIO_BASE, parts.link_extension),
            fmod_runtime: parts
                .runtime_extension
                .map(|ext| format_name(parts, flavor, FMOD_BASE, ext)),
            fmodstudio_runtime: parts
                .runtime_extension
                .map(|ext| format_name(parts, flavor, FMOD_STUDIO_BASE, ext)),
        }
    }
}

/// Format one library file name from its parts.
pub fn format_name(
    parts: &NamingParts,
    flavor: LinkFlavor,
    base: &str,
    extension: &str,
) -> String {
    format!(
        "{}{}{}{}{}",
        parts.lib_prefix,
        base,
        flavor.suffix_letter(),
        parts.mid_name,
        extension
    )
}
