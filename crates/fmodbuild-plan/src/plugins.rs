//! Optional plugin-list manifest.
//!
//! A `plugins.txt` beside the prebuilt binaries lists additional native FMOD
//! plugins to package, one base-name per line. Plugins are optional: a
//! missing file yields an empty list, and an unreadable one is logged and
//! skipped rather than failing the build.

use std::path::{Path, PathBuf};

use fmodbuild_targets::NamingParts;

/// Parse plugin base-names from manifest content: one per line, whitespace
/// trimmed, blank lines dropped. No escaping or quoting.
pub fn parse_plugin_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the plugin list at `path`.
///
/// Returns an empty list when the file is absent. A file that exists but
/// cannot be read is a tolerated failure: logged, then treated as empty.
pub fn read_plugin_list(path: &Path) -> Vec<String> {
    if !path.exists() {
        return Vec::new();
    }
    match std::fs::read_to_string(path) {
        Ok(content) => parse_plugin_list(&content),
        Err(e) => {
            log::warn!("failed to read plugin list {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// Resolve a plugin base-name to its runtime library path, using the same
/// prefix, flavorless naming, and base directory as the FMOD libraries.
/// Returns `None` on static-linking platforms, which package nothing.
pub fn plugin_runtime_path(
    base_dir: &Path,
    parts: &NamingParts,
    plugin_name: &str,
) -> Option<PathBuf> {
    let ext = parts.runtime_extension?;
    Some(base_dir.join(format!("{}{}{}", parts.lib_prefix, plugin_name, ext)))
}
