//! Path derivation for the plugin's prebuilt-binary tree.
//!
//! All paths derive from the module's own source directory
//! (`<plugin>/Source/<Module>`), never from the working directory, so
//! resolution does not depend on where the build tool was invoked from.

use std::path::{Path, PathBuf};

use fmodbuild_targets::TargetPlatform;

/// Base directory holding the prebuilt binaries for `platform`:
/// `<module_dir>/../../Lib/<Platform>`.
pub fn lib_base_dir(module_dir: &Path, platform: TargetPlatform) -> PathBuf {
    module_dir
        .join("..")
        .join("..")
        .join("Lib")
        .join(platform.lib_dir_name())
}

/// Name of the optional plugin-list manifest beside the binaries.
pub const PLUGIN_LIST_FILE: &str = "plugins.txt";

/// Name of the Android deploy manifest beside the binaries.
pub const DEPLOY_MANIFEST_FILE: &str = "deploy.txt";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dir_is_rooted_at_the_module_dir() {
        let base = lib_base_dir(
            Path::new("/work/MyGame/Plugins/FMODStudio/Source/FMODStudio"),
            TargetPlatform::Win64,
        );
        assert!(base.starts_with("/work/MyGame/Plugins/FMODStudio/Source/FMODStudio"));
        assert!(base.ends_with("Lib/Win64"));
    }

    #[test]
    fn base_dir_uses_platform_dir_name() {
        let base = lib_base_dir(Path::new("Source/FMODStudio"), TargetPlatform::Ios);
        assert!(base.ends_with("Lib/IOS"));
    }
}
