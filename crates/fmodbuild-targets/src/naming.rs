//! Per-platform library naming rules.
//!
//! Each supported platform maps to a small immutable record of naming parts:
//! the prefix and extension conventions of its toolchain, the bit-width
//! mid-string some platforms bake into file names, and whether the platform
//! links the FMOD binaries dynamically or statically. The mapping is keyed
//! exhaustively; a platform without prebuilt binaries is the fatal-error
//! path, not a silent default.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};
use crate::platform::TargetPlatform;

/// How the FMOD binaries are linked on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// A dynamic library is loaded at runtime and must be packaged.
    Dynamic,
    /// The library is linked into the binary; nothing ships separately.
    Static,
}

/// Naming parts for one platform's prebuilt binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NamingParts {
    /// Library file name prefix ("lib" on Unix-flavored toolchains).
    pub lib_prefix: &'static str,
    /// Bit-width mid-string baked into file names ("64" on Win64).
    pub mid_name: &'static str,
    /// Extension of the file handed to the linker.
    pub link_extension: &'static str,
    /// Extension of the file loaded at runtime; `None` for static linking.
    pub runtime_extension: Option<&'static str>,
    /// Whether runtime libraries are registered for delayed loading.
    pub delay_load: bool,
    /// Whether the platform's packaging step consumes a deploy manifest.
    pub writes_deploy_manifest: bool,
}

impl NamingParts {
    /// How the binaries are linked on this platform.
    pub fn link_kind(&self) -> LinkKind {
        if self.runtime_extension.is_some() {
            LinkKind::Dynamic
        } else {
            LinkKind::Static
        }
    }
}

/// Look up the naming parts for a platform.
///
/// Fails with [`TargetError::UnsupportedPlatform`] for platforms that have no
/// prebuilt FMOD binaries; silently proceeding would produce an unlinkable
/// build.
pub fn naming_parts(platform: TargetPlatform) -> Result<NamingParts> {
    let parts = match platform {
        TargetPlatform::Win32 => NamingParts {
            lib_prefix: "",
            mid_name: "",
            link_extension: "_vc.lib",
            runtime_extension: Some(".dll"),
            delay_load: true,
            writes_deploy_manifest: false,
        },
        TargetPlatform::Win64 => NamingParts {
            lib_prefix: "",
            mid_name: "64",
            link_extension: "_vc.lib",
            runtime_extension: Some(".dll"),
            delay_load: true,
            writes_deploy_manifest: false,
        },
        TargetPlatform::Mac => NamingParts {
            lib_prefix: "lib",
            mid_name: "",
            link_extension: ".dylib",
            runtime_extension: Some(".dylib"),
            delay_load: false,
            writes_deploy_manifest: false,
        },
        TargetPlatform::Linux => NamingParts {
            lib_prefix: "lib",
            mid_name: "",
            link_extension: ".so",
            runtime_extension: Some(".so"),
            delay_load: false,
            writes_deploy_manifest: false,
        },
        TargetPlatform::Android => NamingParts {
            lib_prefix: "lib",
            mid_name: "",
            link_extension: ".so",
            runtime_extension: Some(".so"),
            delay_load: false,
            writes_deploy_manifest: true,
        },
        TargetPlatform::Ios => NamingParts {
            lib_prefix: "lib",
            mid_name: "",
            link_extension: "_iphoneos.a",
            runtime_extension: None,
            delay_load: false,
            writes_deploy_manifest: false,
        },
        TargetPlatform::XboxOne => NamingParts {
            lib_prefix: "",
            mid_name: "",
            link_extension: "_vc.lib",
            runtime_extension: Some(".dll"),
            delay_load: false,
            writes_deploy_manifest: false,
        },
        TargetPlatform::Ps4 => NamingParts {
            lib_prefix: "lib",
            mid_name: "",
            link_extension: "_stub.a",
            runtime_extension: Some(".prx"),
            delay_load: false,
            writes_deploy_manifest: false,
        },
        TargetPlatform::Html5 | TargetPlatform::WinRt => {
            return Err(TargetError::UnsupportedPlatform { platform });
        }
    };
    Ok(parts)
}

/// All platforms that have prebuilt binaries.
pub fn supported_platforms() -> Vec<TargetPlatform> {
    TargetPlatform::all()
        .iter()
        .copied()
        .filter(|p| naming_parts(*p).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win64_carries_bit_width_mid_name() {
        let parts = naming_parts(TargetPlatform::Win64).unwrap();
        assert_eq!(parts.mid_name, "64");
        assert_eq!(parts.link_extension, "_vc.lib");
        assert_eq!(parts.runtime_extension, Some(".dll"));
        assert!(parts.delay_load);
    }

    #[test]
    fn ios_is_the_only_static_platform() {
        for platform in supported_platforms() {
            let parts = naming_parts(platform).unwrap();
            match platform {
                TargetPlatform::Ios => assert_eq!(parts.link_kind(), LinkKind::Static),
                _ => assert_eq!(parts.link_kind(), LinkKind::Dynamic),
            }
        }
    }

    #[test]
    fn delay_load_is_windows_only() {
        for platform in supported_platforms() {
            let parts = naming_parts(platform).unwrap();
            let expected = matches!(platform, TargetPlatform::Win32 | TargetPlatform::Win64);
            assert_eq!(parts.delay_load, expected, "{platform}");
        }
    }

    #[test]
    fn android_is_the_only_deploy_manifest_platform() {
        for platform in supported_platforms() {
            let parts = naming_parts(platform).unwrap();
            assert_eq!(
                parts.writes_deploy_manifest,
                platform == TargetPlatform::Android,
                "{platform}"
            );
        }
    }

    #[test]
    fn unsupported_platform_fails_fast_naming_it() {
        let err = naming_parts(TargetPlatform::Html5).unwrap_err();
        assert!(matches!(
            err,
            TargetError::UnsupportedPlatform {
                platform: TargetPlatform::Html5
            }
        ));
        assert!(err.to_string().contains("html5"));
    }

    #[test]
    fn supported_set_excludes_html5_and_winrt() {
        let supported = supported_platforms();
        assert_eq!(supported.len(), 8);
        assert!(!supported.contains(&TargetPlatform::Html5));
        assert!(!supported.contains(&TargetPlatform::WinRt));
    }
}
