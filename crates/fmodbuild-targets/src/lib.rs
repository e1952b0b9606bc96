//! Target platform and build-configuration model for the fmodbuild planner.
//!
//! A build invocation is described by a [`descriptor::TargetDescriptor`]:
//! the platform being built for, the build configuration (which selects the
//! flavor of the prebuilt FMOD binaries to link), and whether the editor is
//! part of the build. The per-platform naming rules for those binaries live
//! in [`naming`], keyed exhaustively so that a platform without prebuilt
//! binaries is a hard error rather than a silent default.

pub mod configuration;
pub mod descriptor;
pub mod error;
pub mod naming;
pub mod platform;

pub use configuration::{BuildConfiguration, LinkFlavor};
pub use descriptor::{
    descriptor_to_toml, load_descriptor_toml, parse_descriptor_toml, TargetDescriptor,
};
pub use error::{Result, TargetError};
pub use naming::{naming_parts, supported_platforms, LinkKind, NamingParts};
pub use platform::TargetPlatform;
