//! Build-plan resolution.
//!
//! [`resolve`] runs the full planning sequence for one module:
//! flavor selection, naming-table lookup, path derivation, module dependency
//! declaration, library resolution, plugin-list expansion, and deploy-manifest
//! planning. It returns everything as data; [`commit`] performs the plan's
//! single filesystem write.

use std::path::PathBuf;

use serde::Serialize;

use fmodbuild_targets::{naming_parts, TargetDescriptor, TargetPlatform};

use crate::context::PlanContext;
use crate::deploy::DeployManifest;
use crate::error::Result;
use crate::modules::ModuleKind;
use crate::names::LibraryNames;
use crate::paths::{lib_base_dir, DEPLOY_MANIFEST_FILE, PLUGIN_LIST_FILE};
use crate::plugins::{plugin_runtime_path, read_plugin_list};

/// Everything the host build system must be handed for one module.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// Which module this plan is for.
    pub module: ModuleKind,
    /// The descriptor the plan was resolved from.
    pub descriptor: TargetDescriptor,
    /// Private include paths, relative to the plugin's `Source/` directory.
    pub private_include_paths: Vec<String>,
    /// Public inter-module dependency names.
    pub public_dependency_modules: Vec<String>,
    /// Private inter-module dependency names.
    pub private_dependency_modules: Vec<String>,
    /// Preprocessor defines, as `NAME=VALUE` strings.
    pub defines: Vec<String>,
    /// Directories the linker searches for libraries.
    pub library_search_paths: Vec<PathBuf>,
    /// Absolute paths of the libraries handed to the linker.
    pub link_libraries: Vec<PathBuf>,
    /// Dynamic-library names registered for delayed loading.
    pub delay_load_libraries: Vec<String>,
    /// Files the packaging stage must include in the shipped product.
    pub runtime_dependencies: Vec<PathBuf>,
    /// Planned deploy-manifest write, if the platform uses one.
    pub deploy_manifest: Option<DeployManifest>,
}

/// Resolve the build plan for one module.
///
/// Pure apart from reading the optional plugin list beside the binaries.
/// Fails fast — producing no partial plan — when the platform has no
/// prebuilt binaries.
pub fn resolve(ctx: &PlanContext) -> Result<BuildPlan> {
    let descriptor = ctx.descriptor;
    let flavor = descriptor.link_flavor();
    // Fatal for platforms without binaries, before any output is assembled.
    let parts = naming_parts(descriptor.platform)?;
    let base_dir = lib_base_dir(&ctx.module_dir, descriptor.platform);

    let mut plan = BuildPlan {
        module: ctx.module,
        descriptor,
        private_include_paths: to_strings(ctx.module.private_include_paths()),
        public_dependency_modules: to_strings(ctx.module.public_dependencies()),
        private_dependency_modules: to_strings(ctx.module.private_dependencies()),
        defines: Vec::new(),
        library_search_paths: Vec::new(),
        link_libraries: Vec::new(),
        delay_load_libraries: Vec::new(),
        runtime_dependencies: Vec::new(),
        deploy_manifest: None,
    };

    if descriptor.with_editor {
        plan.public_dependency_modules
            .extend(to_strings(ctx.module.editor_public_dependencies()));
        plan.private_dependency_modules
            .extend(to_strings(ctx.module.editor_private_dependencies()));
    }

    if ctx.module.links_fmod_libraries() {
        plan.defines.push(flavor.link_define().to_string());
        plan.library_search_paths.push(base_dir.clone());

        let names = LibraryNames::format(&parts, flavor);
        plan.link_libraries.push(base_dir.join(&names.fmod_link));
        plan.link_libraries
            .push(base_dir.join(&names.fmodstudio_link));

        // Dynamic platforms package the runtime libraries; the static
        // platform already carries them inside the link step.
        for runtime_name in [&names.fmod_runtime, &names.fmodstudio_runtime]
            .into_iter()
            .flatten()
        {
            plan.runtime_dependencies.push(base_dir.join(runtime_name));
            if parts.delay_load {
                plan.delay_load_libraries.push(runtime_name.clone());
            }
        }

        for plugin in read_plugin_list(&base_dir.join(PLUGIN_LIST_FILE)) {
            if let Some(path) = plugin_runtime_path(&base_dir, &parts, &plugin) {
                plan.runtime_dependencies.push(path);
            }
        }

        if parts.writes_deploy_manifest {
            plan.deploy_manifest = Some(DeployManifest::for_flavor(
                base_dir.join(DEPLOY_MANIFEST_FILE),
                flavor,
            ));
        }
    }

    if ctx.module == ModuleKind::Headset {
        resolve_headset_library(&mut plan, &base_dir, descriptor.platform);
    }

    Ok(plan)
}

/// Commit the plan's side effects: the planned deploy-manifest write.
/// A plan with nothing to write commits as a no-op.
pub fn commit(plan: &BuildPlan) -> Result<()> {
    if let Some(manifest) = &plan.deploy_manifest {
        manifest.write()?;
    }
    Ok(())
}

/// The headset spatializer ships Windows-only binaries with their own
/// bit-width naming; every other platform adds nothing.
fn resolve_headset_library(plan: &mut BuildPlan, base_dir: &std::path::Path, platform: TargetPlatform) {
    let bits = match platform {
        TargetPlatform::Win32 => "32",
        TargetPlatform::Win64 => "64",
        _ => return,
    };
    plan.library_search_paths.push(base_dir.to_path_buf());
    plan.link_libraries
        .push(base_dir.join(format!("ovrfmod{bits}.lib")));
    plan.delay_load_libraries.push(format!("ovrfmod{bits}.dll"));
    plan.defines.push("FMOD_OSP_SUPPORTED=1".to_string());
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
