//! `fmodbuild plan` — resolve and print build plans, optionally committing
//! the planned deploy-manifest write.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use fmodbuild_plan::{commit, resolve, BuildPlan, ModuleKind, PlanContext};
use fmodbuild_targets::{BuildConfiguration, TargetDescriptor, TargetPlatform};

use crate::manifest::FmodbuildManifest;

/// Options gathered from the command line.
pub struct PlanOptions<'a> {
    pub target: Option<&'a str>,
    pub config: Option<&'a str>,
    pub editor: bool,
    pub module: Option<ModuleKind>,
    pub all_modules: bool,
    pub module_dir: Option<&'a str>,
    pub format: Option<&'a str>,
    pub commit: bool,
}

/// Run the plan command.
pub fn run(
    project_dir: &Path,
    manifest: Option<&FmodbuildManifest>,
    opts: &PlanOptions<'_>,
) -> Result<()> {
    let descriptor = resolve_descriptor(manifest, opts)?;

    let modules: Vec<ModuleKind> = if opts.all_modules {
        ModuleKind::all().to_vec()
    } else {
        vec![opts.module.unwrap_or(ModuleKind::Runtime)]
    };

    if opts.module_dir.is_some() && modules.len() > 1 {
        bail!("--module-dir applies to a single module; drop --all-modules");
    }

    let mut plans = Vec::with_capacity(modules.len());
    for module in modules {
        let module_dir = module_dir_for(project_dir, manifest, opts.module_dir, module);
        let ctx = PlanContext::new(descriptor, module_dir, module);
        let mut plan = resolve(&ctx)?;
        apply_overrides(&mut plan, manifest, module);
        plans.push(plan);
    }

    match opts.format {
        Some("json") => {
            let json = serde_json::to_string_pretty(&plans).context("serializing plans")?;
            println!("{json}");
        }
        Some(other) if other != "human" => bail!("unknown plan format: '{other}'"),
        _ => {
            for plan in &plans {
                println!("{plan}");
            }
        }
    }

    if opts.commit {
        for plan in &plans {
            commit(plan)?;
            if let Some(manifest) = &plan.deploy_manifest {
                println!("Wrote {}", manifest.path.display());
            }
        }
    }

    Ok(())
}

/// Build the target descriptor from flags, falling back to manifest defaults.
fn resolve_descriptor(
    manifest: Option<&FmodbuildManifest>,
    opts: &PlanOptions<'_>,
) -> Result<TargetDescriptor> {
    let target_name = opts
        .target
        .or_else(|| manifest.and_then(|m| m.default_target()));
    let Some(target_name) = target_name else {
        bail!("no target given: pass --target or set [defaults] target in fmodbuild.toml");
    };
    let platform: TargetPlatform = target_name.parse()?;

    let config_name = opts
        .config
        .or_else(|| manifest.and_then(|m| m.default_config()))
        .unwrap_or("development");
    let configuration: BuildConfiguration = config_name.parse()?;

    let mut descriptor = TargetDescriptor::new(platform, configuration);
    if opts.editor {
        descriptor = descriptor.with_editor();
    }
    Ok(descriptor)
}

/// The module's source directory: an explicit flag wins, then the manifest
/// layout, then the conventional `Source/<Module>` under the project.
fn module_dir_for(
    project_dir: &Path,
    manifest: Option<&FmodbuildManifest>,
    explicit: Option<&str>,
    module: ModuleKind,
) -> PathBuf {
    if let Some(dir) = explicit {
        return PathBuf::from(dir);
    }
    match manifest {
        Some(m) => m.module_dir(project_dir, module),
        None => project_dir.join("Source").join(module.module_name()),
    }
}

/// Merge manifest-declared extra dependencies into a resolved plan.
fn apply_overrides(plan: &mut BuildPlan, manifest: Option<&FmodbuildManifest>, module: ModuleKind) {
    let Some(overrides) = manifest.and_then(|m| m.module_override(module)) else {
        return;
    };
    plan.public_dependency_modules
        .extend(overrides.extra_public_dependencies.iter().cloned());
    plan.private_dependency_modules
        .extend(overrides.extra_private_dependencies.iter().cloned());
}
