//! `fmodbuild doctor` — project and binary-tree diagnostics.

use std::path::Path;

use anyhow::Result;

use fmodbuild_plan::{resolve, ModuleKind, PlanContext};
use fmodbuild_targets::{BuildConfiguration, TargetDescriptor, TargetPlatform};

use crate::manifest::FmodbuildManifest;

/// Print diagnostics: manifest discovery plus, for a target, whether the
/// expected prebuilt binaries exist on disk. Missing files are reported,
/// never fatal.
pub fn run(project_dir: &Path, target: Option<&str>, config: Option<&str>) -> Result<()> {
    println!("=== fmodbuild Doctor ===");
    println!();
    println!("fmodbuild version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("--- Project Status ---");
    let manifest = match FmodbuildManifest::find_and_load(project_dir) {
        Ok(Some((manifest, dir))) => {
            println!("  fmodbuild.toml: found at {}", dir.display());
            println!("  Plugin:         {}", manifest.plugin.name);
            if let Some(default) = manifest.default_target() {
                println!("  Default target: {default}");
            }
            Some((manifest, dir))
        }
        Ok(None) => {
            println!("  fmodbuild.toml: not found");
            None
        }
        Err(e) => {
            println!("  fmodbuild.toml: error — {e}");
            None
        }
    };

    let Some(target_name) = target else {
        return Ok(());
    };

    let platform: TargetPlatform = target_name.parse()?;
    let configuration: BuildConfiguration = config.unwrap_or("development").parse()?;
    let descriptor = TargetDescriptor::new(platform, configuration);

    let module_dir = match &manifest {
        Some((m, dir)) => m.module_dir(dir, ModuleKind::Runtime),
        None => project_dir.join("Source").join("FMODStudio"),
    };

    println!();
    println!("--- Target: {platform} / {configuration} ---");
    let plan = resolve(&PlanContext::new(descriptor, module_dir, ModuleKind::Runtime))?;
    for path in plan
        .link_libraries
        .iter()
        .chain(plan.runtime_dependencies.iter())
    {
        let status = if path.is_file() { "ok     " } else { "missing" };
        println!("  {status} {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn doctor_runs_without_a_manifest() {
        let dir = tempfile::tempdir().unwrap();
        super::run(dir.path(), None, None).unwrap();
    }

    #[test]
    fn doctor_reports_missing_binaries_without_failing() {
        let dir = tempfile::tempdir().unwrap();
        super::run(dir.path(), Some("win64"), Some("shipping")).unwrap();
    }

    #[test]
    fn doctor_rejects_unsupported_target() {
        let dir = tempfile::tempdir().unwrap();
        assert!(super::run(dir.path(), Some("html5"), None).is_err());
    }
}
