//! Human-readable rendering of a resolved plan.

use std::fmt;

use crate::plan::BuildPlan;

impl fmt::Display for BuildPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Build Plan: {} ===", self.module.module_name())?;
        writeln!(
            f,
            "Target: {} / {}{}",
            self.descriptor.platform,
            self.descriptor.configuration,
            if self.descriptor.with_editor {
                " (editor)"
            } else {
                ""
            }
        )?;

        writeln!(f)?;
        writeln!(f, "--- Includes ---")?;
        for path in &self.private_include_paths {
            writeln!(f, "  {path}")?;
        }

        writeln!(f)?;
        writeln!(f, "--- Module Dependencies ---")?;
        for name in &self.public_dependency_modules {
            writeln!(f, "  public  {name}")?;
        }
        for name in &self.private_dependency_modules {
            writeln!(f, "  private {name}")?;
        }

        if !self.defines.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Defines ---")?;
            for define in &self.defines {
                writeln!(f, "  {define}")?;
            }
        }

        if !self.link_libraries.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Link Libraries ---")?;
            for lib in &self.link_libraries {
                writeln!(f, "  {}", lib.display())?;
            }
        }

        if !self.delay_load_libraries.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Delay-Loaded ---")?;
            for name in &self.delay_load_libraries {
                writeln!(f, "  {name}")?;
            }
        }

        if !self.runtime_dependencies.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Runtime Dependencies ---")?;
            for path in &self.runtime_dependencies {
                writeln!(f, "  {}", path.display())?;
            }
        }

        if let Some(manifest) = &self.deploy_manifest {
            writeln!(f)?;
            writeln!(f, "--- Deploy Manifest: {} ---", manifest.path.display())?;
            for line in &manifest.lines {
                writeln!(f, "  {line}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fmodbuild_targets::{BuildConfiguration, TargetDescriptor, TargetPlatform};

    use crate::context::PlanContext;
    use crate::modules::ModuleKind;
    use crate::plan::resolve;

    #[test]
    fn report_names_the_module_and_libraries() {
        let plan = resolve(&PlanContext::new(
            TargetDescriptor::new(TargetPlatform::Win64, BuildConfiguration::Development),
            "Source/FMODStudio",
            ModuleKind::Runtime,
        ))
        .unwrap();

        let output = format!("{plan}");
        assert!(output.contains("Build Plan: FMODStudio"));
        assert!(output.contains("win64 / development"));
        assert!(output.contains("fmodstudioL64_vc.lib"));
        assert!(output.contains("Delay-Loaded"));
    }

    #[test]
    fn report_omits_empty_library_sections() {
        let plan = resolve(&PlanContext::new(
            TargetDescriptor::new(TargetPlatform::Win64, BuildConfiguration::Development),
            "Source/FMODAudioLink",
            ModuleKind::AudioLink,
        ))
        .unwrap();

        let output = format!("{plan}");
        assert!(output.contains("AudioLinkCore"));
        assert!(!output.contains("Link Libraries"));
        assert!(!output.contains("Deploy Manifest"));
    }
}
