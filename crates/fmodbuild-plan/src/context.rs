//! Planner input for one invocation.

use std::path::PathBuf;

use fmodbuild_targets::TargetDescriptor;

use crate::modules::ModuleKind;

/// Everything the planner needs for one module of one build.
///
/// All paths derive from `module_dir` — the module's own source directory as
/// the host reports it — so resolution is independent of the working
/// directory the build tool was invoked from.
#[derive(Debug, Clone)]
pub struct PlanContext {
    /// Target platform, configuration, editor flag.
    pub descriptor: TargetDescriptor,
    /// The module's own source directory (`<plugin>/Source/<Module>`).
    pub module_dir: PathBuf,
    /// Which plugin module is being planned.
    pub module: ModuleKind,
}

impl PlanContext {
    /// Construct a context for a module rooted at `module_dir`.
    pub fn new(
        descriptor: TargetDescriptor,
        module_dir: impl Into<PathBuf>,
        module: ModuleKind,
    ) -> Self {
        Self {
            descriptor,
            module_dir: module_dir.into(),
            module,
        }
    }
}
