//! Native-library resolver and deployment planner for the FMOD Studio plugin.
//!
//! Given a target descriptor and a module's source location, [`resolve`]
//! computes everything the host build system must be handed for that module:
//! include paths, dependency module names, preprocessor defines, link-library
//! paths, delay-load registrations, runtime (packaged) dependency paths, and
//! — on Android — the deploy manifest its packaging step consumes.
//!
//! `resolve` is a pure function of the descriptor plus the filesystem's
//! current contents (it reads the optional plugin list beside the binaries).
//! The plan's single side effect, writing the deploy manifest, is performed
//! by the explicit [`commit`] step.

pub mod context;
pub mod deploy;
pub mod error;
pub mod modules;
pub mod names;
pub mod paths;
pub mod plan;
pub mod plugins;
pub mod report;

pub use context::PlanContext;
pub use deploy::DeployManifest;
pub use error::{PlanError, Result};
pub use modules::ModuleKind;
pub use names::LibraryNames;
pub use paths::lib_base_dir;
pub use plan::{commit, resolve, BuildPlan};
pub use plugins::read_plugin_list;
