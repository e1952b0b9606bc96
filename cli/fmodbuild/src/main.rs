//! fmodbuild CLI — build planner for the FMOD Studio plugin binaries.

mod commands;
mod manifest;

use std::process;

use clap::{Parser, Subcommand};

use fmodbuild_plan::ModuleKind;

use crate::commands::plan::PlanOptions;
use crate::manifest::FmodbuildManifest;

#[derive(Parser)]
#[command(name = "fmodbuild", version, about = "FMOD Studio plugin build planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the build plan for one or all plugin modules
    Plan {
        /// Target platform (e.g., win64, android)
        #[arg(long)]
        target: Option<String>,
        /// Build configuration (debug, debug-game, development, testing, shipping)
        #[arg(long)]
        config: Option<String>,
        /// Plan an editor build
        #[arg(long)]
        editor: bool,
        /// Module to plan (runtime, editor, audiolink, headset; default runtime)
        #[arg(long)]
        module: Option<ModuleKind>,
        /// Plan all four plugin modules
        #[arg(long)]
        all_modules: bool,
        /// Explicit module source directory (overrides the manifest layout)
        #[arg(long)]
        module_dir: Option<String>,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
        /// Write the planned deploy manifest
        #[arg(long)]
        commit: bool,
    },
    /// Inspect target platforms and their naming rules
    Target {
        #[command(subcommand)]
        action: TargetAction,
    },
    /// Check project and prebuilt-binary status
    Doctor {
        /// Check a specific target
        #[arg(long)]
        target: Option<String>,
        /// Configuration to check (default: development)
        #[arg(long)]
        config: Option<String>,
    },
}

#[derive(Subcommand)]
enum TargetAction {
    /// List platforms and whether binaries ship for them
    List,
    /// Show one platform's naming rules
    Describe {
        /// Platform name
        name: String,
        /// Output format (default: human-readable, "toml" for TOML)
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Plan {
            target,
            config,
            editor,
            module,
            all_modules,
            module_dir,
            format,
            commit,
        } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            commands::plan::run(
                &project_dir,
                manifest.as_ref(),
                &PlanOptions {
                    target: target.as_deref(),
                    config: config.as_deref(),
                    editor,
                    module,
                    all_modules,
                    module_dir: module_dir.as_deref(),
                    format: format.as_deref(),
                    commit,
                },
            )
        }

        Commands::Target { action } => match action {
            TargetAction::List => commands::target::list(),
            TargetAction::Describe { name, format } => {
                commands::target::describe(&name, format.as_deref())
            }
        },

        Commands::Doctor { target, config } => {
            let (_, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            commands::doctor::run(&project_dir, target.as_deref(), config.as_deref())
        }
    }
}

/// Try to load a manifest from the current directory upward.
fn load_manifest_optional(
    cwd: &std::path::Path,
) -> anyhow::Result<(Option<FmodbuildManifest>, Option<std::path::PathBuf>)> {
    match FmodbuildManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Lay out a plugin tree the way the real plugin ships.
    fn scaffold_plugin(root: &std::path::Path) {
        for module in ModuleKind::all() {
            std::fs::create_dir_all(root.join("Source").join(module.module_name())).unwrap();
        }
        std::fs::create_dir_all(root.join("Lib").join("Android")).unwrap();
        std::fs::create_dir_all(root.join("Lib").join("Win64")).unwrap();
        std::fs::write(
            root.join("fmodbuild.toml"),
            "[plugin]\nname = \"FMODStudio\"\n\n[defaults]\ntarget = \"win64\"\n",
        )
        .unwrap();
    }

    /// Full workflow: resolve every module, then commit an Android plan and
    /// check the deploy manifest landed beside the binaries.
    #[test]
    fn plan_and_commit_workflow() {
        let dir = tempfile::tempdir().unwrap();
        scaffold_plugin(dir.path());
        let (manifest, project_dir) = FmodbuildManifest::find_and_load(dir.path())
            .unwrap()
            .unwrap();

        commands::plan::run(
            &project_dir,
            Some(&manifest),
            &PlanOptions {
                target: None, // manifest default: win64
                config: Some("development"),
                editor: false,
                module: None,
                all_modules: true,
                module_dir: None,
                format: None,
                commit: false,
            },
        )
        .unwrap();

        commands::plan::run(
            &project_dir,
            Some(&manifest),
            &PlanOptions {
                target: Some("android"),
                config: Some("development"),
                editor: false,
                module: Some(ModuleKind::Runtime),
                all_modules: false,
                module_dir: None,
                format: None,
                commit: true,
            },
        )
        .unwrap();

        let deploy = project_dir.join("Source/FMODStudio/../../Lib/Android/deploy.txt");
        let content = std::fs::read_to_string(deploy).unwrap();
        assert_eq!(content, "fmod.jar\nlibfmodL.so\nlibfmodstudioL.so\n");
    }

    /// JSON output should succeed for an editor build.
    #[test]
    fn plan_json_output() {
        let dir = tempfile::tempdir().unwrap();
        scaffold_plugin(dir.path());
        let (manifest, project_dir) = FmodbuildManifest::find_and_load(dir.path())
            .unwrap()
            .unwrap();

        commands::plan::run(
            &project_dir,
            Some(&manifest),
            &PlanOptions {
                target: Some("mac"),
                config: Some("shipping"),
                editor: true,
                module: Some(ModuleKind::Editor),
                all_modules: false,
                module_dir: None,
                format: Some("json"),
                commit: false,
            },
        )
        .unwrap();
    }

    /// An unsupported target aborts planning with an error naming it.
    #[test]
    fn plan_unsupported_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        scaffold_plugin(dir.path());
        let (manifest, project_dir) = FmodbuildManifest::find_and_load(dir.path())
            .unwrap()
            .unwrap();

        let err = commands::plan::run(
            &project_dir,
            Some(&manifest),
            &PlanOptions {
                target: Some("winrt"),
                config: None,
                editor: false,
                module: None,
                all_modules: false,
                module_dir: None,
                format: None,
                commit: false,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("winrt"));
    }

    /// Doctor reports binary presence for a target under the manifest layout.
    #[test]
    fn doctor_with_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        scaffold_plugin(dir.path());
        commands::doctor::run(dir.path(), Some("win64"), None).unwrap();
    }
}
