//! Planner errors.

use std::path::PathBuf;

use fmodbuild_targets::TargetError;
use thiserror::Error;

/// Errors that can surface from resolving or committing a build plan.
///
/// Tolerated failures — an unreadable plugin list — never appear here; they
/// are logged and the plan proceeds without the optional artifact.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Target model error, including the fatal unsupported-platform case.
    #[error(transparent)]
    Target(#[from] TargetError),

    /// I/O failure while committing a planned write.
    #[error("failed to write {}: {source}", path.display())]
    ManifestWrite {
        /// Destination the write was aimed at.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;
