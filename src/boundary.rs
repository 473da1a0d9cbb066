use std::fmt;

/// Warnings for expected degraded outcomes of the generation pipeline.
/// These are non-fatal conditions that should be reported to the user
/// while the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No reachable tag, so the description is a bare hash and the
    /// configured fallback version is embedded instead
    UntaggedTree { describe: String },
    /// The described commit's timestamp could not be resolved; the
    /// current time is embedded instead
    TimestampUnavailable { describe: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UntaggedTree { describe } => {
                write!(
                    f,
                    "No version tag reachable from '{}'; embedding fallback version",
                    describe
                )
            }
            BoundaryWarning::TimestampUnavailable { describe } => {
                write!(
                    f,
                    "Could not resolve commit timestamp for '{}'; using current time",
                    describe
                )
            }
        }
    }
}
