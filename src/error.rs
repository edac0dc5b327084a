use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::output;

/// The three external invocations, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CreateBucket,
    Package,
    Deploy,
}

impl Stage {
    pub fn failure_message(self) -> &'static str {
        match self {
            Stage::CreateBucket => "CloudFormation staging area S3 bucket creation failed.",
            Stage::Package => "CloudFormation package failed.",
            Stage::Deploy => "CloudFormation deploy failed.",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::CreateBucket => "bucket creation",
            Stage::Package => "package",
            Stage::Deploy => "deploy",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("This script requires the {0} argument.")]
    MissingArgument(&'static str),

    #[error("Unable to read the parameters from the --parameters-file named {path}")]
    ParametersLoad { path: String, reason: String },

    #[error("This script requires the AWS CLI to be installed.")]
    ExternalToolMissing { tool: String },

    #[error("{}", .stage.failure_message())]
    StageFailure { stage: Stage, exit_code: i32 },

    #[error("{}", .stage.failure_message())]
    Spawn {
        stage: Stage,
        #[source]
        source: std::io::Error,
    },
}

impl DeployError {
    /// Every failure is fatal and shares one status.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Lines printed for this error, in order. Underlying causes come
    /// before the `ERROR |` line.
    pub fn diagnostic_lines(&self) -> Vec<Diagnostic> {
        let mut lines = Vec::new();
        match self {
            DeployError::ParametersLoad { reason, .. } => {
                lines.push(Diagnostic::Detail(reason.clone()))
            }
            DeployError::Spawn { stage, source } => lines.push(Diagnostic::Detail(format!(
                "Failed to run the {} command: {}",
                stage, source
            ))),
            DeployError::ExternalToolMissing { tool } => debug!("'{}' not found on PATH", tool),
            DeployError::StageFailure { stage, exit_code } => {
                debug!("{} command exited with {}", stage, exit_code)
            }
            DeployError::MissingArgument(_) => {}
        }
        lines.push(Diagnostic::Error(self.to_string()));
        lines
    }

    /// Print the operator-facing diagnostic for this error.
    pub fn report(&self) {
        for line in self.diagnostic_lines() {
            match line {
                Diagnostic::Detail(msg) => output::plain(&msg),
                Diagnostic::Error(msg) => output::error(&msg),
            }
        }
    }
}

/// One line of an error report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Printed as-is.
    Detail(String),
    /// Printed with the `ERROR |` prefix.
    Error(String),
}
