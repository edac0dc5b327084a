use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::config::PipelineConfig;
use crate::deploy::context::DeployContext;
use crate::deploy::{self, Outcome};
use crate::error::DeployError;
use crate::params;
use crate::runner::CommandRunner;

/// Pre-flight checks, then the three-stage pipeline.
///
/// Checks run in order: tool on PATH, arguments, parameters file. The
/// working directory is only resolved once the arguments are valid, and
/// nothing is executed unless all three checks pass.
pub fn run<F>(
    cli: &Cli,
    runner: &dyn CommandRunner,
    config: PipelineConfig,
    project_root: F,
) -> Result<Outcome, DeployError>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    if !runner.tool_available(&config.tool) {
        return Err(DeployError::ExternalToolMissing {
            tool: config.tool.clone(),
        });
    }

    let args = cli.validate()?;
    debug!("Deploy arguments: {:?}", args);

    let root = project_root().map_err(|e| DeployError::ParametersLoad {
        path: args.parameters_file.clone(),
        reason: format!("Failed to resolve the current working directory: {}", e),
    })?;

    let parameters = params::load(&root, &args.parameters_file)?;
    let overrides = params::render_overrides(&parameters);

    let ctx = DeployContext::new(args, overrides, config);

    deploy::run(runner, &ctx)
}
