use tracing::debug;

use crate::error::{DeployError, Stage};
use crate::output;
use crate::runner::{CommandOutput, CommandRunner};

use super::context::DeployContext;
use super::Outcome;

const TOTAL_STEPS: usize = 3;

/// Exit code the AWS CLI uses for "no changes to deploy".
const NO_CHANGES_EXIT_CODE: i32 = 255;

pub fn create_bucket(runner: &dyn CommandRunner, ctx: &DeployContext) -> Result<(), DeployError> {
    output::step(
        1,
        TOTAL_STEPS,
        &format!("Creating staging bucket s3://{}", ctx.args.bucket_name),
    );

    let out = exec(runner, Stage::CreateBucket, &ctx.bucket_command())?;
    check(Stage::CreateBucket, &out)
}

pub fn package(runner: &dyn CommandRunner, ctx: &DeployContext) -> Result<(), DeployError> {
    output::step(
        2,
        TOTAL_STEPS,
        &format!("Packaging {}", ctx.config.template_file),
    );

    let out = exec(runner, Stage::Package, &ctx.package_command())?;
    check(Stage::Package, &out)
}

pub fn deploy(runner: &dyn CommandRunner, ctx: &DeployContext) -> Result<Outcome, DeployError> {
    output::step(
        3,
        TOTAL_STEPS,
        &format!("Deploying stack {}", ctx.args.stack_name),
    );

    let out = exec(runner, Stage::Deploy, &ctx.deploy_command())?;
    if is_no_changes(ctx, &out) {
        // The CLI reports an up-to-date stack as a failure.
        output::info(&format!(
            "Stack {} is already up to date",
            ctx.args.stack_name
        ));
        return Ok(Outcome::UpToDate);
    }
    check(Stage::Deploy, &out)?;
    Ok(Outcome::Deployed)
}

pub fn is_no_changes(ctx: &DeployContext, out: &CommandOutput) -> bool {
    out.exit_code == NO_CHANGES_EXIT_CODE && out.stderr.contains(&ctx.no_changes_marker())
}

fn exec(
    runner: &dyn CommandRunner,
    stage: Stage,
    command: &str,
) -> Result<CommandOutput, DeployError> {
    debug!("{} command: {}", stage, command);
    runner
        .run(command)
        .map_err(|source| DeployError::Spawn { stage, source })
}

fn check(stage: Stage, out: &CommandOutput) -> Result<(), DeployError> {
    if !out.success() {
        return Err(DeployError::StageFailure {
            stage,
            exit_code: out.exit_code,
        });
    }
    Ok(())
}
