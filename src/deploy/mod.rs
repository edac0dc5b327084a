pub mod context;
pub mod steps;

use crate::error::DeployError;
use crate::output;
use crate::runner::CommandRunner;

use context::DeployContext;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Deployed,
    /// The deploy stage reported no changes for the stack.
    UpToDate,
}

/// Create the staging bucket, package the template, deploy the stack.
///
/// Stops at the first failing stage. Earlier stages are not undone, so a
/// failed package or deploy leaves the bucket and any packaged template
/// in place.
pub fn run(runner: &dyn CommandRunner, ctx: &DeployContext) -> Result<Outcome, DeployError> {
    output::banner_start();

    // Step 1: Staging bucket for packaged artifacts
    steps::create_bucket(runner, ctx)?;

    // Step 2: Upload local artifacts and rewrite the template
    steps::package(runner, ctx)?;

    // Step 3: Apply the packaged template
    let outcome = steps::deploy(runner, ctx)?;

    if outcome == Outcome::Deployed {
        output::info(&format!(
            "Stack {} deployed in {}",
            ctx.args.stack_name, ctx.args.region
        ));
    }
    output::banner_end();
    Ok(outcome)
}
