use crate::cli::DeployArgs;
use crate::config::PipelineConfig;

pub struct DeployContext {
    pub args: DeployArgs,
    /// Rendered `--parameter-overrides` fragment, possibly empty.
    pub overrides: String,
    pub config: PipelineConfig,
}

impl DeployContext {
    pub fn new(args: DeployArgs, overrides: String, config: PipelineConfig) -> Self {
        Self {
            args,
            overrides,
            config,
        }
    }

    pub fn bucket_command(&self) -> String {
        format!(
            "{} s3 mb s3://{} --region {} --profile {}",
            self.config.tool, self.args.bucket_name, self.config.staging_region, self.args.profile
        )
    }

    pub fn package_command(&self) -> String {
        format!(
            "{} cloudformation package --template-file {} --s3-bucket {} --output-template-file {} --region {} --profile {}",
            self.config.tool,
            self.config.template_file,
            self.args.bucket_name,
            self.config.packaged_template_file,
            self.args.region,
            self.args.profile
        )
    }

    pub fn deploy_command(&self) -> String {
        format!(
            "{} cloudformation deploy --template-file ./{} --stack-name {} --capabilities {} {} --region {} --profile {}",
            self.config.tool,
            self.config.packaged_template_file,
            self.args.stack_name,
            self.config.capabilities,
            self.overrides,
            self.args.region,
            self.args.profile
        )
    }

    /// Stderr marker the CLI prints when a deploy has nothing to change.
    pub fn no_changes_marker(&self) -> String {
        format!(
            "No changes to deploy. Stack {} is up to date",
            self.args.stack_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(overrides: &str) -> DeployContext {
        DeployContext::new(
            DeployArgs {
                region: "eu-west-1".to_string(),
                profile: "dev".to_string(),
                bucket_name: "demo-bucket".to_string(),
                stack_name: "demo-stack".to_string(),
                parameters_file: "params.json".to_string(),
            },
            overrides.to_string(),
            PipelineConfig::default(),
        )
    }

    #[test]
    fn bucket_is_always_created_in_staging_region() {
        let ctx = context("");
        assert_eq!(
            ctx.bucket_command(),
            "aws s3 mb s3://demo-bucket --region us-east-1 --profile dev"
        );
        assert!(!ctx.bucket_command().contains("eu-west-1"));
    }

    #[test]
    fn package_targets_user_region_and_bucket() {
        assert_eq!(
            context("").package_command(),
            "aws cloudformation package --template-file ./cloudformation.yaml --s3-bucket demo-bucket --output-template-file packaged-cloudformation.yaml --region eu-west-1 --profile dev"
        );
    }

    #[test]
    fn deploy_carries_overrides_and_capabilities() {
        let cmd = context("--parameter-overrides Env=prod ").deploy_command();
        assert_eq!(
            cmd,
            "aws cloudformation deploy --template-file ./packaged-cloudformation.yaml --stack-name demo-stack --capabilities CAPABILITY_NAMED_IAM --parameter-overrides Env=prod  --region eu-west-1 --profile dev"
        );
    }

    #[test]
    fn deploy_without_overrides_has_no_flag() {
        let cmd = context("").deploy_command();
        assert!(!cmd.contains("--parameter-overrides"));
        assert!(cmd.contains("--capabilities CAPABILITY_NAMED_IAM "));
    }

    #[test]
    fn no_changes_marker_names_the_stack() {
        assert_eq!(
            context("").no_changes_marker(),
            "No changes to deploy. Stack demo-stack is up to date"
        );
    }
}
