use clap::Parser;

use crate::error::DeployError;

pub mod deploy;

/// Flags are optional at the clap level so that a missing one is reported
/// as a `MissingArgument` error rather than a usage error.
#[derive(Parser, Debug)]
#[command(
    name = "cfn-ship",
    version,
    about = "Create a staging bucket, package and deploy a CloudFormation stack",
    args_override_self = true
)]
pub struct Cli {
    /// AWS region to package and deploy into
    #[arg(long)]
    pub region: Option<String>,

    /// AWS CLI named profile
    #[arg(long)]
    pub profile: Option<String>,

    /// S3 bucket used as the packaging staging area
    #[arg(long = "bucket-name")]
    pub bucket_name: Option<String>,

    /// CloudFormation stack to create or update
    #[arg(long = "stack-name")]
    pub stack_name: Option<String>,

    /// JSON parameters file, relative to the working directory
    #[arg(long = "parameters-file")]
    pub parameters_file: Option<String>,
}

/// The validated argument set. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployArgs {
    pub region: String,
    pub profile: String,
    pub bucket_name: String,
    pub stack_name: String,
    pub parameters_file: String,
}

impl Cli {
    pub fn validate(&self) -> Result<DeployArgs, DeployError> {
        Ok(DeployArgs {
            region: required("--region", &self.region)?,
            profile: required("--profile", &self.profile)?,
            bucket_name: required("--bucket-name", &self.bucket_name)?,
            stack_name: required("--stack-name", &self.stack_name)?,
            parameters_file: required("--parameters-file", &self.parameters_file)?,
        })
    }
}

fn required(name: &'static str, value: &Option<String>) -> Result<String, DeployError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(DeployError::MissingArgument(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: [&str; 11] = [
        "cfn-ship",
        "--region",
        "us-west-2",
        "--profile",
        "dev",
        "--bucket-name",
        "demo-bucket",
        "--stack-name",
        "demo-stack",
        "--parameters-file",
        "params.json",
    ];

    fn without(flag: &str) -> Vec<&'static str> {
        let idx = FULL.iter().position(|a| *a == flag).unwrap();
        FULL.iter()
            .enumerate()
            .filter(|(i, _)| *i != idx && *i != idx + 1)
            .map(|(_, a)| *a)
            .collect()
    }

    #[test]
    fn accepts_all_five_in_any_order() {
        let cli = Cli::try_parse_from([
            "cfn-ship",
            "--parameters-file",
            "params.json",
            "--stack-name",
            "demo-stack",
            "--region",
            "us-west-2",
            "--bucket-name",
            "demo-bucket",
            "--profile",
            "dev",
        ])
        .unwrap();

        assert_eq!(
            cli.validate().unwrap(),
            DeployArgs {
                region: "us-west-2".to_string(),
                profile: "dev".to_string(),
                bucket_name: "demo-bucket".to_string(),
                stack_name: "demo-stack".to_string(),
                parameters_file: "params.json".to_string(),
            }
        );
    }

    #[test]
    fn each_missing_flag_is_reported_by_name() {
        for flag in [
            "--region",
            "--profile",
            "--bucket-name",
            "--stack-name",
            "--parameters-file",
        ] {
            let cli = Cli::try_parse_from(without(flag)).unwrap();
            match cli.validate() {
                Err(DeployError::MissingArgument(name)) => assert_eq!(name, flag),
                other => panic!("expected {} to be missing, got {:?}", flag, other),
            }
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut args = FULL.to_vec();
        args[4] = "";
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(matches!(
            cli.validate(),
            Err(DeployError::MissingArgument("--profile"))
        ));
    }

    #[test]
    fn first_missing_flag_wins() {
        let cli = Cli::try_parse_from(["cfn-ship", "--profile", "dev"]).unwrap();
        assert!(matches!(
            cli.validate(),
            Err(DeployError::MissingArgument("--region"))
        ));
    }

    #[test]
    fn repeated_flag_is_not_a_usage_error() {
        let mut args = FULL.to_vec();
        args.extend(["--region", "eu-central-1"]);
        let cli = Cli::try_parse_from(args).expect("repeated flag should parse");

        assert_eq!(cli.validate().unwrap().region, "eu-central-1");
    }
}
