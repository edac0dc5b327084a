use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::error::DeployError;
use crate::output;

const OVERRIDES_FLAG: &str = "--parameter-overrides";

/// One entry of a CloudFormation parameters file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    #[serde(rename = "ParameterKey")]
    pub key: String,
    #[serde(rename = "ParameterValue")]
    pub value: String,
}

/// Read the parameters file at `relative`, resolved against `project_root`.
pub fn load(project_root: &Path, relative: &str) -> Result<Vec<Parameter>, DeployError> {
    let path = project_root.join(relative);
    output::info(&format!("Reading parameters file from {}", path.display()));

    read_parameters(&path).map_err(|e| DeployError::ParametersLoad {
        path: relative.to_string(),
        reason: format!("{:#}", e),
    })
}

fn read_parameters(path: &Path) -> Result<Vec<Parameter>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameters file: {}", path.display()))?;

    let parameters: Vec<Parameter> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse parameters file: {}", path.display()))?;

    validate(&parameters)?;

    Ok(parameters)
}

fn validate(parameters: &[Parameter]) -> Result<()> {
    for (idx, parameter) in parameters.iter().enumerate() {
        if parameter.key.is_empty() {
            bail!("Parameter #{} has an empty ParameterKey", idx);
        }
        if parameter.key.chars().any(char::is_whitespace) {
            bail!(
                "Parameter #{} has ParameterKey '{}' containing whitespace",
                idx,
                parameter.key
            );
        }
    }
    Ok(())
}

/// Render the `--parameter-overrides` fragment for the deploy command.
///
/// Empty when there are no parameters. Every `key=value` token is followed
/// by a space, including the last.
pub fn render_overrides(parameters: &[Parameter]) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let mut rendered = format!("{} ", OVERRIDES_FLAG);
    for parameter in parameters {
        rendered.push_str(&format!("{}={} ", parameter.key, parameter.value));
    }
    rendered
}
