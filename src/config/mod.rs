/// Fixed settings of the pipeline. None of these are exposed as flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Executable that must be on PATH before anything runs.
    pub tool: String,
    /// Region the staging bucket is always created in.
    ///
    /// In us-east-1 a repeated `s3 mb` against a bucket you already own
    /// succeeds, so the bucket command can be issued on every run.
    pub staging_region: String,
    pub template_file: String,
    pub packaged_template_file: String,
    pub capabilities: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            staging_region: default_staging_region(),
            template_file: default_template_file(),
            packaged_template_file: default_packaged_template_file(),
            capabilities: default_capabilities(),
        }
    }
}

fn default_tool() -> String {
    "aws".to_string()
}

fn default_staging_region() -> String {
    "us-east-1".to_string()
}

fn default_template_file() -> String {
    "./cloudformation.yaml".to_string()
}

fn default_packaged_template_file() -> String {
    "packaged-cloudformation.yaml".to_string()
}

fn default_capabilities() -> String {
    "CAPABILITY_NAMED_IAM".to_string()
}
