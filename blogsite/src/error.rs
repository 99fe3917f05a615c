use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No icon for category `{category}` (known categories: {known})")]
    UnknownCategory { category: String, known: String },

    #[error("Failed to serialize to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to serialize to JSON: {0}")]
    Json(#[from] serde_json::Error),
}
