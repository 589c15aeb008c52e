use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed into the expected type.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
        /// Parser error message
        reason: String,
    },

    /// Shard identity cannot describe a real gateway session.
    ///
    /// The shard count must be at least 1 and the shard id must be below it.
    #[error("Invalid shard {shard_id} of {shard_count}")]
    InvalidShard { shard_id: u32, shard_count: u32 },

    /// Command pattern built from the escaped prefix failed to compile.
    #[error("Failed to build command pattern: {0}")]
    InvalidPrefix(#[from] regex::Error),

    /// Markdown table override is not a flat JSON object of strings.
    #[error("Invalid markdown settings: {0}")]
    InvalidMarkdown(#[from] serde_json::Error),
}
