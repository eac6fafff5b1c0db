use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A placeholder token is not of the form `[name]`.
    #[error("Invalid placeholder token for {name}: '{value}' (expected the form [token])")]
    InvalidPlaceholderToken { name: String, value: String },
}
