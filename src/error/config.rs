use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Configuration value could not be parsed.
    ///
    /// Platform identifiers must be non-zero u64 snowflakes and the port must be
    /// a valid u16. The offending key and raw value are included for diagnosis.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}
