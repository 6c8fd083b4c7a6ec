use thiserror::Error;

use crate::server::model::permission::Capability;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but does not hold a valid Discord id.
    #[error("Environment variable {name} is not a valid id: {value}")]
    InvalidEnvVar { name: String, value: String },

    /// Environment variable is set but does not hold a valid URL.
    #[error("Environment variable {name} is not a valid URL: {source}")]
    InvalidUrl {
        name: String,
        #[source]
        source: url::ParseError,
    },

    /// The role backing a capability has not been configured.
    ///
    /// Distinct from an authorization failure: nobody can pass the check until the
    /// role id is set.
    #[error("{} not set in .env.", .0.env_var())]
    RoleNotConfigured(Capability),

    /// A channel the command must post to has not been configured.
    #[error("{0} not set in .env.")]
    ChannelNotConfigured(&'static str),
}
