use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid route name \"{0}\"")]
    InvalidName(String),

    #[error("duplicate route \"{0}\"")]
    DuplicateName(String),

    #[error("invalid definition for route \"{name}\": {reason}")]
    InvalidDefinition { name: String, reason: &'static str },

    #[error("unknown route \"{0}\"")]
    UnknownName(String),

    #[error("missing parameter \"{key}\" when building URL for route \"{route}\"")]
    MissingParameter { key: String, route: String },

    #[error("failed to read route config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse route config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
