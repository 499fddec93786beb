use thiserror::Error;

/// Failures while resolving the post-processor configuration.
///
/// All of these abort the run before any artifact is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("configuration fragment {index} is not an object")]
    InvalidFragment { index: usize },

    #[error("failed to decode configuration: {0}")]
    Decode(String),

    #[error("error interpolating `{field}`: {message}")]
    Interpolate { field: String, message: String },

    #[error("Error parsing target template: {0}")]
    TemplateValidation(String),
}

/// An artifact id that should be `region:image-id` but has no delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("artifact id `{id}` is not of the form `region:image-id`")]
pub struct MalformedIdentifierError {
    pub id: String,
}

/// Per-artifact failures. Other artifacts in the same run are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostProcessError {
    #[error("builder `{builder_id}` produced a malformed artifact id")]
    MalformedIdentifier {
        builder_id: String,
        #[source]
        source: MalformedIdentifierError,
    },
}
