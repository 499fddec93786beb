//! The TeamCity post-processor.
//!
//! For each artifact:
//!
//! 1. If `TEAMCITY_VERSION` is unset or empty, nothing is emitted.
//! 2. Otherwise the builder id is classified:
//!    - Amazon builders: the id is split into region and AMI and two
//!      `setParameter` messages are emitted, region first.
//!    - Anything else: one `packer.artifact.id` message with the raw id.
//! 3. The artifact is handed back unchanged with `keep_original = true`.
//!
//! Nothing is remembered between calls.

use serde_json::Value;
use tracing::{debug, warn};

use crate::artifact::{Artifact, parse_composite};
use crate::builder::BuilderKind;
use crate::config::{self, Config};
use crate::error::{ConfigError, PostProcessError};
use crate::teamcity::{EnvironmentProbe, ProcessEnv, ServiceMessage, TEAMCITY_VERSION_ENV_VAR, keys};
use crate::ui::Ui;

/// Result of post-processing one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProcessed<A> {
    /// The input artifact, untouched.
    pub artifact: A,
    /// Whether later post-processors in the chain still see the artifact.
    /// Always true.
    pub keep_original: bool,
}

#[derive(Debug)]
pub struct PostProcessor<E = ProcessEnv> {
    config: Option<Config>,
    env: E,
}

impl PostProcessor<ProcessEnv> {
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl Default for PostProcessor<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvironmentProbe> PostProcessor<E> {
    pub fn with_env(env: E) -> Self {
        Self { config: None, env }
    }

    /// Resolve the configuration from raw fragments, later ones winning.
    ///
    /// On failure the previous configuration, if any, is kept.
    pub fn configure(&mut self, raws: &[Value]) -> Result<(), ConfigError> {
        self.config = Some(config::resolve(raws)?);
        Ok(())
    }

    /// Resolved configuration, once [`configure`](Self::configure) succeeded.
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn post_process<A: Artifact>(
        &self,
        ui: &mut dyn Ui,
        source: A,
    ) -> Result<PostProcessed<A>, PostProcessError> {
        if !self.env.is_set(TEAMCITY_VERSION_ENV_VAR) {
            debug!(
                builder_id = source.builder_id(),
                "{TEAMCITY_VERSION_ENV_VAR} not set, skipping service messages"
            );
        } else {
            // Build every line before writing any, so a malformed id emits nothing.
            let messages = service_messages(&source)?;
            for message in &messages {
                ui.message(&message.to_string());
            }
        }

        Ok(PostProcessed {
            artifact: source,
            keep_original: true,
        })
    }
}

/// Service messages describing `artifact`, in emission order.
pub fn service_messages<A: Artifact>(
    artifact: &A,
) -> Result<Vec<ServiceMessage<'_>>, PostProcessError> {
    let builder_id = artifact.builder_id();
    let id = artifact.id();

    match BuilderKind::classify(builder_id) {
        BuilderKind::CompositeAws => {
            let composite = parse_composite(id).map_err(|source| {
                warn!(builder_id, id, "artifact id is not region:ami");
                PostProcessError::MalformedIdentifier {
                    builder_id: builder_id.to_string(),
                    source,
                }
            })?;
            debug!(builder_id, region = composite.region, ami = composite.image, "aws artifact");

            Ok(vec![
                ServiceMessage::set_parameter(keys::AWS_REGION, composite.region),
                ServiceMessage::set_parameter(keys::AWS_AMI, composite.image),
            ])
        }
        BuilderKind::Opaque => {
            debug!(builder_id, id, "opaque artifact");
            Ok(vec![ServiceMessage::set_parameter(keys::ARTIFACT_ID, id)])
        }
    }
}
