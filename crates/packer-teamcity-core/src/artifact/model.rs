use serde::{Deserialize, Serialize};

/// The view of a build artifact this post-processor needs.
///
/// Artifacts are owned by the build pipeline; they are only read here and
/// handed back untouched.
pub trait Artifact {
    /// Id of the builder that produced the artifact.
    fn builder_id(&self) -> &str;

    /// Builder-defined artifact id.
    fn id(&self) -> &str;
}

impl<T: Artifact + ?Sized> Artifact for &T {
    fn builder_id(&self) -> &str {
        (**self).builder_id()
    }

    fn id(&self) -> &str {
        (**self).id()
    }
}

/// Plain artifact record, as handed over by a host or read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildArtifact {
    pub builder_id: String,
    pub id: String,
}

impl BuildArtifact {
    pub fn new(builder_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            builder_id: builder_id.into(),
            id: id.into(),
        }
    }
}

impl Artifact for BuildArtifact {
    fn builder_id(&self) -> &str {
        &self.builder_id
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_artifact_exposes_fields() {
        let a = BuildArtifact::new("mitchellh.amazonebs", "us-east-1:ami-1");
        assert_eq!(a.builder_id(), "mitchellh.amazonebs");
        assert_eq!(a.id(), "us-east-1:ami-1");
    }

    fn id_of(artifact: impl Artifact) -> String {
        artifact.id().to_string()
    }

    #[test]
    fn references_are_artifacts() {
        let a = BuildArtifact::new("mitchellh.docker", "sha256:abc");
        let r: &dyn Artifact = &a;
        assert_eq!(id_of(&a), "sha256:abc");
        assert_eq!(id_of(r), "sha256:abc");
    }

    #[test]
    fn deserializes_from_json() {
        let a: BuildArtifact =
            serde_json::from_str(r#"{"builder_id":"b","id":"i"}"#).expect("valid artifact");
        assert_eq!(a, BuildArtifact::new("b", "i"));
    }
}
