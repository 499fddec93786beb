pub mod id;
pub mod model;

pub use id::{CompositeId, parse_composite};
pub use model::{Artifact, BuildArtifact};
