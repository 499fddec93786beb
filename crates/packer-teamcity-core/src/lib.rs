pub mod artifact;
pub mod builder;
pub mod config;
pub mod error;
pub mod post_process;
pub mod teamcity;
pub mod ui;

pub use artifact::{Artifact, BuildArtifact};
pub use config::Config;
pub use error::{ConfigError, MalformedIdentifierError, PostProcessError};
pub use post_process::{PostProcessed, PostProcessor};
pub use teamcity::{EnvironmentProbe, ProcessEnv, StaticEnv};
pub use ui::{Ui, WriterUi};
