pub mod env;
pub mod message;

pub use env::{EnvironmentProbe, ProcessEnv, StaticEnv, TEAMCITY_VERSION_ENV_VAR};
pub use message::{ServiceMessage, keys};
