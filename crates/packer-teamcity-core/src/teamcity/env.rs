use std::collections::BTreeMap;

/// Set by TeamCity agents for every build step.
pub const TEAMCITY_VERSION_ENV_VAR: &str = "TEAMCITY_VERSION";

/// Read access to environment variables.
///
/// Injected into the post-processor so decisions don't depend on the real
/// process environment.
pub trait EnvironmentProbe {
    fn var(&self, name: &str) -> Option<String>;

    /// True when `name` is set to a non-empty value. The value itself is
    /// not inspected.
    fn is_set(&self, name: &str) -> bool {
        self.var(name).is_some_and(|v| !v.is_empty())
    }
}

/// Probe backed by the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvironmentProbe for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-unicode values still count as present.
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

/// Probe over a fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: BTreeMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Environment of a TeamCity agent.
    pub fn teamcity(version: impl Into<String>) -> Self {
        Self::new().with(TEAMCITY_VERSION_ENV_VAR, version)
    }
}

impl EnvironmentProbe for StaticEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<T: EnvironmentProbe + ?Sized> EnvironmentProbe for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl<T: EnvironmentProbe + ?Sized> EnvironmentProbe for Box<T> {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_is_not_set() {
        assert!(!StaticEnv::new().is_set(TEAMCITY_VERSION_ENV_VAR));
    }

    #[test]
    fn empty_variable_is_not_set() {
        let env = StaticEnv::teamcity("");
        assert_eq!(env.var(TEAMCITY_VERSION_ENV_VAR), Some(String::new()));
        assert!(!env.is_set(TEAMCITY_VERSION_ENV_VAR));
    }

    #[test]
    fn any_non_empty_value_is_set() {
        for value in ["2023.11.1 (build 147412)", "0", "false", " "] {
            assert!(StaticEnv::teamcity(value).is_set(TEAMCITY_VERSION_ENV_VAR));
        }
    }

    #[test]
    fn process_env_reads_path() {
        // PATH is present in every test environment we run under.
        assert!(ProcessEnv.var("PATH").is_some());
        assert!(ProcessEnv.var("PACKER_TEAMCITY_SURELY_UNSET_VAR").is_none());
    }
}
