use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::interpolate::InterpolateContext;

/// Output path used when the configuration leaves `output` empty.
pub const DEFAULT_OUTPUT_PATH: &str = "packer-manifest.json";

/// Prefix of the keys Packer injects into every plugin configuration.
pub(crate) const PACKER_KEY_PREFIX: &str = "packer_";

/// Build-wide settings Packer hands to every plugin.
///
/// These are not user-facing options of this post-processor; they seed the
/// template context used to resolve [`Config::output_path`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackerConfig {
    #[serde(rename = "packer_build_name")]
    pub build_name: String,
    #[serde(rename = "packer_builder_type")]
    pub builder_type: String,
    #[serde(rename = "packer_debug")]
    pub debug: bool,
    #[serde(rename = "packer_force")]
    pub force: bool,
    #[serde(rename = "packer_on_error")]
    pub on_error: String,
    #[serde(rename = "packer_user_variables")]
    pub user_variables: BTreeMap<String, String>,
    #[serde(rename = "packer_sensitive_variables")]
    pub sensitive_variables: Vec<String>,
}

/// User-facing keys of the post-processor block, before resolution.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RawConfig {
    pub output: String,
    pub strip_path: bool,
}

/// Resolved post-processor configuration.
///
/// `output_path` is never empty and contains no template syntax.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: String,
    /// Accepted for compatibility; not used when annotating artifacts.
    pub strip_path: bool,
    pub packer: PackerConfig,
    pub(crate) ctx: InterpolateContext,
}

impl Config {
    /// The context `output_path` was rendered against.
    pub fn interpolate_context(&self) -> &InterpolateContext {
        &self.ctx
    }
}
