//! Template interpolation for configuration values.
//!
//! Values are Tera templates rendered against a per-run context built from
//! the host's [`PackerConfig`]. Variables available to templates:
//!
//! - `build_name`, `build_type`
//! - `user` (map of user variables, e.g. `{{ user.region }}`)
//! - `timestamp` (Unix seconds), `isotime` (RFC 3339, UTC)
//! - `uuid` (random v4)
//!
//! `timestamp`, `isotime` and `uuid` are captured once per context so every
//! value rendered during a run sees the same ones.

use std::collections::BTreeMap;
use std::error::Error as _;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tera::{Context, Tera};
use uuid::Uuid;

use crate::config::model::PackerConfig;

const VALIDATE_TEMPLATE_NAME: &str = "__validate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpolateContext {
    pub build_name: String,
    pub build_type: String,
    pub user: BTreeMap<String, String>,
    pub timestamp: i64,
    pub isotime: String,
    pub uuid: String,
}

impl InterpolateContext {
    pub fn from_packer(packer: &PackerConfig) -> Self {
        Self::at(packer, Utc::now(), Uuid::new_v4())
    }

    /// Context with a fixed clock and uuid.
    pub fn at(packer: &PackerConfig, now: DateTime<Utc>, uuid: Uuid) -> Self {
        Self {
            build_name: packer.build_name.clone(),
            build_type: packer.builder_type.clone(),
            user: packer.user_variables.clone(),
            timestamp: now.timestamp(),
            isotime: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            uuid: uuid.to_string(),
        }
    }

    /// Render `template` against this context.
    pub fn render(&self, template: &str) -> tera::Result<String> {
        let context = Context::from_serialize(self)?;
        Tera::one_off(template, &context, false)
    }
}

impl Default for InterpolateContext {
    fn default() -> Self {
        Self::from_packer(&PackerConfig::default())
    }
}

/// Check that `template` parses. Variables are not resolved.
pub fn validate(template: &str) -> tera::Result<()> {
    let mut tera = Tera::default();
    tera.add_raw_template(VALIDATE_TEMPLATE_NAME, template)
}

/// Flatten a Tera error and its causes into one line.
///
/// Tera's top-level message only names the template; the useful part
/// (what failed and where) lives in the source chain.
pub fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
