use std::path::PathBuf;

use clap::Parser;
use serde_json::{Map, Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "packer-teamcity",
    version,
    about = "Report Packer build artifacts to TeamCity as build parameters"
)]
pub struct Args {
    /// JSON configuration fragment; repeatable, later files override earlier ones
    #[arg(long = "config", value_name = "FILE")]
    pub configs: Vec<PathBuf>,

    /// Build name exposed to templates as `build_name`
    #[arg(long)]
    pub build_name: Option<String>,

    /// Builder type exposed to templates as `build_type`
    #[arg(long)]
    pub builder_type: Option<String>,

    /// User variable exposed to templates as `user.KEY`; repeatable
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,

    /// Id of the builder that produced the artifact
    #[arg(long)]
    pub builder_id: String,

    /// Artifact id as reported by the builder
    #[arg(long)]
    pub artifact_id: String,

    /// Also print the resolved output path as the last line
    #[arg(long)]
    pub print_output: bool,
}

impl Args {
    /// The settings a Packer host would inject, as one trailing fragment.
    pub fn host_fragment(&self) -> Value {
        let mut fragment = Map::new();
        if let Some(name) = &self.build_name {
            fragment.insert("packer_build_name".into(), json!(name));
        }
        if let Some(builder_type) = &self.builder_type {
            fragment.insert("packer_builder_type".into(), json!(builder_type));
        }
        if !self.vars.is_empty() {
            let vars: Map<String, Value> = self
                .vars
                .iter()
                .map(|(k, v)| (k.clone(), json!(v)))
                .collect();
            fragment.insert("packer_user_variables".into(), Value::Object(vars));
        }
        Value::Object(fragment)
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
