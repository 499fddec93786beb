//! Decoding of raw configuration fragments into a resolved [`Config`].
//!
//! Packer passes a plugin its configuration as a list of loosely-typed maps:
//! the user's post-processor block followed by the build-wide `packer_*`
//! settings. They are merged in order, split by prefix, decoded strictly and
//! then the output path is interpolated and validated.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::interpolate::{self, InterpolateContext};
use crate::config::model::{
    Config, DEFAULT_OUTPUT_PATH, PACKER_KEY_PREFIX, PackerConfig, RawConfig,
};
use crate::error::ConfigError;

/// Shallow-merge `raws` into one map, later fragments overriding earlier keys.
///
/// `null` fragments are skipped; any other non-object is rejected.
pub fn merge_fragments(raws: &[Value]) -> Result<Map<String, Value>, ConfigError> {
    let mut merged = Map::new();

    for (index, raw) in raws.iter().enumerate() {
        match raw {
            Value::Null => {}
            Value::Object(fragment) => {
                for (key, value) in fragment {
                    merged.insert(key.clone(), value.clone());
                }
            }
            _ => return Err(ConfigError::InvalidFragment { index }),
        }
    }

    Ok(merged)
}

/// Decode and resolve a configuration from raw fragments.
pub fn resolve(raws: &[Value]) -> Result<Config, ConfigError> {
    let (packer_keys, plugin_keys): (Map<String, Value>, Map<String, Value>) =
        merge_fragments(raws)?
            .into_iter()
            .partition(|(key, _)| key.starts_with(PACKER_KEY_PREFIX));

    let packer: PackerConfig = decode_map(packer_keys)?;
    let raw: RawConfig = decode_map(plugin_keys)?;

    let ctx = InterpolateContext::from_packer(&packer);
    resolve_with(raw, packer, ctx)
}

pub(crate) fn resolve_with(
    raw: RawConfig,
    packer: PackerConfig,
    ctx: InterpolateContext,
) -> Result<Config, ConfigError> {
    let mut output_path = ctx
        .render(&raw.output)
        .map_err(|e| ConfigError::Interpolate {
            field: "output".to_string(),
            message: interpolate::describe(&e),
        })?;

    if output_path.is_empty() {
        output_path = DEFAULT_OUTPUT_PATH.to_string();
    }

    interpolate::validate(&output_path)
        .map_err(|e| ConfigError::TemplateValidation(interpolate::describe(&e)))?;

    debug!(
        output = %output_path,
        strip_path = raw.strip_path,
        build_name = %packer.build_name,
        "resolved post-processor configuration"
    );

    Ok(Config {
        output_path,
        strip_path: raw.strip_path,
        packer,
        ctx,
    })
}

fn decode_map<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, ConfigError> {
    serde_json::from_value(Value::Object(map)).map_err(|e| ConfigError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn no_fragments_resolves_to_defaults() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config.output_path, DEFAULT_OUTPUT_PATH);
        assert!(!config.strip_path);
        assert_eq!(config.packer, PackerConfig::default());
    }

    #[test]
    fn missing_or_empty_output_uses_default() {
        for raws in [
            vec![json!({})],
            vec![json!({"strip_path": true})],
            vec![json!({"output": ""})],
            vec![Value::Null],
        ] {
            let config = resolve(&raws).unwrap();
            assert_eq!(config.output_path, "packer-manifest.json", "{raws:?}");
        }
    }

    #[test]
    fn later_fragments_override_earlier_ones() {
        let config = resolve(&[
            json!({"output": "first.json", "strip_path": true}),
            json!({"output": "second.json"}),
        ])
        .unwrap();
        assert_eq!(config.output_path, "second.json");
        assert!(config.strip_path);
    }

    #[test]
    fn output_is_rendered_against_packer_settings() {
        let config = resolve(&[
            json!({"output": "manifests/{{ build_name }}-{{ user.env }}.json"}),
            json!({
                "packer_build_name": "web",
                "packer_builder_type": "amazon-ebs",
                "packer_user_variables": {"env": "prod"}
            }),
        ])
        .unwrap();
        assert_eq!(config.output_path, "manifests/web-prod.json");
        assert_eq!(config.packer.build_name, "web");
        assert_eq!(config.interpolate_context().build_type, "amazon-ebs");
    }

    #[test]
    fn unknown_key_is_a_decode_error() {
        let err = resolve(&[json!({"outptu": "x.json"})]).unwrap_err();
        match err {
            ConfigError::Decode(message) => assert!(message.contains("outptu"), "{message}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_packer_key_is_a_decode_error() {
        let err = resolve(&[json!({"packer_template_path": "x"})]).unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
    }

    #[test]
    fn wrong_type_is_a_decode_error() {
        let err = resolve(&[json!({"strip_path": "yes"})]).unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
    }

    #[test]
    fn non_object_fragment_is_rejected() {
        let err = resolve(&[json!({}), json!(["output"])]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidFragment { index: 1 });
    }

    #[test]
    fn broken_template_fails_interpolation() {
        let err = resolve(&[json!({"output": "{{ build_name"})]).unwrap_err();
        match err {
            ConfigError::Interpolate { field, message } => {
                assert_eq!(field, "output");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rendered_template_syntax_fails_validation() {
        let packer = PackerConfig {
            user_variables: BTreeMap::from([("bad".to_string(), "{{ oops".to_string())]),
            ..Default::default()
        };
        let ctx = InterpolateContext::from_packer(&packer);
        let raw = RawConfig {
            output: "{{ user.bad }}".to_string(),
            strip_path: false,
        };

        let err = resolve_with(raw, packer, ctx).unwrap_err();
        let ConfigError::TemplateValidation(message) = &err else {
            panic!("unexpected error: {err:?}");
        };
        assert!(!message.is_empty());
        assert!(err.to_string().starts_with("Error parsing target template: "));
    }

    #[test]
    fn merge_keeps_keys_from_all_fragments() {
        let merged = merge_fragments(&[json!({"a": 1}), json!({"b": 2}), json!({"a": 3})]).unwrap();
        assert_eq!(merged.get("a"), Some(&json!(3)));
        assert_eq!(merged.get("b"), Some(&json!(2)));
    }
}
