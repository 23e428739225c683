//! Normalization of the merged tree into the canonical registry shape.
//!
//! The validator is the only component that reads the raw merged tree.
//! Everything downstream works with [`Registry`], so any malformed input a
//! generator could trip over must be rejected here, with an error naming the
//! offending entry and exactly what is wrong with it.

use anyhow::{Result, bail};
use serde_yaml::{Mapping, Value};

use super::model::{MessageEntry, Namespace, Registry, RegistryMetadata};

/// Fields every message entry must carry.
pub const REQUIRED_ENTRY_FIELDS: &[&str] = &[
    "key",
    "namespace",
    "category",
    "description",
    "template_params",
    "since",
    "deprecated",
    "api_usage",
    "ui_usage",
];

/// Validates the merged tree and produces the canonical [`Registry`].
///
/// A mismatch between an entry's `key` field and its position in the tree is
/// an error, never an auto-correction.
pub fn validate_registry(tree: &Value) -> Result<Registry> {
    let Some(root) = tree.as_mapping() else {
        bail!("Registry root must be a mapping.");
    };

    let metadata = validate_metadata(root)?;

    let Some(messages) = root.get("messages") else {
        bail!("Registry is missing the 'messages' section.");
    };
    let Some(messages) = messages.as_mapping() else {
        bail!("Registry 'messages' must be a mapping of namespaces.");
    };

    let mut namespaces = Vec::with_capacity(messages.len());
    for (ns_key, ns_value) in messages {
        let Some(ns_name) = ns_key.as_str() else {
            bail!("Namespace names must be strings.");
        };
        let Some(ns_map) = ns_value.as_mapping() else {
            bail!("Namespace '{}' must be a mapping of messages.", ns_name);
        };

        let mut entries = Vec::with_capacity(ns_map.len());
        for (msg_key, msg_value) in ns_map {
            let Some(msg_name) = msg_key.as_str() else {
                bail!("Message names in namespace '{}' must be strings.", ns_name);
            };
            entries.push(validate_entry(ns_name, msg_name, msg_value)?);
        }

        namespaces.push(Namespace {
            name: ns_name.to_string(),
            entries,
        });
    }

    Ok(Registry {
        metadata,
        namespaces,
    })
}

fn validate_metadata(root: &Mapping) -> Result<RegistryMetadata> {
    let Some(metadata) = root.get("metadata") else {
        bail!("Registry is missing the 'metadata' section.");
    };
    let Some(metadata) = metadata.as_mapping() else {
        bail!("Registry 'metadata' must be a mapping.");
    };

    let version = match metadata.get("version").and_then(Value::as_str) {
        Some(v) => v.to_string(),
        None => bail!("Registry metadata requires a string 'version'."),
    };

    let targets = string_sequence(metadata, "targets")?;
    let locales = string_sequence(metadata, "locales")?;

    Ok(RegistryMetadata {
        version,
        targets,
        locales,
    })
}

fn string_sequence(metadata: &Mapping, field: &str) -> Result<Vec<String>> {
    let Some(value) = metadata.get(field) else {
        bail!("Registry metadata requires a '{}' list.", field);
    };
    let Some(seq) = value.as_sequence() else {
        bail!("Registry metadata '{}' must be a list of strings.", field);
    };
    seq.iter()
        .map(|v| match v.as_str() {
            Some(s) => Ok(s.to_string()),
            None => bail!("Registry metadata '{}' must be a list of strings.", field),
        })
        .collect()
}

fn validate_entry(ns_name: &str, msg_name: &str, value: &Value) -> Result<MessageEntry> {
    let position = format!("{}.{}", ns_name, msg_name);

    let Some(map) = value.as_mapping() else {
        bail!("Message '{}' must be a mapping.", position);
    };

    let missing: Vec<&str> = REQUIRED_ENTRY_FIELDS
        .iter()
        .filter(|field| !map.contains_key(**field))
        .copied()
        .collect();
    if !missing.is_empty() {
        bail!(
            "Message '{}' is missing required fields: {}.",
            position,
            missing.join(", ")
        );
    }

    let key = string_field(map, &position, "key")?;
    let namespace = string_field(map, &position, "namespace")?;
    let category = string_field(map, &position, "category")?;
    let description = string_field(map, &position, "description")?;
    let since = string_field(map, &position, "since")?;
    let deprecated = bool_field(map, &position, "deprecated")?;
    let api_usage = bool_field(map, &position, "api_usage")?;
    let ui_usage = bool_field(map, &position, "ui_usage")?;
    let template_params = template_params(map, &position)?;

    if key != position {
        bail!(
            "Message '{}' declares key '{}', but its position requires '{}'.",
            position,
            key,
            position
        );
    }
    if namespace != ns_name {
        bail!(
            "Message '{}' declares namespace '{}', but it is defined under '{}'.",
            position,
            namespace,
            ns_name
        );
    }

    Ok(MessageEntry {
        key,
        namespace,
        name: msg_name.to_string(),
        category,
        description,
        template_params,
        since,
        deprecated,
        api_usage,
        ui_usage,
    })
}

fn string_field(map: &Mapping, position: &str, field: &str) -> Result<String> {
    match map.get(field).and_then(Value::as_str) {
        Some(s) => Ok(s.to_string()),
        None => bail!("Message '{}' field '{}' must be a string.", position, field),
    }
}

fn bool_field(map: &Mapping, position: &str, field: &str) -> Result<bool> {
    match map.get(field).and_then(Value::as_bool) {
        Some(b) => Ok(b),
        None => bail!("Message '{}' field '{}' must be a boolean.", position, field),
    }
}

fn template_params(map: &Mapping, position: &str) -> Result<Vec<String>> {
    let Some(seq) = map.get("template_params").and_then(Value::as_sequence) else {
        bail!("Message '{}' field 'template_params' must be an array.", position);
    };
    seq.iter()
        .map(|v| match v.as_str() {
            Some(s) => Ok(s.to_string()),
            None => bail!(
                "Message '{}' field 'template_params' must contain only strings.",
                position
            ),
        })
        .collect()
}
