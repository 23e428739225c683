//! OpenAPI schema updater.
//!
//! Rewrites `components.schemas` of an existing schema document in place:
//! the full `ApiMessageCode` enum, role-partitioned code enums, response
//! envelope schemas, and an `x-message-registry` traceability block. The
//! rest of the document (info, paths, unrelated schemas) is preserved.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_yaml::{Mapping, Value};

use crate::registry::{MessageEntry, Registry};

use super::GenContext;

/// Updates the schema document at `path` in place.
pub fn update_schema(registry: &Registry, path: &Path, ctx: &GenContext) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read OpenAPI schema: {}", path.display()))?;
    let mut doc: Value = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse OpenAPI schema: {}", path.display()))?;

    splice_registry(registry, &mut doc, ctx)?;

    let rendered = serde_yaml::to_string(&doc)
        .with_context(|| format!("Failed to render OpenAPI schema: {}", path.display()))?;
    fs::write(path, rendered)
        .with_context(|| format!("Failed to write OpenAPI schema: {}", path.display()))
}

/// Splices registry-derived definitions into a parsed schema document.
pub fn splice_registry(registry: &Registry, doc: &mut Value, ctx: &GenContext) -> Result<()> {
    let Some(root) = doc.as_mapping_mut() else {
        bail!("OpenAPI schema must be a mapping document.");
    };

    let api_entries: Vec<&MessageEntry> =
        registry.entries().filter(|e| e.api_usage).collect();
    let errors: Vec<&MessageEntry> = partition(&api_entries, |c| c != "success" && c != "validation");
    let successes: Vec<&MessageEntry> = partition(&api_entries, |c| c == "success");
    let validations: Vec<&MessageEntry> = partition(&api_entries, |c| c == "validation");

    let schemas = ensure_mapping(ensure_mapping(root, "components")?, "schemas")?;

    schemas.insert(
        yaml("ApiMessageCode"),
        code_enum(&api_entries, "Every message code exposed on the API surface."),
    );
    schemas.insert(
        yaml("ErrorCode"),
        code_enum(&errors, "Message codes carried by error responses."),
    );
    schemas.insert(
        yaml("SuccessCode"),
        code_enum(&successes, "Message codes carried by success responses."),
    );
    schemas.insert(
        yaml("ValidationCode"),
        code_enum(&validations, "Message codes produced by request validation."),
    );
    schemas.insert(yaml("SuccessResponse"), success_envelope());
    schemas.insert(yaml("ErrorResponse"), error_envelope());

    root.insert(yaml("x-message-registry"), registry_metadata(registry, ctx));

    Ok(())
}

fn partition<'a>(
    entries: &[&'a MessageEntry],
    predicate: impl Fn(&str) -> bool,
) -> Vec<&'a MessageEntry> {
    entries
        .iter()
        .filter(|e| predicate(e.category.as_str()))
        .copied()
        .collect()
}

fn yaml(s: &str) -> Value {
    Value::String(s.to_string())
}

fn ensure_mapping<'a>(map: &'a mut Mapping, key: &str) -> Result<&'a mut Mapping> {
    let slot = map
        .entry(yaml(key))
        .or_insert_with(|| Value::Mapping(Mapping::new()));
    match slot.as_mapping_mut() {
        Some(mapping) => Ok(mapping),
        None => bail!("OpenAPI schema section '{}' must be a mapping.", key),
    }
}

fn code_enum(entries: &[&MessageEntry], description: &str) -> Value {
    let mut schema = Mapping::new();
    schema.insert(yaml("type"), yaml("string"));
    schema.insert(yaml("description"), yaml(description));
    schema.insert(
        yaml("enum"),
        Value::Sequence(entries.iter().map(|e| yaml(&e.key)).collect()),
    );

    let mut descriptions = Mapping::new();
    for entry in entries {
        descriptions.insert(yaml(&entry.key), yaml(&entry.description));
    }
    schema.insert(yaml("x-enum-descriptions"), Value::Mapping(descriptions));

    Value::Mapping(schema)
}

fn success_envelope() -> Value {
    envelope(
        "Standard success envelope.",
        "SuccessCode",
        "data",
        "Operation-specific payload.",
    )
}

fn error_envelope() -> Value {
    envelope(
        "Standard error envelope.",
        "ErrorCode",
        "details",
        "Machine-readable error details.",
    )
}

fn envelope(description: &str, code_schema: &str, extra_field: &str, extra_doc: &str) -> Value {
    let mut code = Mapping::new();
    code.insert(
        yaml("$ref"),
        yaml(&format!("#/components/schemas/{}", code_schema)),
    );

    let mut message = Mapping::new();
    message.insert(yaml("type"), yaml("string"));

    let mut extra = Mapping::new();
    extra.insert(yaml("description"), yaml(extra_doc));

    let mut properties = Mapping::new();
    properties.insert(yaml("code"), Value::Mapping(code));
    properties.insert(yaml("message"), Value::Mapping(message));
    properties.insert(yaml(extra_field), Value::Mapping(extra));

    let mut schema = Mapping::new();
    schema.insert(yaml("type"), yaml("object"));
    schema.insert(yaml("description"), yaml(description));
    schema.insert(
        yaml("required"),
        Value::Sequence(vec![yaml("code"), yaml("message")]),
    );
    schema.insert(yaml("properties"), Value::Mapping(properties));

    Value::Mapping(schema)
}

fn registry_metadata(registry: &Registry, ctx: &GenContext) -> Value {
    let mut block = Mapping::new();
    block.insert(yaml("version"), yaml(&registry.metadata.version));
    block.insert(
        yaml("keyCount"),
        Value::Number(registry.message_count().into()),
    );
    block.insert(
        yaml("namespaces"),
        Value::Sequence(
            registry
                .namespaces
                .iter()
                .map(|ns| yaml(&ns.name))
                .collect(),
        ),
    );
    block.insert(yaml("generatedAt"), yaml(&ctx.timestamp()));
    Value::Mapping(block)
}
