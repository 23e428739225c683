//! Go artifact generation.
//!
//! Same content as the TypeScript artifact expressed as Go declarations:
//! key map, namespace groupings, per-namespace slices, metadata table, and
//! filtered slices. The `MessageKeys` map literal is the verifier's
//! extraction anchor.

use std::fmt::Write;

use crate::registry::{MessageEntry, Registry};

use super::{GenContext, header, quoted};

/// Declaration opening the flat key table; the verifier anchors on this.
pub const KEY_TABLE_MARKER: &str = "var MessageKeys = map[string]string{";

/// Renders the full Go artifact for the given registry.
pub fn generate(registry: &Registry, package: &str, ctx: &GenContext) -> String {
    let mut out = String::new();

    out.push_str(&header(ctx));
    out.push('\n');
    let _ = writeln!(out, "package {}\n", package);

    render_key_table(&mut out, registry);
    render_namespace_tables(&mut out, registry);
    render_metadata(&mut out, registry);
    render_filtered_sets(&mut out, registry);

    out
}

fn render_key_table(out: &mut String, registry: &Registry) {
    out.push_str("// MessageKeys maps every registry key to itself.\n");
    out.push_str(KEY_TABLE_MARKER);
    out.push('\n');
    for key in registry.keys() {
        let _ = writeln!(out, "\t{}: {},", quoted(key), quoted(key));
    }
    out.push_str("}\n\n");
}

fn render_namespace_tables(out: &mut String, registry: &Registry) {
    out.push_str("// MessageKeysByNamespace groups message keys by namespace.\n");
    out.push_str("var MessageKeysByNamespace = map[string]map[string]string{\n");
    for ns in &registry.namespaces {
        let _ = writeln!(out, "\t{}: {{", quoted(&ns.name));
        for entry in &ns.entries {
            let _ = writeln!(out, "\t\t{}: {},", quoted(&entry.name), quoted(&entry.key));
        }
        out.push_str("\t},\n");
    }
    out.push_str("}\n\n");

    for ns in &registry.namespaces {
        let ident = pascal_case(&ns.name);
        let _ = writeln!(
            out,
            "// {}MessageKeys lists every key in the {} namespace.",
            ident,
            quoted(&ns.name)
        );
        let _ = writeln!(out, "var {}MessageKeys = []string{{", ident);
        for entry in &ns.entries {
            let _ = writeln!(out, "\t{},", quoted(&entry.key));
        }
        out.push_str("}\n\n");
    }
}

fn render_metadata(out: &mut String, registry: &Registry) {
    out.push_str(concat!(
        "// MessageMetadata describes a single registry entry.\n",
        "type MessageMetadata struct {\n",
        "\tKey            string\n",
        "\tNamespace      string\n",
        "\tCategory       string\n",
        "\tDescription    string\n",
        "\tTemplateParams []string\n",
        "\tSince          string\n",
        "\tDeprecated     bool\n",
        "\tAPIUsage       bool\n",
        "\tUIUsage        bool\n",
        "}\n\n",
    ));

    out.push_str("// MessageMetadataByKey indexes every entry's metadata by key.\n");
    out.push_str("var MessageMetadataByKey = map[string]MessageMetadata{\n");
    for entry in registry.entries() {
        render_metadata_entry(out, entry);
    }
    out.push_str("}\n\n");
}

fn render_metadata_entry(out: &mut String, entry: &MessageEntry) {
    let params = entry
        .template_params
        .iter()
        .map(|p| quoted(p))
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(out, "\t{}: {{", quoted(&entry.key));
    let _ = writeln!(out, "\t\tKey:            {},", quoted(&entry.key));
    let _ = writeln!(out, "\t\tNamespace:      {},", quoted(&entry.namespace));
    let _ = writeln!(out, "\t\tCategory:       {},", quoted(&entry.category));
    let _ = writeln!(out, "\t\tDescription:    {},", quoted(&entry.description));
    let _ = writeln!(out, "\t\tTemplateParams: []string{{{}}},", params);
    let _ = writeln!(out, "\t\tSince:          {},", quoted(&entry.since));
    let _ = writeln!(out, "\t\tDeprecated:     {},", entry.deprecated);
    let _ = writeln!(out, "\t\tAPIUsage:       {},", entry.api_usage);
    let _ = writeln!(out, "\t\tUIUsage:        {},", entry.ui_usage);
    out.push_str("\t},\n");
}

fn render_filtered_sets(out: &mut String, registry: &Registry) {
    let sets: [(&str, &str, Vec<&str>); 4] = [
        (
            "APIMessageKeys",
            "keys consumed by the API surface",
            registry.api_keys(),
        ),
        (
            "UIMessageKeys",
            "keys consumed by the UI surface",
            registry.ui_keys(),
        ),
        (
            "TemplatedMessageKeys",
            "keys with interpolation parameters",
            registry.templated_keys(),
        ),
        (
            "DeprecatedMessageKeys",
            "keys marked deprecated",
            registry.deprecated_keys(),
        ),
    ];

    for (name, doc, keys) in sets {
        let _ = writeln!(out, "// {} lists {}.", name, doc);
        let _ = writeln!(out, "var {} = []string{{", name);
        for key in keys {
            let _ = writeln!(out, "\t{},", quoted(key));
        }
        out.push_str("}\n\n");
    }

    if out.ends_with("\n\n") {
        out.pop();
    }
}

/// Converts a snake_case namespace name to an exported Go identifier.
fn pascal_case(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_context;
    use crate::registry::model::fixtures::sample_registry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contains_all_sections() {
        let artifact = generate(&sample_registry(), "messages", &test_context());

        assert!(artifact.starts_with("// Code generated"));
        assert!(artifact.contains("package messages\n"));
        assert!(artifact.contains(KEY_TABLE_MARKER));
        assert!(artifact.contains("\t\"auth.signin_required\": \"auth.signin_required\","));
        assert!(artifact.contains("var MessageKeysByNamespace = map[string]map[string]string{"));
        assert!(artifact.contains("var AuthMessageKeys = []string{"));
        assert!(artifact.contains("type MessageMetadata struct {"));
        assert!(artifact.contains("var APIMessageKeys = []string{"));
        assert!(artifact.contains("var DeprecatedMessageKeys = []string{"));
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("auth"), "Auth");
        assert_eq!(pascal_case("user_profile"), "UserProfile");
    }

    #[test]
    fn test_metadata_entry_fields() {
        let artifact = generate(&sample_registry(), "messages", &test_context());

        assert!(artifact.contains("\t\"validation.too_short\": {"));
        assert!(artifact.contains("\t\tTemplateParams: []string{\"field\", \"min\"},"));
        assert!(artifact.contains("\t\tCategory:       \"validation\","));
    }

    #[test]
    fn test_idempotent() {
        let registry = sample_registry();
        let ctx = test_context();
        assert_eq!(
            generate(&registry, "messages", &ctx),
            generate(&registry, "messages", &ctx)
        );
    }

    #[test]
    fn test_custom_package_name() {
        let artifact = generate(&sample_registry(), "msgkeys", &test_context());
        assert!(artifact.contains("package msgkeys\n"));
    }
}
