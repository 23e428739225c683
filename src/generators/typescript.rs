//! TypeScript artifact generation.
//!
//! Emits the flat key table, namespace groupings, per-namespace key arrays,
//! the metadata table, and the filtered key sets as one module. The flat
//! table's one-key-per-line shape is relied on by the verifier's pattern
//! extraction and must stay stable.

use std::fmt::Write;

use crate::registry::{MessageEntry, Registry};

use super::{GenContext, header, quoted};

/// Declaration opening the flat key table; the verifier anchors on this.
pub const KEY_TABLE_MARKER: &str = "export const MESSAGE_KEYS = {";

/// Renders the full TypeScript artifact for the given registry.
pub fn generate(registry: &Registry, ctx: &GenContext) -> String {
    let mut out = String::new();

    out.push_str(&header(ctx));
    out.push('\n');

    render_key_table(&mut out, registry);
    render_namespace_tables(&mut out, registry);
    render_metadata(&mut out, registry);
    render_filtered_sets(&mut out, registry);

    out
}

fn render_key_table(out: &mut String, registry: &Registry) {
    out.push_str(KEY_TABLE_MARKER);
    out.push('\n');
    for key in registry.keys() {
        let _ = writeln!(out, "  {}: {},", quoted(key), quoted(key));
    }
    out.push_str("} as const;\n\n");
    out.push_str("export type MessageKey = keyof typeof MESSAGE_KEYS;\n\n");
}

fn render_namespace_tables(out: &mut String, registry: &Registry) {
    out.push_str("export const MESSAGE_KEYS_BY_NAMESPACE = {\n");
    for ns in &registry.namespaces {
        let _ = writeln!(out, "  {}: {{", quoted(&ns.name));
        for entry in &ns.entries {
            let _ = writeln!(out, "    {}: {},", quoted(&entry.name), quoted(&entry.key));
        }
        out.push_str("  },\n");
    }
    out.push_str("} as const;\n\n");

    for ns in &registry.namespaces {
        let _ = writeln!(
            out,
            "export const {}_MESSAGE_KEYS: readonly MessageKey[] = [",
            ns.name.to_uppercase()
        );
        for entry in &ns.entries {
            let _ = writeln!(out, "  {},", quoted(&entry.key));
        }
        out.push_str("];\n\n");
    }
}

fn render_metadata(out: &mut String, registry: &Registry) {
    out.push_str(concat!(
        "export interface MessageMetadata {\n",
        "  readonly key: MessageKey;\n",
        "  readonly namespace: string;\n",
        "  readonly category: string;\n",
        "  readonly description: string;\n",
        "  readonly templateParams: readonly string[];\n",
        "  readonly since: string;\n",
        "  readonly deprecated: boolean;\n",
        "  readonly apiUsage: boolean;\n",
        "  readonly uiUsage: boolean;\n",
        "}\n\n",
    ));

    out.push_str("export const MESSAGE_METADATA: Record<MessageKey, MessageMetadata> = {\n");
    for entry in registry.entries() {
        render_metadata_entry(out, entry);
    }
    out.push_str("};\n\n");
}

fn render_metadata_entry(out: &mut String, entry: &MessageEntry) {
    let params = entry
        .template_params
        .iter()
        .map(|p| quoted(p))
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(out, "  {}: {{", quoted(&entry.key));
    let _ = writeln!(out, "    key: {},", quoted(&entry.key));
    let _ = writeln!(out, "    namespace: {},", quoted(&entry.namespace));
    let _ = writeln!(out, "    category: {},", quoted(&entry.category));
    let _ = writeln!(out, "    description: {},", quoted(&entry.description));
    let _ = writeln!(out, "    templateParams: [{}],", params);
    let _ = writeln!(out, "    since: {},", quoted(&entry.since));
    let _ = writeln!(out, "    deprecated: {},", entry.deprecated);
    let _ = writeln!(out, "    apiUsage: {},", entry.api_usage);
    let _ = writeln!(out, "    uiUsage: {},", entry.ui_usage);
    out.push_str("  },\n");
}

fn render_filtered_sets(out: &mut String, registry: &Registry) {
    let sets: [(&str, Vec<&str>); 4] = [
        ("API_MESSAGE_KEYS", registry.api_keys()),
        ("UI_MESSAGE_KEYS", registry.ui_keys()),
        ("TEMPLATED_MESSAGE_KEYS", registry.templated_keys()),
        ("DEPRECATED_MESSAGE_KEYS", registry.deprecated_keys()),
    ];

    for (name, keys) in sets {
        let _ = writeln!(out, "export const {}: readonly MessageKey[] = [", name);
        for key in keys {
            let _ = writeln!(out, "  {},", quoted(key));
        }
        out.push_str("];\n\n");
    }

    // Trim the trailing blank line left by the last section.
    if out.ends_with("\n\n") {
        out.pop();
    }
}
