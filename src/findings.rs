//! Finding types for verification results.
//!
//! This module defines every discrepancy the verifier can report. Each
//! finding is self-contained with all information needed by the reporter to
//! display it (CLI today, other frontends later). The verifier never fixes
//! anything; findings are purely diagnostic.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each finding type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    ExtraKey,
    EmptyValue,
    SchemaLag,
    KeyFormat,
    DuplicateKey,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::ExtraKey => write!(f, "extra-key"),
            Rule::EmptyValue => write!(f, "empty-value"),
            Rule::SchemaLag => write!(f, "schema-lag"),
            Rule::KeyFormat => write!(f, "key-format"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
        }
    }
}

// ============================================================
// Finding Types
// ============================================================

/// Key defined in the registry but absent from a checked artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyFinding {
    /// The registry key that was not found.
    pub key: String,
    /// Human label of the checked artifact ("TypeScript artifact",
    /// "locale 'en'", "OpenAPI schema").
    pub artifact: String,
    /// Path of the checked file.
    pub path: String,
}

impl MissingKeyFinding {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key present in an artifact but no longer defined in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraKeyFinding {
    pub key: String,
    pub artifact: String,
    pub path: String,
}

impl ExtraKeyFinding {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ExtraKey
    }
}

/// Locale defines the key but with an empty value.
///
/// A blank placeholder may be intentional mid-translation, so this stays a
/// warning while an absent key is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyValueFinding {
    pub key: String,
    pub locale: String,
    pub path: String,
}

impl EmptyValueFinding {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyValue
    }
}

/// Schema enum carries a code the registry no longer marks for API usage.
///
/// The schema may lag a key removal without breaking callers, so this is a
/// warning, unlike a code missing from the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaLagFinding {
    pub key: String,
    pub path: String,
}

impl SchemaLagFinding {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::SchemaLag
    }
}

/// Registry keys violating the `namespace.snake_case_name` convention.
/// All offenders are collected into one finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFormatFinding {
    pub offenders: Vec<String>,
}

impl KeyFormatFinding {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::KeyFormat
    }
}

/// Key appearing more than once across the registry. Structurally
/// impossible after a successful merge, checked defensively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyFinding {
    pub key: String,
    pub count: usize,
}

impl DuplicateKeyFinding {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateKey
    }
}

// ============================================================
// Finding Enum
// ============================================================

/// A discrepancy found during verification.
#[enum_dispatch(Describe)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    MissingKey(MissingKeyFinding),
    ExtraKey(ExtraKeyFinding),
    EmptyValue(EmptyValueFinding),
    SchemaLag(SchemaLagFinding),
    KeyFormat(KeyFormatFinding),
    DuplicateKey(DuplicateKeyFinding),
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::MissingKey(_) => MissingKeyFinding::severity(),
            Finding::ExtraKey(_) => ExtraKeyFinding::severity(),
            Finding::EmptyValue(_) => EmptyValueFinding::severity(),
            Finding::SchemaLag(_) => SchemaLagFinding::severity(),
            Finding::KeyFormat(_) => KeyFormatFinding::severity(),
            Finding::DuplicateKey(_) => DuplicateKeyFinding::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Finding::MissingKey(_) => MissingKeyFinding::rule(),
            Finding::ExtraKey(_) => ExtraKeyFinding::rule(),
            Finding::EmptyValue(_) => EmptyValueFinding::rule(),
            Finding::SchemaLag(_) => SchemaLagFinding::rule(),
            Finding::KeyFormat(_) => KeyFormatFinding::rule(),
            Finding::DuplicateKey(_) => DuplicateKeyFinding::rule(),
        }
    }
}

// ============================================================
// Describe Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Implemented by all finding types to give the report functions one
/// interface. Uses `enum_dispatch` for zero-cost dispatch on [`Finding`].
#[enum_dispatch]
pub trait Describe {
    /// Primary message to display (usually the key).
    fn message(&self) -> String;

    /// Path of the checked file, if the finding is tied to one.
    fn location(&self) -> Option<&str>;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Describe Implementations
// ============================================================

impl Describe for MissingKeyFinding {
    fn message(&self) -> String {
        self.key.clone()
    }

    fn location(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "defined in the registry but absent from {}",
            self.artifact
        ))
    }
}

impl Describe for ExtraKeyFinding {
    fn message(&self) -> String {
        self.key.clone()
    }

    fn location(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "present in {} but not defined in the registry",
            self.artifact
        ))
    }
}

impl Describe for EmptyValueFinding {
    fn message(&self) -> String {
        self.key.clone()
    }

    fn location(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("locale '{}' defines an empty value", self.locale))
    }
}

impl Describe for SchemaLagFinding {
    fn message(&self) -> String {
        self.key.clone()
    }

    fn location(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("schema lists a code the registry does not mark for API usage".to_string())
    }
}

impl Describe for KeyFormatFinding {
    fn message(&self) -> String {
        format!(
            "{} key(s) violate the naming convention",
            self.offenders.len()
        )
    }

    fn location(&self) -> Option<&str> {
        None
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("offending keys: {}", self.offenders.join(", ")))
    }
}

impl Describe for DuplicateKeyFinding {
    fn message(&self) -> String {
        self.key.clone()
    }

    fn location(&self) -> Option<&str> {
        None
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("defined {} times across the registry", self.count))
    }
}

// ============================================================
// Ordering for Finding (for sorting in reports)
// ============================================================

impl Ord for Finding {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        // Sort by: location (None last), rule, message
        match (self.location(), other.location()) {
            (Some(a), Some(b)) => a
                .cmp(b)
                .then_with(|| self.rule().cmp(&other.rule()))
                .then_with(|| self.message().cmp(&other.message())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self
                .rule()
                .cmp(&other.rule())
                .then_with(|| self.message().cmp(&other.message())),
        }
    }
}

impl PartialOrd for Finding {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
