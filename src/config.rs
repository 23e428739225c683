use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keymintrc.json";

/// Default dot-path to the enum array the verifier diffs against the
/// registry's API-facing keys.
pub const DEFAULT_CODE_ENUM_PATH: &str = "components.schemas.ApiMessageCode.enum";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Registry source: a single YAML document or a directory of fragments.
    #[serde(default = "default_registry_path")]
    pub registry_path: String,
    /// Directory holding one `<locale>.json` translation table per locale.
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    /// Glob patterns excluding fragment files during directory resolution.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub typescript: TypeScriptTarget,
    #[serde(default, alias = "go")]
    pub golang: GoTarget,
    #[serde(default)]
    pub openapi: OpenApiTarget,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScriptTarget {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_typescript_output")]
    pub output: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoTarget {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_go_output")]
    pub output: String,
    /// Package name emitted in the artifact's `package` clause.
    #[serde(default = "default_go_package")]
    pub package: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiTarget {
    #[serde(default)]
    pub enabled: bool,
    /// Existing schema document updated in place.
    #[serde(default = "default_schema_path")]
    pub schema_path: String,
    /// Dot-path to the enum array checked against `apiUsage` keys.
    #[serde(default = "default_code_enum_path")]
    pub code_enum_path: String,
}

fn default_registry_path() -> String {
    "./registry/messages.yaml".to_string()
}

fn default_locales_root() -> String {
    "./locales".to_string()
}

fn default_true() -> bool {
    true
}

fn default_typescript_output() -> String {
    "./src/generated/message-keys.ts".to_string()
}

fn default_go_output() -> String {
    "./internal/messages/keys.go".to_string()
}

fn default_go_package() -> String {
    "messages".to_string()
}

fn default_schema_path() -> String {
    "./api/openapi.yaml".to_string()
}

fn default_code_enum_path() -> String {
    DEFAULT_CODE_ENUM_PATH.to_string()
}

impl Default for TypeScriptTarget {
    fn default() -> Self {
        Self {
            enabled: true,
            output: default_typescript_output(),
        }
    }
}

impl Default for GoTarget {
    fn default() -> Self {
        Self {
            enabled: false,
            output: default_go_output(),
            package: default_go_package(),
        }
    }
}

impl Default for OpenApiTarget {
    fn default() -> Self {
        Self {
            enabled: false,
            schema_path: default_schema_path(),
            code_enum_path: default_code_enum_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_path: default_registry_path(),
            locales_root: default_locales_root(),
            ignores: Vec::new(),
            typescript: TypeScriptTarget::default(),
            golang: GoTarget::default(),
            openapi: OpenApiTarget::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, or if
    /// the OpenAPI enum dot-path is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.openapi.code_enum_path.trim().is_empty() {
            anyhow::bail!("'openapi.codeEnumPath' must not be empty");
        }

        Ok(())
    }

    /// Compiled ignore patterns, assuming `validate` has passed.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
