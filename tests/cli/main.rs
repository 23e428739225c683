use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod generate;
mod init;
mod verify;

const BIN_NAME: &str = "keymint";

pub const CONFIG: &str = r#"{
  "registryPath": "./registry",
  "localesRoot": "./locales",
  "typescript": { "enabled": true, "output": "./gen/message-keys.ts" },
  "go": { "enabled": true, "output": "./gen/keys.go", "package": "messages" },
  "openapi": { "enabled": true, "schemaPath": "./api/openapi.yaml" }
}"#;

pub const METADATA_FRAGMENT: &str = r#"metadata:
  version: "1.2.0"
  targets: [typescript, go]
  locales: [en, fr]
"#;

pub const AUTH_FRAGMENT: &str = r#"messages:
  auth:
    signin_required:
      key: auth.signin_required
      namespace: auth
      category: error
      description: Shown when an anonymous user opens a protected page.
      template_params: []
      since: "1.0.0"
      deprecated: false
      api_usage: true
      ui_usage: true
    profile_saved:
      key: auth.profile_saved
      namespace: auth
      category: success
      description: Confirmation after profile changes are stored.
      template_params: [name]
      since: "1.1.0"
      deprecated: false
      api_usage: true
      ui_usage: true
"#;

pub const UI_FRAGMENT: &str = r#"messages:
  ui:
    loading:
      key: ui.loading
      namespace: ui
      category: label
      description: Generic loading indicator text.
      template_params: []
      since: "1.0.0"
      deprecated: false
      api_usage: false
      ui_usage: true
"#;

pub const EN_LOCALE: &str = r#"{
  "auth": {
    "signin_required": "Please sign in to continue.",
    "profile_saved": "Profile saved, {name}."
  },
  "ui": { "loading": "Loading..." }
}"#;

pub const FR_LOCALE: &str = r#"{
  "auth": {
    "signin_required": "Veuillez vous connecter pour continuer.",
    "profile_saved": "Profil enregistre, {name}."
  },
  "ui": { "loading": "Chargement..." }
}"#;

pub const OPENAPI_BASE: &str = r#"openapi: "3.0.3"
info:
  title: Demo API
  version: "1.0.0"
paths: {}
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A fully scaffolded project: config, split registry, locale tables,
    /// and a base OpenAPI document.
    pub fn with_project() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(".keymintrc.json", CONFIG)?;
        test.write_file("registry/meta.yaml", METADATA_FRAGMENT)?;
        test.write_file("registry/auth.yaml", AUTH_FRAGMENT)?;
        test.write_file("registry/ui.yaml", UI_FRAGMENT)?;
        test.write_file("locales/en.json", EN_LOCALE)?;
        test.write_file("locales/fr.json", FR_LOCALE)?;
        test.write_file("api/openapi.yaml", OPENAPI_BASE)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("generate");
        cmd
    }

    pub fn verify_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("verify");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }
}

/// Runs a command and returns (exit code, stdout, stderr) as strings.
pub fn run(cmd: &mut Command) -> Result<(i32, String, String)> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to run keymint binary")?;
    Ok((
        status.code().unwrap_or(-1),
        String::from_utf8_lossy(&stdout).to_string(),
        String::from_utf8_lossy(&stderr).to_string(),
    ))
}
