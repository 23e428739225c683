use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_generate_writes_all_artifacts() -> Result<()> {
    let test = CliTest::with_project()?;

    let (code, stdout, _stderr) = run(&mut test.generate_command())?;
    assert_eq!(code, 0, "generate should succeed: {}", stdout);

    assert!(stdout.contains("Generated the TypeScript artifact -> ./gen/message-keys.ts"));
    assert!(stdout.contains("Generated the Go artifact -> ./gen/keys.go"));
    assert!(stdout.contains("Updated the OpenAPI schema -> ./api/openapi.yaml"));
    assert!(stdout.contains("Generated from 3 messages in 2 namespaces"));
    assert!(stdout.contains("- auth: 2"));
    assert!(stdout.contains("- ui: 1"));

    let ts = test.read_file("gen/message-keys.ts")?;
    assert!(ts.contains("// Code generated from the message registry by keymint. DO NOT EDIT."));
    assert!(ts.contains("\"auth.signin_required\": \"auth.signin_required\","));
    assert!(ts.contains("export const MESSAGE_METADATA"));

    let go = test.read_file("gen/keys.go")?;
    assert!(go.contains("package messages"));
    assert!(go.contains("var MessageKeys = map[string]string{"));

    let schema = test.read_file("api/openapi.yaml")?;
    assert!(schema.contains("ApiMessageCode"));
    assert!(schema.contains("x-message-registry"));
    assert!(schema.contains("title: Demo API"));

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_project()?;

    let (code, _, _) = run(&mut test.generate_command())?;
    assert_eq!(code, 0);
    let ts_first = test.read_file("gen/message-keys.ts")?;
    let go_first = test.read_file("gen/keys.go")?;

    let (code, _, _) = run(&mut test.generate_command())?;
    assert_eq!(code, 0);

    assert_eq!(ts_first, test.read_file("gen/message-keys.ts")?);
    assert_eq!(go_first, test.read_file("gen/keys.go")?);

    Ok(())
}

#[test]
fn test_dry_run_plans_without_writing() -> Result<()> {
    let test = CliTest::with_project()?;
    let schema_before = test.read_file("api/openapi.yaml")?;

    let (code, stdout, _) = run(test.generate_command().arg("--dry-run"))?;
    assert_eq!(code, 0);

    let would_lines = stdout.lines().filter(|l| l.starts_with("Would")).count();
    assert_eq!(would_lines, 3, "expected three plan lines: {}", stdout);
    assert!(stdout.contains("Would generate the TypeScript artifact"));
    assert!(stdout.contains("Would generate the Go artifact"));
    assert!(stdout.contains("Would update the OpenAPI schema"));
    assert!(stdout.contains("Run without --dry-run"));

    assert!(!test.file_exists("gen/message-keys.ts"));
    assert!(!test.file_exists("gen/keys.go"));
    assert_eq!(schema_before, test.read_file("api/openapi.yaml")?);

    Ok(())
}

#[test]
fn test_disabled_target_is_skipped_explicitly() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        ".keymintrc.json",
        r#"{
          "registryPath": "./registry",
          "localesRoot": "./locales",
          "typescript": { "enabled": true, "output": "./gen/message-keys.ts" },
          "go": { "enabled": false, "output": "./gen/keys.go" },
          "openapi": { "enabled": false }
        }"#,
    )?;

    let (code, stdout, _) = run(&mut test.generate_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Skipping disabled target 'go'"));
    assert!(stdout.contains("Skipping disabled target 'openapi'"));
    assert!(test.file_exists("gen/message-keys.ts"));
    assert!(!test.file_exists("gen/keys.go"));

    Ok(())
}

#[test]
fn test_conflicting_fragments_abort() -> Result<()> {
    let test = CliTest::with_project()?;
    // Redefine an existing key with a different description.
    test.write_file(
        "registry/zz-conflict.yaml",
        r#"messages:
  auth:
    signin_required:
      key: auth.signin_required
      namespace: auth
      category: error
      description: A different wording.
      template_params: []
      since: "1.0.0"
      deprecated: false
      api_usage: true
      ui_usage: true
"#,
    )?;

    let (code, _stdout, stderr) = run(&mut test.generate_command())?;
    assert_eq!(code, 2);
    assert!(stderr.contains("Merge conflict"));
    assert!(stderr.contains("messages.auth.signin_required.description"));
    assert!(stderr.contains("auth.yaml"));
    assert!(stderr.contains("zz-conflict.yaml"));

    Ok(())
}

#[test]
fn test_missing_registry_fails_with_hint() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keymintrc.json",
        r#"{ "registryPath": "./registry/messages.yaml" }"#,
    )?;

    let (code, _stdout, stderr) = run(&mut test.generate_command())?;
    assert_eq!(code, 2);
    assert!(stderr.contains("not found"));

    Ok(())
}

#[test]
fn test_directory_fallback_for_file_path() -> Result<()> {
    let test = CliTest::with_project()?;
    // Point at a file that does not exist; the extension-stripped directory
    // ./registry does, so resolution falls back to the split layout.
    test.write_file(
        ".keymintrc.json",
        &crate::CONFIG.replace("\"./registry\"", "\"./registry.yaml\""),
    )?;

    let (code, stdout, _) = run(&mut test.generate_command())?;
    assert_eq!(code, 0, "fallback should resolve the directory: {}", stdout);
    assert!(test.file_exists("gen/message-keys.ts"));

    Ok(())
}

#[test]
fn test_key_position_mismatch_fails_validation() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "registry/ui.yaml",
        r#"messages:
  ui:
    loading:
      key: ui.spinner
      namespace: ui
      category: label
      description: Generic loading indicator text.
      template_params: []
      since: "1.0.0"
      deprecated: false
      api_usage: false
      ui_usage: true
"#,
    )?;

    let (code, _stdout, stderr) = run(&mut test.generate_command())?;
    assert_eq!(code, 2);
    assert!(stderr.contains("ui.spinner"));
    assert!(stderr.contains("ui.loading"));

    Ok(())
}
