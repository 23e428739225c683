use anyhow::Result;

use crate::{CliTest, EN_LOCALE, FR_LOCALE, UI_FRAGMENT, run};

fn generated_project() -> Result<CliTest> {
    let test = CliTest::with_project()?;
    let (code, stdout, stderr) = run(&mut test.generate_command())?;
    anyhow::ensure!(code == 0, "generate failed: {} {}", stdout, stderr);
    Ok(test)
}

const NEW_KEY_FRAGMENT: &str = r#"messages:
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
    brand_new:
      key: ui.brand_new
      namespace: ui
      category: label
      description: Added after the last generation run.
      template_params: []
      since: "1.3.0"
      deprecated: false
      api_usage: false
      ui_usage: true
"#;

#[test]
fn test_verify_clean_project() -> Result<()> {
    let test = generated_project()?;

    let (code, stdout, _) = run(&mut test.verify_command())?;
    assert_eq!(code, 0, "verify should pass: {}", stdout);
    assert!(stdout.contains("Verified 3 keys"));
    assert!(stdout.contains("no discrepancies found"));

    Ok(())
}

#[test]
fn test_new_registry_key_reported_missing() -> Result<()> {
    let test = generated_project()?;

    // The registry gains a key, artifacts are not regenerated. The locale
    // tables are updated so only the stale artifacts are reported.
    test.write_file("registry/ui.yaml", NEW_KEY_FRAGMENT)?;
    test.write_file(
        "locales/en.json",
        &EN_LOCALE.replace(
            "\"loading\": \"Loading...\"",
            "\"loading\": \"Loading...\", \"brand_new\": \"Brand new\"",
        ),
    )?;
    test.write_file(
        "locales/fr.json",
        &FR_LOCALE.replace(
            "\"loading\": \"Chargement...\"",
            "\"loading\": \"Chargement...\", \"brand_new\": \"Tout neuf\"",
        ),
    )?;

    let (code, stdout, _) = run(&mut test.verify_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"ui.brand_new\"  missing-key"));
    assert!(stdout.contains("the TypeScript artifact"));
    assert!(stdout.contains("the Go artifact"));

    Ok(())
}

#[test]
fn test_removed_registry_key_reported_extra() -> Result<()> {
    let test = generated_project()?;

    // ui.loading disappears from the registry but stays in the generated
    // artifacts and the locale tables.
    test.write_file(
        "registry/ui.yaml",
        r#"messages:
  ui: {}
"#,
    )?;

    let (code, stdout, _) = run(&mut test.verify_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"ui.loading\"  extra-key"));

    Ok(())
}

#[test]
fn test_empty_locale_value_is_warning_only() -> Result<()> {
    let test = generated_project()?;

    test.write_file(
        "locales/en.json",
        &EN_LOCALE.replace("\"Loading...\"", "\"\""),
    )?;

    let (code, stdout, _) = run(&mut test.verify_command())?;
    assert_eq!(code, 0, "warnings alone must not fail: {}", stdout);
    assert!(stdout.contains("warning: \"ui.loading\"  empty-value"));
    assert!(!stdout.contains("missing-key"));
    assert!(stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_missing_locale_key_is_error() -> Result<()> {
    let test = generated_project()?;

    test.write_file(
        "locales/fr.json",
        r#"{
  "auth": {
    "signin_required": "Veuillez vous connecter pour continuer.",
    "profile_saved": "Profil enregistre, {name}."
  }
}"#,
    )?;

    let (code, stdout, _) = run(&mut test.verify_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"ui.loading\"  missing-key"));
    assert!(stdout.contains("locale 'fr'"));

    Ok(())
}

#[test]
fn test_schema_lag_is_warning_only() -> Result<()> {
    let test = generated_project()?;

    // ui.loading gains API usage only in the registry: the schema now lacks
    // it (error). The code artifacts still carry the key itself, so they
    // stay clean.
    test.write_file(
        "registry/ui.yaml",
        &UI_FRAGMENT.replace("api_usage: false", "api_usage: true"),
    )?;

    let (code, stdout, _) = run(&mut test.verify_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"ui.loading\"  missing-key"));
    assert!(stdout.contains("the OpenAPI schema"));

    Ok(())
}

#[test]
fn test_stale_schema_code_is_warning() -> Result<()> {
    let test = generated_project()?;

    // auth.profile_saved loses API usage; the schema still lists it.
    test.write_file(
        "registry/auth.yaml",
        &crate::AUTH_FRAGMENT.replacen(
            "api_usage: true",
            "api_usage: false",
            1,
        ),
    )?;

    let (code, stdout, _) = run(&mut test.verify_command())?;
    assert_eq!(code, 0, "schema lag alone must not fail: {}", stdout);
    assert!(stdout.contains("warning: \"auth.signin_required\"  schema-lag"));

    Ok(())
}

#[test]
fn test_verbose_echoes_configuration() -> Result<()> {
    let test = generated_project()?;

    let (code, stdout, _) = run(test.verify_command().arg("--verbose"))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Effective configuration:"));
    assert!(stdout.contains("registryPath"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("--help"))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("verify"));
    assert!(stdout.contains("init"));

    Ok(())
}
