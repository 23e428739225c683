use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Created .keymintrc.json"));

    let config = test.read_file(".keymintrc.json")?;
    assert!(config.contains("registryPath"));
    assert!(config.contains("typescript"));
    assert!(config.contains("openapi"));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keymintrc.json", "{}")?;

    let (code, _stdout, stderr) = run(test.command().arg("init"))?;
    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));

    // The existing file is untouched.
    assert_eq!(test.read_file(".keymintrc.json")?, "{}");

    Ok(())
}
