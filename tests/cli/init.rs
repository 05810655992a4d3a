use anyhow::Result;

use crate::{CliTest, exit_code};

#[test]
fn init_creates_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(exit_code(&output), 0);
    assert!(test.exists(".lokalrc.json"));

    let content = test.read_file(".lokalrc.json")?;
    assert!(content.contains("\"projectType\": \"react\""));
    assert!(content.contains("\"branch\": \"main\""));
    Ok(())
}

#[test]
fn init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;

    assert_eq!(exit_code(&test.run(&["init"])?), 0);
    let second = test.run(&["init"])?;
    assert_eq!(exit_code(&second), 2);
    Ok(())
}
