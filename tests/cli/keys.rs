use anyhow::Result;

use crate::{CliTest, exit_code, stdout};

#[test]
fn key_add_backfills_every_locale() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["key", "add", "c.d", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 0);

    let en = test.read_file("i18n/en.json")?;
    let vi = test.read_file("i18n/vi.json")?;
    assert!(en.contains("\"c.d\": \"\""));
    assert!(vi.contains("\"c.d\": \"\""));
    Ok(())
}

#[test]
fn key_add_twice_is_a_reported_noop() -> Result<()> {
    let test = CliTest::with_locales()?;

    assert_eq!(
        exit_code(&test.run(&["key", "add", "c.d", "--messages-root", "i18n"])?),
        0
    );
    test.run(&["set", "c.d", "en", "filled", "--messages-root", "i18n"])?;

    let second = test.run(&["key", "add", "c.d", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&second), 0);
    assert!(stdout(&second).contains("already exists"));

    // The earlier value survived the second add.
    assert!(test.read_file("i18n/en.json")?.contains("\"c.d\": \"filled\""));
    Ok(())
}

#[test]
fn key_delete_then_delete_again() -> Result<()> {
    let test = CliTest::with_locales()?;

    let first = test.run(&["key", "delete", "a.b", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&first), 0);
    assert!(!test.read_file("i18n/en.json")?.contains("a.b"));

    let second = test.run(&["key", "delete", "a.b", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&second), 0);
    assert!(stdout(&second).contains("does not exist"));
    Ok(())
}

#[test]
fn key_add_rejects_empty_key() -> Result<()> {
    let test = CliTest::with_locales()?;
    let output = test.run(&["key", "add", "", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 2);
    Ok(())
}

#[test]
fn set_registers_unknown_locale() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["set", "a.b", "de", "hallo", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 0);

    // The new locale file exists and the existing ones are untouched in
    // their values.
    assert!(test.read_file("i18n/de.json")?.contains("\"a.b\": \"hallo\""));
    assert!(test.read_file("i18n/en.json")?.contains("\"a.b\": \"hello\""));
    Ok(())
}
