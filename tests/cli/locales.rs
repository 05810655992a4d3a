use anyhow::Result;

use crate::{CliTest, exit_code, stdout};

#[test]
fn locale_add_creates_backfilled_file() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["locale", "add", "fr", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 0);

    let fr = test.read_file("i18n/fr.json")?;
    assert!(fr.contains("\"a.b\": \"\""));
    Ok(())
}

#[test]
fn locale_add_existing_is_a_reported_noop() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["locale", "add", "en", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("already supported"));
    Ok(())
}
