use anyhow::Result;

use crate::{CliTest, exit_code, stdout};

#[test]
fn status_summarizes_table() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.run(&["key", "add", "auth.login", "--messages-root", "i18n"])?;

    let output = test.run(&["status", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 0);

    let text = stdout(&output);
    assert!(text.contains("en, vi"));
    assert!(text.contains("2"));
    assert!(text.contains("a, auth"));
    assert!(text.contains("untranslated"));
    Ok(())
}

#[test]
fn status_filter_narrows_key_count() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.run(&["key", "add", "auth.login", "--messages-root", "i18n"])?;

    let output = test.run(&["status", "--filter", "auth.", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("filtered by \"auth.\""));
    Ok(())
}

#[test]
fn status_reports_full_translation() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["status", "--messages-root", "i18n"])?;
    assert!(stdout(&output).contains("All keys are translated in every locale"));
    Ok(())
}
