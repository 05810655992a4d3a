use anyhow::Result;

use crate::{CliTest, exit_code, stdout};

#[test]
fn export_zip_writes_archive() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&[
        "export",
        "--format",
        "zip",
        "--out",
        "out.zip",
        "--messages-root",
        "i18n",
    ])?;
    assert_eq!(exit_code(&output), 0);
    assert!(test.exists("out.zip"));
    Ok(())
}

#[test]
fn export_xlsx_writes_workbook() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.run(&["export", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 0);
    assert!(test.exists("localizations.xlsx"));
    Ok(())
}

#[test]
fn export_empty_table_fails_without_producing_a_file() -> Result<()> {
    let test = CliTest::new()?;
    // Locale files exist but hold zero keys.
    test.write_file("i18n/en.json", "{}\n")?;

    let output = test.run(&[
        "export",
        "--format",
        "zip",
        "--out",
        "out.zip",
        "--messages-root",
        "i18n",
    ])?;
    assert_eq!(exit_code(&output), 2);
    assert!(stdout(&output).contains("Validation error"));
    assert!(!test.exists("out.zip"));
    Ok(())
}

#[test]
fn export_without_locale_files_fails() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["export", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 2);
    Ok(())
}
