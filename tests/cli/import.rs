use anyhow::Result;

use crate::{CliTest, exit_code, stdout};

#[test]
fn import_locale_files_writes_canonical_tree() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("drop/en.json", r#"{"a.b": "hello"}"#)?;
    test.write_file("drop/vi.json", r#"{"a.b": "xin chao"}"#)?;

    let output = test.run(&[
        "import",
        "drop/en.json",
        "drop/vi.json",
        "--messages-root",
        "i18n",
    ])?;
    assert_eq!(exit_code(&output), 0);
    assert!(stdout(&output).contains("Imported 1 key(s) across 2 locale(s)"));

    assert_eq!(test.read_file("i18n/en.json")?, "{\n  \"a.b\": \"hello\"\n}\n");
    assert_eq!(
        test.read_file("i18n/vi.json")?,
        "{\n  \"a.b\": \"xin chao\"\n}\n"
    );
    Ok(())
}

#[test]
fn import_skips_broken_file_and_partially_succeeds() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("drop/en.json", r#"{"a.b": "hello"}"#)?;
    test.write_file("drop/vi.json", "{broken")?;

    let output = test.run(&[
        "import",
        "drop/en.json",
        "drop/vi.json",
        "--messages-root",
        "i18n",
    ])?;
    // Completed with issues: the broken file is skipped with a warning.
    assert_eq!(exit_code(&output), 1);
    assert!(test.exists("i18n/en.json"));
    assert!(!test.exists("i18n/vi.json"));
    Ok(())
}

#[test]
fn import_fails_when_nothing_parses() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("drop/strings.json", r#"{"a": "b"}"#)?;

    let output = test.run(&["import", "drop/strings.json", "--messages-root", "i18n"])?;
    assert_eq!(exit_code(&output), 2);
    assert!(!test.exists("i18n"));
    Ok(())
}

#[test]
fn import_flutter_arb_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("drop/intl_en.arb", r#"{"title": "Hi"}"#)?;
    test.write_file("drop/intl_vi.arb", r#"{"title": "Chao"}"#)?;

    let output = test.run(&[
        "import",
        "drop/intl_en.arb",
        "drop/intl_vi.arb",
        "--project-type",
        "flutter",
        "--messages-root",
        "l10n",
    ])?;
    assert_eq!(exit_code(&output), 0);
    assert!(test.exists("l10n/intl_en.arb"));
    assert!(test.exists("l10n/intl_vi.arb"));
    Ok(())
}
