use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

mod export;
mod import;
mod init;
mod keys;
mod locales;
mod status;

const BIN: &str = env!("CARGO_BIN_EXE_lokal");

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery from walking above the sandbox.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A sandbox pre-seeded with en/vi locale files under `i18n/`.
    pub fn with_locales() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("i18n/en.json", "{\n  \"a.b\": \"hello\"\n}\n")?;
        test.write_file("i18n/vi.json", "{\n  \"a.b\": \"xin chao\"\n}\n")?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }

    pub fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new(BIN)
            .args(args)
            .current_dir(&self.project_dir)
            .output()
            .context("Failed to run lokal binary")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn exit_code(output: &Output) -> i32 {
    output.status.code().unwrap_or(-1)
}
