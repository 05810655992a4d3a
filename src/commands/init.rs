use std::fs;
use std::path::Path;

use anyhow::Result;

use super::CommandResult;
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::reporter;

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    reporter::success(&format!("Created {}", CONFIG_FILE_NAME));
    Ok(CommandResult::clean())
}
