use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::ai::DEFAULT_SYSTEM_PROMPT;

pub const CONFIG_FILE_NAME: &str = ".lokalrc.json";

/// The kind of project the locale files belong to.
///
/// Determines where locale files live in the repository, their extension,
/// and how a locale code renders into a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    React,
    ReactNative,
    Flutter,
}

impl ProjectType {
    /// Repository path prefix that holds the locale files.
    pub fn remote_path_prefix(&self) -> &'static str {
        match self {
            ProjectType::React | ProjectType::ReactNative => "/src/i18n/",
            ProjectType::Flutter => "/lib/l10n/",
        }
    }

    /// Default glob for locale files under the prefix.
    pub fn locale_file_glob(&self) -> &'static str {
        match self {
            ProjectType::React | ProjectType::ReactNative => "**/*.json",
            ProjectType::Flutter => "**/*.arb",
        }
    }

    /// Default local directory for locale files.
    pub fn default_messages_root(&self) -> &'static str {
        match self {
            ProjectType::React | ProjectType::ReactNative => "./src/i18n",
            ProjectType::Flutter => "./lib/l10n",
        }
    }

    /// Repository file path for one locale (e.g., "/src/i18n/en.json" or
    /// "/lib/l10n/intl_en.arb").
    pub fn remote_file_path(&self, locale: &str) -> String {
        format!("{}{}", self.remote_path_prefix(), self.file_name(locale))
    }

    /// Local file name for one locale.
    pub fn file_name(&self, locale: &str) -> String {
        match self {
            ProjectType::React | ProjectType::ReactNative => format!("{}.json", locale),
            ProjectType::Flutter => format!("intl_{}.arb", locale),
        }
    }
}

impl FromStr for ProjectType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "react" => Ok(ProjectType::React),
            "react-native" => Ok(ProjectType::ReactNative),
            "flutter" => Ok(ProjectType::Flutter),
            other => anyhow::bail!(
                "Unknown project type \"{}\" (expected react, react-native, or flutter)",
                other
            ),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::React => write!(f, "react"),
            ProjectType::ReactNative => write!(f, "react-native"),
            ProjectType::Flutter => write!(f, "flutter"),
        }
    }
}

/// Azure DevOps connection settings for `pull` / `push`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfig {
    /// Collection URL, e.g. "https://devops.example.com/DefaultCollection".
    #[serde(default)]
    pub url: String,
    /// Project id or name.
    #[serde(default)]
    pub project: String,
    /// Repository id or name.
    #[serde(default)]
    pub repository: String,
    /// Branch to read from and push to.
    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_branch() -> String {
    "main".to_string()
}

/// AI translation settings. The API key is never stored here; it comes from
/// the environment (`LOKAL_AI_API_KEY`) or a CLI flag.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    #[serde(default = "default_ai_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_ai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_ai_model() -> String {
    "gpt-4-turbo".to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_ai_base_url(),
            model: default_ai_model(),
            system_prompt: default_system_prompt(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_project_type")]
    pub project_type: ProjectType,

    /// Local directory holding the per-locale files. Defaults by project
    /// type ("./src/i18n" or "./lib/l10n").
    #[serde(default)]
    pub messages_root: Option<String>,

    /// Override for the remote locale-file glob (defaults by project type).
    #[serde(default)]
    pub locale_glob: Option<String>,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub ai: AiConfig,
}

fn default_project_type() -> ProjectType {
    ProjectType::React
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_type: default_project_type(),
            messages_root: None,
            locale_glob: None,
            remote: RemoteConfig {
                branch: default_branch(),
                ..RemoteConfig::default()
            },
            ai: AiConfig::default(),
        }
    }
}

impl Config {
    /// Resolved messages root (explicit setting or project-type default).
    pub fn messages_root(&self) -> PathBuf {
        PathBuf::from(
            self.messages_root
                .clone()
                .unwrap_or_else(|| self.project_type.default_messages_root().to_string()),
        )
    }

    /// Resolved remote locale-file glob.
    pub fn locale_glob(&self) -> String {
        self.locale_glob
            .clone()
            .unwrap_or_else(|| self.project_type.locale_file_glob().to_string())
    }

    /// Validate configuration values.
    ///
    /// Returns an error if the locale glob does not parse.
    pub fn validate(&self) -> Result<()> {
        if let Some(pattern) = &self.locale_glob {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'localeGlob': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::tempdir;

    use crate::config::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project_type, ProjectType::React);
        assert_eq!(config.messages_root(), PathBuf::from("./src/i18n"));
        assert_eq!(config.locale_glob(), "**/*.json");
        assert_eq!(config.remote.branch, "main");
        assert_eq!(config.ai.model, "gpt-4-turbo");
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "projectType": "flutter",
              "messagesRoot": "./custom/l10n",
              "remote": {
                "url": "https://devops.example.com/DefaultCollection",
                "project": "app",
                "repository": "app-mobile"
              }
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.project_type, ProjectType::Flutter);
        assert_eq!(config.messages_root(), PathBuf::from("./custom/l10n"));
        assert_eq!(config.locale_glob(), "**/*.arb");
        assert_eq!(config.remote.branch, "main");
        assert_eq!(config.remote.repository, "app-mobile");
    }

    #[test]
    fn test_project_type_paths() {
        assert_eq!(
            ProjectType::React.remote_file_path("en"),
            "/src/i18n/en.json"
        );
        assert_eq!(
            ProjectType::Flutter.remote_file_path("vi"),
            "/lib/l10n/intl_vi.arb"
        );
        assert_eq!(ProjectType::ReactNative.file_name("en"), "en.json");
    }

    #[test]
    fn test_project_type_from_str() {
        assert_eq!(
            "react-native".parse::<ProjectType>().unwrap(),
            ProjectType::ReactNative
        );
        assert!("angular".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let config = Config {
            locale_glob: Some("**/*[.json".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert!(found.is_some());
    }

    #[test]
    fn test_load_config_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let loaded = load_config(dir.path()).unwrap();
        assert!(!loaded.from_file);
        assert_eq!(loaded.config.project_type, ProjectType::React);
    }
}
