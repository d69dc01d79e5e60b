use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_TRANSLATE_FUNCTION;

pub const CONFIG_FILE_NAME: &str = ".trsheetrc.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Spreadsheet function used in translation formulas.
    #[serde(default = "default_translate_function")]
    pub translate_function: String,
    /// Language code source text used when none is given on the command line.
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
    /// Files picked up when a directory is given as input.
    #[serde(default = "default_input_patterns")]
    pub input_patterns: Vec<String>,
}

fn default_translate_function() -> String {
    DEFAULT_TRANSLATE_FUNCTION.to_string()
}

fn default_output_extension() -> String {
    "json".to_string()
}

fn default_input_patterns() -> Vec<String> {
    vec!["**/*.dart".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate_function: default_translate_function(),
            languages: Vec::new(),
            output_extension: default_output_extension(),
            input_patterns: default_input_patterns(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.input_patterns {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'inputPatterns': \"{}\"", pattern)
            })?;
        }

        if self.translate_function.trim().is_empty() {
            anyhow::bail!("'translateFunction' must not be empty");
        }

        let ext = &self.output_extension;
        if ext.is_empty() || ext.contains(['/', '\\', '.']) {
            anyhow::bail!("Invalid 'outputExtension': \"{}\"", ext);
        }

        Ok(())
    }

    /// The configured languages as parser input, one entry per line.
    pub fn languages_text(&self) -> String {
        self.languages.join("\n")
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
#[derive(Debug)]
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
