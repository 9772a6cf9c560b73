pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};
use toml_config::{LogFormat, TomlConfig};

pub const DEFAULT_DATA_FILE: &str = "courses.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "course-registry")]
#[command(about = "Register courses and their students and teachers")]
pub struct CliConfig {
    /// JSON file holding the registered courses
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output (adds debug logging for this crate)")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the interactive menu (default)
    #[default]
    Menu,
    /// Print every registered course and exit
    List,
}

/// Settings after merging the TOML file with command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: String,
    pub base_dir: String,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub verbose: bool,
    pub command: Command,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file_config = match &cli.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let settings = Self {
            data_file: cli
                .data_file
                .clone()
                .or_else(|| file_config.storage.data_file.clone())
                .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
            base_dir: file_config
                .storage
                .base_dir
                .clone()
                .unwrap_or_else(|| ".".to_string()),
            log_level: file_config.log_level().map(str::to_string),
            log_format: file_config.log_format(),
            verbose: cli.verbose,
            command: cli.command.unwrap_or_default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)?;
        validate_path("base_dir", &self.base_dir)
    }
}

impl ConfigProvider for Settings {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn log_directive(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}
