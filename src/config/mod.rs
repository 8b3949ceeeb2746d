pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::OutputFormat;
use crate::utils::error::{NotiError, Result};
use crate::utils::validation::{validate_bundle_id, validate_non_empty_string, validate_path, Validate};
use std::path::PathBuf;

#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::FileConfig;

/// Notification center database, relative to the home directory.
pub const DEFAULT_DB_RELATIVE_PATH: &str =
    "Library/Group Containers/group.com.apple.usernoted/db2/db";
pub const DEFAULT_APP_ID: &str = "com.tinyspeck.slackmacgap";
pub const DEFAULT_APP_LABEL: &str = "Slack";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "notistat")]
#[command(about = "Count notifications per day and per channel from the macOS notification database")]
pub struct CliConfig {
    #[arg(
        long,
        help = "Replace usernames with randomly generated names for privacy \
                (cannot be turned off here when the config file enables it)"
    )]
    pub replace_user_name: bool,

    #[arg(long, help = "Bundle id of the application to report on")]
    pub app_id: Option<String>,

    #[arg(long, help = "Display name used in the report headings")]
    pub app_label: Option<String>,

    #[arg(long, help = "Path to the notification database")]
    pub db_path: Option<String>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Seed for reproducible pseudonyms")]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 合併後的最終設定：命令列 > 設定檔 > 預設值
#[derive(Debug, Clone)]
pub struct Settings {
    pub db_path: PathBuf,
    pub app_id: String,
    pub app_label: String,
    pub replace_user_names: bool,
    pub seed: Option<u64>,
    pub output_format: OutputFormat,
}

pub fn default_db_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DB_RELATIVE_PATH))
        .ok_or(NotiError::HomeDirError)
}

impl Settings {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            app_id: DEFAULT_APP_ID.to_string(),
            app_label: DEFAULT_APP_LABEL.to_string(),
            replace_user_names: false,
            seed: None,
            output_format: OutputFormat::Table,
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path);
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };

        let db_path = match cli.db_path.as_deref().or(file.db_path()) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        let mut settings = Self::new(db_path);
        if let Some(app_id) = cli.app_id.as_deref().or(file.app_id()) {
            settings.app_id = app_id.to_string();
        }
        if let Some(label) = cli.app_label.as_deref().or(file.app_label()) {
            settings.app_label = label.to_string();
        }
        settings.replace_user_names =
            cli.replace_user_name || file.replace_user_names().unwrap_or(false);
        settings.seed = cli.seed.or(file.seed());
        settings.output_format = cli
            .format
            .or(file.output_format())
            .unwrap_or_default();

        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn app_id(&self) -> &str {
        &self.app_id
    }

    fn app_label(&self) -> &str {
        &self.app_label
    }

    fn replace_user_names(&self) -> bool {
        self.replace_user_names
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("db_path", &self.db_path.to_string_lossy())?;
        validate_bundle_id("app_id", &self.app_id)?;
        validate_non_empty_string("app_label", &self.app_label)?;
        Ok(())
    }
}
