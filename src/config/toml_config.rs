use crate::domain::model::OutputFormat;
use crate::utils::error::{NotiError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔，所有欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub source: Option<SourceConfig>,
    pub filter: Option<FilterConfig>,
    pub privacy: Option<PrivacyConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub db_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub app_id: Option<String>,
    pub app_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrivacyConfig {
    pub replace_user_names: Option<bool>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NotiError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NotiError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn db_path(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.db_path.as_deref())
    }

    pub fn app_id(&self) -> Option<&str> {
        self.filter.as_ref().and_then(|f| f.app_id.as_deref())
    }

    pub fn app_label(&self) -> Option<&str> {
        self.filter.as_ref().and_then(|f| f.app_label.as_deref())
    }

    pub fn replace_user_names(&self) -> Option<bool> {
        self.privacy.as_ref().and_then(|p| p.replace_user_names)
    }

    pub fn seed(&self) -> Option<u64> {
        self.privacy.as_ref().and_then(|p| p.seed)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}
