pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::sqlite::SqliteRecordSource;
pub use crate::config::Settings;
pub use crate::core::{etl::ReportEngine, pipeline::NotificationPipeline};
pub use crate::utils::error::{NotiError, Result};
