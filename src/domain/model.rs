use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// `record` 表中的一列，`data` 尚未解碼
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub app_id: i64,
    pub data: Vec<u8>,
}

/// 通知 payload（property list）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(default)]
    pub app: String,
    /// Seconds since 2001-01-01T00:00:00Z.
    #[serde(default)]
    pub date: f64,
    #[serde(default)]
    pub req: NotificationRequest,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationRequest {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub iden: String,
    #[serde(default)]
    pub soun: Sound,
    #[serde(default)]
    pub subt: String,
    #[serde(default)]
    pub titl: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sound {
    #[serde(default)]
    pub nam: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Per-day and per-channel counters for one application.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    pub total: u64,
    pub daily: BTreeMap<String, u64>,
    pub channels: HashMap<String, u64>,
    pub skipped: usize,
}

impl Tally {
    pub fn record(&mut self, day: String, channel: String) {
        self.total += 1;
        *self.daily.entry(day).or_insert(0) += 1;
        *self.channels.entry(channel).or_insert(0) += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelCount {
    pub channel: String,
    pub count: u64,
}

/// 排序完成、可直接輸出的報表
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub app_id: String,
    #[serde(skip)]
    pub app_label: String,
    pub total: u64,
    pub daily: Vec<DailyCount>,
    pub channels: Vec<ChannelCount>,
}
