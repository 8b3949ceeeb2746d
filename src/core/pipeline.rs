use crate::core::decode::{day_key, decode_payload};
use crate::core::pseudonym::UsernameMapping;
use crate::core::report::{build_report, render_json, render_table};
use crate::core::{ConfigProvider, Pipeline, RawRecord, RecordSource, Tally};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

pub const UNKNOWN_CHANNEL: &str = "Unknown";

pub struct NotificationPipeline<S: RecordSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: RecordSource, C: ConfigProvider> NotificationPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

#[async_trait::async_trait]
impl<S: RecordSource, C: ConfigProvider> Pipeline for NotificationPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawRecord>> {
        let records = self.source.fetch_records().await?;
        tracing::debug!("Fetched {} raw records", records.len());
        Ok(records)
    }

    async fn transform(&self, records: Vec<RawRecord>) -> Result<Tally> {
        let app_id = self.config.app_id();
        let mut tally = Tally::default();

        // 假名對照只活在這一次執行
        let mut mapping = self
            .config
            .replace_user_names()
            .then(|| UsernameMapping::new(self.config.seed()));

        for record in records {
            let payload = match decode_payload(&record.data) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!("⚠️ Error decoding plist for app_id {}: {}", record.app_id, e);
                    tally.skipped += 1;
                    continue;
                }
            };

            if payload.app != app_id {
                continue;
            }

            let day = match day_key(payload.date) {
                Ok(day) => day,
                Err(e) => {
                    tracing::warn!("⚠️ Skipping record for app_id {}: {}", record.app_id, e);
                    tally.skipped += 1;
                    continue;
                }
            };

            let mut channel = if payload.req.subt.is_empty() {
                UNKNOWN_CHANNEL.to_string()
            } else {
                payload.req.subt
            };

            if let Some(mapping) = mapping.as_mut() {
                channel = mapping.replace_usernames_in_text(&channel);
            }

            tally.record(day, channel);
        }

        if let Some(mapping) = &mapping {
            tracing::debug!("Replaced {} user names with pseudonyms", mapping.len());
        }

        Ok(tally)
    }

    async fn load(&self, tally: Tally) -> Result<String> {
        let report = build_report(tally, self.config.app_id(), self.config.app_label());

        match self.config.output_format() {
            OutputFormat::Table => Ok(render_table(&report)),
            OutputFormat::Json => render_json(&report),
        }
    }
}
