use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract -> transform -> load; returns the rendered report.
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Reading notification records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("📥 Read {} records", records.len());

        let tally = self.pipeline.transform(records).await?;
        if tally.skipped > 0 {
            tracing::warn!("⚠️ Skipped {} unreadable records", tally.skipped);
        }
        tracing::info!("🧮 Counted {} matching notifications", tally.total);

        self.pipeline.load(tally).await
    }
}
