use crate::domain::model::{OutputFormat, RawRecord, Tally};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait RecordSource: Send + Sync {
    fn fetch_records(&self) -> impl std::future::Future<Output = Result<Vec<RawRecord>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn app_id(&self) -> &str;
    fn app_label(&self) -> &str;
    fn replace_user_names(&self) -> bool;
    fn seed(&self) -> Option<u64>;
    fn output_format(&self) -> OutputFormat;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawRecord>>;
    async fn transform(&self, records: Vec<RawRecord>) -> Result<Tally>;
    async fn load(&self, tally: Tally) -> Result<String>;
}
