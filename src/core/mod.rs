pub mod decode;
pub mod etl;
pub mod pipeline;
pub mod pseudonym;
pub mod report;

pub use crate::domain::model::{RawRecord, Report, Tally};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RecordSource};
pub use crate::utils::error::Result;
