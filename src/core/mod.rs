pub mod engine;
pub mod exporter;
pub mod pipeline;
pub mod preview;
pub mod sources;
pub mod synthesizer;

pub use crate::domain::model::{ExportResult, Record, RunOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
