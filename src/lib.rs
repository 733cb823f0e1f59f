pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod i18n;
pub mod utils;

pub use config::{cli::LocalStorage, cli::StdoutStorage, profile::ProfileConfig, CliConfig};
pub use crate::core::{
    engine::GenerationEngine,
    exporter::{to_delimited_text, to_json},
    pipeline::GeneratorPipeline,
    synthesizer::{synthesize, RecordSynthesizer},
};
pub use domain::model::{ExportFormat, FieldKey, GenerationRequest, LocaleTag, Record};
pub use utils::error::{FormfillrError, Result};
