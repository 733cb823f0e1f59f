//! Front-end glue shared by the binaries: run a generation, show the preview
//! and report the outcome in the interface language.

use crate::core::engine::GenerationEngine;
use crate::core::pipeline::GeneratorPipeline;
use crate::core::preview::render_preview;
use crate::core::{ConfigProvider, RunOutcome, Storage};
use crate::domain::model::{ExportFormat, GenerationRequest};
use crate::i18n::{self, UiLocale, UiStrings};
use crate::utils::error::{FormfillrError, Result};
use crate::{LocalStorage, StdoutStorage};

/// Where the export goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Print to stdout.
    Copy,
    /// Save under the directory.
    Download(String),
}

impl Destination {
    pub fn from_output(output: Option<&str>) -> Self {
        match output {
            Some(dir) => Destination::Download(dir.to_string()),
            None => Destination::Copy,
        }
    }
}

pub struct FrontEnd {
    pub ui_locale: UiLocale,
    pub preview_rows: usize,
}

impl FrontEnd {
    pub fn strings(&self) -> &'static UiStrings {
        i18n::strings(self.ui_locale)
    }

    pub async fn run<C: ConfigProvider>(&self, config: C, destination: &Destination) -> Result<RunOutcome> {
        match destination {
            Destination::Copy => execute(StdoutStorage::new(), config).await,
            Destination::Download(dir) => execute(LocalStorage::new(dir.clone()), config).await,
        }
    }

    /// What a run is about to produce, in the interface language.
    pub fn request_summary(
        &self,
        request: &GenerationRequest,
        format: ExportFormat,
        destination: &Destination,
    ) -> String {
        let strings = self.strings();
        let target = match destination {
            Destination::Copy => format!("{}: stdout", strings.copy),
            Destination::Download(dir) => format!("{}: {}", strings.download, dir),
        };

        [
            format!("{}:", strings.generate),
            format!("  {}: {}", strings.count, request.count),
            format!(
                "  {}: {} ({})",
                strings.locale,
                request.locale,
                request.locale.display_name()
            ),
            format!("  {}: {}", strings.fields, request.fields.join(", ")),
            format!("  {}: {}", strings.format, format),
            format!("  {}", target),
        ]
        .join("\n")
    }

    /// Preview table followed by the success line, both for stderr.
    pub fn success_report(&self, outcome: &RunOutcome, destination: &Destination) -> String {
        let strings = self.strings();
        let table = render_preview(
            &outcome.records,
            &outcome.fields,
            self.preview_rows,
            i18n::direction(self.ui_locale),
        )
        .unwrap_or_else(|| strings.no_preview.to_string());

        let status = match destination {
            Destination::Copy => strings.copied.to_string(),
            Destination::Download(_) => format!("{}: {}", strings.saved_to, outcome.destination),
        };

        format!("{}\n{}\n\n{}", strings.preview, table, status)
    }

    pub fn failure_message(&self, error: &FormfillrError, destination: &Destination) -> String {
        let strings = self.strings();
        match (error, destination) {
            (FormfillrError::GenerationFailed { .. }, _) => strings.generation_failed.to_string(),
            (FormfillrError::NothingGenerated, _) => strings.generate_first.to_string(),
            (FormfillrError::IoError(_), Destination::Copy) => strings.copy_failed.to_string(),
            (FormfillrError::IoError(_), Destination::Download(_)) => {
                strings.download_failed.to_string()
            }
            _ => error.user_friendly_message(),
        }
    }
}

async fn execute<S: Storage, C: ConfigProvider>(storage: S, config: C) -> Result<RunOutcome> {
    let pipeline = GeneratorPipeline::new(storage, config);
    GenerationEngine::new(pipeline).run().await
}
