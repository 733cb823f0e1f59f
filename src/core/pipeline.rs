use crate::core::exporter;
use crate::core::synthesizer::RecordSynthesizer;
use crate::core::{ConfigProvider, ExportResult, Pipeline, Record, Storage};
use crate::domain::model::ExportFormat;
use crate::utils::error::{FormfillrError, Result};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generates records, renders them in the configured format and hands the
/// text to a storage sink.
pub struct GeneratorPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GeneratorPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn file_name(&self, format: ExportFormat) -> String {
        self.config
            .file_name()
            .unwrap_or_else(|| default_file_name(format))
    }
}

/// `formfillr_<unix millis>.<ext>`
pub fn default_file_name(format: ExportFormat) -> String {
    format!(
        "formfillr_{}.{}",
        Utc::now().timestamp_millis(),
        format.extension()
    )
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GeneratorPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let request = self.config.request();
        let seed = self.config.seed();

        tracing::debug!(
            "Synthesizing {} records (locale: {}, fields: {})",
            request.count,
            request.locale,
            request.fields.join(",")
        );

        // 生成屬於 CPU 工作，交給 blocking 執行緒
        let handle = tokio::task::spawn_blocking(move || {
            let synthesizer = RecordSynthesizer::for_locale(request.locale);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            synthesizer.synthesize(&request, &mut rng)
        });

        handle.await.map_err(|e| {
            tracing::error!("Record synthesis aborted: {}", e);
            FormfillrError::GenerationFailed {
                message: e.to_string(),
            }
        })
    }

    async fn transform(&self, records: Vec<Record>) -> Result<ExportResult> {
        if records.is_empty() {
            return Err(FormfillrError::NothingGenerated);
        }

        let fields = self.config.request().fields;
        let format = self.config.format();
        let content = exporter::export(&records, &fields, format)?;

        tracing::debug!(
            "Rendered {} records as {} ({} bytes)",
            records.len(),
            format,
            content.len()
        );

        Ok(ExportResult {
            file_name: self.file_name(format),
            records,
            fields,
            format,
            content,
        })
    }

    async fn load(&self, result: &ExportResult) -> Result<String> {
        if result.records.is_empty() {
            return Err(FormfillrError::NothingGenerated);
        }

        tracing::debug!(
            "Writing {} ({}) to storage",
            result.file_name,
            result.format.mime_type()
        );
        let destination = self
            .storage
            .write_file(&result.file_name, result.content.as_bytes())
            .await?;

        tracing::debug!("Export written to {}", destination);
        Ok(destination)
    }
}
