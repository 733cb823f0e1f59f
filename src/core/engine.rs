use crate::core::{Pipeline, RunOutcome};
use crate::utils::error::Result;

pub struct GenerationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GenerationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs synthesize, export and write in order. A failure in any stage
    /// aborts the run and nothing from it is kept.
    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Generating records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Generated {} records", records.len());

        let result = self.pipeline.transform(records).await?;
        tracing::info!(
            "Exported {} records as {}",
            result.records.len(),
            result.format
        );

        let destination = self.pipeline.load(&result).await?;
        tracing::info!("Output written to: {}", destination);

        Ok(RunOutcome {
            destination,
            records: result.records,
            fields: result.fields,
        })
    }
}
