pub mod cli;
pub mod profile;

use crate::core::preview::{DEFAULT_PREVIEW_ROWS, MAX_PREVIEW_ROWS, MIN_PREVIEW_ROWS};
use crate::core::ConfigProvider;
use crate::domain::model::{ExportFormat, GenerationRequest, LocaleTag};
use crate::i18n::UiLocale;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "formfillr")]
#[command(about = "Generate realistic fake user records as JSON or CSV")]
pub struct CliConfig {
    /// Number of records; clamped to 1..=500
    #[arg(long, default_value = "25", allow_negative_numbers = true)]
    pub count: i64,

    /// Data locale: ar, en, es, fr, de, pt_BR, ja (unknown values use en)
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// Comma-separated field keys, in output order
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "id,name,email,phone,address"
    )]
    pub fields: Vec<String>,

    #[arg(long, default_value = "json", value_parser = ["json", "csv"])]
    pub format: String,

    /// Directory to save the export in; without it the export goes to stdout
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,

    /// Interface language for messages and the preview table (en, ar)
    #[arg(long, default_value = "en")]
    pub ui_locale: String,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn ui_locale(&self) -> UiLocale {
        UiLocale::from_tag(&self.ui_locale)
    }
}

impl ConfigProvider for CliConfig {
    fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.count,
            self.fields.iter().map(|f| f.trim().to_string()),
            LocaleTag::from_tag(&self.locale),
        )
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::from_name(&self.format).unwrap_or_default()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("format", &self.format, &["json", "csv"])?;
        validation::validate_range(
            "preview_rows",
            self.preview_rows,
            MIN_PREVIEW_ROWS,
            MAX_PREVIEW_ROWS,
        )?;
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}
