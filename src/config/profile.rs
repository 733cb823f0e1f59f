use crate::core::preview::{DEFAULT_PREVIEW_ROWS, MAX_PREVIEW_ROWS, MIN_PREVIEW_ROWS};
use crate::core::ConfigProvider;
use crate::domain::model::{default_fields, ExportFormat, GenerationRequest, LocaleTag};
use crate::i18n::UiLocale;
use crate::utils::error::{FormfillrError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved generation setup, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub profile: ProfileMeta,
    pub generation: GenerationSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSection {
    pub count: Option<i64>,
    pub locale: Option<String>,
    pub fields: Option<Vec<String>>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
    /// Directory for the export; omitted means stdout.
    pub path: Option<String>,
    pub file_name: Option<String>,
    pub preview_rows: Option<usize>,
    pub ui_locale: Option<String>,
}

impl ProfileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| FormfillrError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormfillrError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn format_name(&self) -> &str {
        self.output.format.as_deref().unwrap_or("json")
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    pub fn preview_rows(&self) -> usize {
        self.output.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS)
    }

    pub fn ui_locale(&self) -> UiLocale {
        UiLocale::from_tag(self.output.ui_locale.as_deref().unwrap_or("en"))
    }
}

impl ConfigProvider for ProfileConfig {
    fn request(&self) -> GenerationRequest {
        let fields = self.generation.fields.clone().unwrap_or_else(default_fields);
        GenerationRequest::new(
            self.generation.count.unwrap_or(25),
            fields,
            LocaleTag::from_tag(self.generation.locale.as_deref().unwrap_or("en")),
        )
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::from_name(self.format_name()).unwrap_or_default()
    }

    fn seed(&self) -> Option<u64> {
        self.generation.seed
    }

    fn file_name(&self) -> Option<String> {
        self.output.file_name.clone()
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("profile.name", &self.profile.name)?;
        validation::validate_required_field("generation.count", &self.generation.count)?;
        validation::validate_one_of("output.format", self.format_name(), &["json", "csv"])?;
        validation::validate_range(
            "output.preview_rows",
            self.preview_rows(),
            MIN_PREVIEW_ROWS,
            MAX_PREVIEW_ROWS,
        )?;
        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
            validation::validate_resolved("output.path", path)?;
        }
        if let Some(file_name) = &self.output.file_name {
            validation::validate_path("output.file_name", file_name)?;
            validation::validate_resolved("output.file_name", file_name)?;
        }
        Ok(())
    }
}
