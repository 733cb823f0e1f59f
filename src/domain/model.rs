use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 500;

/// A synthesizable attribute of a generated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Id,
    Name,
    FirstName,
    LastName,
    Email,
    Phone,
    Username,
    Company,
    JobTitle,
    Address,
    City,
    State,
    Zip,
    Country,
    Dob,
    Avatar,
}

impl FieldKey {
    pub const ALL: [FieldKey; 16] = [
        FieldKey::Id,
        FieldKey::Name,
        FieldKey::FirstName,
        FieldKey::LastName,
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::Username,
        FieldKey::Company,
        FieldKey::JobTitle,
        FieldKey::Address,
        FieldKey::City,
        FieldKey::State,
        FieldKey::Zip,
        FieldKey::Country,
        FieldKey::Dob,
        FieldKey::Avatar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Id => "id",
            FieldKey::Name => "name",
            FieldKey::FirstName => "firstName",
            FieldKey::LastName => "lastName",
            FieldKey::Email => "email",
            FieldKey::Phone => "phone",
            FieldKey::Username => "username",
            FieldKey::Company => "company",
            FieldKey::JobTitle => "jobTitle",
            FieldKey::Address => "address",
            FieldKey::City => "city",
            FieldKey::State => "state",
            FieldKey::Zip => "zip",
            FieldKey::Country => "country",
            FieldKey::Dob => "dob",
            FieldKey::Avatar => "avatar",
        }
    }

    /// Keys are matched exactly; `firstname` is not `firstName`.
    pub fn parse(key: &str) -> Option<FieldKey> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects which language data backs the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocaleTag {
    #[default]
    En,
    Ar,
    Es,
    Fr,
    De,
    PtBr,
    Ja,
}

impl LocaleTag {
    pub const ALL: [LocaleTag; 7] = [
        LocaleTag::Ar,
        LocaleTag::En,
        LocaleTag::Es,
        LocaleTag::Fr,
        LocaleTag::De,
        LocaleTag::PtBr,
        LocaleTag::Ja,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocaleTag::En => "en",
            LocaleTag::Ar => "ar",
            LocaleTag::Es => "es",
            LocaleTag::Fr => "fr",
            LocaleTag::De => "de",
            LocaleTag::PtBr => "pt_BR",
            LocaleTag::Ja => "ja",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LocaleTag::En => "English",
            LocaleTag::Ar => "Arabic",
            LocaleTag::Es => "Spanish",
            LocaleTag::Fr => "French",
            LocaleTag::De => "German",
            LocaleTag::PtBr => "Portuguese-BR",
            LocaleTag::Ja => "Japanese",
        }
    }

    /// Unrecognized or empty tags fall back to `en`.
    pub fn from_tag(tag: &str) -> LocaleTag {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == tag.trim())
            .unwrap_or_default()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn from_name(name: &str) -> Option<ExportFormat> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The sole input to the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub count: usize,
    pub fields: Vec<String>,
    pub locale: LocaleTag,
}

impl GenerationRequest {
    /// Builds a request the way the form does: the count is clamped into
    /// `[MIN_COUNT, MAX_COUNT]` and repeated fields keep their first position.
    pub fn new<I, S>(count: i64, fields: I, locale: LocaleTag) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !ordered.contains(&field) {
                ordered.push(field);
            }
        }

        Self {
            count: clamp_count(count),
            fields: ordered,
            locale,
        }
    }
}

pub fn clamp_count(count: i64) -> usize {
    count.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as usize
}

pub fn default_fields() -> Vec<String> {
    [
        FieldKey::Id,
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::Address,
    ]
    .iter()
    .map(|k| k.as_str().to_string())
    .collect()
}

/// One generated entity. Serializes as a flat JSON object whose key order is
/// the order the fields were requested in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub records: Vec<Record>,
    pub fields: Vec<String>,
    pub format: ExportFormat,
    pub content: String,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub destination: String,
    pub records: Vec<Record>,
    pub fields: Vec<String>,
}
