use crate::domain::model::{ExportFormat, Record};
use crate::utils::error::Result;
use serde_json::Value;

/// Pretty-printed JSON array of flat record objects.
pub fn to_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Comma-separated text: a header built from `field_order`, then one line per
/// record. Lines are joined by `\n` with no trailing newline, and an empty
/// record set produces an empty string.
pub fn to_delimited_text(records: &[Record], field_order: &[String]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(field_order.join(","));

    for record in records {
        let cells: Vec<String> = field_order
            .iter()
            .map(|field| escape_field(record.get(field)))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Quotes a cell only when it contains a comma, a double quote or a newline.
pub fn escape_field(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    if text.contains('"') || text.contains(',') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

pub fn export(records: &[Record], field_order: &[String], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(records),
        ExportFormat::Csv => Ok(to_delimited_text(records, field_order)),
    }
}
