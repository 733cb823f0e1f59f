use crate::domain::model::Record;
use crate::i18n::TextDirection;
use serde_json::Value;

pub const MIN_PREVIEW_ROWS: usize = 1;
pub const MAX_PREVIEW_ROWS: usize = 50;
pub const DEFAULT_PREVIEW_ROWS: usize = 6;

/// Renders the first `rows` records as an aligned text table.
///
/// Returns `None` when there is nothing to preview so the caller can show its
/// own localized placeholder.
pub fn render_preview(
    records: &[Record],
    fields: &[String],
    rows: usize,
    direction: TextDirection,
) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let body: Vec<Vec<String>> = records
        .iter()
        .take(rows)
        .map(|record| fields.iter().map(|f| cell_text(record.get(f))).collect())
        .collect();

    let mut widths: Vec<usize> = fields.iter().map(|f| f.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(render_row(fields, &widths, direction));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &body {
        lines.push(render_row(row, &widths, direction));
    }

    Some(lines.join("\n"))
}

fn render_row(cells: &[String], widths: &[usize], direction: TextDirection) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = " ".repeat(width - cell.chars().count());
            match direction {
                TextDirection::Ltr => format!("{}{}", cell, pad),
                TextDirection::Rtl => format!("{}{}", pad, cell),
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Table cells show values on a single line.
fn cell_text(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    text.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| {
                [
                    ("id", json!(i.to_string())),
                    ("name", json!(format!("Person {}", i))),
                ]
                .into_iter()
                .collect()
            })
            .collect()
    }

    fn fields() -> Vec<String> {
        vec!["id".to_string(), "name".to_string(), "email".to_string()]
    }

    #[test]
    fn test_empty_preview() {
        assert!(render_preview(&[], &fields(), 6, TextDirection::Ltr).is_none());
    }

    #[test]
    fn test_preview_truncates_rows() {
        let table = render_preview(&sample(10), &fields(), 3, TextDirection::Ltr).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("id | name"));
        assert!(lines[4].contains("Person 3"));
    }

    #[test]
    fn test_rtl_right_aligns() {
        let table = render_preview(&sample(1), &fields(), 6, TextDirection::Rtl).unwrap();
        let header = table.lines().next().unwrap();
        assert!(header.starts_with("id |     name"));
    }

    #[test]
    fn test_missing_cells_are_blank() {
        let table = render_preview(&sample(1), &fields(), 6, TextDirection::Ltr).unwrap();
        let row = table.lines().nth(2).unwrap();
        assert!(row.trim_end().ends_with("| Person 1 |"));
    }
}
