use formfillr::{synthesize, to_delimited_text, to_json, GenerationRequest, LocaleTag, Record};
use serde_json::{json, Value};

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn record(pairs: &[(&str, Value)]) -> Record {
    pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
}

#[test]
fn test_single_quoted_cell_scenario() {
    let records = vec![record(&[("id", json!("1")), ("name", json!("A,B"))])];
    assert_eq!(
        to_delimited_text(&records, &fields(&["id", "name"])),
        "id,name\n1,\"A,B\""
    );
}

#[test]
fn test_comma_and_quote_values() {
    let records = vec![record(&[
        ("name", json!("Doe, Jr.")),
        ("company", json!("He said \"hi\"")),
    ])];
    let text = to_delimited_text(&records, &fields(&["name", "company"]));
    assert_eq!(text, "name,company\n\"Doe, Jr.\",\"He said \"\"hi\"\"\"");
}

#[test]
fn test_empty_input_for_any_field_order() {
    assert_eq!(to_delimited_text(&[], &fields(&["id"])), "");
    assert_eq!(to_delimited_text(&[], &fields(&["zip", "dob", "avatar"])), "");
}

#[test]
fn test_generated_csv_reparses_with_csv_reader() {
    let order = fields(&["id", "name", "address", "company", "phone", "nickname"]);
    let request = GenerationRequest::new(40, order.clone(), LocaleTag::En);
    let records = synthesize(&request);
    let text = to_delimited_text(&records, &order);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, order);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), records.len());

    for (row, record) in rows.iter().zip(&records) {
        for (i, field) in order.iter().enumerate() {
            let expected = record.get(field).and_then(Value::as_str).unwrap_or("");
            assert_eq!(&row[i], expected, "column {}", field);
        }
    }
}

#[test]
fn test_multiline_values_reparse() {
    let records = vec![
        record(&[("id", json!("1")), ("note", json!("first line\nsecond, line"))]),
        record(&[("id", json!("2"))]),
    ];
    let order = fields(&["id", "note"]);
    let text = to_delimited_text(&records, &order);

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(&rows[0][1], "first line\nsecond, line");
    assert_eq!(&rows[1][1], "");
}

#[test]
fn test_generated_json_round_trips() {
    let request = GenerationRequest::new(
        25,
        ["id", "name", "address", "dob", "nickname"],
        LocaleTag::PtBr,
    );
    let records = synthesize(&request);
    let text = to_json(&records).unwrap();

    let decoded: Vec<Record> = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, records);
}
