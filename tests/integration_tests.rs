use formfillr::app::{Destination, FrontEnd};
use formfillr::i18n::UiLocale;
use formfillr::{
    CliConfig, GenerationEngine, GeneratorPipeline, LocalStorage, ProfileConfig, Record,
};
use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;

#[tokio::test]
async fn test_end_to_end_json_download() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = CliConfig::parse_from([
        "formfillr",
        "--count",
        "30",
        "--locale",
        "ja",
        "--fields",
        "id,name,email,dob",
        "--output",
        output_path.as_str(),
    ]);

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = GeneratorPipeline::new(storage, config);
    let engine = GenerationEngine::new(pipeline);

    let outcome = engine.run().await.unwrap();

    assert_eq!(outcome.records.len(), 30);
    assert_eq!(outcome.fields, vec!["id", "name", "email", "dob"]);
    assert!(outcome.destination.ends_with(".json"));

    let written = std::fs::read_to_string(&outcome.destination).unwrap();
    let decoded: Vec<Record> = serde_json::from_str(&written).unwrap();
    assert_eq!(decoded, outcome.records);
}

#[tokio::test]
async fn test_end_to_end_csv_download() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = CliConfig::parse_from([
        "formfillr",
        "--count",
        "0",
        "--fields",
        "id,address,nickname",
        "--format",
        "csv",
        "--seed",
        "5",
        "--output",
        output_path.as_str(),
    ]);

    let engine = GenerationEngine::new(GeneratorPipeline::new(
        LocalStorage::new(output_path.clone()),
        config,
    ));
    let outcome = engine.run().await.unwrap();

    // count 0 is clamped to a single record
    assert_eq!(outcome.records.len(), 1);

    let written = std::fs::read_to_string(&outcome.destination).unwrap();
    let lines: Vec<&str> = written.split('\n').collect();
    assert_eq!(lines[0], "id,address,nickname");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("\""), "address contains commas and must be quoted");
    assert!(lines[1].ends_with(','));
}

#[tokio::test]
async fn test_profile_run_with_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("exports");

    let toml_content = format!(
        r#"
[profile]
name = "integration"

[generation]
count = 8
locale = "de"
fields = ["firstName", "lastName", "city", "zip", "country"]
seed = 77

[output]
format = "csv"
path = "{}"
file_name = "german-users.csv"
"#,
        output_path.display()
    );
    let config = ProfileConfig::from_toml_str(&toml_content).unwrap();

    let front_end = FrontEnd {
        ui_locale: config.ui_locale(),
        preview_rows: config.preview_rows(),
    };
    let destination = Destination::from_output(config.output_path());
    let outcome = front_end.run(config, &destination).await.unwrap();

    let file = output_path.join("german-users.csv");
    assert!(file.exists());
    assert_eq!(outcome.records.len(), 8);

    let report = front_end.success_report(&outcome, &destination);
    assert!(report.contains("firstName"));
    assert!(report.contains("german-users.csv"));
}

#[tokio::test]
async fn test_seeded_runs_are_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let args = [
        "formfillr",
        "--count",
        "10",
        "--fields",
        "id,name,username,avatar",
        "--seed",
        "1234",
    ];

    let first = GenerationEngine::new(GeneratorPipeline::new(
        LocalStorage::new(output_path.clone()),
        CliConfig::parse_from(args),
    ))
    .run()
    .await
    .unwrap();
    let second = GenerationEngine::new(GeneratorPipeline::new(
        LocalStorage::new(output_path.clone()),
        CliConfig::parse_from(args),
    ))
    .run()
    .await
    .unwrap();

    assert_eq!(first.records, second.records);
}

#[tokio::test]
async fn test_arabic_interface_preview() {
    let front_end = FrontEnd {
        ui_locale: UiLocale::Ar,
        preview_rows: 3,
    };
    let outcome = formfillr::core::RunOutcome {
        destination: "stdout".to_string(),
        records: formfillr::synthesize(&formfillr::GenerationRequest::new(
            10,
            ["name"],
            formfillr::LocaleTag::Ar,
        )),
        fields: vec!["name".to_string()],
    };

    let report = front_end.success_report(&outcome, &Destination::Copy);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], formfillr::i18n::strings(UiLocale::Ar).preview);
    // header, separator and three rows
    assert_eq!(lines.len(), 1 + 2 + 3 + 2);
    assert_eq!(lines.last(), Some(&formfillr::i18n::strings(UiLocale::Ar).copied));
    assert!(outcome.records.iter().all(|r| r.get("name").is_some_and(Value::is_string)));
}

#[test]
fn test_sample_profile_is_ready_to_run() {
    use formfillr::utils::validation::Validate;

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("profiles/qa-users.toml");
    let config = ProfileConfig::from_file(path).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.output_path(), Some("./exports"));
}
