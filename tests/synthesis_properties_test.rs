use chrono::{NaiveDate, Utc};
use formfillr::core::synthesizer::{age_on, MAX_AGE, MIN_AGE};
use formfillr::{synthesize, FieldKey, GenerationRequest, LocaleTag, RecordSynthesizer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use serde_json::Value;

fn all_fields() -> Vec<String> {
    FieldKey::ALL.iter().map(|k| k.as_str().to_string()).collect()
}

#[test]
fn test_count_is_exact_for_every_locale() {
    for locale in LocaleTag::ALL {
        let request = GenerationRequest::new(12, all_fields(), locale);
        let records = synthesize(&request);
        assert_eq!(records.len(), 12, "locale {}", locale);
    }
}

#[test]
fn test_upper_bound_count() {
    let request = GenerationRequest::new(500, ["id"], LocaleTag::En);
    let records = synthesize(&request);
    assert_eq!(records.len(), 500);

    let mut ids: Vec<&str> = records
        .iter()
        .map(|r| r.get("id").and_then(Value::as_str).unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 500);
}

#[test]
fn test_all_fields_filled_for_every_locale() {
    let mut rng = StdRng::seed_from_u64(2024);
    for locale in LocaleTag::ALL {
        let request = GenerationRequest::new(5, all_fields(), locale);
        let records = RecordSynthesizer::for_locale(locale).synthesize(&request, &mut rng);

        for record in &records {
            assert_eq!(record.len(), FieldKey::ALL.len());
            for key in FieldKey::ALL {
                let value = record.get(key.as_str()).and_then(Value::as_str);
                assert!(
                    value.is_some_and(|v| !v.trim().is_empty()),
                    "locale {} left {} empty",
                    locale,
                    key
                );
            }
        }
    }
}

#[test]
fn test_unknown_keys_are_null_not_errors() {
    let request = GenerationRequest::new(3, ["id", "favouriteColour", "email"], LocaleTag::Es);
    let records = synthesize(&request);

    for record in records {
        assert_eq!(record.get("favouriteColour"), Some(&Value::Null));
        assert!(record.get("email").unwrap().is_string());
    }
}

#[test]
fn test_dob_is_adult_today() {
    let today = Utc::now().date_naive();
    let request = GenerationRequest::new(500, ["dob"], LocaleTag::Ar);

    for record in synthesize(&request) {
        let dob = record.get("dob").and_then(Value::as_str).unwrap();
        let birth = NaiveDate::parse_from_str(dob, "%Y-%m-%d").unwrap();
        let age = age_on(birth, today);
        assert!((MIN_AGE..=MAX_AGE).contains(&age), "{} -> {}", dob, age);
    }
}

#[test]
fn test_email_shape() {
    let email = Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();

    for locale in LocaleTag::ALL {
        let request = GenerationRequest::new(200, ["email"], locale);
        for record in synthesize(&request) {
            let value = record.get("email").and_then(Value::as_str).unwrap();
            assert!(email.is_match(value), "{}: {}", locale, value);
        }
    }
}

#[test]
fn test_usernames_are_ascii_handles() {
    let handle = Regex::new(r"^[A-Za-z0-9._-]+$").unwrap();

    for locale in LocaleTag::ALL {
        let request = GenerationRequest::new(200, ["username"], locale);
        for record in synthesize(&request) {
            let value = record.get("username").and_then(Value::as_str).unwrap();
            assert!(handle.is_match(value), "{}: {}", locale, value);
        }
    }
}

#[test]
fn test_avatar_is_https_url() {
    let request = GenerationRequest::new(20, ["avatar"], LocaleTag::Fr);

    for record in synthesize(&request) {
        let value = record.get("avatar").and_then(Value::as_str).unwrap();
        let parsed = url::Url::parse(value).unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert!(parsed.host_str().is_some());
    }
}

#[test]
fn test_runs_differ_without_seed() {
    let request = GenerationRequest::new(3, ["id", "name"], LocaleTag::En);
    assert_ne!(synthesize(&request), synthesize(&request));
}

#[test]
fn test_record_keys_follow_request_order() {
    let request = GenerationRequest::new(2, ["zip", "id", "name"], LocaleTag::De);
    for record in synthesize(&request) {
        let keys: Vec<&str> = record.data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zip", "id", "name"]);
    }
}
