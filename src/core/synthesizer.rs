use crate::core::sources::{DataSource, Datum};
use crate::domain::model::{FieldKey, GenerationRequest, LocaleTag, Record};
use chrono::{Days, Months, NaiveDate, Utc};
use rand::Rng;
use serde_json::Value;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 75;

const AVATAR_BASE_URL: &str = "https://avatars.githubusercontent.com/u/";
const AVATAR_ID_LIMIT: u32 = 100_000_000;

/// Produces flat records for a [`GenerationRequest`].
///
/// The synthesizer holds no state between calls. Values come from the
/// locale's data source chain, and ages for `dob` are measured against the
/// reference date (today, unless overridden).
#[derive(Debug, Clone)]
pub struct RecordSynthesizer {
    sources: Vec<DataSource>,
    today: NaiveDate,
}

impl RecordSynthesizer {
    pub fn for_locale(locale: LocaleTag) -> Self {
        Self {
            sources: DataSource::chain(locale),
            today: Utc::now().date_naive(),
        }
    }

    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }

    /// Generates exactly `request.count` records. Bounds are the caller's
    /// concern; a count of zero yields no records.
    pub fn synthesize<R: Rng>(&self, request: &GenerationRequest, rng: &mut R) -> Vec<Record> {
        (0..request.count)
            .map(|_| self.record(&request.fields, rng))
            .collect()
    }

    fn record<R: Rng>(&self, fields: &[String], rng: &mut R) -> Record {
        let mut record = Record::new();
        for field in fields {
            // 未知欄位保留為 null
            let value = match FieldKey::parse(field) {
                Some(key) => Value::String(self.value_for(key, rng)),
                None => Value::Null,
            };
            record.insert(field.as_str(), value);
        }
        record
    }

    pub fn value_for<R: Rng>(&self, key: FieldKey, rng: &mut R) -> String {
        match key {
            FieldKey::Id => uuid_v4(rng),
            FieldKey::Name => self.lookup(Datum::FullName, rng),
            FieldKey::FirstName => self.lookup(Datum::FirstName, rng),
            FieldKey::LastName => self.lookup(Datum::LastName, rng),
            FieldKey::Email => self.lookup(Datum::Email, rng),
            FieldKey::Phone => self.lookup(Datum::Phone, rng),
            FieldKey::Username => self.lookup(Datum::Username, rng),
            FieldKey::Company => self.lookup(Datum::Company, rng),
            FieldKey::JobTitle => self.lookup(Datum::JobTitle, rng),
            FieldKey::Address => self.address(rng),
            FieldKey::City => self.lookup(Datum::City, rng),
            FieldKey::State => self.lookup(Datum::State, rng),
            FieldKey::Zip => self.lookup(Datum::Zip, rng),
            FieldKey::Country => self.lookup(Datum::Country, rng),
            FieldKey::Dob => self.birthdate(rng),
            FieldKey::Avatar => avatar_url(rng),
        }
    }

    fn lookup<R: Rng>(&self, datum: Datum, rng: &mut R) -> String {
        self.lookup_with(datum, rng, |source, datum, rng| source.draw(datum, rng))
    }

    /// First non-blank value along the source chain, or an empty string.
    fn lookup_with<R, F>(&self, datum: Datum, rng: &mut R, draw: F) -> String
    where
        R: Rng,
        F: Fn(DataSource, Datum, &mut R) -> String,
    {
        for source in &self.sources {
            let value = draw(*source, datum, rng);
            if !value.trim().is_empty() {
                return value;
            }
            tracing::trace!("{:?} has no {:?}, trying next source", source, datum);
        }
        String::new()
    }

    fn address<R: Rng>(&self, rng: &mut R) -> String {
        let street = self.lookup(Datum::StreetAddress, rng);
        let city = self.lookup(Datum::City, rng);
        let state = self.lookup(Datum::State, rng);
        let zip = self.lookup(Datum::Zip, rng);
        let country = self.lookup(Datum::Country, rng);
        format!("{}, {}, {} {}, {}", street, city, state, zip, country)
    }

    /// A birth date for someone aged `MIN_AGE..=MAX_AGE` on the reference date.
    fn birthdate<R: Rng>(&self, rng: &mut R) -> String {
        let latest = self
            .today
            .checked_sub_months(Months::new(MIN_AGE * 12))
            .unwrap_or(self.today);
        let earliest = self
            .today
            .checked_sub_months(Months::new((MAX_AGE + 1) * 12))
            .and_then(|d| d.succ_opt())
            .unwrap_or(latest);

        let span = (latest - earliest).num_days().max(0) as u64;
        let offset = rng.random_range(0..=span);
        earliest
            .checked_add_days(Days::new(offset))
            .unwrap_or(latest)
            .format("%Y-%m-%d")
            .to_string()
    }
}

/// Convenience entry point drawing from the thread-local RNG.
pub fn synthesize(request: &GenerationRequest) -> Vec<Record> {
    RecordSynthesizer::for_locale(request.locale).synthesize(request, &mut rand::rng())
}

fn uuid_v4<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
}

fn avatar_url<R: Rng>(rng: &mut R) -> String {
    format!("{}{}", AVATAR_BASE_URL, rng.random_range(0..AVATAR_ID_LIMIT))
}

/// Whole years between `birth` and `on`.
pub fn age_on(birth: NaiveDate, on: NaiveDate) -> u32 {
    on.years_since(birth).unwrap_or(0)
}
