//! Locale data sources backed by the `fake` crate.
//!
//! A generation locale resolves to an ordered chain of sources. Each datum is
//! drawn from the first source in the chain that yields a non-blank value, and
//! English always closes the chain.

use crate::domain::model::LocaleTag;
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode,
};
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::{SafeEmail, Username};
use fake::faker::job::raw::Title as JobTitle;
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{Data, AR_SA, DE_DE, EN, FR_FR, JA_JP, PT_BR};
use fake::Fake;
use rand::Rng;

/// A single locale-dependent value the synthesizer can ask a source for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datum {
    FullName,
    FirstName,
    LastName,
    Email,
    Phone,
    Username,
    Company,
    JobTitle,
    StreetAddress,
    City,
    State,
    Zip,
    Country,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    En,
    ArSa,
    FrFr,
    DeDe,
    JaJp,
    PtBr,
}

impl DataSource {
    /// Sources consulted for `locale`, highest priority first.
    pub fn chain(locale: LocaleTag) -> Vec<DataSource> {
        let primary = match locale {
            LocaleTag::Ar => Some(DataSource::ArSa),
            LocaleTag::Fr => Some(DataSource::FrFr),
            LocaleTag::De => Some(DataSource::DeDe),
            LocaleTag::PtBr => Some(DataSource::PtBr),
            LocaleTag::Ja => Some(DataSource::JaJp),
            // fake has no Spanish data set
            LocaleTag::Es | LocaleTag::En => None,
        };

        primary
            .into_iter()
            .chain(std::iter::once(DataSource::En))
            .collect()
    }

    pub fn draw<R: Rng>(self, datum: Datum, rng: &mut R) -> String {
        match self {
            DataSource::En => draw_in(EN, datum, rng),
            DataSource::ArSa => draw_in(AR_SA, datum, rng),
            DataSource::FrFr => draw_in(FR_FR, datum, rng),
            DataSource::DeDe => draw_in(DE_DE, datum, rng),
            DataSource::JaJp => draw_in(JA_JP, datum, rng),
            DataSource::PtBr => draw_in(PT_BR, datum, rng),
        }
    }
}

fn draw_in<L: Data + Copy + fake::faker::impls::address::CityNameGenFn, R: Rng>(locale: L, datum: Datum, rng: &mut R) -> String {
    match datum {
        Datum::FullName => Name(locale).fake_with_rng(rng),
        Datum::FirstName => FirstName(locale).fake_with_rng(rng),
        Datum::LastName => LastName(locale).fake_with_rng(rng),
        Datum::Email => {
            let email: String = SafeEmail(locale).fake_with_rng(rng);
            if email.split_once('@').is_some_and(|(local, _)| is_handle(local)) {
                email
            } else {
                // 非拉丁字母的名字改用英文資料
                ascii_email(SafeEmail(EN).fake_with_rng(rng))
            }
        }
        Datum::Phone => PhoneNumber(locale).fake_with_rng(rng),
        Datum::Username => {
            let handle: String = Username(locale).fake_with_rng(rng);
            if is_handle(&handle) {
                handle
            } else {
                let handle: String = Username(EN).fake_with_rng(rng);
                ascii_handle(&handle, "user")
            }
        }
        Datum::Company => CompanyName(locale).fake_with_rng(rng),
        Datum::JobTitle => JobTitle(locale).fake_with_rng(rng),
        Datum::StreetAddress => {
            let number: String = BuildingNumber(locale).fake_with_rng(rng);
            let street: String = StreetName(locale).fake_with_rng(rng);
            format!("{} {}", number, street)
        }
        Datum::City => CityName(locale).fake_with_rng(rng),
        Datum::State => StateName(locale).fake_with_rng(rng),
        Datum::Zip => ZipCode(locale).fake_with_rng(rng),
        Datum::Country => CountryName(locale).fake_with_rng(rng),
    }
}

/// Handles and email local parts stay within `[A-Za-z0-9._-]`.
fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn is_handle(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_handle_char)
}

fn ascii_handle(value: &str, fallback: &str) -> String {
    let folded: String = value.chars().filter(|c| is_handle_char(*c)).collect();
    if folded.is_empty() {
        fallback.to_string()
    } else {
        folded
    }
}

fn ascii_email(email: String) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", ascii_handle(local, "user"), domain),
        None => format!("{}@example.com", ascii_handle(&email, "user")),
    }
}
