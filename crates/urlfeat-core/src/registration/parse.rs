//! Tolerant parser for raw WHOIS responses.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::{DateField, DateValue, RegistrationRecord};

const CREATION_KEYS: &[&str] = &[
    "creation date",
    "created",
    "created on",
    "created date",
    "registered",
    "registered on",
    "registration date",
    "registration time",
    "domain registration date",
    "domain name commencement date",
];

const EXPIRATION_KEYS: &[&str] = &[
    "registry expiry date",
    "registrar registration expiration date",
    "expiration date",
    "expiration time",
    "expiry date",
    "expires",
    "expires on",
    "paid-till",
    "domain expiration date",
    "renewal date",
];

const UPDATED_KEYS: &[&str] = &[
    "updated date",
    "last updated",
    "last updated on",
    "last modified",
    "last-modified",
    "modified",
    "changed",
];

const REGISTRAR_KEYS: &[&str] = &["registrar", "registrar name", "sponsoring registrar"];
const DOMAIN_KEYS: &[&str] = &["domain name", "domain"];
const NAME_SERVER_KEYS: &[&str] = &["name server", "name servers", "nameserver", "nserver"];

/// Offset-aware layouts, tried after RFC 3339.
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S %z",
];

/// Layouts without offset; interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y.%m.%d %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%b-%Y",
    "%d %b %Y",
    "%Y.%m.%d",
    "%d.%m.%Y",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%Y%m%d",
];

/// Parse a WHOIS date string into UTC. Returns `None` for anything that is
/// not recognisably a date (e.g. "before Aug-1996").
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    parse_exact(s).or_else(|| {
        // "2020-01-01T00:00:00Z (YYYY-MM-DDThh:mm:ssZ)" and similar annotations.
        let first = s.split_whitespace().next()?;
        if first.len() < s.len() {
            parse_exact(first)
        } else {
            None
        }
    })
}

fn parse_exact(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    for fmt in ZONED_FORMATS {
        if let Ok(t) = DateTime::parse_from_str(s, fmt) {
            return Some(t.with_timezone(&Utc));
        }
    }
    let s = ["UTC", "GMT", "Z"]
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .map(str::trim_end)
        .unwrap_or(s);
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(t.and_utc());
        }
    }
    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|t| t.and_utc());
        }
    }
    None
}

fn date_value(raw: &str) -> DateValue {
    match parse_timestamp(raw) {
        Some(t) => DateValue::Timestamp(t),
        None => DateValue::Unparsed(raw.to_string()),
    }
}

fn into_field(mut values: Vec<DateValue>) -> Option<DateField> {
    match values.len() {
        0 => None,
        1 => values.pop().map(DateField::Single),
        _ => Some(DateField::Candidates(values)),
    }
}

fn push_unique<T: PartialEq>(values: &mut Vec<T>, v: T) {
    if !values.contains(&v) {
        values.push(v);
    }
}

/// Parse a raw WHOIS text response into a `RegistrationRecord`.
///
/// Keys are matched case-insensitively. Repeated date keys with distinct
/// values become an ordered candidate list, first occurrence first.
pub fn parse_whois_text(text: &str) -> RegistrationRecord {
    let mut creation = Vec::new();
    let mut expiration = Vec::new();
    let mut updated = Vec::new();
    let mut record = RegistrationRecord::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') || line.starts_with('#') || line.starts_with(">>>") {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let key = key.as_str();

        if CREATION_KEYS.contains(&key) {
            push_unique(&mut creation, date_value(value));
        } else if EXPIRATION_KEYS.contains(&key) {
            push_unique(&mut expiration, date_value(value));
        } else if UPDATED_KEYS.contains(&key) {
            push_unique(&mut updated, date_value(value));
        } else if REGISTRAR_KEYS.contains(&key) {
            if record.registrar.is_none() {
                record.registrar = Some(value.to_string());
            }
        } else if DOMAIN_KEYS.contains(&key) {
            if record.domain_name.is_none() {
                record.domain_name = Some(value.to_ascii_lowercase());
            }
        } else if NAME_SERVER_KEYS.contains(&key) {
            for ns in value.split_whitespace() {
                push_unique(&mut record.name_servers, ns.to_ascii_lowercase());
            }
        }
    }

    record.creation_date = into_field(creation);
    record.expiration_date = into_field(expiration);
    record.updated_date = into_field(updated);
    record
}
