//! Domain registration records.
//!
//! A record carries up to three dates. Each may be a single value or an
//! ordered list of candidates (registry and registrar often disagree); the
//! first candidate is authoritative. Values that did not parse as a
//! timestamp are kept verbatim so callers can tell "absent" from "garbled".

mod lookup;
mod parse;

pub use lookup::{RegistrationLookup, WhoisLookup};
pub use parse::{parse_timestamp, parse_whois_text};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One date value as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DateValue {
    Timestamp(DateTime<Utc>),
    Unparsed(String),
}

impl DateValue {
    /// The concrete timestamp, if this value is one.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            DateValue::Timestamp(t) => Some(*t),
            DateValue::Unparsed(_) => None,
        }
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(t: DateTime<Utc>) -> Self {
        DateValue::Timestamp(t)
    }
}

/// A registration date field: one value or several ordered candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DateField {
    Single(DateValue),
    Candidates(Vec<DateValue>),
}

impl DateField {
    /// The value that counts: the single value, or the first candidate.
    pub fn authoritative(&self) -> Option<&DateValue> {
        match self {
            DateField::Single(v) => Some(v),
            DateField::Candidates(vs) => vs.first(),
        }
    }

    /// Authoritative value, only if it is a concrete timestamp.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.authoritative().and_then(DateValue::timestamp)
    }
}

impl From<DateTime<Utc>> for DateField {
    fn from(t: DateTime<Utc>) -> Self {
        DateField::Single(DateValue::Timestamp(t))
    }
}

/// Structured WHOIS-style registration data for one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationRecord {
    pub domain_name: Option<String>,
    pub registrar: Option<String>,
    pub creation_date: Option<DateField>,
    pub expiration_date: Option<DateField>,
    pub updated_date: Option<DateField>,
    pub name_servers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn first_candidate_is_authoritative() {
        let field = DateField::Candidates(vec![
            DateValue::Timestamp(ts(2020, 1, 1)),
            DateValue::Timestamp(ts(2021, 1, 1)),
        ]);
        assert_eq!(field.timestamp(), Some(ts(2020, 1, 1)));
    }

    #[test]
    fn unparsed_first_candidate_hides_later_timestamps() {
        let field = DateField::Candidates(vec![
            DateValue::Unparsed("before 1995".into()),
            DateValue::Timestamp(ts(2021, 1, 1)),
        ]);
        assert!(field.authoritative().is_some());
        assert_eq!(field.timestamp(), None);
    }

    #[test]
    fn empty_candidates_have_no_value() {
        let field = DateField::Candidates(Vec::new());
        assert!(field.authoritative().is_none());
        assert!(field.timestamp().is_none());
    }

    #[test]
    fn single_timestamp_from_datetime() {
        let field: DateField = ts(2019, 6, 30).into();
        assert_eq!(field.timestamp(), Some(ts(2019, 6, 30)));
    }
}
