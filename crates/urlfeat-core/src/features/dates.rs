//! Registration date features.

use chrono::{DateTime, Duration, Utc};

use super::Featurizer;
use crate::registration::{DateField, RegistrationRecord};

/// Whole days in `later - earlier`, floored (a negative partial day counts
/// as -1, like `timedelta.days`).
pub fn whole_days(later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
    let diff = later - earlier;
    let days = diff.num_days();
    if diff < Duration::days(days) {
        days - 1
    } else {
        days
    }
}

fn resolve<F>(record: Option<&RegistrationRecord>, field: F) -> Option<DateTime<Utc>>
where
    F: Fn(&RegistrationRecord) -> Option<&DateField>,
{
    record.and_then(field).and_then(DateField::timestamp)
}

impl Featurizer<'_> {
    /// Days from creation to the reference time; 0 without a creation timestamp.
    pub fn days_since_registration(&self) -> i64 {
        resolve(self.ctx.registration(), |r| r.creation_date.as_ref())
            .map(|created| whole_days(self.ctx.as_of(), created))
            .unwrap_or(0)
    }

    /// Days from the reference time until expiration (positive while the
    /// registration is still valid); 0 without an expiration timestamp.
    pub fn days_since_expiration(&self) -> i64 {
        resolve(self.ctx.registration(), |r| r.expiration_date.as_ref())
            .map(|expires| whole_days(expires, self.ctx.as_of()))
            .unwrap_or(0)
    }

    /// Days from the last update to the reference time; 0 without an update timestamp.
    pub fn days_since_update(&self) -> i64 {
        resolve(self.ctx.registration(), |r| r.updated_date.as_ref())
            .map(|updated| whole_days(self.ctx.as_of(), updated))
            .unwrap_or(0)
    }
}
