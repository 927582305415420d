//! Date strategy.

use super::FieldOutcome;
use crate::error::GeneratorError;
use crate::population::DataPopulation;
use crate::record::{FieldValue, GeneratedRecord};
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use scheming_core::FieldSpec;

/// Width of the window random dates are drawn from, ending now.
pub const DATE_WINDOW_DAYS: i64 = 365 * 10;

/// A random date within the last ten years.
pub fn date(
    populator: &mut DataPopulation,
    _field: &FieldSpec,
    _record: &GeneratedRecord,
) -> Result<FieldOutcome, GeneratorError> {
    let now = Utc::now();
    let start = now - TimeDelta::days(DATE_WINDOW_DAYS);
    let picked = random_datetime_between(populator.rng(), start, now);
    Ok(FieldOutcome::Generated(FieldValue::Date(picked.date_naive())))
}

/// Uniformly random instant in `[start, end)`, at one second resolution.
///
/// Returns `start` when the range is empty.
pub fn random_datetime_between<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let span = (end - start).num_seconds();
    if span <= 0 {
        return start;
    }
    start + TimeDelta::seconds(rng.gen_range(0..span))
}
