use crate::types::HOLIDAY_DATE_FORMAT;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

pub const DEFAULT_HORIZON_DAYS: usize = 15;

/// Enumerate the next `horizon` bookable dates after `today`. The salon is
/// closed on Mondays and on every date listed in `holidays` (as
/// `YYYY-MM-DD`). The walk is day by day, so the result is strictly
/// increasing and contains exactly `horizon` entries.
pub fn available_dates(
    holidays: &HashSet<String>,
    horizon: usize,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(horizon);
    let mut day = today + Duration::days(1);
    while dates.len() < horizon {
        let iso = day.format(HOLIDAY_DATE_FORMAT).to_string();
        if day.weekday() != Weekday::Mon && !holidays.contains(&iso) {
            dates.push(day);
        }
        day = day + Duration::days(1);
    }
    dates
}
