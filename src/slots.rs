use crate::types::Booking;
use chrono::{NaiveDate, NaiveTime, Timelike};

/// Candidate start times are spaced this many minutes apart, from opening.
pub const STEP_MINUTES: i64 = 5;

/// The daily window within which slots may be offered.
#[derive(Debug, Clone, Copy)]
pub struct BusinessHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        }
    }
}

fn minutes_of(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Earliest start time on `date` at which `employee` can take an appointment
/// of `required_minutes`, or `None` if the day is exhausted.
///
/// Trial starts advance from opening in `step_minutes` steps. A candidate
/// interval `[s, s + d)` conflicts with an existing booking `[b, b + e)` iff
/// the two half-open intervals strictly overlap (`s < b + e && s + d > b`);
/// exact abutment is not a conflict. The search stops once the appointment
/// could no longer finish by closing time.
///
/// `required_minutes` is assumed to be at least 1; the pipeline rejects
/// empty selections before calling in here.
pub fn find_slot(
    existing: &[Booking],
    date: NaiveDate,
    required_minutes: i64,
    employee: &str,
    hours: BusinessHours,
    step_minutes: i64,
) -> Option<NaiveTime> {
    let day_bookings: Vec<(i64, i64)> = existing
        .iter()
        .filter(|b| b.date == date && b.employee == employee)
        .map(|b| {
            let start = minutes_of(b.start);
            (start, start + b.duration_minutes)
        })
        .collect();

    let close = minutes_of(hours.close);
    let mut start = minutes_of(hours.open);

    while start + required_minutes <= close {
        let end = start + required_minutes;
        let conflict = day_bookings
            .iter()
            .any(|&(b_start, b_end)| start < b_end && end > b_start);
        if !conflict {
            return NaiveTime::from_hms_opt((start / 60) as u32, (start % 60) as u32, 0);
        }
        start += step_minutes;
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn booking(start: NaiveTime, duration_minutes: i64, employee: &str) -> Booking {
        Booking {
            date: date(),
            employee: employee.into(),
            start,
            duration_minutes,
            services: vec!["Haircut".into()],
        }
    }

    fn find(existing: &[Booking], required: i64) -> Option<NaiveTime> {
        find_slot(
            existing,
            date(),
            required,
            "Ana",
            BusinessHours::default(),
            STEP_MINUTES,
        )
    }

    #[test]
    fn empty_day_yields_opening_time() {
        assert_eq!(find(&[], 45), Some(time(7, 0)));
    }

    #[test]
    fn slot_is_offered_right_after_an_opening_booking() {
        let existing = vec![booking(time(7, 0), 45, "Ana")];
        assert_eq!(find(&existing, 45), Some(time(7, 45)));
    }

    #[test]
    fn abutting_intervals_do_not_conflict() {
        // [09:00, 09:30) booked; a request landing exactly at 09:30 is fine,
        // as is one ending exactly at 09:00.
        let existing = vec![booking(time(9, 0), 30, "Ana")];
        let hours = BusinessHours {
            open: time(9, 30),
            close: time(21, 0),
        };
        assert_eq!(
            find_slot(&existing, date(), 30, "Ana", hours, STEP_MINUTES),
            Some(time(9, 30))
        );

        let hours = BusinessHours {
            open: time(8, 30),
            close: time(9, 0),
        };
        assert_eq!(
            find_slot(&existing, date(), 30, "Ana", hours, STEP_MINUTES),
            Some(time(8, 30))
        );
    }

    // 09:45 + 60 overlaps [10:00, 10:30): fully containing, partially
    // overlapping and identical intervals must all be rejected.
    #[test_case(time(9, 45), 60, time(10, 0), 30; "existing contained in candidate")]
    #[test_case(time(10, 15), 30, time(10, 0), 30; "partial overlap")]
    #[test_case(time(10, 0), 30, time(10, 0), 30; "identical interval")]
    fn overlapping_candidates_are_rejected(
        candidate_start: NaiveTime,
        candidate_minutes: i64,
        existing_start: NaiveTime,
        existing_minutes: i64,
    ) {
        let existing = vec![booking(existing_start, existing_minutes, "Ana")];
        let hours = BusinessHours {
            open: candidate_start,
            close: candidate_start + chrono::Duration::minutes(candidate_minutes),
        };
        // With the window pinned to exactly the candidate interval the only
        // possible answer is the candidate itself, so a conflict means None.
        assert_eq!(
            find_slot(&existing, date(), candidate_minutes, "Ana", hours, STEP_MINUTES),
            None
        );
    }

    #[test]
    fn other_employees_bookings_are_ignored() {
        let existing = vec![booking(time(7, 0), 120, "Luis")];
        assert_eq!(find(&existing, 30), Some(time(7, 0)));
    }

    #[test]
    fn other_dates_bookings_are_ignored() {
        let mut other_day = booking(time(7, 0), 120, "Ana");
        other_day.date = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
        assert_eq!(find(&[other_day], 30), Some(time(7, 0)));
    }

    #[test]
    fn search_scans_past_a_fragmented_morning() {
        let existing = vec![
            booking(time(7, 0), 60, "Ana"),
            booking(time(8, 10), 50, "Ana"),
        ];
        // 60 minutes do not fit into [08:00, 08:10); the next fit is 09:00.
        assert_eq!(find(&existing, 60), Some(time(9, 0)));
        // 10 minutes do fit into the gap.
        assert_eq!(find(&existing, 10), Some(time(8, 0)));
    }

    #[test]
    fn no_slot_once_the_service_cannot_finish_before_closing() {
        // 14 hours of business, so 841 minutes can never complete.
        assert_eq!(find(&[], 841), None);
        // 840 minutes exactly fill the day.
        assert_eq!(find(&[], 840), Some(time(7, 0)));
    }

    #[test]
    fn fully_booked_day_yields_no_slot() {
        let existing = vec![booking(time(7, 0), 14 * 60, "Ana")];
        assert_eq!(find(&existing, 5), None);
    }

    #[test]
    fn last_fitting_grid_step_is_still_found() {
        let existing = vec![booking(time(7, 0), 13 * 60 + 30, "Ana")];
        // Only [20:30, 21:00) is free.
        assert_eq!(find(&existing, 30), Some(time(20, 30)));
    }
}
