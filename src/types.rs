use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Format used for dates in the operational and client stores.
pub const STORAGE_DATE_FORMAT: &str = "%d/%m/%Y";
/// Format used for holiday membership checks.
pub const HOLIDAY_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format used for start times, storage and API alike.
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub duration_minutes: i64,
}

/// A persisted appointment. For a fixed (date, employee) pair the stored
/// intervals are pairwise non-overlapping; the slot finder preserves this
/// when a new booking is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub date: NaiveDate,
    pub employee: String,
    pub start: NaiveTime,
    pub duration_minutes: i64,
    pub services: Vec<String>,
}

impl Booking {
    pub fn storage_date(&self) -> String {
        self.date.format(STORAGE_DATE_FORMAT).to_string()
    }

    pub fn storage_start(&self) -> String {
        self.start.format(TIME_FORMAT).to_string()
    }

    pub fn storage_services(&self) -> String {
        self.services.join(", ")
    }
}

/// Identity entered by the client at confirmation time. All three fields are
/// required before the recorder may run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClientDetails {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "identifier is required"))]
    pub identifier: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
}

/// The client-facing side of a recorded booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub booking: Booking,
    pub client: ClientDetails,
}

impl ClientRecord {
    /// Duration as stored in the client bookings collection.
    pub fn storage_duration(&self) -> String {
        format!("{} min", self.booking.duration_minutes)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn example_booking() -> Booking {
        Booking {
            date: NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
            employee: "Ana".into(),
            start: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            duration_minutes: 45,
            services: vec!["Haircut".into(), "Beard".into()],
        }
    }

    #[test]
    fn storage_formats_round_trip_exactly() {
        let booking = example_booking();
        assert_eq!(booking.storage_date(), "03/09/2026");
        assert_eq!(booking.storage_start(), "09:05");
        assert_eq!(booking.storage_services(), "Haircut, Beard");
    }

    #[test]
    fn client_record_duration_uses_min_suffix() {
        let record = ClientRecord {
            booking: example_booking(),
            client: ClientDetails {
                name: "Maria Gomez".into(),
                identifier: "30123456".into(),
                phone: "+54 11 5555 1234".into(),
            },
        };
        assert_eq!(record.storage_duration(), "45 min");
    }
}
