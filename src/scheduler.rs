use crate::calendar::available_dates;
use crate::catalog::{normalize_selection, total_duration};
use crate::error::BookingError;
use crate::slots::{find_slot, BusinessHours};
use crate::store::BookingStore;
use crate::types::{Booking, ClientDetails, ClientRecord, Service};
use chrono::{Local, NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};
use validator::Validate;

lazy_static! {
    static ref PHONE_PATTERN: Regex = Regex::new(r"^\+?[0-9][0-9 \-]{4,19}$").unwrap();
}

/// An available slot as offered to the client, before confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotQuote {
    pub start: NaiveTime,
    pub duration_minutes: i64,
    pub services: Vec<String>,
}

/// Runs one scheduling attempt end to end: date enumeration, duration
/// resolution, slot search and, after the client confirms, recording. Holds
/// no request state of its own; every call reads a fresh snapshot from the
/// store.
#[derive(Debug, Clone)]
pub struct Scheduler<T: BookingStore> {
    store: T,
    hours: BusinessHours,
    step_minutes: i64,
    horizon: usize,
}

impl<T: BookingStore> Scheduler<T> {
    pub fn new(store: T, hours: BusinessHours, step_minutes: i64, horizon: usize) -> Self {
        Self {
            store,
            hours,
            step_minutes,
            horizon,
        }
    }

    pub fn bookable_dates(&self) -> Result<Vec<NaiveDate>, BookingError> {
        let holidays = self.store.holidays()?;
        Ok(available_dates(
            &holidays,
            self.horizon,
            Local::now().date_naive(),
        ))
    }

    pub fn employees(&self) -> Result<Vec<String>, BookingError> {
        Ok(self.store.employees()?)
    }

    pub fn services(&self) -> Result<Vec<Service>, BookingError> {
        Ok(self.store.services()?)
    }

    /// Earliest available slot for the selection, or `Ok(None)` when the day
    /// is exhausted. A selection that is empty after normalization, names no
    /// catalog entry, or comes without an employee is `IncompleteSelection`.
    pub fn quote(
        &self,
        selected: &[String],
        date: NaiveDate,
        employee: &str,
    ) -> Result<Option<SlotQuote>, BookingError> {
        let services = normalize_selection(selected);
        if services.is_empty() || employee.trim().is_empty() {
            return Err(BookingError::IncompleteSelection);
        }

        let catalog = self.store.services()?;
        let duration_minutes = total_duration(&services, &catalog);
        if duration_minutes <= 0 {
            // Nothing in the selection matched the catalog; searching would
            // trivially return opening time for a zero-length appointment.
            return Err(BookingError::IncompleteSelection);
        }

        let bookings = self.store.bookings()?;
        Ok(
            find_slot(
                &bookings,
                date,
                duration_minutes,
                employee,
                self.hours,
                self.step_minutes,
            )
            .map(|start| SlotQuote {
                start,
                duration_minutes,
                services,
            }),
        )
    }

    /// Record a confirmed booking. Availability is re-validated against a
    /// fresh bookings read before committing, which narrows (but does not
    /// close) the window between quoting and confirming: two clients racing
    /// for the last slot can still both pass this check, as the store offers
    /// no compare-and-append.
    pub fn confirm(
        &self,
        selected: &[String],
        date: NaiveDate,
        employee: &str,
        client: &ClientDetails,
    ) -> Result<Booking, BookingError> {
        validate_client(client)?;

        let quote = self
            .quote(selected, date, employee)?
            .ok_or(BookingError::SlotTaken)?;

        let booking = Booking {
            date,
            employee: employee.to_string(),
            start: quote.start,
            duration_minutes: quote.duration_minutes,
            services: quote.services,
        };
        self.store.append_booking(&booking)?;

        let record = ClientRecord {
            booking: booking.clone(),
            client: client.clone(),
        };
        if let Err(err) = self.store.append_client_record(&record) {
            warn!(?err, "operational record written but client record failed");
            return Err(BookingError::PartialPersistence(err.to_string()));
        }

        info!(
            date = %booking.storage_date(),
            employee = %booking.employee,
            start = %booking.storage_start(),
            duration_minutes = booking.duration_minutes,
            "booking recorded"
        );
        Ok(booking)
    }
}

fn validate_client(client: &ClientDetails) -> Result<(), BookingError> {
    if let Err(errors) = client.validate() {
        return Err(BookingError::IncompleteConfirmationForm(errors.to_string()));
    }
    if !PHONE_PATTERN.is_match(client.phone.trim()) {
        return Err(BookingError::IncompleteConfirmationForm(
            "phone must be digits, optionally with +, spaces or dashes".into(),
        ));
    }
    Ok(())
}
