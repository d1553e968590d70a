use crate::error::StoreError;
use crate::store::BookingStore;
use crate::types::{
    Booking, ClientRecord, Service, STORAGE_DATE_FORMAT, TIME_FORMAT,
};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::info;

const HOLIDAYS_FILE: &str = "holidays.csv";
const EMPLOYEES_FILE: &str = "employees.csv";
const SERVICES_FILE: &str = "services.csv";
const BOOKINGS_FILE: &str = "bookings.csv";
const CLIENT_BOOKINGS_FILE: &str = "client_bookings.csv";

/// Tabular store backed by one CSV file per collection under a data
/// directory. Every file carries a header row which reads skip; appends add
/// exactly one row. Dates are stored as `DD/MM/YYYY`, times as `HH:MM` and
/// the client-side duration as `"<n> min"`; these shapes interoperate with
/// data written by earlier tooling and must not drift.
#[derive(Debug, Clone)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            info!(dir = %dir.display(), "created data directory");
        }

        let store = Self { dir };
        store.ensure_file(HOLIDAYS_FILE, "date")?;
        store.ensure_file(EMPLOYEES_FILE, "name")?;
        store.ensure_file(SERVICES_FILE, "name,duration")?;
        store.ensure_file(BOOKINGS_FILE, "date,employee,start,duration,services")?;
        store.ensure_file(
            CLIENT_BOOKINGS_FILE,
            "date,name,identifier,phone,employee,services,start,duration",
        )?;
        Ok(store)
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn ensure_file(&self, file: &str, header: &str) -> Result<(), StoreError> {
        let path = self.path(file);
        if !path.exists() {
            fs::write(&path, format!("{header}\n"))?;
        }
        Ok(())
    }

    /// All values of the first column, header skipped.
    fn read_first_column(&self, file: &str) -> Result<Vec<String>, StoreError> {
        let mut reader = csv::Reader::from_path(self.path(file))?;
        let mut values = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(value) = record.get(0) {
                values.push(value.to_string());
            }
        }
        Ok(values)
    }

    fn append_row(&self, file: &str, row: &[String]) -> Result<(), StoreError> {
        let handle = OpenOptions::new().append(true).open(self.path(file))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(handle);
        writer.write_record(row)?;
        writer.flush().map_err(StoreError::from)?;
        Ok(())
    }
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    collection: &'static str,
) -> Result<&'a str, StoreError> {
    record.get(index).ok_or_else(|| StoreError::Malformed {
        collection,
        detail: format!("missing column {index}"),
    })
}

fn split_services(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

impl BookingStore for CsvStore {
    fn holidays(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self.read_first_column(HOLIDAYS_FILE)?.into_iter().collect())
    }

    fn employees(&self) -> Result<Vec<String>, StoreError> {
        self.read_first_column(EMPLOYEES_FILE)
    }

    fn services(&self) -> Result<Vec<Service>, StoreError> {
        let mut reader = csv::Reader::from_path(self.path(SERVICES_FILE))?;
        let mut services = Vec::new();
        for record in reader.records() {
            let record = record?;
            let name = field(&record, 0, SERVICES_FILE)?.to_string();
            let duration = field(&record, 1, SERVICES_FILE)?;
            let duration_minutes =
                duration
                    .trim()
                    .parse::<i64>()
                    .map_err(|err| StoreError::Malformed {
                        collection: SERVICES_FILE,
                        detail: format!("duration for {name}: {err}"),
                    })?;
            services.push(Service {
                name,
                duration_minutes,
            });
        }
        Ok(services)
    }

    fn bookings(&self) -> Result<Vec<Booking>, StoreError> {
        let mut reader = csv::Reader::from_path(self.path(BOOKINGS_FILE))?;
        let mut bookings = Vec::new();
        for record in reader.records() {
            let record = record?;
            let date = NaiveDate::parse_from_str(
                field(&record, 0, BOOKINGS_FILE)?,
                STORAGE_DATE_FORMAT,
            )
            .map_err(|err| StoreError::Malformed {
                collection: BOOKINGS_FILE,
                detail: format!("date: {err}"),
            })?;
            let employee = field(&record, 1, BOOKINGS_FILE)?.to_string();
            let start =
                NaiveTime::parse_from_str(field(&record, 2, BOOKINGS_FILE)?, TIME_FORMAT)
                    .map_err(|err| StoreError::Malformed {
                        collection: BOOKINGS_FILE,
                        detail: format!("start: {err}"),
                    })?;
            let duration_minutes = field(&record, 3, BOOKINGS_FILE)?
                .trim()
                .parse::<i64>()
                .map_err(|err| StoreError::Malformed {
                    collection: BOOKINGS_FILE,
                    detail: format!("duration: {err}"),
                })?;
            let services = split_services(field(&record, 4, BOOKINGS_FILE)?);
            bookings.push(Booking {
                date,
                employee,
                start,
                duration_minutes,
                services,
            });
        }
        Ok(bookings)
    }

    fn append_booking(&self, booking: &Booking) -> Result<(), StoreError> {
        self.append_row(
            BOOKINGS_FILE,
            &[
                booking.storage_date(),
                booking.employee.clone(),
                booking.storage_start(),
                booking.duration_minutes.to_string(),
                booking.storage_services(),
            ],
        )
    }

    fn append_client_record(&self, record: &ClientRecord) -> Result<(), StoreError> {
        self.append_row(
            CLIENT_BOOKINGS_FILE,
            &[
                record.booking.storage_date(),
                record.client.name.clone(),
                record.client.identifier.clone(),
                record.client.phone.clone(),
                record.booking.employee.clone(),
                record.booking.storage_services(),
                record.booking.storage_start(),
                record.storage_duration(),
            ],
        )
    }
}
