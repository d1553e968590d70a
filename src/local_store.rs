use crate::error::StoreError;
use crate::store::BookingStore;
use crate::types::{Booking, ClientRecord, Service};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory store for running without a data directory. Nothing survives a
/// restart.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    inner: Arc<Mutex<LocalStoreInner>>,
}

#[derive(Debug, Default)]
struct LocalStoreInner {
    holidays: HashSet<String>,
    employees: Vec<String>,
    services: Vec<Service>,
    bookings: HashMap<Uuid, Booking>,
    client_records: Vec<ClientRecord>,
}

impl LocalStore {
    /// A store pre-filled with an example salon, handy for demos and tests.
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.lock().unwrap();
            inner.employees = vec!["Ana".into(), "Luis".into()];
            inner.services = vec![
                Service {
                    name: "Haircut".into(),
                    duration_minutes: 30,
                },
                Service {
                    name: "Beard".into(),
                    duration_minutes: 15,
                },
                Service {
                    name: "Color".into(),
                    duration_minutes: 90,
                },
                Service {
                    name: "Wash".into(),
                    duration_minutes: 10,
                },
            ];
        }
        store
    }

    pub fn add_holiday(&self, iso_date: &str) {
        self.inner.lock().unwrap().holidays.insert(iso_date.to_string());
    }

    pub fn client_records(&self) -> Vec<ClientRecord> {
        self.inner.lock().unwrap().client_records.clone()
    }
}

impl BookingStore for LocalStore {
    fn holidays(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self.inner.lock().unwrap().holidays.clone())
    }

    fn employees(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.inner.lock().unwrap().employees.clone())
    }

    fn services(&self) -> Result<Vec<Service>, StoreError> {
        Ok(self.inner.lock().unwrap().services.clone())
    }

    fn bookings(&self) -> Result<Vec<Booking>, StoreError> {
        let mut bookings: Vec<Booking> = self
            .inner
            .lock()
            .unwrap()
            .bookings
            .values()
            .cloned()
            .collect();
        bookings.sort_unstable_by(|a, b| (a.date, a.start).cmp(&(b.date, b.start)));
        Ok(bookings)
    }

    fn append_booking(&self, booking: &Booking) -> Result<(), StoreError> {
        self.inner
            .lock()
            .unwrap()
            .bookings
            .insert(Uuid::new_v4(), booking.clone());
        Ok(())
    }

    fn append_client_record(&self, record: &ClientRecord) -> Result<(), StoreError> {
        self.inner
            .lock()
            .unwrap()
            .client_records
            .push(record.clone());
        Ok(())
    }
}
