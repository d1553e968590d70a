use crate::error::StoreError;
use crate::store::BookingStore;
use crate::types::{Booking, ClientRecord, Service};
use std::collections::HashSet;
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

pub struct MockBookingStoreInner {
    pub fail_reads: AtomicBool,
    pub fail_client_append: AtomicBool,
    pub calls_to_holidays: AtomicU64,
    pub calls_to_employees: AtomicU64,
    pub calls_to_services: AtomicU64,
    pub calls_to_bookings: AtomicU64,
    pub calls_to_append_booking: AtomicU64,
    pub calls_to_append_client_record: AtomicU64,
    pub holidays: Mutex<HashSet<String>>,
    pub employees: Mutex<Vec<String>>,
    pub services: Mutex<Vec<Service>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub client_records: Mutex<Vec<ClientRecord>>,
}

#[derive(Clone)]
pub struct MockBookingStore(pub Arc<MockBookingStoreInner>);

impl MockBookingStore {
    /// Mock seeded with the fixture salon: two employees and a catalog where
    /// Haircut + Beard resolve to 45 minutes.
    pub fn new() -> Self {
        Self(Arc::new(MockBookingStoreInner {
            fail_reads: AtomicBool::new(false),
            fail_client_append: AtomicBool::new(false),
            calls_to_holidays: AtomicU64::default(),
            calls_to_employees: AtomicU64::default(),
            calls_to_services: AtomicU64::default(),
            calls_to_bookings: AtomicU64::default(),
            calls_to_append_booking: AtomicU64::default(),
            calls_to_append_client_record: AtomicU64::default(),
            holidays: Mutex::default(),
            employees: Mutex::new(vec!["Ana".into(), "Luis".into()]),
            services: Mutex::new(vec![
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
            ]),
            bookings: Mutex::default(),
            client_records: Mutex::default(),
        }))
    }

    pub fn push_booking(&self, booking: Booking) {
        self.0.bookings.lock().unwrap().push(booking);
    }

    fn read_guard(&self) -> Result<(), StoreError> {
        match self.0.fail_reads.load(Ordering::SeqCst) {
            false => Ok(()),
            true => Err(StoreError::Unavailable("supposed to fail".into())),
        }
    }
}

impl BookingStore for MockBookingStore {
    fn holidays(&self) -> Result<HashSet<String>, StoreError> {
        self.0.calls_to_holidays.fetch_add(1, Ordering::SeqCst);
        self.read_guard()?;
        Ok(self.0.holidays.lock().unwrap().clone())
    }

    fn employees(&self) -> Result<Vec<String>, StoreError> {
        self.0.calls_to_employees.fetch_add(1, Ordering::SeqCst);
        self.read_guard()?;
        Ok(self.0.employees.lock().unwrap().clone())
    }

    fn services(&self) -> Result<Vec<Service>, StoreError> {
        self.0.calls_to_services.fetch_add(1, Ordering::SeqCst);
        self.read_guard()?;
        Ok(self.0.services.lock().unwrap().clone())
    }

    fn bookings(&self) -> Result<Vec<Booking>, StoreError> {
        self.0.calls_to_bookings.fetch_add(1, Ordering::SeqCst);
        self.read_guard()?;
        Ok(self.0.bookings.lock().unwrap().clone())
    }

    fn append_booking(&self, booking: &Booking) -> Result<(), StoreError> {
        self.0
            .calls_to_append_booking
            .fetch_add(1, Ordering::SeqCst);
        self.0.bookings.lock().unwrap().push(booking.clone());
        Ok(())
    }

    fn append_client_record(&self, record: &ClientRecord) -> Result<(), StoreError> {
        self.0
            .calls_to_append_client_record
            .fetch_add(1, Ordering::SeqCst);
        if self.0.fail_client_append.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("supposed to fail".into()));
        }
        self.0.client_records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
