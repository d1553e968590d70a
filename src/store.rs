use crate::error::StoreError;
use crate::types::{Booking, ClientRecord, Service};
use std::collections::HashSet;

/// Read/append contract of the external tabular store. Holidays are exposed
/// as `YYYY-MM-DD` strings because that is what the calendar generator
/// compares against. Both booking collections are append-only.
pub trait BookingStore: Clone + Send + Sync + 'static {
    fn holidays(&self) -> Result<HashSet<String>, StoreError>;
    fn employees(&self) -> Result<Vec<String>, StoreError>;
    fn services(&self) -> Result<Vec<Service>, StoreError>;
    fn bookings(&self) -> Result<Vec<Booking>, StoreError>;
    fn append_booking(&self, booking: &Booking) -> Result<(), StoreError>;
    fn append_client_record(&self, record: &ClientRecord) -> Result<(), StoreError>;
}
