use thiserror::Error;

/// Failure talking to the booking store. Every variant aborts the current
/// scheduling attempt; nothing is retried below the pipeline boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed record in {collection}: {detail}")]
    Malformed {
        collection: &'static str,
        detail: String,
    },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Outcome taxonomy of the booking pipeline. "No slot available" is not in
/// here: an exhausted day is a normal outcome, reported as `Ok(None)` by the
/// availability search. `SlotTaken` only occurs when the confirm-time
/// re-validation finds the day exhausted after a quote succeeded.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("could not reach the booking store: {0}")]
    StoreUnavailable(#[from] StoreError),
    #[error("select at least one service and an employee")]
    IncompleteSelection,
    #[error("confirmation form incomplete: {0}")]
    IncompleteConfirmationForm(String),
    #[error("no slot is available anymore for the requested day")]
    SlotTaken,
    #[error("booking only partially recorded, client record failed: {0}")]
    PartialPersistence(String),
}
