use thiserror::Error;

pub mod attendance;
pub mod calendar;
pub mod reporting;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Date error: {0}")]
    DateError(#[from] tally_utils::DateUtilsError),
}
