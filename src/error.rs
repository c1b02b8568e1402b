use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("not a calendar date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("choose a check-in date before the check-out date")]
    CheckOutWithoutCheckIn,
    #[error("check-out {check_out} must be after check-in {check_in}")]
    CheckOutNotAfterCheckIn {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no browser window or document available")]
    MissingWindow,
    #[error("site content JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
