//! Error types for hire-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HireError {
    #[error("Invalid date range for {id}: end {end} is before start {start}")]
    InvalidDateRange {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Missing hire window: asset {0} is on hire but lacks an on-hire or off-hire date")]
    MissingHireWindow(String),

    #[error("Unknown asset reference: booking {booking_id} points at asset {asset_id}")]
    UnknownAssetReference { booking_id: String, asset_id: String },

    #[error("Unknown booking: {0}")]
    UnknownBooking(String),

    #[error("Index out of range: {index} (list length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid view type: {0}")]
    InvalidViewType(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid view config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, HireError>;
