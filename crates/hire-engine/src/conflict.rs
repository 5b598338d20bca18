//! Booking overlap detection.
//!
//! A conflict is two or more bookings for the *same* asset covering the same
//! date. Bookings on different assets never conflict. Finding a conflict is
//! a normal query result; whether to block, warn, or ignore is up to the
//! caller.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Booking;

/// Bookings that overlap on one asset and one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub asset_id: String,
    pub date: NaiveDate,
    pub booking_ids: Vec<String>,
}

/// All bookings for `asset_id` whose `[start, end]` contains `date`, in input order.
pub fn bookings_covering_date<'a>(
    bookings: &'a [Booking],
    asset_id: &str,
    date: NaiveDate,
) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.asset_id == asset_id && b.covers(date))
        .collect()
}

/// Whether more than one booking for `asset_id` covers `date`.
pub fn has_conflict(bookings: &[Booking], asset_id: &str, date: NaiveDate) -> bool {
    bookings
        .iter()
        .filter(|b| b.asset_id == asset_id && b.covers(date))
        .nth(1)
        .is_some()
}

/// Whether `booking` intersects the inclusive range `[range[0], range[last]]`.
///
/// An empty range shows nothing.
pub fn is_booking_visible(booking: &Booking, range: &[NaiveDate]) -> bool {
    match (range.first(), range.last()) {
        (Some(&range_start), Some(&range_end)) => {
            booking.start <= range_end && booking.end >= range_start
        }
        _ => false,
    }
}

/// Bookings that intersect the date axis, in input order.
pub fn visible_bookings<'a>(bookings: &'a [Booking], range: &[NaiveDate]) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| is_booking_visible(b, range))
        .collect()
}

/// One [`Conflict`] per date in `dates` on which `asset_id` is double-booked.
pub fn find_conflicts(bookings: &[Booking], asset_id: &str, dates: &[NaiveDate]) -> Vec<Conflict> {
    let candidates: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.asset_id == asset_id && is_booking_visible(b, dates))
        .collect();

    dates
        .iter()
        .filter_map(|&date| {
            let covering: Vec<String> = candidates
                .iter()
                .filter(|b| b.covers(date))
                .map(|b| b.id.clone())
                .collect();
            (covering.len() > 1).then(|| Conflict {
                asset_id: asset_id.to_string(),
                date,
                booking_ids: covering,
            })
        })
        .collect()
}

/// Bookings that would overlap `moved` if it replaced the booking with the
/// same id. Advisory only: the caller decides whether to proceed.
pub fn conflicts_for_move<'a>(bookings: &'a [Booking], moved: &Booking) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.id != moved.id && b.asset_id == moved.asset_id)
        .filter(|b| b.start <= moved.end && b.end >= moved.start)
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
