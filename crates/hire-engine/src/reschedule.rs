//! Duration-preserving booking moves.
//!
//! Nothing here blocks on conflicts. [`apply_move`] reports overlaps it
//! would create alongside the new booking list, and the caller decides
//! whether to keep the result.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::conflict::conflicts_for_move;
use crate::error::{HireError, Result};
use crate::model::{validate_booking, Booking, Snapshot};

/// Result of moving one booking inside a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// The booking after the move.
    pub booking: Booking,
    /// The full booking list with the moved booking replaced in place.
    pub bookings: Vec<Booking>,
    /// Ids of other bookings on the target asset that now overlap.
    pub conflicts: Vec<String>,
}

/// Move `booking` to `new_asset_id`, starting on `new_start`, keeping its
/// length in days.
///
/// # Errors
///
/// Returns [`HireError::InvalidDateRange`] if the input booking ends before
/// it starts or the new end date is not representable.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hire_engine::model::Booking;
/// use hire_engine::reschedule::move_booking;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let booking = Booking {
///     id: "B1".into(),
///     asset_id: "EX-001".into(),
///     start: d("2025-01-10"),
///     end: d("2025-01-12"),
///     title: String::new(),
///     booking_type: String::new(),
///     customer: String::new(),
///     location: String::new(),
/// };
/// let moved = move_booking(&booking, "EX-002", d("2025-02-01")).unwrap();
/// assert_eq!(moved.end, d("2025-02-03"));
/// assert_eq!(moved.asset_id, "EX-002");
/// ```
pub fn move_booking(booking: &Booking, new_asset_id: &str, new_start: NaiveDate) -> Result<Booking> {
    validate_booking(booking)?;
    let duration = booking.duration_days() as u64;
    let new_end = new_start
        .checked_add_days(Days::new(duration))
        .ok_or_else(|| HireError::InvalidDateRange {
            id: booking.id.clone(),
            start: new_start,
            end: booking.end,
        })?;

    Ok(Booking {
        asset_id: new_asset_id.to_string(),
        start: new_start,
        end: new_end,
        ..booking.clone()
    })
}

/// Same booking, different asset; dates untouched.
pub fn reassign_asset(booking: &Booking, new_asset_id: &str) -> Booking {
    Booking {
        asset_id: new_asset_id.to_string(),
        ..booking.clone()
    }
}

/// Move booking `booking_id` inside `snapshot` and return the new booking list.
///
/// # Errors
///
/// - [`HireError::UnknownBooking`] if no booking has `booking_id`
/// - [`HireError::UnknownAssetReference`] if `new_asset_id` is not in the snapshot
/// - [`HireError::InvalidDateRange`] from [`move_booking`]
pub fn apply_move(
    snapshot: &Snapshot,
    booking_id: &str,
    new_asset_id: &str,
    new_start: NaiveDate,
) -> Result<MoveOutcome> {
    let original = snapshot
        .booking(booking_id)
        .ok_or_else(|| HireError::UnknownBooking(booking_id.to_string()))?;
    if snapshot.asset(new_asset_id).is_none() {
        return Err(HireError::UnknownAssetReference {
            booking_id: booking_id.to_string(),
            asset_id: new_asset_id.to_string(),
        });
    }

    let moved = move_booking(original, new_asset_id, new_start)?;
    let conflicts: Vec<String> = conflicts_for_move(&snapshot.bookings, &moved)
        .into_iter()
        .map(|b| b.id.clone())
        .collect();
    let bookings: Vec<Booking> = snapshot
        .bookings
        .iter()
        .map(|b| if b.id == booking_id { moved.clone() } else { b.clone() })
        .collect();

    debug!(
        booking = booking_id,
        from_asset = %original.asset_id,
        to_asset = new_asset_id,
        start = %moved.start,
        end = %moved.end,
        conflicts = conflicts.len(),
        "booking moved"
    );

    Ok(MoveOutcome {
        booking: moved,
        bookings,
        conflicts,
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
