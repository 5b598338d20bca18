//! # hire-engine
//!
//! Deterministic availability and scheduling for a rental-equipment calendar.
//!
//! The engine answers which assets are on hire or available on any given
//! day, which bookings collide, what dates a day/week/month view shows, and
//! where a booking lands when it is dragged to a new date or asset. Every
//! function is pure over an immutable snapshot: "today" is always a
//! parameter, nothing reads the clock, and mutations return new values.
//!
//! ## Modules
//!
//! - [`model`]: Assets, bookings, product headers, snapshot validation
//! - [`timeline`]: Date axis for day/week/month views, period navigation
//! - [`availability`]: On-hire / available / hire-bar position per asset per date
//! - [`conflict`]: Double-booking detection and range visibility
//! - [`aggregation`]: Status counts per date and per product group
//! - [`reschedule`]: Duration-preserving booking moves
//! - [`ordering`]: Custom asset display order
//! - [`view`]: Assemble a full calendar view in one call
//! - [`error`]: Error types

pub mod aggregation;
pub mod availability;
pub mod conflict;
pub mod error;
pub mod model;
pub mod ordering;
pub mod reschedule;
pub mod timeline;
pub mod view;

pub use aggregation::{
    count_for_date_and_filter, group_by_header, group_counts, matches_filters, toggle_expanded,
    GroupCounts, StatusFilter,
};
pub use availability::{
    hire_period_position, is_available_on_date, is_on_hire_on_date, status_on_date, DayStatus,
    HirePosition,
};
pub use conflict::{
    bookings_covering_date, conflicts_for_move, find_conflicts, has_conflict, is_booking_visible,
    visible_bookings, Conflict,
};
pub use error::HireError;
pub use model::{
    parse_date, validate_asset, validate_booking, Asset, Booking, HireStatus, ProductHeader,
    RentalDetails, Snapshot,
};
pub use ordering::{reorder, resolve_display_order};
pub use reschedule::{apply_move, move_booking, reassign_asset, MoveOutcome};
pub use timeline::{generate_dates, period_bounds, period_label, shift_reference, ViewType};
pub use view::{render_view, CalendarView, Cell, Row, ViewConfig};
