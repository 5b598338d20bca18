//! One-call calendar view assembly.
//!
//! [`render_view`] is the usual entry point for a UI or API layer: it takes a
//! [`ViewConfig`], a [`Snapshot`] and an explicit `today`, and returns every
//! derived value a calendar grid needs. It runs the other modules in the
//! order a caller would: validate, generate the axis, group, count, filter,
//! order, then evaluate each row against each axis date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aggregation::{group_by_header, group_counts, matches_filters, GroupCounts, StatusFilter};
use crate::availability::{hire_period_position, status_on_date, DayStatus, HirePosition};
use crate::conflict::visible_bookings;
use crate::error::{HireError, Result};
use crate::model::{Asset, Booking, ProductHeader, Snapshot};
use crate::ordering::resolve_display_order;
use crate::timeline::{generate_dates, period_label, ViewType};

/// What to render. Deserializes from JSON with everything but
/// `reference_date` optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    #[serde(default)]
    pub view_type: ViewType,
    #[serde(with = "crate::model::date_serde")]
    pub reference_date: NaiveDate,
    #[serde(default)]
    pub status_filter: StatusFilter,
    #[serde(default)]
    pub category_filter: Option<String>,
    #[serde(default)]
    pub custom_order: Vec<String>,
}

impl ViewConfig {
    pub fn new(view_type: ViewType, reference_date: NaiveDate) -> Self {
        Self {
            view_type,
            reference_date,
            status_filter: StatusFilter::All,
            category_filter: None,
            custom_order: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HireError::InvalidConfig(e.to_string()))
    }
}

/// One asset on one axis date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub position: Option<HirePosition>,
    pub booking_ids: Vec<String>,
    pub conflict: bool,
}

/// One displayed asset with a cell per axis date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub asset: Asset,
    pub cells: Vec<Cell>,
}

/// Everything a calendar grid needs for one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub label: String,
    pub dates: Vec<NaiveDate>,
    /// Axis index of `today`, if it is on screen.
    pub today_index: Option<usize>,
    pub headers: Vec<ProductHeader>,
    /// Counts cover every asset in a group, before display filters.
    pub counts: Vec<GroupCounts>,
    /// Filtered rows in display order.
    pub rows: Vec<Row>,
}

/// Build a [`CalendarView`] from a snapshot.
///
/// Status and category filters are evaluated on `today`. Header counts are
/// computed over the unfiltered snapshot.
///
/// # Errors
///
/// Any violation reported by [`Snapshot::validate`].
pub fn render_view(config: &ViewConfig, snapshot: &Snapshot, today: NaiveDate) -> Result<CalendarView> {
    if let Err(e) = snapshot.validate() {
        warn!(error = %e, "snapshot rejected");
        return Err(e);
    }

    let dates = generate_dates(config.reference_date, config.view_type);
    let headers = group_by_header(&snapshot.assets);
    let counts = group_counts(&headers, &snapshot.assets, &dates);

    let category = config.category_filter.as_deref().filter(|c| !c.trim().is_empty());
    let shown: Vec<Asset> = snapshot
        .assets
        .iter()
        .filter(|a| matches_filters(a, today, config.status_filter, category))
        .cloned()
        .collect();
    let ordered = resolve_display_order(&shown, &config.custom_order);

    let visible = visible_bookings(&snapshot.bookings, &dates);

    let rows: Vec<Row> = ordered
        .into_iter()
        .map(|asset| {
            let own: Vec<&Booking> = visible
                .iter()
                .copied()
                .filter(|b| b.asset_id == asset.id)
                .collect();
            let cells = dates.iter().map(|&date| build_cell(&asset, &own, date)).collect();
            Row { asset, cells }
        })
        .collect();

    debug!(
        view = %config.view_type,
        reference = %config.reference_date,
        dates = dates.len(),
        rows = rows.len(),
        bookings = visible.len(),
        "calendar view rendered"
    );

    Ok(CalendarView {
        label: period_label(config.reference_date, config.view_type),
        today_index: dates.iter().position(|d| *d == today),
        dates,
        headers,
        counts,
        rows,
    })
}

fn build_cell(asset: &Asset, bookings: &[&Booking], date: NaiveDate) -> Cell {
    let booking_ids: Vec<String> = bookings
        .iter()
        .filter(|b| b.covers(date))
        .map(|b| b.id.clone())
        .collect();
    Cell {
        date,
        status: status_on_date(asset, date),
        position: hire_period_position(asset, date),
        conflict: booking_ids.len() > 1,
        booking_ids,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
