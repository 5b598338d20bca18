//! Per-asset, per-date hire status.
//!
//! On-hire status is derived every time from the `(status flag, hire window)`
//! pair; there are no transitions to track. The flag and the window can
//! disagree: an asset flagged [`HireStatus::OnHire`] whose window does not
//! cover the query date reports as available for that date even though its
//! flag still reads on hire.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Asset, HireStatus};

/// Where a date sits inside an asset's hire window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HirePosition {
    pub is_start: bool,
    pub is_end: bool,
    pub is_middle: bool,
}

/// Derived status of one asset on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Available,
    OnHire,
}

/// True iff the asset is flagged on hire and `date` falls inside its
/// complete `[on_hire_date, off_hire_date]` window.
pub fn is_on_hire_on_date(asset: &Asset, date: NaiveDate) -> bool {
    if asset.status != HireStatus::OnHire {
        return false;
    }
    match asset.hire_window() {
        Some((on, off)) => on <= date && date <= off,
        None => false,
    }
}

/// True iff the asset is flagged available, or is not on hire on `date`.
pub fn is_available_on_date(asset: &Asset, date: NaiveDate) -> bool {
    asset.status == HireStatus::Available || !is_on_hire_on_date(asset, date)
}

/// Position of `date` within the hire window, or `None` when the asset is
/// not on hire on that date.
pub fn hire_period_position(asset: &Asset, date: NaiveDate) -> Option<HirePosition> {
    if !is_on_hire_on_date(asset, date) {
        return None;
    }
    let (on, off) = asset.hire_window()?;
    let is_start = date == on;
    let is_end = date == off;
    Some(HirePosition {
        is_start,
        is_end,
        is_middle: !is_start && !is_end,
    })
}

pub fn status_on_date(asset: &Asset, date: NaiveDate) -> DayStatus {
    if is_on_hire_on_date(asset, date) {
        DayStatus::OnHire
    } else {
        DayStatus::Available
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn on_hire(on: &str, off: &str) -> Asset {
        Asset {
            id: "A".to_string(),
            product_type: "Generator".to_string(),
            category: "Power".to_string(),
            status: HireStatus::OnHire,
            on_hire_date: Some(d(on)),
            off_hire_date: Some(d(off)),
            rental_details: None,
            parent_header: "hdr-gen".to_string(),
            location: String::new(),
        }
    }

    #[test]
    fn test_on_hire_inside_window() {
        let a = on_hire("2025-01-10", "2025-01-15");
        assert!(is_on_hire_on_date(&a, d("2025-01-12")));
        assert!(is_on_hire_on_date(&a, d("2025-01-10")));
        assert!(is_on_hire_on_date(&a, d("2025-01-15")));
    }

    #[test]
    fn test_on_hire_outside_window() {
        let a = on_hire("2025-01-10", "2025-01-15");
        assert!(!is_on_hire_on_date(&a, d("2025-01-16")));
        assert!(!is_on_hire_on_date(&a, d("2025-01-09")));
    }

    #[test]
    fn test_available_flag_ignores_window() {
        let mut a = on_hire("2025-01-10", "2025-01-15");
        a.status = HireStatus::Available;
        assert!(!is_on_hire_on_date(&a, d("2025-01-12")));
        assert!(is_available_on_date(&a, d("2025-01-12")));
        assert_eq!(hire_period_position(&a, d("2025-01-12")), None);
    }

    #[test]
    fn test_lapsed_window_reports_available() {
        // Flag still says on hire but the window ended before the query date
        let a = on_hire("2025-01-10", "2025-01-15");
        assert!(is_available_on_date(&a, d("2025-01-20")));
        assert_eq!(status_on_date(&a, d("2025-01-20")), DayStatus::Available);
    }

    #[test]
    fn test_missing_window_is_not_on_hire() {
        let mut a = on_hire("2025-01-10", "2025-01-15");
        a.off_hire_date = None;
        assert!(!is_on_hire_on_date(&a, d("2025-01-12")));
        assert!(is_available_on_date(&a, d("2025-01-12")));
    }

    #[test]
    fn test_position_start_middle_end() {
        let a = on_hire("2025-01-10", "2025-01-15");
        let start = hire_period_position(&a, d("2025-01-10")).unwrap();
        assert!(start.is_start && !start.is_end && !start.is_middle);

        let middle = hire_period_position(&a, d("2025-01-12")).unwrap();
        assert!(!middle.is_start && !middle.is_end && middle.is_middle);

        let end = hire_period_position(&a, d("2025-01-15")).unwrap();
        assert!(!end.is_start && end.is_end && !end.is_middle);

        assert_eq!(hire_period_position(&a, d("2025-01-16")), None);
    }

    #[test]
    fn test_position_single_day_hire() {
        let a = on_hire("2025-01-10", "2025-01-10");
        let pos = hire_period_position(&a, d("2025-01-10")).unwrap();
        assert!(pos.is_start && pos.is_end && !pos.is_middle);
    }
}
