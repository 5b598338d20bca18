//! Timeline axis generation for day, week and month views.
//!
//! All functions are pure: the reference date is always supplied by the
//! caller, nothing here reads the system clock.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{HireError, Result};

/// Which calendar span a view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Day,
    /// ISO week, Monday through Sunday.
    #[default]
    Week,
    Month,
}

impl FromStr for ViewType {
    type Err = HireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(ViewType::Day),
            "week" => Ok(ViewType::Week),
            "month" => Ok(ViewType::Month),
            _ => Err(HireError::InvalidViewType(s.to_string())),
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewType::Day => "day",
            ViewType::Week => "week",
            ViewType::Month => "month",
        })
    }
}

/// Generate the ordered date axis for `view` around `reference`.
///
/// - `Day` → `[reference]`
/// - `Week` → the Monday..=Sunday ISO week containing `reference`
/// - `Month` → the first..=last day of `reference`'s month
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hire_engine::timeline::{generate_dates, ViewType};
///
/// let wed = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let week = generate_dates(wed, ViewType::Week);
/// assert_eq!(week.len(), 7);
/// assert_eq!(week[0], NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
/// ```
pub fn generate_dates(reference: NaiveDate, view: ViewType) -> Vec<NaiveDate> {
    let (first, last) = period_bounds(reference, view);
    let mut dates = Vec::new();
    let mut next = Some(first);
    while let Some(day) = next.filter(|d| *d <= last) {
        dates.push(day);
        next = day.succ_opt();
    }
    dates
}

/// First and last day of the period `view` selects around `reference`.
///
/// Periods that run past the ends of the supported calendar are cut at
/// [`NaiveDate::MIN`] / [`NaiveDate::MAX`].
pub fn period_bounds(reference: NaiveDate, view: ViewType) -> (NaiveDate, NaiveDate) {
    match view {
        ViewType::Day => (reference, reference),
        ViewType::Week => {
            let offset = reference.weekday().num_days_from_monday() as u64;
            let monday = reference
                .checked_sub_days(Days::new(offset))
                .unwrap_or(NaiveDate::MIN);
            let sunday = reference
                .checked_add_days(Days::new(6 - offset))
                .unwrap_or(NaiveDate::MAX);
            (monday, sunday)
        }
        ViewType::Month => {
            let first = reference.with_day(1).unwrap_or(reference);
            let last = first
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(NaiveDate::MAX);
            (first, last)
        }
    }
}

/// Move `reference` by `steps` whole periods (negative = backwards).
///
/// Month steps keep the day of month where possible and clamp it to the
/// target month's length (Jan 31 + 1 month = Feb 28/29). Out-of-range
/// results saturate at `reference`.
pub fn shift_reference(reference: NaiveDate, view: ViewType, steps: i32) -> NaiveDate {
    let magnitude = steps.unsigned_abs();
    let shifted = match (view, steps >= 0) {
        (ViewType::Day, true) => reference.checked_add_days(Days::new(magnitude as u64)),
        (ViewType::Day, false) => reference.checked_sub_days(Days::new(magnitude as u64)),
        (ViewType::Week, true) => reference.checked_add_days(Days::new(7 * magnitude as u64)),
        (ViewType::Week, false) => reference.checked_sub_days(Days::new(7 * magnitude as u64)),
        (ViewType::Month, true) => reference.checked_add_months(Months::new(magnitude)),
        (ViewType::Month, false) => reference.checked_sub_months(Months::new(magnitude)),
    };
    shifted.unwrap_or(reference)
}

/// Human-readable heading for the period, e.g. `January 2025`.
pub fn period_label(reference: NaiveDate, view: ViewType) -> String {
    match view {
        ViewType::Day => reference.format("%Y-%m-%d").to_string(),
        ViewType::Week => {
            let (first, last) = period_bounds(reference, view);
            format!("{} to {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d"))
        }
        ViewType::Month => reference.format("%B %Y").to_string(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_view_is_reference_only() {
        assert_eq!(generate_dates(d("2025-01-15"), ViewType::Day), vec![d("2025-01-15")]);
    }

    #[test]
    fn test_week_view_starts_monday() {
        let dates = generate_dates(d("2025-01-15"), ViewType::Week);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], d("2025-01-13"));
        assert_eq!(dates[6], d("2025-01-19"));
    }

    #[test]
    fn test_week_view_from_sunday_goes_back() {
        // Sunday belongs to the week that started the previous Monday
        let dates = generate_dates(d("2025-01-19"), ViewType::Week);
        assert_eq!(dates[0], d("2025-01-13"));
    }

    #[test]
    fn test_week_view_spans_year_boundary() {
        let dates = generate_dates(d("2025-01-01"), ViewType::Week);
        assert_eq!(dates[0], d("2024-12-30"));
        assert_eq!(dates[6], d("2025-01-05"));
    }

    #[test]
    fn test_month_view_full_month() {
        let dates = generate_dates(d("2025-01-15"), ViewType::Month);
        assert_eq!(dates.len(), 31);
        assert_eq!(dates[0], d("2025-01-01"));
        assert_eq!(dates[30], d("2025-01-31"));
    }

    #[test]
    fn test_month_view_leap_february() {
        assert_eq!(generate_dates(d("2024-02-10"), ViewType::Month).len(), 29);
        assert_eq!(generate_dates(d("2025-02-10"), ViewType::Month).len(), 28);
    }

    #[test]
    fn test_month_view_december() {
        let dates = generate_dates(d("2025-12-31"), ViewType::Month);
        assert_eq!(dates.first(), Some(&d("2025-12-01")));
        assert_eq!(dates.last(), Some(&d("2025-12-31")));
    }

    #[test]
    fn test_week_view_at_calendar_bounds() {
        let top = generate_dates(NaiveDate::MAX, ViewType::Week);
        assert_eq!(top.last(), Some(&NaiveDate::MAX));
        assert_eq!(top[0].weekday(), chrono::Weekday::Mon);
        assert!(top.len() <= 7);

        let bottom = generate_dates(NaiveDate::MIN, ViewType::Week);
        assert_eq!(bottom.first(), Some(&NaiveDate::MIN));
        assert_eq!(bottom.last().unwrap().weekday(), chrono::Weekday::Sun);
        assert!(bottom.len() <= 7);

        for pair in top.windows(2).chain(bottom.windows(2)) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_day_and_month_views_at_calendar_bounds() {
        assert_eq!(generate_dates(NaiveDate::MAX, ViewType::Day), vec![NaiveDate::MAX]);
        assert_eq!(generate_dates(NaiveDate::MIN, ViewType::Day), vec![NaiveDate::MIN]);

        let top = generate_dates(NaiveDate::MAX, ViewType::Month);
        assert_eq!(top.len(), 31);
        assert_eq!(top.last(), Some(&NaiveDate::MAX));
        assert_eq!(generate_dates(NaiveDate::MIN, ViewType::Month)[0], NaiveDate::MIN);
        assert_eq!(period_label(NaiveDate::MAX, ViewType::Week).matches(" to ").count(), 1);
    }

    #[test]
    fn test_shift_reference() {
        assert_eq!(shift_reference(d("2025-01-15"), ViewType::Day, -1), d("2025-01-14"));
        assert_eq!(shift_reference(d("2025-01-15"), ViewType::Week, 2), d("2025-01-29"));
        assert_eq!(shift_reference(d("2025-01-31"), ViewType::Month, 1), d("2025-02-28"));
        assert_eq!(shift_reference(d("2025-03-15"), ViewType::Month, -3), d("2024-12-15"));
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(d("2025-01-15"), ViewType::Month), "January 2025");
        assert_eq!(period_label(d("2025-01-15"), ViewType::Week), "2025-01-13 to 2025-01-19");
        assert_eq!(period_label(d("2025-01-15"), ViewType::Day), "2025-01-15");
    }

    #[test]
    fn test_view_type_parse() {
        assert_eq!("Month".parse::<ViewType>().unwrap(), ViewType::Month);
        let err = "fortnight".parse::<ViewType>().unwrap_err().to_string();
        assert!(err.contains("Invalid view type"), "got: {err}");
    }
}
