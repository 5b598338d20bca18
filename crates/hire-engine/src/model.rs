//! Snapshot data model: assets, bookings, product headers.
//!
//! Everything here is plain data. Status strings are normalized into
//! [`HireStatus`] on the way in, and dates are reduced to calendar days
//! ([`NaiveDate`]) so that every comparison downstream is date-only.
//!
//! Validation lives next to the types: [`validate_asset`],
//! [`validate_booking`] and [`Snapshot::validate`] reject precondition
//! violations instead of coercing them.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{HireError, Result};

// ── HireStatus ──────────────────────────────────────────────────────────────

/// The static hire flag carried by an asset.
///
/// Upstream data uses several spellings (`"on_hire"`, `"Live"`,
/// `"available"`, `"Available"`, ...). They are folded into this enum at
/// parse time and nothing inside the engine ever looks at the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum HireStatus {
    Available,
    OnHire,
}

impl HireStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HireStatus::Available => "available",
            HireStatus::OnHire => "on_hire",
        }
    }
}

impl FromStr for HireStatus {
    type Err = HireError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "available" | "off_hire" | "offhire" | "free" => Ok(HireStatus::Available),
            "on_hire" | "onhire" | "live" | "hired" => Ok(HireStatus::OnHire),
            _ => Err(HireError::InvalidStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for HireStatus {
    type Error = HireError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for HireStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Asset ───────────────────────────────────────────────────────────────────

/// Who has an on-hire asset and where it currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalDetails {
    pub customer: String,
    #[serde(default)]
    pub current_location: String,
}

/// A physical piece of rental equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub product_type: String,
    #[serde(default)]
    pub category: String,
    pub status: HireStatus,
    #[serde(default, with = "date_serde::opt")]
    pub on_hire_date: Option<NaiveDate>,
    #[serde(default, with = "date_serde::opt")]
    pub off_hire_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_details: Option<RentalDetails>,
    /// Id of the [`ProductHeader`] this asset is listed under.
    pub parent_header: String,
    #[serde(default)]
    pub location: String,
}

impl Asset {
    /// The `[on_hire_date, off_hire_date]` window, when both ends are present.
    pub fn hire_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.on_hire_date, self.off_hire_date) {
            (Some(on), Some(off)) => Some((on, off)),
            _ => None,
        }
    }
}

// ── Booking ─────────────────────────────────────────────────────────────────

/// A reservation of one asset over an inclusive date interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub asset_id: String,
    #[serde(with = "date_serde")]
    pub start: NaiveDate,
    #[serde(with = "date_serde")]
    pub end: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub booking_type: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub location: String,
}

impl Booking {
    /// Whole days from `start` to `end` (0 for a single-day booking).
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether `date` falls inside `[start, end]`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// ── ProductHeader ───────────────────────────────────────────────────────────

/// A non-physical grouping row for all assets of one product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHeader {
    pub id: String,
    pub product_type: String,
    pub expanded: bool,
    pub asset_ids: Vec<String>,
}

// ── Snapshot ────────────────────────────────────────────────────────────────

/// An immutable bundle of assets and bookings handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Snapshot {
    /// Parse a snapshot from JSON. Status strings and datetimes are
    /// normalized during parsing; the result is not yet validated.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HireError::InvalidSnapshot(e.to_string()))
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Check every precondition the engine relies on.
    ///
    /// Assets are checked first, then bookings, each in snapshot order; the
    /// first violation is returned.
    pub fn validate(&self) -> Result<()> {
        for asset in &self.assets {
            validate_asset(asset)?;
        }

        let known: HashSet<&str> = self.assets.iter().map(|a| a.id.as_str()).collect();
        for booking in &self.bookings {
            validate_booking(booking)?;
            if !known.contains(booking.asset_id.as_str()) {
                return Err(HireError::UnknownAssetReference {
                    booking_id: booking.id.clone(),
                    asset_id: booking.asset_id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Reject an on-hire asset without a complete window, and any inverted window.
pub fn validate_asset(asset: &Asset) -> Result<()> {
    if asset.status == HireStatus::OnHire && asset.hire_window().is_none() {
        return Err(HireError::MissingHireWindow(asset.id.clone()));
    }
    if let Some((on, off)) = asset.hire_window() {
        if off < on {
            return Err(HireError::InvalidDateRange {
                id: asset.id.clone(),
                start: on,
                end: off,
            });
        }
    }
    Ok(())
}

/// Reject a booking whose end precedes its start.
pub fn validate_booking(booking: &Booking) -> Result<()> {
    if booking.end < booking.start {
        return Err(HireError::InvalidDateRange {
            id: booking.id.clone(),
            start: booking.start,
            end: booking.end,
        });
    }
    Ok(())
}

// ── Date parsing ────────────────────────────────────────────────────────────

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 datetime.
///
/// For datetimes the time component (and offset) is dropped and the date as
/// written is kept, so `2025-01-10T23:30:00-05:00` is `2025-01-10`.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| HireError::InvalidDate(s.to_string()))
}

/// Serde adapters that read dates through [`parse_date`] and write `YYYY-MM-DD`.
pub(crate) mod date_serde {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }

    pub mod opt {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(d) => super::serialize(d, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(s) => super::super::parse_date(s)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
            }
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
