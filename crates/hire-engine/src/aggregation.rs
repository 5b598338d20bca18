//! Status counts per date and per product group.
//!
//! Counting goes through the same derived predicates as the per-cell
//! queries in [`crate::availability`], so a badge never disagrees with the
//! cells beneath it.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::{is_available_on_date, is_on_hire_on_date};
use crate::error::{HireError, Result};
use crate::model::{Asset, ProductHeader};

/// Which assets a count or a display list includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    OnHire,
}

impl FromStr for StatusFilter {
    type Err = HireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "all" => Ok(StatusFilter::All),
            "available" => Ok(StatusFilter::Available),
            "on_hire" | "onhire" => Ok(StatusFilter::OnHire),
            _ => Err(HireError::InvalidFilter(s.to_string())),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusFilter::All => "all",
            StatusFilter::Available => "available",
            StatusFilter::OnHire => "on_hire",
        })
    }
}

/// Badge counts for one product group on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCounts {
    pub header_id: String,
    pub date: NaiveDate,
    pub all: usize,
    pub available: usize,
    pub on_hire: usize,
}

fn matches_status(asset: &Asset, date: NaiveDate, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::Available => is_available_on_date(asset, date),
        StatusFilter::OnHire => is_on_hire_on_date(asset, date),
        // Every asset, for well-formed data.
        StatusFilter::All => is_available_on_date(asset, date) || is_on_hire_on_date(asset, date),
    }
}

/// Number of assets matching `filter` on `date`.
pub fn count_for_date_and_filter<'a, I>(assets: I, date: NaiveDate, filter: StatusFilter) -> usize
where
    I: IntoIterator<Item = &'a Asset>,
{
    assets
        .into_iter()
        .filter(|a| matches_status(a, date, filter))
        .count()
}

/// Display filter: status on `date` plus an optional case-insensitive
/// category match. Surrounding whitespace is ignored on both sides.
pub fn matches_filters(
    asset: &Asset,
    date: NaiveDate,
    status: StatusFilter,
    category: Option<&str>,
) -> bool {
    let category_ok =
        category.is_none_or(|c| asset.category.trim().eq_ignore_ascii_case(c.trim()));
    category_ok && matches_status(asset, date, status)
}

/// Group assets under their `parent_header`, headers in first-seen order.
///
/// Each header takes its product type from the first asset seen in it and
/// starts expanded.
pub fn group_by_header(assets: &[Asset]) -> Vec<ProductHeader> {
    let mut headers: Vec<ProductHeader> = Vec::new();
    for asset in assets {
        match headers.iter_mut().find(|h| h.id == asset.parent_header) {
            Some(header) => header.asset_ids.push(asset.id.clone()),
            None => headers.push(ProductHeader {
                id: asset.parent_header.clone(),
                product_type: asset.product_type.clone(),
                expanded: true,
                asset_ids: vec![asset.id.clone()],
            }),
        }
    }
    headers
}

/// A copy of `headers` with `header_id`'s expansion flag flipped.
pub fn toggle_expanded(headers: &[ProductHeader], header_id: &str) -> Vec<ProductHeader> {
    headers
        .iter()
        .map(|h| {
            let mut h = h.clone();
            if h.id == header_id {
                h.expanded = !h.expanded;
            }
            h
        })
        .collect()
}

/// Badge counts for every header on every date, header-major.
pub fn group_counts(
    headers: &[ProductHeader],
    assets: &[Asset],
    dates: &[NaiveDate],
) -> Vec<GroupCounts> {
    let mut counts = Vec::with_capacity(headers.len() * dates.len());
    for header in headers {
        let members: Vec<&Asset> = assets
            .iter()
            .filter(|a| a.parent_header == header.id)
            .collect();
        for &date in dates {
            counts.push(GroupCounts {
                header_id: header.id.clone(),
                date,
                all: count_for_date_and_filter(members.iter().copied(), date, StatusFilter::All),
                available: count_for_date_and_filter(
                    members.iter().copied(),
                    date,
                    StatusFilter::Available,
                ),
                on_hire: count_for_date_and_filter(
                    members.iter().copied(),
                    date,
                    StatusFilter::OnHire,
                ),
            });
        }
    }
    counts
}

// ── Tests ───────────────────────────────────────────────────────────────────
