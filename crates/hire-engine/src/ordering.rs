//! Custom display order for asset rows.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{HireError, Result};
use crate::model::Asset;

/// Move the id at `from` to position `to`, keeping every other id in its
/// relative order. Returns a new list; `order` is not touched.
///
/// # Errors
///
/// Returns [`HireError::IndexOutOfRange`] if either index is `>= order.len()`.
///
/// # Examples
///
/// ```
/// use hire_engine::ordering::reorder;
///
/// let order = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// assert_eq!(reorder(&order, 0, 2).unwrap(), vec!["b", "c", "a"]);
/// ```
pub fn reorder(order: &[String], from: usize, to: usize) -> Result<Vec<String>> {
    let len = order.len();
    for index in [from, to] {
        if index >= len {
            return Err(HireError::IndexOutOfRange { index, len });
        }
    }

    let mut result = order.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    debug!(from, to, len, "asset order changed");
    Ok(result)
}

/// Sort `assets` for display: ids listed in `order` first, by their position
/// there; everything else after, by lexicographic id.
///
/// An id listed twice in `order` keeps its first position. Ids in `order`
/// with no matching asset are ignored.
pub fn resolve_display_order(assets: &[Asset], order: &[String]) -> Vec<Asset> {
    let mut position: HashMap<&str, usize> = HashMap::with_capacity(order.len());
    for (i, id) in order.iter().enumerate() {
        position.entry(id.as_str()).or_insert(i);
    }

    let mut sorted = assets.to_vec();
    sorted.sort_by(|a, b| {
        let pa = position.get(a.id.as_str());
        let pb = position.get(b.id.as_str());
        match (pa, pb) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        }
    });
    sorted
}

// ── Tests ───────────────────────────────────────────────────────────────────
