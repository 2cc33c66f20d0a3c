//! Query engine: conjunctive filtering and recency ordering over the report
//! collection.

use crate::report::{Report, ReportKind};

/// Active filters for a search. `None` means "all" for that predicate.
#[derive(Debug, Default, Clone)]
pub struct SearchFilter {
    /// Free-text query; trimmed and lower-cased before matching.
    pub text: Option<String>,
    /// Report type filter.
    pub kind: Option<ReportKind>,
    /// Category filter, compared case-insensitively and exactly (not as a
    /// substring).
    pub category: Option<String>,
    /// Widen the free-text haystack to include the category label.
    pub match_category: bool,
}

impl SearchFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the filter has any constraints.
    pub fn is_empty(&self) -> bool {
        self.normalized_text().is_none() && self.kind.is_none() && self.category.is_none()
    }

    fn normalized_text(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
    }
}

/// Filter the collection and order the survivors by recency.
///
/// Predicates are conjunctive and applied in a fixed order - type, category,
/// free text - then the result is sorted by `created_at` descending. The sort
/// is stable, so reports filed at the same instant keep their storage order.
/// An empty result is a valid "no results" state, not an error.
pub fn search(all: &[Report], filter: &SearchFilter) -> Vec<Report> {
    let text = filter.normalized_text();
    let category = filter.category.as_deref().map(str::to_lowercase);

    let mut results: Vec<Report> = all
        .iter()
        .filter(|r| filter.kind.map_or(true, |kind| r.kind == kind))
        .filter(|r| {
            category
                .as_deref()
                .map_or(true, |c| r.category.to_lowercase() == c)
        })
        .filter(|r| {
            text.as_deref().map_or(true, |q| {
                r.item_name.to_lowercase().contains(q)
                    || r.details.to_lowercase().contains(q)
                    || r.location.to_lowercase().contains(q)
                    || (filter.match_category && r.category.to_lowercase().contains(q))
            })
        })
        .cloned()
        .collect();

    results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    results
}

/// The recency view: the whole collection, newest first, truncated to
/// `limit`.
pub fn recent(all: &[Report], limit: usize) -> Vec<Report> {
    let mut results = search(all, &SearchFilter::new());
    results.truncate(limit);
    results
}

/// Parse raw query text into a filter.
///
/// Filter prefixes can be mixed into the query string:
/// - `type:lost` / `type:found` - filter by report type
/// - `category:electronics` - filter by category
///
/// Remaining tokens become the free-text query. A prefix token that does not
/// parse is kept as free text rather than dropped.
///
/// # Examples
///
/// ```ignore
/// let filter = parse_query("type:lost category:electronics airpods case");
/// assert_eq!(filter.kind, Some(ReportKind::Lost));
/// assert_eq!(filter.text, Some("airpods case".to_string()));
/// ```
pub fn parse_query(raw: &str) -> SearchFilter {
    let mut filter = SearchFilter::new();
    let mut remaining = Vec::new();

    for token in raw.split_whitespace() {
        if let Some(value) = token.strip_prefix("type:") {
            match value.parse::<ReportKind>() {
                Ok(kind) => filter.kind = Some(kind),
                Err(_) => remaining.push(token),
            }
        } else if let Some(value) = token.strip_prefix("category:") {
            filter.category = Some(value.to_string());
        } else {
            remaining.push(token);
        }
    }

    if !remaining.is_empty() {
        filter.text = Some(remaining.join(" "));
    }
    filter
}
