use crate::order::{CustomerOrder, JobOrder};

/// Sentinel status value meaning "no status filtering".
pub const ALL_STATUSES: &str = "all";

/// Status selector shared by both list pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// Parse a filter chip value. `"all"` and the empty string mean no filter.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | ALL_STATUSES => StatusFilter::All,
            other => StatusFilter::Only(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Only(s) => s,
        }
    }

    /// Exact match on the status key; `All` accepts everything.
    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s == status,
        }
    }

    /// Value to forward as the backend's `status` query parameter.
    pub fn query_param(&self) -> Option<&str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(s) => Some(s),
        }
    }
}

/// A record that list pages can filter by status and free text.
pub trait Searchable {
    fn status_key(&self) -> &str;

    /// Fields matched by the free-text search. Absent optional fields
    /// contribute an empty string.
    fn search_fields(&self) -> [String; 3];
}

impl Searchable for JobOrder {
    fn status_key(&self) -> &str {
        self.status.as_str()
    }

    fn search_fields(&self) -> [String; 3] {
        [
            self.job_order_id.clone(),
            self.customer_name.clone(),
            self.vehicle_summary().unwrap_or_default(),
        ]
    }
}

impl Searchable for CustomerOrder {
    fn status_key(&self) -> &str {
        self.status.as_str()
    }

    fn search_fields(&self) -> [String; 3] {
        [
            self.order_number.clone(),
            self.customer_name.clone(),
            self.vehicle_info.summary(),
        ]
    }
}

/// Case-insensitive substring match against any field. An empty query
/// matches everything.
pub fn matches_search<T: Searchable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Derive the visible rows: status filter AND search, original order kept.
pub fn filter_view<T: Searchable + Clone>(items: &[T], status: &StatusFilter, query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| status.matches(item.status_key()) && matches_search(*item, query))
        .cloned()
        .collect()
}
