use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// A list body decoded item by item.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedList<T> {
    pub items: Vec<T>,
    /// Position and decode error of every item that was skipped.
    pub rejected: Vec<(usize, AppError)>,
}

/// Decode a list endpoint body into items.
///
/// The backend has answered list requests in two shapes over time: a bare
/// JSON array, and an object carrying the array under `data`. Both are
/// accepted here, at the boundary, so nothing past this point has to care.
/// Any other shape is an error. Items that fail to decode are skipped and
/// reported in `rejected`; one bad record never hides the others.
pub fn try_normalize_list<T: DeserializeOwned>(body: Value) -> Result<DecodedList<T>, AppError> {
    let raw = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => return Err(AppError::decode("response has no data list")),
            Some(_) => return Err(AppError::decode("response data is not a list")),
        },
        _ => return Err(AppError::decode("response is neither a list nor an object")),
    };

    let mut decoded = DecodedList {
        items: Vec::with_capacity(raw.len()),
        rejected: Vec::new(),
    };
    for (index, item) in raw.into_iter().enumerate() {
        match serde_json::from_value(item) {
            Ok(value) => decoded.items.push(value),
            Err(e) => decoded.rejected.push((index, AppError::from(e))),
        }
    }
    Ok(decoded)
}

/// Like [`try_normalize_list`], but any shape mismatch yields an empty list.
pub fn normalize_list<T: DeserializeOwned>(body: Value) -> Vec<T> {
    try_normalize_list(body)
        .map(|decoded| decoded.items)
        .unwrap_or_default()
}

/// Identifies one fetch. Only the most recently issued ticket may write
/// its result into the state it was issued from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What `FetchState::finish` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer fetch was started after this one; the result was dropped.
    Stale,
}

/// Async data held by a page: the last good data, an in-flight flag and
/// the user-visible error of the latest fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<D> {
    pub data: D,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

/// Items shown by a list page.
pub type ListState<T> = FetchState<Vec<T>>;

/// Record shown by a detail page.
pub type DetailState<T> = FetchState<Option<T>>;

impl<D: Default> Default for FetchState<D> {
    /// Pages start in the loading state so the first paint is a skeleton,
    /// never a premature "nothing found".
    fn default() -> Self {
        Self {
            data: D::default(),
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl<D> FetchState<D> {
    /// Start a fetch: supersedes any fetch still in flight.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Record the result of the fetch identified by `ticket`.
    ///
    /// For the current ticket `loading` is always cleared. On failure the
    /// previous data is kept and `error_text` becomes the visible error.
    pub fn finish<E>(
        &mut self,
        ticket: FetchTicket,
        result: Result<D, E>,
        error_text: &str,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                FetchOutcome::Applied
            }
            Err(_) => {
                self.error = Some(error_text.to_string());
                FetchOutcome::Failed
            }
        }
    }
}

/// Which body a list page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Skeleton,
    Empty,
    Rows,
}

impl ListView {
    /// `visible` is the length of the filtered view, not the fetched list.
    pub fn choose(loading: bool, visible: usize) -> Self {
        if loading {
            ListView::Skeleton
        } else if visible == 0 {
            ListView::Empty
        } else {
            ListView::Rows
        }
    }
}
