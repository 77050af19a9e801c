//! Static lookup tables for badges and labels.

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    Yellow,
    Blue,
    Orange,
    Green,
    Purple,
    Red,
    #[default]
    Neutral,
}

/// Badge colour per status key. Keys not listed render neutral.
pub const STATUS_TONES: &[(&str, StatusTone)] = &[
    ("pending", StatusTone::Yellow),
    ("in_progress", StatusTone::Blue),
    ("processing", StatusTone::Blue),
    ("ready_for_installation", StatusTone::Orange),
    ("completed", StatusTone::Green),
    ("delivered", StatusTone::Purple),
    ("cancelled", StatusTone::Red),
];

pub fn status_tone(status: &str) -> StatusTone {
    STATUS_TONES
        .iter()
        .find(|(key, _)| *key == status)
        .map(|(_, tone)| *tone)
        .unwrap_or_default()
}

/// Display names for customer-order service codes.
pub const SERVICE_LABELS: &[(&str, &str)] = &[
    ("flooring", "Flooring"),
    ("reupholstery", "Reupholstery"),
    ("ceiling", "Ceiling"),
    ("sidings", "Sidings"),
    ("seat_covers", "Seat Covers"),
    ("other", "Other Services"),
];

/// Label for a service code; unknown codes are shown raw.
pub fn service_label(code: &str) -> &str {
    SERVICE_LABELS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// Filter chips on the job-order page. The backend filters these.
pub const JOB_ORDER_FILTERS: &[&str] = &["all", "pending", "in_progress", "completed", "delivered"];

/// Filter chips on the customer-order page. Filtered in memory.
pub const CUSTOMER_ORDER_FILTERS: &[&str] = &["all", "pending", "processing", "completed"];

/// Badge text: `in_progress` → `IN PROGRESS`.
pub fn status_badge_label(status: &str) -> String {
    status.replace('_', " ").to_uppercase()
}

/// Chip text: `all` → `All`, `in_progress` → `In Progress`.
pub fn filter_chip_label(status: &str) -> String {
    status
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
