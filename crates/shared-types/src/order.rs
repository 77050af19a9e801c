use serde::{Deserialize, Deserializer, Serialize};

// ── Lenient field decoding ──────────────────────────────────────────

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Vehicle years arrive as numbers on job orders and as strings on
/// customer orders.
fn year_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Text(String),
        Whole(i64),
        Fractional(f64),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Text(s)) => s,
        Some(RawYear::Whole(n)) => n.to_string(),
        Some(RawYear::Fractional(f)) => f.to_string(),
        None => String::new(),
    })
}

// ── Statuses ────────────────────────────────────────────────────────

/// Lifecycle of a staff-entered job order.
///
/// Unknown backend values are preserved in `Other` so a new status never
/// breaks decoding of the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobOrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Delivered,
    Other(String),
}

impl JobOrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobOrderStatus::Pending => "pending",
            JobOrderStatus::InProgress => "in_progress",
            JobOrderStatus::Completed => "completed",
            JobOrderStatus::Cancelled => "cancelled",
            JobOrderStatus::Delivered => "delivered",
            JobOrderStatus::Other(s) => s,
        }
    }
}

impl From<String> for JobOrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => JobOrderStatus::Pending,
            "in_progress" => JobOrderStatus::InProgress,
            "completed" => JobOrderStatus::Completed,
            "cancelled" => JobOrderStatus::Cancelled,
            "delivered" => JobOrderStatus::Delivered,
            _ => JobOrderStatus::Other(s),
        }
    }
}

impl From<JobOrderStatus> for String {
    fn from(status: JobOrderStatus) -> Self {
        match status {
            JobOrderStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Lifecycle of a customer self-service order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomerOrderStatus {
    Pending,
    Processing,
    Completed,
    Other(String),
}

impl CustomerOrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CustomerOrderStatus::Pending => "pending",
            CustomerOrderStatus::Processing => "processing",
            CustomerOrderStatus::Completed => "completed",
            CustomerOrderStatus::Other(s) => s,
        }
    }
}

impl From<String> for CustomerOrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => CustomerOrderStatus::Pending,
            "processing" => CustomerOrderStatus::Processing,
            "completed" => CustomerOrderStatus::Completed,
            _ => CustomerOrderStatus::Other(s),
        }
    }
}

impl From<CustomerOrderStatus> for String {
    fn from(status: CustomerOrderStatus) -> Self {
        match status {
            CustomerOrderStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

// ── Shared pieces ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub make: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(default, deserialize_with = "year_as_string")]
    pub year: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plate_number: String,
}

impl VehicleInfo {
    /// "2019 Toyota Vios", the form used for display and search.
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// One requested service on a customer order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Service code, e.g. `seat_covers`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pocket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub others: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServiceItem {
    /// Non-empty option lines ("Material: Leather", ...) for the detail page.
    pub fn option_lines(&self) -> Vec<(&'static str, &str)> {
        [
            ("Material", &self.material),
            ("Design", &self.design),
            ("Pocket", &self.pocket),
            ("Others", &self.others),
            ("Description", &self.description),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }
}

/// A billable line on a job order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOrderItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_price: f64,
}

impl JobOrderItem {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

// ── Job orders ──────────────────────────────────────────────────────

/// A staff-entered sales record for a service engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOrder {
    pub id: i64,
    pub job_order_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_email: String,
    #[serde(default)]
    pub vehicle_info: Option<VehicleInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<JobOrderItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub down_payment: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_status: String,
    #[serde(default)]
    pub branch_name: Option<String>,
    pub status: JobOrderStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl JobOrder {
    /// Vehicle summary, or `None` when the order has no vehicle attached.
    pub fn vehicle_summary(&self) -> Option<String> {
        self.vehicle_info.as_ref().map(VehicleInfo::summary)
    }
}

// ── Customer orders ─────────────────────────────────────────────────

/// An order placed by a customer through the self-service form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    pub id: i64,
    pub order_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicle_info: VehicleInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<ServiceItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    pub status: CustomerOrderStatus,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
