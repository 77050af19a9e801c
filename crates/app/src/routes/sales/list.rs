use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{
    filter_view, JobOrder, ListState, ListView, StatusFilter, JOB_ORDER_FILTERS, JOB_ORDER_ROLES,
};
use shared_ui::components::{
    Button, Card, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, EmptyState, ErrorBanner, FilterChips, PageActions,
    PageHeader, PageSubtitle, PageTitle, SearchBar, SkeletonRows, StatusBadge,
};

use crate::auth::{use_api, use_auth};
use crate::fetch::spawn_fetch;
use crate::format_helpers::{format_currency, format_date};
use crate::role_gate::RoleGate;
use crate::routes::Route;

const LOAD_ERROR: &str = "Failed to load job orders";

#[component]
pub fn JobOrderListPage() -> Element {
    rsx! {
        RoleGate { allowed: JOB_ORDER_ROLES,
            JobOrderListView {}
        }
    }
}

#[component]
fn JobOrderListView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut state = use_signal(ListState::<JobOrder>::default);
    let mut status = use_signal(StatusFilter::default);
    let mut search = use_signal(String::new);

    // The backend filters by status, so every chip change is a new request.
    use_effect(move || {
        let filter = status.read().clone();
        let api = api.clone();
        spawn_fetch(state, auth, LOAD_ERROR, async move {
            api.list_job_orders(&filter).await
        });
    });

    let snapshot = state.read();
    let visible = searched_rows(&snapshot.data, &search.read());
    let view = ListView::choose(snapshot.loading, visible.len());
    let error = snapshot.error.clone();
    drop(snapshot);

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Sales & Job Orders" }
                    PageSubtitle { "Manage job orders and lineup slips" }
                }
                PageActions {
                    Link { to: Route::JobOrderCreate {},
                        Button {
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "New Job Order"
                        }
                    }
                }
            }

            if let Some(message) = error {
                ErrorBanner {
                    message,
                    on_dismiss: move |_| state.write().error = None,
                }
            }

            Card { class: "list-card",
                SearchBar {
                    query: search(),
                    placeholder: "Search orders, customers, vehicles...",
                    on_search: move |q: String| search.set(q),
                    FilterChips {
                        options: JOB_ORDER_FILTERS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                        selected: status.read().as_str().to_string(),
                        on_select: move |value: String| status.set(StatusFilter::parse(&value)),
                    }
                }

                match view {
                    ListView::Skeleton => rsx! { SkeletonRows {} },
                    ListView::Empty => rsx! {
                        EmptyState {
                            title: "No job orders found",
                            description: "Create a new job order to get started.",
                        }
                    },
                    ListView::Rows => rsx! { JobOrderTable { orders: visible } },
                }
            }
        }
    }
}

/// Rows to show: the backend already applied the status chip, so only the
/// search runs here. After a failed refetch the previous rows stay as they
/// were rather than being re-filtered by the new chip.
fn searched_rows(orders: &[JobOrder], query: &str) -> Vec<JobOrder> {
    filter_view(orders, &StatusFilter::All, query)
}

#[component]
fn JobOrderTable(orders: Vec<JobOrder>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Order #" }
                DataTableColumn { "Customer" }
                DataTableColumn { "Vehicle" }
                DataTableColumn { "Service" }
                DataTableColumn { numeric: true, "Amount" }
                DataTableColumn { "Date" }
                DataTableColumn { "Status" }
                DataTableColumn { "" }
            }
            DataTableBody {
                for order in orders.iter() {
                    JobOrderRow { key: "{order.id}", order: order.clone() }
                }
            }
        }
    }
}

#[component]
fn JobOrderRow(order: JobOrder) -> Element {
    let id = order.id;
    let vehicle = order.vehicle_summary().unwrap_or_else(|| "N/A".to_string());
    let amount = format_currency(order.total_price);
    let date = format_date(&order.created_at);

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::JobOrderDetail { id });
            },
            DataTableCell {
                span { class: "order-number", "{order.job_order_id}" }
            }
            DataTableCell {
                div { class: "cell-stack",
                    span { class: "cell-primary", "{order.customer_name}" }
                    span { class: "cell-secondary", "{order.customer_phone}" }
                }
            }
            DataTableCell { "{vehicle}" }
            DataTableCell { "{order.description}" }
            DataTableCell { numeric: true, "{amount}" }
            DataTableCell { "{date}" }
            DataTableCell {
                StatusBadge { status: order.status.as_str().to_string() }
            }
            DataTableCell {
                span { class: "row-link", "View Details" }
            }
        }
    }
}
