use dioxus::prelude::*;
use shared_types::{
    filter_view, service_label, CustomerOrder, ListState, ListView, StatusFilter,
    CUSTOMER_ORDER_FILTERS, CUSTOMER_ORDER_ROLES,
};
use shared_ui::components::{
    Button, ButtonVariant, Card, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, EmptyState, ErrorBanner, FilterChips, PageActions,
    PageHeader, PageSubtitle, PageTitle, SearchBar, SkeletonRows, StatusBadge,
};

use crate::auth::{use_api, use_auth};
use crate::fetch::spawn_fetch;
use crate::format_helpers::format_date;
use crate::role_gate::RoleGate;
use crate::routes::Route;

const LOAD_ERROR: &str = "Failed to load customer orders";

#[component]
pub fn CustomerOrderListPage() -> Element {
    rsx! {
        RoleGate { allowed: CUSTOMER_ORDER_ROLES,
            CustomerOrderListView {}
        }
    }
}

#[component]
fn CustomerOrderListView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut state = use_signal(ListState::<CustomerOrder>::default);
    let mut status = use_signal(StatusFilter::default);
    let mut search = use_signal(String::new);

    // Fetched once; the status chips filter in memory.
    let load = move || {
        let api = api.clone();
        spawn_fetch(state, auth, LOAD_ERROR, async move {
            api.list_customer_orders().await
        });
    };
    let initial_load = load.clone();
    use_effect(move || initial_load());

    let snapshot = state.read();
    let visible = filter_view(&snapshot.data, &status.read(), &search.read());
    let view = ListView::choose(snapshot.loading, visible.len());
    let error = snapshot.error.clone();
    let refreshing = snapshot.loading;
    drop(snapshot);

    let refresh = load;

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Customer Orders" }
                    PageSubtitle { "Manage and track orders placed by customers" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        busy: refreshing,
                        busy_label: "Refreshing...",
                        onclick: move |_| refresh(),
                        "Refresh"
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
                    placeholder: "Search by order number, customer, or vehicle...",
                    on_search: move |q: String| search.set(q),
                    FilterChips {
                        options: CUSTOMER_ORDER_FILTERS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                        selected: status.read().as_str().to_string(),
                        on_select: move |value: String| status.set(StatusFilter::parse(&value)),
                    }
                }

                match view {
                    ListView::Skeleton => rsx! { SkeletonRows {} },
                    ListView::Empty => rsx! {
                        EmptyState {
                            title: "No customer orders found",
                            description: "Orders placed by customers will appear here.",
                        }
                    },
                    ListView::Rows => rsx! { CustomerOrderTable { orders: visible } },
                }
            }
        }
    }
}

#[component]
fn CustomerOrderTable(orders: Vec<CustomerOrder>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Order #" }
                DataTableColumn { "Customer" }
                DataTableColumn { "Vehicle" }
                DataTableColumn { "Services" }
                DataTableColumn { "Date" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for order in orders.iter() {
                    CustomerOrderRow { key: "{order.id}", order: order.clone() }
                }
            }
        }
    }
}

#[component]
fn CustomerOrderRow(order: CustomerOrder) -> Element {
    let id = order.id;
    let vehicle = order.vehicle_info.summary();
    let services = order
        .services
        .iter()
        .map(|s| service_label(&s.kind))
        .collect::<Vec<_>>()
        .join(", ");
    let date = order.created_at.as_deref().map(format_date).unwrap_or_else(|| "N/A".to_string());

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::CustomerOrderDetail { id });
            },
            DataTableCell {
                span { class: "order-number", "{order.order_number}" }
            }
            DataTableCell {
                div { class: "cell-stack",
                    span { class: "cell-primary", "{order.customer_name}" }
                    span { class: "cell-secondary", "{order.customer_phone}" }
                }
            }
            DataTableCell { "{vehicle}" }
            DataTableCell { "{services}" }
            DataTableCell { "{date}" }
            DataTableCell {
                StatusBadge { status: order.status.as_str().to_string() }
            }
        }
    }
}
