use dioxus::prelude::*;
use shared_types::{AppErrorKind, DetailState, JobOrder, JOB_ORDER_ROLES};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DetailGrid, DetailItem,
    DetailList, EmptyState, ErrorBanner, PageActions, PageHeader, PageSubtitle, PageTitle,
    SkeletonRows, StatusBadge,
};

use crate::auth::{use_api, use_auth};
use crate::fetch::spawn_fetch;
use crate::format_helpers::{format_currency, format_datetime, or_na};
use crate::role_gate::RoleGate;
use crate::routes::Route;

const LOAD_ERROR: &str = "Failed to load job order";

#[component]
pub fn JobOrderDetailPage(id: i64) -> Element {
    rsx! {
        RoleGate { allowed: JOB_ORDER_ROLES,
            JobOrderDetailView { id }
        }
    }
}

#[component]
fn JobOrderDetailView(id: i64) -> Element {
    let api = use_api();
    let auth = use_auth();
    let state = use_signal(DetailState::<JobOrder>::default);

    // Re-run when the route id changes.
    use_effect(use_reactive!(|(id,)| {
        let api = api.clone();
        spawn_fetch(state, auth, LOAD_ERROR, async move {
            match api.get_job_order(id).await {
                Ok(order) => Ok(Some(order)),
                Err(e) if e.kind == AppErrorKind::NotFound => Ok(None),
                Err(e) => Err(e),
            }
        });
    }));

    let snapshot = state.read().clone();

    rsx! {
        div { class: "container",
            if let Some(message) = snapshot.error.clone() {
                ErrorBanner { message }
            }

            match (snapshot.loading, snapshot.data) {
                (true, _) => rsx! { SkeletonRows { rows: 4 } },
                (false, Some(order)) => rsx! { JobOrderDetail { order } },
                (false, None) if snapshot.error.is_none() => rsx! {
                    Card {
                        CardContent {
                            EmptyState { title: "Job order not found",
                                Link { to: Route::JobOrderList {},
                                    Button { variant: ButtonVariant::Secondary, "Back to Sales" }
                                }
                            }
                        }
                    }
                },
                (false, None) => rsx! {
                    Link { to: Route::JobOrderList {},
                        Button { variant: ButtonVariant::Secondary, "Back to Sales" }
                    }
                },
            }
        }
    }
}

#[component]
fn JobOrderDetail(order: JobOrder) -> Element {
    let vehicle = order.vehicle_info.clone().unwrap_or_default();
    let make_model = format!("{} {}", vehicle.make, vehicle.model);
    let created = format_datetime(&order.created_at);
    let branch = order.branch_name.clone().unwrap_or_default();

    rsx! {
        PageHeader {
            div {
                PageTitle { "{order.job_order_id}" }
                PageSubtitle { "Created {created}" }
            }
            PageActions {
                StatusBadge { status: order.status.as_str().to_string() }
                Link { to: Route::JobOrderList {},
                    Button { variant: ButtonVariant::Secondary, "Back to Sales" }
                }
            }
        }

        DetailGrid {
            Card { heading: "Customer",
                CardContent {
                    DetailList {
                        DetailItem { label: "Name", value: order.customer_name.clone() }
                        DetailItem { label: "Phone", value: or_na(&order.customer_phone).to_string() }
                        DetailItem { label: "Email", value: or_na(&order.customer_email).to_string() }
                        DetailItem { label: "Branch", value: or_na(&branch).to_string() }
                    }
                }
            }

            Card { heading: "Vehicle",
                CardContent {
                    if order.vehicle_info.is_some() {
                        DetailList {
                            DetailItem { label: "Make & Model", value: or_na(make_model.trim()).to_string() }
                            DetailItem { label: "Year", value: or_na(&vehicle.year).to_string() }
                            DetailItem { label: "Plate Number", value: or_na(&vehicle.plate_number).to_string() }
                        }
                    } else {
                        p { class: "text-muted", "No vehicle recorded for this order." }
                    }
                }
            }

            Card { heading: "Payment",
                CardContent {
                    DetailList {
                        DetailItem { label: "Total Price", value: format_currency(order.total_price) }
                        DetailItem { label: "Down Payment", value: format_currency(order.down_payment) }
                        DetailItem { label: "Balance Due", value: format_currency(order.balance) }
                        DetailItem { label: "Payment Status", value: or_na(&order.payment_status).to_string() }
                    }
                }
            }
        }

        Card { class: "detail-section", heading: "Description",
            CardContent {
                p { {or_na(&order.description).to_string()} }
            }
        }

        Card { class: "detail-section", heading: "Items",
            CardContent {
                if order.items.is_empty() {
                    p { class: "text-muted", "No material or item details recorded for this order." }
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Material / Item" }
                            DataTableColumn { numeric: true, "Qty" }
                            DataTableColumn { numeric: true, "Unit Price" }
                            DataTableColumn { numeric: true, "Line Price" }
                        }
                        DataTableBody {
                            for (i, item) in order.items.iter().enumerate() {
                                DataTableRow { key: "{i}",
                                    DataTableCell { "{item.name}" }
                                    DataTableCell { numeric: true, "{item.quantity}" }
                                    DataTableCell { numeric: true, {format_currency(item.unit_price)} }
                                    DataTableCell { numeric: true, {format_currency(item.line_total())} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
