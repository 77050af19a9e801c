use dioxus::prelude::*;
use shared_types::{service_label, AppErrorKind, CustomerOrder, DetailState, ServiceItem, CUSTOMER_ORDER_ROLES};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, DetailGrid, DetailItem,
    DetailList, EmptyState, ErrorBanner, PageActions, PageHeader, PageSubtitle, PageTitle,
    SkeletonRows, StatusBadge,
};

use crate::auth::{use_api, use_auth};
use crate::fetch::spawn_fetch;
use crate::format_helpers::{format_datetime, or_na};
use crate::role_gate::RoleGate;
use crate::routes::Route;

const LOAD_ERROR: &str = "Failed to load customer order";

#[component]
pub fn CustomerOrderDetailPage(id: i64) -> Element {
    rsx! {
        RoleGate { allowed: CUSTOMER_ORDER_ROLES,
            CustomerOrderDetailView { id }
        }
    }
}

#[component]
fn CustomerOrderDetailView(id: i64) -> Element {
    let api = use_api();
    let auth = use_auth();
    let state = use_signal(DetailState::<CustomerOrder>::default);

    use_effect(use_reactive!(|(id,)| {
        let api = api.clone();
        spawn_fetch(state, auth, LOAD_ERROR, async move {
            match api.get_customer_order(id).await {
                Ok(order) => Ok(Some(order)),
                Err(e) if e.kind == AppErrorKind::NotFound => Ok(None),
                Err(e) => Err(e),
            }
        });
    }));

    let snapshot = state.read().clone();
    let failed = snapshot.error.is_some();

    rsx! {
        div { class: "container",
            if let Some(message) = snapshot.error {
                ErrorBanner { message }
            }

            match (snapshot.loading, snapshot.data) {
                (true, _) => rsx! { SkeletonRows { rows: 4 } },
                (false, Some(order)) => rsx! { CustomerOrderDetail { order } },
                (false, None) => rsx! {
                    Card {
                        CardContent {
                            if failed {
                                BackToList {}
                            } else {
                                EmptyState { title: "Customer order not found",
                                    BackToList {}
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn BackToList() -> Element {
    rsx! {
        Link { to: Route::CustomerOrderList {},
            Button { variant: ButtonVariant::Secondary, "Back to Customer Orders" }
        }
    }
}

#[component]
fn CustomerOrderDetail(order: CustomerOrder) -> Element {
    let created = order
        .created_at
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "N/A".to_string());
    let vehicle = order.vehicle_info.summary();
    let branch = order.branch_name.clone().unwrap_or_default();
    let notes = if order.notes.trim().is_empty() {
        "No notes provided.".to_string()
    } else {
        order.notes.clone()
    };

    rsx! {
        PageHeader {
            div {
                PageTitle { "{order.order_number}" }
                PageSubtitle { "{created}" }
            }
            PageActions {
                StatusBadge { status: order.status.as_str().to_string() }
                BackToList {}
            }
        }

        DetailGrid {
            Card { heading: "Customer",
                CardContent {
                    DetailList {
                        DetailItem { label: "Name", value: order.customer_name.clone() }
                        DetailItem { label: "Phone", value: or_na(&order.customer_phone).to_string() }
                        DetailItem { label: "Email", value: or_na(&order.customer_email).to_string() }
                        DetailItem { label: "Address", value: or_na(&order.customer_address).to_string() }
                    }
                }
            }

            Card { heading: "Vehicle",
                CardContent {
                    DetailList {
                        DetailItem { label: "Vehicle", value: or_na(vehicle.trim()).to_string() }
                        DetailItem { label: "Plate Number", value: or_na(&order.vehicle_info.plate_number).to_string() }
                        DetailItem { label: "Branch", value: or_na(&branch).to_string() }
                    }
                }
            }
        }

        Card { class: "detail-section", heading: "Services",
            CardContent {
                if order.services.is_empty() {
                    p { class: "text-muted", "No services listed." }
                } else {
                    div { class: "service-list",
                        for (i, service) in order.services.iter().enumerate() {
                            ServiceCard { key: "{i}", service: service.clone() }
                        }
                    }
                }
            }
        }

        Card { class: "detail-section", heading: "Notes",
            CardContent {
                p { class: "notes", "{notes}" }
            }
        }
    }
}

#[component]
fn ServiceCard(service: ServiceItem) -> Element {
    let title = service_label(&service.kind).to_string();
    let lines: Vec<String> = service
        .option_lines()
        .into_iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect();

    rsx! {
        div { class: "service-card",
            p { class: "service-title", "{title}" }
            for line in lines {
                p { class: "service-line", "{line}" }
            }
        }
    }
}
