use crate::auth::use_auth;
use crate::routes::Route;
use crate::use_business_name;
use dioxus::prelude::*;
use shared_types::{has_access, CUSTOMER_ORDER_ROLES, JOB_ORDER_ROLES};
use shared_ui::{Card, CardContent, PageHeader, PageSubtitle, PageTitle};

/// Landing page after sign-in, with shortcuts to the pages the user's
/// role can open.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let business_name = use_business_name();
    let role = auth.role();
    let greeting = auth
        .user()
        .map(|u| format!("Welcome back, {}", u.display_name()))
        .unwrap_or_else(|| "Welcome".to_string());

    let can_sales = has_access(role, JOB_ORDER_ROLES);
    let can_customer_orders = has_access(role, CUSTOMER_ORDER_ROLES);

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "{business_name}" }
                    PageSubtitle { "{greeting}" }
                }
            }

            div { class: "home-grid",
                if can_sales {
                    Link { to: Route::JobOrderList {}, class: "home-tile",
                        Card {
                            heading: "Sales & Job Orders",
                            description: "Track job orders from intake to delivery.",
                        }
                    }
                }
                if can_customer_orders {
                    Link { to: Route::CustomerOrderList {}, class: "home-tile",
                        Card {
                            heading: "Customer Orders",
                            description: "Review orders placed by customers.",
                        }
                    }
                }
                if !can_sales && !can_customer_orders {
                    Card {
                        CardContent {
                            p { class: "text-muted",
                                "Your role has no sales pages. Ask an administrator if you need access."
                            }
                        }
                    }
                }
            }
        }
    }
}
