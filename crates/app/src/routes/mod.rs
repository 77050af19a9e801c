pub mod customer_orders;
pub mod home;
pub mod login;
pub mod not_found;
pub mod sales;

use crate::auth::{sign_out, use_api, use_auth};
use crate::use_business_name;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdLayoutDashboard, LdPackage};
use dioxus_free_icons::Icon;
use shared_types::{has_access, SessionState, CUSTOMER_ORDER_ROLES, JOB_ORDER_ROLES};
use shared_ui::{Button, ButtonSize, ButtonVariant};

use home::Home;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/sales")]
    JobOrderList {},
    #[route("/sales/new")]
    JobOrderCreate {},
    #[route("/sales/:id")]
    JobOrderDetail { id: i64 },
    #[route("/customer-orders")]
    CustomerOrderList {},
    #[route("/customer-orders/:id")]
    CustomerOrderDetail { id: i64 },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout: only an active session gets past it.
///
/// While the startup check is pending nothing below renders; once the
/// session is anonymous (never signed in, signed out, or expired) the user
/// is sent to `/login`.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    use_effect(move || {
        if matches!(*auth.session.read(), SessionState::Anonymous) {
            navigator().replace(Route::Login {});
        }
    });

    let state = auth.session.read().clone();
    match state {
        SessionState::Active(_) => rsx! { Outlet::<Route> {} },
        SessionState::Anonymous => rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        },
        SessionState::Loading => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
    }
}

/// Shell with the top navigation bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let api = use_api();
    let business_name = use_business_name();

    let role = auth.role();
    let user = auth.user();
    let display_name = user.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default();
    let role_name = role.map(|r| r.display_name()).unwrap_or("No role");

    let on_sales = matches!(
        route,
        Route::JobOrderList {} | Route::JobOrderCreate {} | Route::JobOrderDetail { .. }
    );
    let on_customer_orders = matches!(
        route,
        Route::CustomerOrderList {} | Route::CustomerOrderDetail { .. }
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-navbar",
                Link { to: Route::Home {}, class: "app-brand", "{business_name}" }

                nav { class: "app-nav",
                    Link {
                        to: Route::Home {},
                        class: if matches!(route, Route::Home {}) { "app-nav-link active" } else { "app-nav-link" },
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                        "Home"
                    }
                    if has_access(role, JOB_ORDER_ROLES) {
                        Link {
                            to: Route::JobOrderList {},
                            class: if on_sales { "app-nav-link active" } else { "app-nav-link" },
                            Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                            "Sales"
                        }
                    }
                    if has_access(role, CUSTOMER_ORDER_ROLES) {
                        Link {
                            to: Route::CustomerOrderList {},
                            class: if on_customer_orders { "app-nav-link active" } else { "app-nav-link" },
                            Icon::<LdPackage> { icon: LdPackage, width: 16, height: 16 }
                            "Customer Orders"
                        }
                    }
                }

                div { class: "app-navbar-spacer" }

                div { class: "app-user",
                    span { class: "app-user-name", "{display_name}" }
                    span { class: "app-user-role", "{role_name}" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    onclick: move |_| {
                        sign_out(api.clone(), auth);
                        navigator().push(Route::Login {});
                    },
                    "Sign Out"
                }
            }

            main { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn JobOrderList() -> Element {
    sales::list::JobOrderListPage()
}

#[component]
fn JobOrderCreate() -> Element {
    sales::create::JobOrderCreatePage()
}

#[component]
fn JobOrderDetail(id: i64) -> Element {
    rsx! { sales::detail::JobOrderDetailPage { id: id } }
}

#[component]
fn CustomerOrderList() -> Element {
    customer_orders::list::CustomerOrderListPage()
}

#[component]
fn CustomerOrderDetail(id: i64) -> Element {
    rsx! { customer_orders::detail::CustomerOrderDetailPage { id: id } }
}
