use dioxus::prelude::*;
use shared_types::JOB_ORDER_ROLES;
use shared_ui::components::{Button, ButtonVariant, PageActions, PageHeader, PageTitle};

use crate::role_gate::RoleGate;
use crate::routes::Route;

/// Target of the "New Job Order" button. Job orders are still entered in
/// the back office, so this only points the user back to the list.
#[component]
pub fn JobOrderCreatePage() -> Element {
    rsx! {
        RoleGate { allowed: JOB_ORDER_ROLES,
            PageHeader {
                PageTitle { "New Job Order" }
                PageActions {
                    Link { to: Route::JobOrderList {},
                        Button { variant: ButtonVariant::Secondary, "Back to Sales" }
                    }
                }
            }
            div { class: "page-placeholder",
                p { "Job order entry is coming soon." }
            }
        }
    }
}
