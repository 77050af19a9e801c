use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use crate::use_business_name;
use dioxus::prelude::*;
use shared_types::{LoginFlow, LoginView};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardFooter, Input};

/// Sign-in page with an in-place account recovery form.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let business_name = use_business_name();
    let flow = use_signal(LoginFlow::default);

    // Already signed in: nothing to do here.
    use_effect(move || {
        if auth.is_authenticated() {
            navigator().replace(Route::Home {});
        }
    });

    let view = flow.read().view;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                h1 { class: "auth-brand-name", "{business_name}" }
                p { class: "auth-brand-tagline", "Sales and inventory management" }
            }
            match view {
                LoginView::SignIn => rsx! { SignInCard { flow } },
                LoginView::Recovery => rsx! { RecoveryCard { flow } },
            }
        }
    }
}

#[component]
fn SignInCard(mut flow: Signal<LoginFlow>) -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        flow.write().begin_sign_in();
        let api = api.clone();
        async move {
            match api.login(&username(), &password()).await {
                Ok(session) => {
                    flow.write().sign_in_succeeded();
                    auth.sign_in(session);
                    navigator().push(Route::Home {});
                }
                Err(e) => {
                    // The reason stays in the log; the page only ever says
                    // the credentials were invalid.
                    tracing::warn!(error = %e, "Sign-in failed");
                    password.set(String::new());
                    flow.write().sign_in_failed();
                }
            }
        }
    };

    let state = flow.read().clone();

    rsx! {
        Card {
            class: "auth-card",
            heading: "Sign In",
            description: "Enter your username and password to continue",

            CardContent {
                if let Some(err) = state.error.as_ref() {
                    div { class: "auth-error", role: "alert", "{err}" }
                }

                form { onsubmit: handle_login,
                    div { class: "auth-field",
                        Input {
                            name: "username",
                            autocomplete: "username",
                            label: "Username",
                            placeholder: "Enter your username",
                            required: true,
                            value: username(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        Input {
                            input_type: "password",
                            name: "password",
                            autocomplete: "current-password",
                            label: "Password",
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    Button {
                        submit: true,
                        class: "auth-submit",
                        busy: state.submitting,
                        busy_label: "Signing in...",
                        "Sign In"
                    }
                }
            }

            CardFooter {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| flow.write().show_recovery(),
                    "Forgot your password?"
                }
            }
        }
    }
}

/// Recovery form. The confirmation is the same whether or not the address
/// belongs to an account.
#[component]
fn RecoveryCard(mut flow: Signal<LoginFlow>) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        sending.set(true);
        let api = api.clone();
        async move {
            if let Err(e) = api.recover(&email()).await {
                tracing::warn!(error = %e, "Recovery request failed");
            }
            flow.write().recovery_requested();
            sending.set(false);
        }
    };

    let message = flow.read().recovery_message.clone();

    rsx! {
        Card {
            class: "auth-card",
            heading: "Account Recovery",
            description: "Enter the email address linked to your account",

            CardContent {
                if let Some(msg) = message {
                    div { class: "auth-success", role: "status", "{msg}" }
                }

                form { onsubmit: handle_submit,
                    div { class: "auth-field",
                        Input {
                            input_type: "email",
                            name: "email",
                            label: "Email",
                            placeholder: "you@example.com",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    Button {
                        submit: true,
                        class: "auth-submit",
                        busy: sending(),
                        busy_label: "Sending...",
                        "Send Recovery Link"
                    }
                }
            }

            CardFooter {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| flow.write().back_to_sign_in(),
                    "Back to Sign In"
                }
            }
        }
    }
}
