use client::forms::{after_login, submit_login, LOGIN_SUCCESS};
use dioxus::prelude::*;
use shared_types::{FormStatus, LoginForm};
use shared_ui::{
    Alert, AlertVariant, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Form, Input,
};

use crate::auth::use_auth;
use crate::routes::Route;
use crate::{timer, use_portal};

/// Login page with email and password.
#[component]
pub fn Login() -> Element {
    let portal = use_portal();
    let mut auth = use_auth();
    let mut form = use_signal(LoginForm::default);
    let mut status = use_signal(FormStatus::default);

    let handle_login = move |_evt: FormEvent| {
        let portal = portal.clone();
        async move {
            let accepts = status.read().accepts_input();
            if !accepts || !status.write().begin_submit() {
                return;
            }
            let draft = form.read().clone();
            match submit_login(&portal.auth, &draft).await {
                Ok(session) => {
                    status.write().succeed(LOGIN_SUCCESS);
                    form.set(LoginForm::default());
                    let next = after_login(&session);
                    timer::sleep(portal.ui.login_redirect()).await;
                    auth.set_session(session);
                    navigator().replace(Route::from(next));
                }
                Err(err) => status.write().fail_with(&err),
            }
        }
    };

    let busy = status.read().is_busy();
    let locked = !status.read().accepts_input();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your university email and password" }
                }

                CardContent {
                    StatusAlert { status: status() }

                    Form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                label: "Email",
                                name: "email",
                                input_type: "email",
                                placeholder: "name@student.prasetiyamulya.ac.id",
                                value: form.read().email.clone(),
                                disabled: locked,
                                on_input: move |e: FormEvent| form.write().email = e.value(),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Password",
                                name: "password",
                                input_type: "password",
                                placeholder: "Enter your password",
                                value: form.read().password.clone(),
                                disabled: locked,
                                on_input: move |e: FormEvent| form.write().password = e.value(),
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: locked,
                            if busy { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Create one" }
                    }
                }
            }
        }
    }
}

/// Inline outcome of the last submit.
#[component]
pub fn StatusAlert(status: FormStatus) -> Element {
    match status {
        FormStatus::Error(message) => rsx! {
            Alert { variant: AlertVariant::Error, "{message}" }
        },
        FormStatus::Success(message) => rsx! {
            Alert { variant: AlertVariant::Success, "{message}" }
        },
        FormStatus::Idle | FormStatus::Submitting => rsx! {},
    }
}
