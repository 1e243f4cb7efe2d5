use client::forms::{after_registration, submit_registration, REGISTER_SUCCESS};
use dioxus::prelude::*;
use shared_types::{FormStatus, RegisterForm, UserRole, MAJOR_OPTIONS, ROLE_OPTIONS};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form,
    FormSelect, Input,
};

use crate::routes::login::StatusAlert;
use crate::routes::Route;
use crate::{timer, use_portal};

/// Account registration page for students and instructors.
#[component]
pub fn Register() -> Element {
    let portal = use_portal();
    let mut form = use_signal(RegisterForm::default);
    let mut status = use_signal(FormStatus::default);

    let handle_register = move |_evt: FormEvent| {
        let portal = portal.clone();
        async move {
            let accepts = status.read().accepts_input();
            if !accepts || !status.write().begin_submit() {
                return;
            }
            let draft = form.read().clone();
            match submit_registration(&portal.auth, &draft).await {
                Ok(user) => {
                    tracing::debug!(username = %user.username, "account created");
                    status.write().succeed(REGISTER_SUCCESS);
                    form.set(RegisterForm::default());
                    timer::sleep(portal.ui.register_redirect()).await;
                    navigator().replace(Route::from(after_registration()));
                }
                Err(err) => status.write().fail_with(&err),
            }
        }
    };

    let busy = status.read().is_busy();
    let locked = !status.read().accepts_input();
    let draft = form.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card auth-card-wide",
                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Register with your university email" }
                }

                CardContent {
                    StatusAlert { status: status() }

                    Form { onsubmit: handle_register,
                        div { class: "auth-field",
                            Input {
                                label: "Email",
                                name: "email",
                                input_type: "email",
                                placeholder: "name@student.prasetiyamulya.ac.id",
                                value: draft.email.clone(),
                                disabled: locked,
                                on_input: move |e: FormEvent| form.write().email = e.value(),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Full Name",
                                name: "full_name",
                                placeholder: "Your full name",
                                value: draft.full_name.clone(),
                                disabled: locked,
                                on_input: move |e: FormEvent| form.write().full_name = e.value(),
                            }
                        }
                        div { class: "auth-field-row",
                            FormSelect {
                                label: "Major",
                                name: "major",
                                value: draft.major.clone(),
                                disabled: locked,
                                onchange: move |e: FormEvent| form.write().major = e.value(),
                                option { value: "", disabled: true, selected: draft.major.is_empty(), "Select your major" }
                                for (value, label) in MAJOR_OPTIONS.iter() {
                                    option { key: "{value}", value: *value, selected: draft.major == *value, "{label}" }
                                }
                            }
                            FormSelect {
                                label: "Role",
                                name: "role",
                                value: draft.role.as_str().to_string(),
                                disabled: locked,
                                onchange: move |e: FormEvent| form.write().role = UserRole::normalize(&e.value()),
                                for role in ROLE_OPTIONS.iter() {
                                    option {
                                        key: "{role}",
                                        value: role.as_str(),
                                        selected: draft.role == *role,
                                        {role.display_name()}
                                    }
                                }
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Password",
                                name: "password",
                                input_type: "password",
                                placeholder: "At least 8 characters",
                                value: draft.password.clone(),
                                disabled: locked,
                                on_input: move |e: FormEvent| form.write().password = e.value(),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Confirm Password",
                                name: "password_confirmation",
                                input_type: "password",
                                placeholder: "Repeat your password",
                                value: draft.password_confirmation.clone(),
                                disabled: locked,
                                on_input: move |e: FormEvent| form.write().password_confirmation = e.value(),
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: locked,
                            if busy { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
