use crate::auth::{use_auth, use_auth_service};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{safe_return_path, FeatureFlags, Role, SignInRequest, SignUpRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, Field, Input,
    ToastOptions,
};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Where to go after signing in: the preserved location when it is safe and
/// the role may open it, otherwise the role's dashboard.
pub fn post_sign_in_route(redirect: Option<&str>, role: Role) -> Route {
    safe_return_path(redirect)
        .map(|path| Route::from_path(&path))
        .filter(|route| {
            !matches!(route, Route::NotFound { .. }) && route.requirement().permits(role)
        })
        .unwrap_or_else(|| Route::home_for(role))
}

/// Sign-in and registration page at `/auth`.
///
/// `redirect` carries the location the access guard turned the user away
/// from. It is only honoured when it is a same-app path.
#[component]
pub fn SignIn(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let service = use_auth_service();
    let flags: FeatureFlags = use_context();
    let toast = use_toast();

    let mut mode = use_signal(|| AuthMode::SignIn);
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(|| false);

    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move |role: Role| {
        let target = post_sign_in_route(redirect_target.read().as_deref(), role);
        tracing::debug!(to = %target, "leaving sign-in page");
        navigator().replace(target);
    };

    // Signed-in users have no business here.
    if !auth.is_loading() {
        if let Some(role) = auth.role() {
            go_to_destination(role);
        }
    }

    let sign_up_mode = flags.sign_up && mode() == AuthMode::SignUp;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitting.set(true);
        field_errors.set(HashMap::new());

        let result = if sign_up_mode {
            auth.sign_up(
                service.authenticator(),
                &SignUpRequest {
                    display_name: display_name(),
                    email: email(),
                    phone: phone(),
                    password: password(),
                    confirm_password: confirm_password(),
                },
            )
        } else {
            auth.sign_in(
                service.authenticator(),
                &SignInRequest {
                    email: email(),
                    password: password(),
                },
            )
        };

        match result {
            Ok(role) => {
                toast.success(format!("Signed in as {}", role.display_name()), ToastOptions::new());
                go_to_destination(role);
            }
            Err(err) => {
                toast.error(err.friendly_message(), ToastOptions::new());
                field_errors.set(err.field_errors);
            }
        }
        submitting.set(false);
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    let (title, description, submit_label) = if sign_up_mode {
        ("Create an account", "Register as a student to book lessons.", "Create account")
    } else {
        ("Sign in", "Enter your email and password to open your portal.", "Sign in")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sign_in.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader { title: title.to_string(), description: description.to_string() }

                CardContent {
                    form { class: "auth-form", onsubmit: handle_submit,
                        if sign_up_mode {
                            Field { label: "Full name", html_for: "display_name", error: error_for("display_name"),
                                Input {
                                    id: "display_name",
                                    placeholder: "Jane Doe",
                                    value: display_name(),
                                    invalid: error_for("display_name").is_some(),
                                    on_input: move |e: FormEvent| display_name.set(e.value()),
                                }
                            }
                        }

                        Field { label: "Email", html_for: "email", error: error_for("email"),
                            Input {
                                id: "email",
                                input_type: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                invalid: error_for("email").is_some(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }

                        if sign_up_mode {
                            Field { label: "Phone", html_for: "phone", error: error_for("phone"),
                                Input {
                                    id: "phone",
                                    input_type: "tel",
                                    placeholder: "05xxxxxxxx",
                                    value: phone(),
                                    invalid: error_for("phone").is_some(),
                                    on_input: move |e: FormEvent| phone.set(e.value()),
                                }
                            }
                        }

                        Field { label: "Password", html_for: "password", error: error_for("password"),
                            Input {
                                id: "password",
                                input_type: "password",
                                value: password(),
                                invalid: error_for("password").is_some(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }

                        if sign_up_mode {
                            Field { label: "Confirm password", html_for: "confirm_password", error: error_for("confirm_password"),
                                Input {
                                    id: "confirm_password",
                                    input_type: "password",
                                    value: confirm_password(),
                                    invalid: error_for("confirm_password").is_some(),
                                    on_input: move |e: FormEvent| confirm_password.set(e.value()),
                                }
                            }
                        }

                        Button {
                            class: "auth-submit",
                            button_type: "submit",
                            busy: submitting(),
                            busy_label: "Please wait...".to_string(),
                            "{submit_label}"
                        }
                    }
                }

                if flags.sign_up {
                    CardFooter {
                        if sign_up_mode {
                            span { "Already have an account?" }
                        } else {
                            span { "New to the school?" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                field_errors.set(HashMap::new());
                                mode.set(if sign_up_mode { AuthMode::SignIn } else { AuthMode::SignUp });
                            },
                            if sign_up_mode { "Sign in instead" } else { "Create an account" }
                        }
                    }
                }
            }
        }
    }
}
