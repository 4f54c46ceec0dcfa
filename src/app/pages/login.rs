//! Login page component.

use dioxus::prelude::*;
use tracing::info;

use crate::api::LoginRequest;
use crate::app::components::Layout;
use crate::app::guards::PublicOnlyRoute;
use crate::app::{use_services, use_translate, use_translate_with};
use crate::bridge::{NavigateOptions, ROOT_PATH};
use crate::stores::UserProfile;

/// Login page component (signed-in users are sent to the dashboard).
#[component]
pub fn Login() -> Element {
    rsx! {
        PublicOnlyRoute {
            LoginForm {}
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let services = use_services();
    let t = use_translate();
    let t_with = use_translate_with();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = {
        let t = t.clone();
        let t_with = t_with.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            error.set(None);

            let services = services.clone();
            let t = t.clone();
            let t_with = t_with.clone();
            let request = LoginRequest {
                username: username(),
                password: password(),
            };
            spawn(async move {
                let label = Some(t("login.signing_in"));
                let api = services.api.clone();
                let result = services
                    .loading
                    .with_loading(label, || async move {
                        api.login(&request).await.map(|r| (r, request))
                    })
                    .await;

                match result {
                    Ok((response, request)) => {
                        if let Err(e) = services.session.sign_in(&response.token) {
                            error.set(Some(e.to_string()));
                            return;
                        }
                        info!("Signed in as {}", response.user.username);
                        services.user.set(UserProfile {
                            username: response.user.username,
                            password: request.password,
                        });
                        services.navigation.navigate(ROOT_PATH, NavigateOptions::REPLACE);
                    }
                    Err(e) => {
                        let reason = e.to_string();
                        error.set(Some(t_with("login.failed", &[("reason", reason.as_str())])));
                    }
                }
            });
        }
    };

    rsx! {
        Layout {
            title_key: "login.title".to_string(),
            nav_active: "login".to_string(),

            article {
                h1 { {t("login.title")} }
                form { onsubmit: on_submit,
                    label {
                        {t("login.username")}
                        input {
                            r#type: "text",
                            name: "username",
                            autocomplete: "username",
                            required: true,
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }
                    label {
                        {t("login.password")}
                        input {
                            r#type: "password",
                            name: "password",
                            autocomplete: "current-password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "status-err", "{message}" }
                    }
                    button { r#type: "submit", {t("login.submit")} }
                }
            }
        }
    }
}
