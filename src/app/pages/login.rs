use dioxus::prelude::*;

use super::routes::Route;
use crate::app::components::Button;
use crate::shared::hooks::use_auth;

/// Unauthenticated entry screen, also the post-logout redirect target
#[component]
pub fn LoginPage() -> Element {
    rsx! {
        SignInForm { title: "Sign in", submit_label: "Sign in" }
    }
}

#[component]
pub fn RegisterPage() -> Element {
    rsx! {
        SignInForm { title: "Create an account", submit_label: "Register" }
    }
}

#[component]
fn SignInForm(title: String, submit_label: String) -> Element {
    let mut auth = use_auth();
    let router = navigator();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match auth.login(&username.read()) {
            Ok(()) => {
                error.set(None);
                router.push(Route::Home {});
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        section { class: "c-page c-page--narrow",
            h1 { class: "c-page__title", "{title}" }
            form { class: "c-auth-form", onsubmit: handle_submit,
                label { class: "c-auth-form__label", r#for: "username", "Username" }
                input {
                    id: "username",
                    class: "c-auth-form__input",
                    r#type: "text",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "c-auth-form__error", "{message}" }
                }
                Button { submit: true, "{submit_label}" }
            }
        }
    }
}
