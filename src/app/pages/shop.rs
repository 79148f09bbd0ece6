use dioxus::prelude::*;

use crate::shared::hooks::use_auth;

#[component]
fn PageSection(title: String, children: Element) -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            div { class: "c-page__body", {children} }
        }
    }
}

#[component]
pub fn HomePage() -> Element {
    let session = use_auth().session_view();

    rsx! {
        PageSection { title: "Welcome",
            {match session.username {
                Some(name) => rsx! { p { "Good to see you again, {name}." } },
                None => rsx! { p { "Browse the catalogue or sign in to see your orders." } },
            }}
        }
    }
}

#[component]
pub fn ProductsPage() -> Element {
    rsx! {
        PageSection { title: "Products",
            p { "The product catalogue will appear here." }
        }
    }
}

#[component]
pub fn CartPage() -> Element {
    rsx! {
        PageSection { title: "Cart",
            p { "Your cart is empty." }
        }
    }
}

#[component]
pub fn OrdersPage() -> Element {
    rsx! {
        PageSection { title: "Orders",
            p { "No orders yet." }
        }
    }
}

#[component]
pub fn ProfilePage() -> Element {
    let session = use_auth().session_view();
    let username = session.username.unwrap_or_default();

    rsx! {
        PageSection { title: "Profile",
            p { "Signed in as {username}." }
        }
    }
}

#[component]
pub fn NotFoundPage(path: String) -> Element {
    rsx! {
        PageSection { title: "Page not found",
            p { "Nothing lives at /{path}." }
        }
    }
}
