use dioxus::prelude::*;

use super::login::{LoginPage, RegisterPage};
use super::shop::{CartPage, HomePage, NotFoundPage, OrdersPage, ProductsPage, ProfilePage};
use crate::app::layouts::Navbar;
use crate::shared::hooks::{use_auth_provider, use_theme_provider};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/products")]
    Products {},
    #[route("/cart")]
    Cart {},
    #[route("/orders")]
    Orders {},
    #[route("/profile")]
    Profile {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // Collaborators the navbar consumes
    use_auth_provider();
    use_theme_provider();

    use_effect(|| {
        tracing::info!("Storefront app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { HomePage {} }
}

#[component]
fn Products() -> Element {
    rsx! { ProductsPage {} }
}

#[component]
fn Cart() -> Element {
    rsx! { CartPage {} }
}

#[component]
fn Orders() -> Element {
    rsx! { OrdersPage {} }
}

#[component]
fn Profile() -> Element {
    rsx! { ProfilePage {} }
}

#[component]
fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
fn Register() -> Element {
    rsx! { RegisterPage {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { NotFoundPage { path } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::nav_config;

    #[test]
    fn test_every_menu_target_is_a_known_route() {
        let menu = &nav_config().menu;
        for entry in menu.authenticated.iter().chain(menu.guest.iter()) {
            let known = match entry.target.parse::<Route>() {
                Ok(route) => !matches!(route, Route::NotFound { .. }),
                Err(_) => false,
            };
            assert!(known, "menu target {} has no page", entry.target);
        }
    }

    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        let route = "/no/such/page".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::NotFound {
                segments: vec!["no".to_string(), "such".to_string(), "page".to_string()],
            })
        );
    }

    #[test]
    fn test_not_found_is_wrapped_by_navbar_layout() {
        // The declaration order keeps every route, 404 included, under `Layout`
        let source = include_str!("routes.rs");
        let declaration = &source[..source.find("#[component]").unwrap_or(source.len())];
        assert!(!declaration.contains(concat!("#[end_", "layout]")));
        let layout_at = declaration.find("#[layout(Layout)]").unwrap();
        let not_found_at = declaration.find("NotFound {").unwrap();
        assert!(layout_at < not_found_at);
    }

    #[test]
    fn test_login_route_is_known() {
        let route = nav_config().login_route.parse::<Route>().ok();
        assert_eq!(route, Some(Route::Login {}));
    }
}
