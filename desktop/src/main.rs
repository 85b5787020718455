#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::AppConfig;
use ui::views::{Dashboard, Directors, Home, MovieTablePage, RequestTester};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/get-post")]
    RequestTester {},
    #[route("/movies")]
    MovieTablePage {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/directors")]
    Directors {},
}

// Shared theme, inlined so packaged builds need no stylesheet on disk.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Moviedash v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_tester(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::RequestTester {}, "{label}" })
}
fn nav_movies(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::MovieTablePage {}, "{label}" })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_directors(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Directors {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let config = use_context_provider(AppConfig::default);
    use_hook(|| tracing::info!(data = %config.data_endpoint, tester = %config.tester_base, "moviedash desktop starting"));

    // AppNavbar writes the selected language here.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        tester: nav_tester,
        movies: nav_movies,
        dashboard: nav_dashboard,
        directors: nav_directors,
    });

    // Some window managers ignore the maximize hint on the builder.
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        document::Script { src: ui::movies::ECHARTS_SRC }

        // Keyed by language: a switch remounts every page so chart text is rebuilt.
        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
