use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::AppConfig;
use ui::views::{Dashboard, Directors, Home, MovieTablePage, RequestTester};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        tester: nav_tester,
        movies: nav_movies,
        dashboard: nav_dashboard,
        directors: nav_directors,
    });

    let config = use_context_provider(AppConfig::default);
    use_hook(|| tracing::info!(data = %config.data_endpoint, tester = %config.tester_base, "moviedash web starting"));

    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Script { src: ui::movies::ECHARTS_SRC }

        // Remount the routed tree on a language switch so memoized chart text is rebuilt.
        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
