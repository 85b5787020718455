use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribe to the launcher's language signal so a switch re-renders.
    let lang = try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default();
    tracing::debug!(%lang, "home render");

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }

            ul { class: "page-home__features",
                li { {t!("home-feature-tester")} }
                li { {t!("home-feature-movies")} }
                li { {t!("home-feature-dashboard")} }
                li { {t!("home-feature-directors")} }
            }
            p { class: "page-home__cta", {t!("home-cta")} }
        }
    }
}
