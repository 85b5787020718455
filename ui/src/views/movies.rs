use dioxus::prelude::*;

use crate::{
    core::config::use_config,
    movies::{use_movies, AlertKind, MovieTable, StatusAlert, TableLayout},
    t,
};

/// Every column, fixed page size, generic error text.
#[component]
pub fn MovieTablePage() -> Element {
    let page_size = use_config().full_page_size;
    let state = use_movies();
    let snapshot = state();

    rsx! {
        section { class: "page page-movies",
            h1 { {t!("movies-title")} }

            if snapshot.error.is_some() {
                StatusAlert { kind: AlertKind::Error, message: t!("data-load-failed-generic") }
            }
            if snapshot.is_empty() {
                StatusAlert { kind: AlertKind::Info, message: t!("no-data") }
            }

            MovieTable {
                records: snapshot.records.clone(),
                layout: TableLayout::Full,
                page_size,
                loading: snapshot.loading,
            }
        }
    }
}
