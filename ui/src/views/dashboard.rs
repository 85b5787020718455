use dioxus::prelude::*;

use crate::{
    core::{
        aggregate::{genre_frequency, top_by_rank, TOP_N},
        config::use_config,
        options::{bar_option, treemap_option},
    },
    movies::{use_movies, AlertKind, EChart, MovieTable, StatusAlert, TableLayout},
    t,
};

use super::chart_text;

/// Score bar chart, genre treemap and the compact table over one fetch.
#[component]
pub fn Dashboard() -> Element {
    let config = use_config();
    let state = use_movies();

    let policy = config.charts.clone();
    let bar = use_memo(move || {
        let top = top_by_rank(&state.read().records, TOP_N);
        bar_option(&top, &policy, &chart_text())
    });
    let treemap = use_memo(move || {
        let genres = genre_frequency(&state.read().records);
        treemap_option(&genres, &chart_text(), &mut rand::thread_rng())
    });

    let snapshot = state();

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }

            if let Some(detail) = snapshot.error.clone() {
                StatusAlert {
                    kind: AlertKind::Error,
                    message: t!("data-load-failed"),
                    description: detail,
                }
            }
            if snapshot.is_empty() {
                StatusAlert { kind: AlertKind::Warning, message: t!("no-data") }
            }

            div { class: "dashboard__charts",
                div { class: "chart-card",
                    EChart { id: "score-bar", spec: bar(), loading: snapshot.loading }
                }
                div { class: "chart-card",
                    EChart { id: "genre-treemap", spec: treemap(), loading: snapshot.loading }
                }
            }

            div { class: "chart-card",
                MovieTable {
                    records: snapshot.records.clone(),
                    layout: TableLayout::Compact,
                    page_size: config.compact_page_size,
                    loading: snapshot.loading,
                }
            }
        }
    }
}
