use dioxus::prelude::*;

use crate::{
    core::{
        aggregate::{director_frequency, DirectorBreakdown, TOP_N},
        config::use_config,
        options::pie_option,
    },
    movies::{use_movies, AlertKind, EChart, MoviesState, StatusAlert},
    t,
};

use super::chart_text;

/// Works per director, top ten plus an "others" slice.
#[component]
pub fn Directors() -> Element {
    let policy = use_config().charts;
    let state = use_movies();

    let directors = use_memo(move || director_frequency(&state.read().records, TOP_N));
    let pie = use_memo(move || pie_option(&directors.read(), &policy, &chart_text()));

    let snapshot = state();
    let no_directors = lacks_director_data(&snapshot, &directors.read());

    rsx! {
        section { class: "page page-directors",
            h1 { {t!("directors-title")} }

            if snapshot.error.is_some() {
                StatusAlert { kind: AlertKind::Error, message: t!("data-load-failed-generic") }
            }
            if no_directors {
                StatusAlert { kind: AlertKind::Warning, message: t!("no-director-data") }
            } else {
                div { class: "chart-card",
                    EChart {
                        id: "director-pie",
                        spec: pie(),
                        loading: snapshot.loading,
                        height: 520,
                    }
                }
            }
        }
    }
}

/// A finished, successful fetch that yielded no director names, either because
/// there were no records or because every director field was blank.
fn lacks_director_data(state: &MoviesState, directors: &DirectorBreakdown) -> bool {
    !state.loading && state.error.is_none() && directors.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MovieRecord;

    fn movie(rank: u32, director: &str) -> MovieRecord {
        MovieRecord {
            rank,
            chinese_name: format!("电影{rank}"),
            original_name: String::new(),
            director: director.to_string(),
            score: 9.0,
            countries: String::new(),
            genres: String::new(),
        }
    }

    fn loaded(records: Vec<MovieRecord>) -> (MoviesState, DirectorBreakdown) {
        let directors = director_frequency(&records, TOP_N);
        (MoviesState::from_outcome(Some(&Ok(records))), directors)
    }

    #[test]
    fn blank_director_fields_count_as_no_data() {
        let (state, directors) = loaded(vec![movie(1, ""), movie(2, " / ")]);
        assert!(!state.is_empty());
        assert!(lacks_director_data(&state, &directors));
    }

    #[test]
    fn empty_fetch_counts_as_no_data() {
        let (state, directors) = loaded(Vec::new());
        assert!(lacks_director_data(&state, &directors));
    }

    #[test]
    fn named_directors_show_the_chart() {
        let (state, directors) = loaded(vec![movie(1, "宫崎骏")]);
        assert!(!lacks_director_data(&state, &directors));
    }

    #[test]
    fn loading_or_failed_fetch_is_not_the_no_data_state() {
        let pending = MoviesState::from_outcome(None);
        let empty = director_frequency(&[], TOP_N);
        assert!(!lacks_director_data(&pending, &empty));

        let failed = MoviesState::from_outcome(Some(&Err(api::FetchError::Status { status: 500 })));
        assert!(!lacks_director_data(&failed, &empty));
    }
}
