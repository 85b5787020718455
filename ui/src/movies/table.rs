use api::MovieRecord;
use dioxus::prelude::*;

use crate::{
    core::format::{format_score, join_genres},
    movies::table_model::{
        next_sort, sorted_rows, Column, Pagination, SortDirection, SortOrder, TableLayout,
    },
    t,
};

#[component]
pub fn MovieTable(
    records: Vec<MovieRecord>,
    layout: TableLayout,
    page_size: usize,
    loading: bool,
) -> Element {
    let sort = use_signal(|| Option::<SortOrder>::None);
    let mut paging = use_signal(|| Pagination::new(page_size));

    let columns = layout.columns();
    let column_count = columns.len();
    let rows = sorted_rows(&records, sort());
    let total = rows.len();

    let current = paging();
    let page = current.clamped_page(total);
    let page_count = current.page_count(total);
    let visible: Vec<&MovieRecord> = current.slice(&rows).to_vec();

    let grid_class = match layout {
        TableLayout::Full => "movie-table__grid",
        TableLayout::Compact => "movie-table__grid movie-table__grid--bordered",
    };
    let size_options = layout.page_size_options();
    let total_label = t!("table-total", count = total);

    rsx! {
        section { class: "movie-table",
            div { class: "movie-table__scroll",
                table { class: "{grid_class}",
                    thead {
                        tr {
                            for column in columns.iter().copied() {
                                {render_header(column, sort)}
                            }
                        }
                    }
                    tbody {
                        if loading {
                            tr {
                                td { class: "movie-table__placeholder", colspan: "{column_count}",
                                    {t!("status-loading")}
                                }
                            }
                        } else if visible.is_empty() {
                            tr {
                                td { class: "movie-table__placeholder", colspan: "{column_count}",
                                    {t!("table-empty")}
                                }
                            }
                        } else {
                            for movie in visible.into_iter() {
                                tr { key: "{movie.row_key()}", class: "movie-table__row",
                                    for column in columns.iter().copied() {
                                        {render_cell(movie, column, layout)}
                                    }
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "movie-table__pager",
                span { class: "movie-table__total", "{total_label}" }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: page <= 1,
                    onclick: move |_| {
                        let current = paging();
                        paging.set(current.with_page(page.saturating_sub(1)));
                    },
                    "‹"
                }
                span { class: "movie-table__page", "{page} / {page_count}" }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: page >= page_count,
                    onclick: move |_| {
                        let current = paging();
                        paging.set(current.with_page(page + 1));
                    },
                    "›"
                }
                if !size_options.is_empty() {
                    select {
                        class: "movie-table__page-size",
                        value: "{current.page_size}",
                        onchange: move |evt: FormEvent| {
                            if let Ok(size) = evt.value().parse::<usize>() {
                                let current = paging();
                                paging.set(current.with_page_size(size));
                            }
                        },
                        for size in size_options.iter().copied() {
                            option { key: "{size}", value: "{size}", {t!("table-page-size", size = size)} }
                        }
                    }
                }
            }
        }
    }
}

fn render_header(column: Column, mut sort: Signal<Option<SortOrder>>) -> Element {
    let label = column_label(column);

    let Some(key) = column.sort_key() else {
        return rsx! {
            th { class: "movie-table__head", "{label}" }
        };
    };

    let indicator = match sort() {
        Some(order) if order.key == key => match order.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        },
        _ => "↕",
    };

    rsx! {
        th { class: "movie-table__head movie-table__head--sortable",
            button {
                r#type: "button",
                class: "movie-table__sort",
                onclick: move |_| {
                    let current = sort();
                    sort.set(next_sort(current, key));
                },
                "{label}"
                span { class: "movie-table__sort-indicator", "{indicator}" }
            }
        }
    }
}

fn render_cell(movie: &MovieRecord, column: Column, layout: TableLayout) -> Element {
    match column {
        Column::Rank => rsx! { td { class: "movie-table__cell movie-table__cell--rank", "{movie.rank}" } },
        Column::ChineseName => rsx! { td { class: "movie-table__cell movie-table__cell--ellipsis", "{movie.chinese_name}" } },
        Column::OriginalName => rsx! { td { class: "movie-table__cell movie-table__cell--ellipsis", "{movie.original_name}" } },
        Column::Director => rsx! { td { class: "movie-table__cell movie-table__cell--director", "{movie.director}" } },
        Column::Score => {
            let score = format_score(movie.score);
            rsx! {
                td { class: "movie-table__cell",
                    span { class: score_class(movie.score), "{score}" }
                }
            }
        }
        Column::Countries => rsx! { td { class: "movie-table__cell", "{movie.countries}" } },
        Column::Genres => {
            let genres = match layout {
                TableLayout::Full => movie.genres.clone(),
                TableLayout::Compact => join_genres(&movie.genres),
            };
            rsx! { td { class: "movie-table__cell", "{genres}" } }
        }
    }
}

fn column_label(column: Column) -> String {
    match column {
        Column::Rank => t!("column-rank"),
        Column::ChineseName => t!("column-chinese-name"),
        Column::OriginalName => t!("column-original-name"),
        Column::Director => t!("column-director"),
        Column::Score => t!("column-score"),
        Column::Countries => t!("column-countries"),
        Column::Genres => t!("column-genres"),
    }
}

pub(crate) fn score_class(score: f64) -> &'static str {
    if score >= 9.0 {
        "movie-table__score movie-table__score--high"
    } else {
        "movie-table__score movie-table__score--normal"
    }
}
