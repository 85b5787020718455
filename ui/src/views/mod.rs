mod home;
pub use home::Home;

mod movies;
pub use movies::MovieTablePage;

mod dashboard;
pub use dashboard::Dashboard;

mod directors;
pub use directors::Directors;

mod tester;
pub use tester::RequestTester;

use crate::{core::options::ChartText, t};

/// Chart wording in the current language.
fn chart_text() -> ChartText {
    ChartText {
        bar_title: t!("chart-bar-title"),
        score_name: t!("chart-score-name"),
        score_unit: t!("chart-score-unit"),
        treemap_title: t!("chart-treemap-title"),
        genre_series: t!("chart-genre-series"),
        occurrences: t!("chart-occurrences"),
        pie_title: t!("chart-pie-title"),
        pie_subtitle: t!("chart-pie-subtitle"),
        works_series: t!("chart-works-series"),
        works_unit: t!("chart-works-unit"),
        others_label: t!("chart-others-label"),
    }
}
