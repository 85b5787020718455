//! ECharts option builders for the dashboard charts.
//!
//! The builders are pure: the same aggregates produce the same option value.
//! The treemap is the one exception, its leaf colours come from the caller's RNG.

use std::collections::BTreeMap;

use api::MovieRecord;
use rand::Rng;
use serde_json::{json, Value};

use super::aggregate::{DirectorBreakdown, FrequencyTable};
use super::format::truncate_label;

/// Display constants shared by the chart builders.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPolicy {
    pub score_axis_min: f64,
    pub score_axis_max: f64,
    /// Scores at or above this are drawn in `highlight_color`.
    pub highlight_threshold: f64,
    pub highlight_color: &'static str,
    pub base_color: &'static str,
    pub legend_max_chars: usize,
}

impl Default for ChartPolicy {
    fn default() -> Self {
        Self {
            score_axis_min: 8.0,
            score_axis_max: 10.0,
            highlight_threshold: 9.2,
            highlight_color: "#c23531",
            base_color: "#2f4554",
            legend_max_chars: 6,
        }
    }
}

impl ChartPolicy {
    pub fn bar_color(&self, score: f64) -> &'static str {
        if score >= self.highlight_threshold {
            self.highlight_color
        } else {
            self.base_color
        }
    }
}

/// Caller-supplied (usually localized) chart wording.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartText {
    pub bar_title: String,
    pub score_name: String,
    pub score_unit: String,
    pub treemap_title: String,
    pub genre_series: String,
    pub occurrences: String,
    pub pie_title: String,
    pub pie_subtitle: String,
    pub works_series: String,
    pub works_unit: String,
    pub others_label: String,
}

impl Default for ChartText {
    fn default() -> Self {
        Self {
            bar_title: "Top 10 movie scores".into(),
            score_name: "Score".into(),
            score_unit: "pts".into(),
            treemap_title: "Genre distribution".into(),
            genre_series: "Genre".into(),
            occurrences: "Occurrences".into(),
            pie_title: "Works per director".into(),
            pie_subtitle: "Top 10 directors by number of works".into(),
            works_series: "Works".into(),
            works_unit: "films".into(),
            others_label: "Other directors".into(),
        }
    }
}

/// An option object plus the display-only legend relabelling that ECharts can
/// only express as a JS callback.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSpec {
    pub option: Value,
    pub legend_labels: BTreeMap<String, String>,
}

impl From<Value> for ChartSpec {
    fn from(option: Value) -> Self {
        Self {
            option,
            legend_labels: BTreeMap::new(),
        }
    }
}

/// Bar chart of the top-ranked movies against their score.
pub fn bar_option(top: &[MovieRecord], policy: &ChartPolicy, text: &ChartText) -> ChartSpec {
    let titles: Vec<&str> = top.iter().map(|m| m.chinese_name.as_str()).collect();
    let bars: Vec<Value> = top
        .iter()
        .map(|m| {
            json!({
                "value": m.score,
                "itemStyle": { "color": policy.bar_color(m.score) },
            })
        })
        .collect();

    json!({
        "title": { "text": text.bar_title, "left": "center" },
        "tooltip": {
            "trigger": "axis",
            "formatter": format!("{{b}}<br/>{}: {{c}}", text.score_name),
        },
        "xAxis": {
            "type": "category",
            "data": titles,
            "axisLabel": { "rotate": 30, "interval": 0 },
        },
        "yAxis": {
            "type": "value",
            "name": text.score_name,
            "min": policy.score_axis_min,
            "max": policy.score_axis_max,
            "axisLabel": { "formatter": format!("{{value}} {}", text.score_unit) },
        },
        "series": [{
            "name": text.score_name,
            "type": "bar",
            "data": bars,
            "label": { "show": true, "position": "top", "formatter": "{c}" },
            "barWidth": "40%",
        }],
    })
    .into()
}

/// Treemap of genre frequencies. Leaf colours are drawn from `rng`.
pub fn treemap_option<R: Rng + ?Sized>(
    genres: &FrequencyTable,
    text: &ChartText,
    rng: &mut R,
) -> ChartSpec {
    let leaves: Vec<Value> = genres
        .entries()
        .iter()
        .map(|(name, count)| {
            json!({
                "name": name,
                "value": count,
                "itemStyle": { "color": random_color(rng) },
            })
        })
        .collect();

    json!({
        "title": { "text": text.treemap_title, "left": "center" },
        "tooltip": {
            "formatter": format!("<div style=\"font-weight:bold\">{{b}}</div>{}: {{c}}", text.occurrences),
        },
        "series": [{
            "name": text.genre_series,
            "type": "treemap",
            "data": leaves,
            "breadcrumb": { "show": false },
            "label": { "show": true },
            "levels": [{
                "itemStyle": { "borderColor": "#555", "borderWidth": 1, "gapWidth": 1 },
            }],
        }],
    })
    .into()
}

/// Doughnut chart of works per director, with the others bucket last.
pub fn pie_option(
    directors: &DirectorBreakdown,
    policy: &ChartPolicy,
    text: &ChartText,
) -> ChartSpec {
    let mut slices: Vec<(&str, usize)> = directors
        .named
        .iter()
        .map(|(name, count)| (name.as_str(), *count))
        .collect();
    if let Some(count) = directors.others {
        slices.push((text.others_label.as_str(), count));
    }

    let names: Vec<&str> = slices.iter().map(|(name, _)| *name).collect();
    let data: Vec<Value> = slices
        .iter()
        .map(|(name, value)| json!({ "name": name, "value": value }))
        .collect();

    let legend_labels = names
        .iter()
        .filter_map(|name| {
            let shown = truncate_label(name, policy.legend_max_chars);
            (shown != *name).then(|| (name.to_string(), shown))
        })
        .collect();

    let option = json!({
        "title": { "text": text.pie_title, "subtext": text.pie_subtitle, "left": "center" },
        "tooltip": {
            "trigger": "item",
            "formatter": format!("{{b}}: {{c}} {} ({{d}}%)", text.works_unit),
        },
        "legend": {
            "orient": "vertical",
            "right": 30,
            "top": "center",
            "height": "80%",
            "itemGap": 10,
            "data": names,
        },
        "grid": { "left": "3%", "right": "23%", "containLabel": true },
        "series": [{
            "name": text.works_series,
            "type": "pie",
            "center": ["38%", "50%"],
            "radius": ["35%", "65%"],
            "avoidLabelOverlap": true,
            "itemStyle": { "borderRadius": 8, "borderColor": "#fff", "borderWidth": 2 },
            "label": {
                "show": true,
                "position": "outside",
                "formatter": format!("{{b|{{b}}}}\n{{c}} {}", text.works_unit),
                "rich": { "b": { "fontWeight": "bold", "fontSize": 12 } },
            },
            "emphasis": {
                "itemStyle": {
                    "shadowBlur": 10,
                    "shadowOffsetX": 0,
                    "shadowColor": "rgba(0, 0, 0, 0.5)",
                },
                "label": { "show": true, "fontWeight": "bold" },
            },
            "labelLine": { "length": 15, "length2": 10, "smooth": 0.2 },
            "data": data,
        }],
    });

    ChartSpec {
        option,
        legend_labels,
    }
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::{director_frequency, genre_frequency, top_by_rank, TOP_N};
    use rand::{rngs::StdRng, SeedableRng};

    fn movie(rank: u32, name: &str, score: f64, director: &str, genres: &str) -> MovieRecord {
        MovieRecord {
            rank,
            chinese_name: name.into(),
            original_name: String::new(),
            director: director.into(),
            score,
            countries: String::new(),
            genres: genres.into(),
        }
    }

    fn sample() -> Vec<MovieRecord> {
        vec![
            movie(2, "霸王别姬", 9.6, "陈凯歌", "剧情 爱情 同性"),
            movie(1, "肖申克的救赎", 9.7, "弗兰克·德拉邦特", "剧情 犯罪"),
            movie(3, "阿甘正传", 9.1, "罗伯特·泽米吉斯", "剧情 爱情"),
        ]
    }

    #[test]
    fn bar_uses_rank_order_and_threshold_colours() {
        let policy = ChartPolicy::default();
        let top = top_by_rank(&sample(), TOP_N);
        let spec = bar_option(&top, &policy, &ChartText::default());
        let option = &spec.option;

        assert_eq!(
            option["xAxis"]["data"],
            json!(["肖申克的救赎", "霸王别姬", "阿甘正传"])
        );
        assert_eq!(option["yAxis"]["min"], json!(8.0));
        assert_eq!(option["yAxis"]["max"], json!(10.0));

        let bars = option["series"][0]["data"].as_array().unwrap();
        assert_eq!(bars[0]["value"], json!(9.7));
        assert_eq!(bars[0]["itemStyle"]["color"], json!("#c23531"));
        assert_eq!(bars[2]["itemStyle"]["color"], json!("#2f4554"));
        assert!(spec.legend_labels.is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let policy = ChartPolicy::default();
        assert_eq!(policy.bar_color(9.2), policy.highlight_color);
        assert_eq!(policy.bar_color(9.19), policy.base_color);
    }

    #[test]
    fn bar_and_pie_are_idempotent() {
        let policy = ChartPolicy::default();
        let text = ChartText::default();
        let records = sample();
        let top = top_by_rank(&records, TOP_N);
        let directors = director_frequency(&records, TOP_N);

        assert_eq!(
            bar_option(&top, &policy, &text),
            bar_option(&top, &policy, &text)
        );
        assert_eq!(
            pie_option(&directors, &policy, &text),
            pie_option(&directors, &policy, &text)
        );
    }

    #[test]
    fn treemap_has_one_leaf_per_genre() {
        let genres = genre_frequency(&sample());
        let mut rng = StdRng::seed_from_u64(7);
        let spec = treemap_option(&genres, &ChartText::default(), &mut rng);

        let leaves = spec.option["series"][0]["data"].as_array().unwrap();
        assert_eq!(leaves.len(), 4);
        assert_eq!(leaves[0]["name"], json!("剧情"));
        assert_eq!(leaves[0]["value"], json!(3));
        for leaf in leaves {
            let colour = leaf["itemStyle"]["color"].as_str().unwrap();
            assert_eq!(colour.len(), 7);
            assert!(colour.starts_with('#'));
            assert!(colour[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn treemap_is_reproducible_with_the_same_seed() {
        let genres = genre_frequency(&sample());
        let text = ChartText::default();
        let first = treemap_option(&genres, &text, &mut StdRng::seed_from_u64(42));
        let second = treemap_option(&genres, &text, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn pie_appends_others_and_truncates_long_legend_names() {
        let directors = DirectorBreakdown {
            named: vec![
                ("弗兰克·德拉邦特".to_string(), 2),
                ("陈凯歌".to_string(), 1),
            ],
            others: Some(5),
        };
        let text = ChartText::default();
        let spec = pie_option(&directors, &ChartPolicy::default(), &text);

        let data = spec.option["series"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0], json!({ "name": "弗兰克·德拉邦特", "value": 2 }));
        assert_eq!(data[2], json!({ "name": "Other directors", "value": 5 }));

        assert_eq!(
            spec.legend_labels.get("弗兰克·德拉邦特").map(String::as_str),
            Some("弗兰克·德拉...")
        );
        assert_eq!(
            spec.legend_labels.get("Other directors").map(String::as_str),
            Some("Other ...")
        );
        assert!(!spec.legend_labels.contains_key("陈凯歌"));
    }

    #[test]
    fn pie_without_others_has_only_named_slices() {
        let directors = DirectorBreakdown {
            named: vec![("A".to_string(), 2), ("B".to_string(), 1)],
            others: None,
        };
        let spec = pie_option(&directors, &ChartPolicy::default(), &ChartText::default());
        assert_eq!(spec.option["legend"]["data"], json!(["A", "B"]));
    }

    #[test]
    fn empty_aggregates_build_empty_series() {
        let text = ChartText::default();
        let policy = ChartPolicy::default();
        let bar = bar_option(&[], &policy, &text);
        assert_eq!(bar.option["series"][0]["data"], json!([]));

        let mut rng = StdRng::seed_from_u64(1);
        let treemap = treemap_option(&FrequencyTable::new(), &text, &mut rng);
        assert_eq!(treemap.option["series"][0]["data"], json!([]));

        let pie = pie_option(&DirectorBreakdown::default(), &policy, &text);
        assert_eq!(pie.option["series"][0]["data"], json!([]));
    }
}
