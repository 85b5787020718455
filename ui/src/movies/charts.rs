//! ECharts host element.
//!
//! Options are built in Rust and handed to the ECharts runtime through
//! `document::eval`, which works the same in the browser and the desktop webview.
//! Instances are tracked in `window.__moviedashCharts` so they can be disposed
//! after their element has already left the DOM.

use dioxus::prelude::*;

use crate::core::options::ChartSpec;

/// Script launchers add to the document head.
pub const ECHARTS_SRC: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

const RENDER_TEMPLATE: &str = r#"(function render() {
  const el = document.getElementById(__ID__);
  if (!el) return;
  if (!window.echarts) { setTimeout(render, 50); return; }
  const registry = (window.__moviedashCharts = window.__moviedashCharts || {});
  let chart = registry[__ID__];
  if (!chart || chart.isDisposed() || chart.getDom() !== el) {
    if (chart && !chart.isDisposed()) chart.dispose();
    chart = echarts.getInstanceByDom(el) || echarts.init(el);
    registry[__ID__] = chart;
    window.addEventListener('resize', () => { if (!chart.isDisposed()) chart.resize(); });
  }
  const option = __OPTION__;
  const labels = __LABELS__;
  if (option.legend && Object.keys(labels).length > 0) {
    option.legend.formatter = (name) => labels[name] ?? name;
  }
  chart.setOption(option, true);
  if (__LOADING__) { chart.showLoading(); } else { chart.hideLoading(); }
})();"#;

const DISPOSE_TEMPLATE: &str = r#"(function () {
  const registry = window.__moviedashCharts || {};
  const chart = registry[__ID__];
  if (chart && !chart.isDisposed()) chart.dispose();
  delete registry[__ID__];
})();"#;

#[component]
pub fn EChart(
    id: String,
    spec: ReadOnlySignal<ChartSpec>,
    loading: ReadOnlySignal<bool>,
    #[props(default = 400)] height: u32,
) -> Element {
    let render_id = id.clone();
    use_effect(move || {
        let script = render_script(&render_id, &spec.read(), loading());
        spawn(report_failure(render_id.clone(), document::eval(&script)));
    });

    let dispose_id = id.clone();
    use_drop(move || {
        tracing::debug!(chart = %dispose_id, "disposing chart");
        let eval = document::eval(&dispose_script(&dispose_id));
        // The owning scope is going away, so the watcher cannot live in it.
        spawn_forever(report_failure(dispose_id.clone(), eval));
    });

    rsx! {
        div { id: "{id}", class: "echart", style: "height: {height}px; width: 100%;" }
    }
}

async fn report_failure(chart: String, eval: document::Eval) {
    check_script_outcome(&chart, eval.await);
}

/// Log a failed chart script; returns whether it ran cleanly.
fn check_script_outcome<T, E: std::fmt::Debug>(chart: &str, outcome: Result<T, E>) -> bool {
    match outcome {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(chart, ?err, "chart script failed");
            false
        }
    }
}

/// JS that creates (or reuses) the chart on element `id` and applies `spec`.
pub(crate) fn render_script(id: &str, spec: &ChartSpec, loading: bool) -> String {
    let labels = serde_json::Value::from_iter(
        spec.legend_labels
            .iter()
            .map(|(name, shown)| (name.clone(), serde_json::Value::from(shown.as_str()))),
    );

    RENDER_TEMPLATE
        .replace("__ID__", &js_string(id))
        .replace("__OPTION__", &spec.option.to_string())
        .replace("__LABELS__", &labels.to_string())
        .replace("__LOADING__", if loading { "true" } else { "false" })
}

pub(crate) fn dispose_script(id: &str) -> String {
    DISPOSE_TEMPLATE.replace("__ID__", &js_string(id))
}

fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn render_script_embeds_option_and_labels() {
        let spec = ChartSpec {
            option: json!({ "legend": { "data": ["克里斯托弗·诺兰"] } }),
            legend_labels: BTreeMap::from([(
                "克里斯托弗·诺兰".to_string(),
                "克里斯托弗·...".to_string(),
            )]),
        };
        let script = render_script("director-pie", &spec, false);

        assert!(script.contains(r#"document.getElementById("director-pie")"#));
        assert!(script.contains(r#"const option = {"legend":{"data":["克里斯托弗·诺兰"]}};"#));
        assert!(script.contains(r#"const labels = {"克里斯托弗·诺兰":"克里斯托弗·..."};"#));
        assert!(script.contains("if (false)"));
        for placeholder in ["__ID__", "__OPTION__", "__LABELS__", "__LOADING__"] {
            assert!(!script.contains(placeholder), "{placeholder} left in script");
        }
    }

    #[test]
    fn ids_are_quoted_for_js() {
        let script = dispose_script(r#"a"b"#);
        assert!(script.contains(r#"registry["a\"b"]"#));
        assert!(!script.contains("__ID__"));
    }

    #[test]
    fn script_errors_are_reported() {
        assert!(check_script_outcome::<_, String>("bar", Ok(())));
        assert!(!check_script_outcome::<(), _>("bar", Err("echarts is not defined")));
    }

    #[test]
    fn loading_flag_is_inlined() {
        let script = render_script("bar", &ChartSpec::default(), true);
        assert!(script.contains("if (true)"));
        assert!(script.contains("const option = null;"));
    }
}
