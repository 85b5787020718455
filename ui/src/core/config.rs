//! Application configuration shared through the component tree.
//!
//! Launchers install an `AppConfig` with `use_context_provider`; components read
//! it through [`use_config`]. Endpoints can be overridden at build time with
//! `MOVIEDASH_DATA_URL` and `MOVIEDASH_TESTER_URL` (baked in via `option_env!`
//! so the browser build sees them too).

use dioxus::prelude::*;

use super::options::ChartPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_endpoint: String,
    pub tester_base: String,
    pub charts: ChartPolicy,
    /// Rows per page on the full movie table.
    pub full_page_size: usize,
    /// Initial rows per page on the dashboard table.
    pub compact_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_endpoint: option_env!("MOVIEDASH_DATA_URL")
                .unwrap_or(api::DEFAULT_DATA_URL)
                .to_string(),
            tester_base: option_env!("MOVIEDASH_TESTER_URL")
                .unwrap_or(api::DEFAULT_TESTER_URL)
                .to_string(),
            charts: ChartPolicy::default(),
            full_page_size: 5,
            compact_page_size: 10,
        }
    }
}

/// Configuration from context, or the defaults when no launcher provided one.
pub fn use_config() -> AppConfig {
    try_use_context::<AppConfig>().unwrap_or_default()
}
