//! Shared UI crate for Moviedash. Views, charts and the table live here;
//! the `web` and `desktop` crates only add routing and launch.

use dioxus::prelude::{asset, Asset};

pub mod core;
pub mod i18n;
pub mod movies;
pub mod tester;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme for launchers that load stylesheets by URL (web).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
