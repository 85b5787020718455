//! Localization for the `moviedash-ui` crate.
//!
//! Fluent bundles are embedded at compile time with `rust-embed` and looked up
//! through `i18n-embed-fl`, so a missing key is a build error rather than a
//! blank label at runtime.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/moviedash_ui.ftl   (fallback/reference)
//!   zh-CN/moviedash_ui.ftl
//! ```
//!
//! Call [`init`] once at startup (it is idempotent), then use `t!("nav-home")`
//! or `t!("table-total", count = 12)` anywhere in the crate.
//!
//! Desktop builds ask the OS for preferred languages; web builds read
//! `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Fluent lookup routed through the shared [`LOADER`]; takes the same arguments as `fl!` minus the loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fallback file path must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "moviedash_ui";

pub const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK_LANGUAGE));

/// Load bundles for `requested` into `loader`.
///
/// Isolation is a per-bundle setting, so it has to be switched off again after
/// every selection. Bidi marks show up as stray glyphs inside chart labels.
fn select(
    loader: &FluentLanguageLoader,
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, i18n_embed::I18nEmbedError> {
    let selected = i18n_embed::select(loader, &Localizations, requested)?;
    loader.set_use_isolating(false);
    Ok(selected)
}

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match select(&LOADER, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization bundles loaded"),
            Err(err) => tracing::warn!(%err, "failed selecting languages; using fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    select(&LOADER, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
