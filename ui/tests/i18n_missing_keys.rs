use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const EN_US: &str = include_str!("../i18n/en-US/moviedash_ui.ftl");
const ZH_CN: &str = include_str!("../i18n/zh-CN/moviedash_ui.ftl");

/// Every non-fallback locale provides at least the keys of `en-US`.
#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = message_keys(EN_US, "en-US");
    assert!(!fallback.is_empty(), "fallback (en-US) contains no keys");

    for (locale, src) in [("zh-CN", ZH_CN)] {
        let keys = message_keys(src, locale);
        let missing: Vec<&String> = fallback.difference(&keys).collect();
        assert!(
            missing.is_empty(),
            "locale {locale} is missing {} key(s): {missing:?}",
            missing.len()
        );
    }
}

/// Every `t!("...")` literal in the crate resolves in the fallback bundle.
#[test]
fn source_keys_exist_in_fallback() {
    let fallback = message_keys(EN_US, "en-US");
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut referenced = BTreeSet::new();
    collect_source_keys(&src_root, &mut referenced);
    assert!(referenced.contains("nav-home"), "scanner found no keys");

    let missing: Vec<&String> = referenced.difference(&fallback).collect();
    assert!(missing.is_empty(), "keys missing from en-US: {missing:?}");
}

/// Message ids (`id = ...`), panicking on duplicates.
fn message_keys(src: &str, locale: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-')
        {
            continue;
        }
        let Some((id, _)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || !id.chars().all(valid_key_char) {
            continue;
        }
        assert!(keys.insert(id.to_string()), "duplicate key {id} in {locale}");
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn collect_source_keys(dir: &Path, found: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect_source_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (_, rest) in content.match_indices("t!(\"").map(|(i, m)| content.split_at(i + m.len())) {
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
}
