//! Integration tests for the JSON file store working with the projector.

use std::fs;

use fcrm_styles::{
    render_css_variables, JsonFileStore, SettingsForm, SettingsProjector, StyleQueue,
};
use tempfile::TempDir;

#[test]
fn test_settings_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    SettingsForm::new(true)
        .submit(
            &mut store,
            [
                ("fcrm-primary-button", "#112233"),
                ("fcrm-primary-button-text", "#ffffff"),
            ],
        )
        .unwrap();
    store.save().unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(
        render_css_variables(&reopened),
        ":root {--fcrm-primary-button: #112233;--fcrm-primary-button-text: #ffffff;}"
    );
}

#[test]
fn test_reset_persists_and_keeps_other_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    fs::write(
        &path,
        r##"{"active_plugins": "fcrm-tributes", "fcrm-link-color": "#000", "fcrm-primary-shadow": "#111"}"##,
    )
    .unwrap();

    let mut store = JsonFileStore::open(&path).unwrap();
    assert!(SettingsProjector::new(true).reset(&mut store));
    store.save().unwrap();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, serde_json::json!({ "active_plugins": "fcrm-tributes" }));
}

#[test]
fn test_head_from_saved_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    fs::write(&path, r#"{"fcrm-focus-border-color": "rgb(0, 128, 0)"}"#).unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    let base = fcrm_styles::config::default_stylesheet();
    let mut queue = StyleQueue::new();
    SettingsProjector::new(true)
        .inject(&store, &mut queue, &base)
        .unwrap();

    assert_eq!(
        queue.render_head().unwrap(),
        "<link rel='stylesheet' id='weave-firehawk-crm-tributes-styles-css' \
         href='css/weave-fcrm-tributes.css?ver=1.0' media='all' />\n\
         <style id='weave-firehawk-crm-tributes-styles-inline-css'>\n\
         :root {--fcrm-focus-border-color: rgb(0, 128, 0);}\n\
         </style>\n"
    );
}
