// SPDX-License-Identifier: MPL-2.0
use comet_planner::application::port::{PlanImporter, PlanTitleStore};
use comet_planner::config::{self, Config};
use comet_planner::domain::{FileSelection, PlanId};
use comet_planner::i18n::fluent::I18n;
use comet_planner::infrastructure::PlanFiles;
use comet_planner::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("toolbar-export-button"), "Export plan");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("toolbar-export-button"), "Exporter le plan");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_full_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("nested").join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.planner.default_title = "Honors plan".to_string();
    config.planner.initial_section = 1;
    config.planner.show_tabs = false;
    config.features.profile_controls = true;

    config::save_to_path(&config, &config_path).expect("save");
    let loaded = config::load_from_path(&config_path).expect("load");

    assert_eq!(loaded, config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    fs::write(&config_path, "[planner]\ninitial_section = 1\n").expect("write");

    let loaded = config::load_from_path(&config_path).expect("load");

    assert_eq!(loaded.planner.initial_section, 1);
    assert_eq!(loaded.planner.default_title, "Your plan");
    assert!(loaded.planner.show_tabs);
    assert!(!loaded.features.profile_controls);
}

#[test]
fn test_imported_plan_title_is_loadable() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let source = dir.path().join("upload.json");
    fs::write(
        &source,
        r#"{"id":"fall-2026","title":"Fall 2026","semesters":[]}"#,
    )
    .expect("write plan");

    let mut files = PlanFiles::new(dir.path().join("data"));
    files
        .import_plan(FileSelection::new(&source))
        .expect("import");

    let title = files
        .load_title(&PlanId::new("fall-2026"))
        .expect("load title");
    assert_eq!(title.as_deref(), Some("Fall 2026"));
}
