//! 설정 파일과 언어팩 로딩 테스트.
use std::fs;

use metric_converter::category::Category;
use metric_converter::cli::translator_for;
use metric_converter::config::{load_from, load_or_default_from, Config};
use metric_converter::i18n::{keys, resolve_language, Language, Translator};

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default_from(&path).expect("load");
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.default_category, None);
    assert_eq!(cfg.path(), Some(path.as_path()));
}

#[test]
fn saved_settings_survive_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let mut cfg = load_or_default_from(&path).expect("load");
    cfg.language = "ko".into();
    cfg.default_category = Some(Category::Area);
    cfg.save().expect("save");

    let reloaded = load_or_default_from(&path).expect("reload");
    assert_eq!(reloaded.language, "ko");
    assert_eq!(reloaded.default_category, Some(Category::Area));
    assert_eq!(reloaded.language_pack_dir, None);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "default_category = \"Time\"\n").expect("write");
    let cfg = load_or_default_from(&path).expect("load");
    assert_eq!(cfg.default_category, Some(Category::Time));
    assert_eq!(cfg.language, Config::default().language);
}

#[test]
fn malformed_config_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "default_category = \"Volume\"\n").expect("write");
    assert!(load_or_default_from(&path).is_err());
}

#[test]
fn explicit_language_beats_config() {
    assert_eq!(resolve_language("ko", Some("en")), "ko");
    assert_eq!(resolve_language("auto", Some("en-uk")), "en-us");
    assert_eq!(resolve_language("", Some("ko-KR")), "ko-kr");
}

#[test]
fn built_in_tables_and_english_fallback() {
    let ko = Translator::new("ko");
    assert_eq!(ko.language(), Language::Ko);
    assert_eq!(ko.t(keys::MAIN_MENU_CONVERT), "1) 단위 변환");
    let en = Translator::new("fr");
    assert_eq!(en.language_code(), "en");
    assert_eq!(en.t(keys::MAIN_MENU_CONVERT), "1) Convert");
    assert_eq!(en.t("no.such.key"), "no.such.key");
}

#[test]
fn language_pack_overrides_by_base_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("ko.toml"),
        "[main_menu]\nconvert = \"1) 변환하기\"\n",
    )
    .expect("write pack");
    let pack_dir = dir.path().to_str().expect("utf-8 path");
    let tr = Translator::new_with_pack("ko-kr", Some(pack_dir));
    assert_eq!(tr.t(keys::MAIN_MENU_CONVERT), "1) 변환하기");
    // 언어팩에 없는 키는 내장 문자열
    assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) 종료");
}

#[test]
fn missing_pack_uses_built_in_strings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pack_dir = dir.path().to_str().expect("utf-8 path");
    let tr = Translator::new_with_pack("en", Some(pack_dir));
    assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) Exit");
}

#[test]
fn read_only_load_does_not_create_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_from(&path).expect("load");
    assert!(!path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.path(), Some(path.as_path()));
}

#[test]
fn configured_language_and_pack_reach_the_translator() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("ko.toml"), "[units]\nfrom = \"출발\"\n").expect("write pack");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.language_pack_dir = Some(dir.path().to_str().expect("utf-8 path").into());

    let tr = translator_for("auto", &cfg);
    assert_eq!(tr.language(), Language::Ko);
    assert_eq!(tr.t(keys::UNITS_FROM), "출발");
    assert_eq!(tr.t(keys::UNITS_TO), "변환");

    // 명령행 언어가 설정보다 우선한다
    let tr = translator_for("en", &cfg);
    assert_eq!(tr.language(), Language::En);
    assert_eq!(tr.t(keys::UNITS_TO), "To");
}
