//! 대화형 메뉴를 버퍼 입출력으로 재현하는 테스트.
use std::io::Cursor;

use metric_converter::app;
use metric_converter::category::Category;
use metric_converter::cli::run_units;
use metric_converter::config::load_or_default_from;
use metric_converter::i18n::Translator;
use metric_converter::ui_cli::Console;

fn session(script: &str, path: &std::path::Path) -> String {
    let mut cfg = load_or_default_from(path).expect("config");
    let mut con = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    app::run(&mut con, &mut cfg, Translator::new("en")).expect("menu run");
    String::from_utf8(con.into_output()).expect("utf-8 output")
}

#[test]
fn temperature_conversion_through_the_menu() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = session("1\n1\n98.6\n1\n2\n0\n", &dir.path().join("config.toml"));
    assert!(
        out.contains("Result: 98.6 degrees Fahrenheit is 37.0 degrees Celsius."),
        "{out}"
    );
    assert!(out.contains("Exiting."));
}

#[test]
fn single_source_unit_is_preselected_and_eof_ends_the_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = session("1\n2\n100\n3\n", &dir.path().join("config.toml"));
    assert!(out.contains("From: Square Feet"), "{out}");
    assert!(
        out.contains("100.0 square feet is equal to 0.002295684113865932 square acres."),
        "{out}"
    );
}

#[test]
fn invalid_menu_input_is_retried() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = session("9\n1\n7\n3\n\n1\n0\n", &dir.path().join("config.toml"));
    assert!(out.contains("Invalid input. Please choose again."), "{out}");
    // 빈 값은 폼에서 거부된다
    assert!(out.contains("Result: Please enter a value to convert."), "{out}");
}

#[test]
fn default_category_from_settings_is_used_on_enter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    session("3\n2\n3\n0\n", &path);
    let cfg = load_or_default_from(&path).expect("reload");
    assert_eq!(cfg.default_category, Some(Category::Time));

    let out = session("1\n\n3600\n1\n0\n", &path);
    assert!(
        out.contains("3600.0 seconds is equal to 60.0 minutes and 0.0 seconds."),
        "{out}"
    );
}

#[test]
fn units_listing_for_one_and_all_categories() {
    let tr = Translator::new("en");
    let area = run_units(&tr, Some("area")).expect("area listing");
    assert_eq!(
        area,
        "Area\n  From: Square Feet\n  To: Square Meters, Square Yards, Square Acres"
    );
    let all = run_units(&tr, None).expect("all listing");
    assert!(all.starts_with("Temperature\n"));
    assert!(all.contains("Time\n  From: Seconds\n  To: Minutes, Hours, Days"));
    let err = run_units(&tr, Some("Volume")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid conversion type.");
}
