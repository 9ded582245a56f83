//! 입력 폼과 한 번 실행용 변환의 경계 검증 테스트.
use metric_converter::category::Category;
use metric_converter::cli::run_convert;
use metric_converter::conversion::ConversionError;
use metric_converter::form::{parse_value, ConverterForm, FormError};
use metric_converter::units::{AreaUnit, TemperatureUnit, TimeUnit, Unit};

fn filled(category: Category, from: Unit, to: Unit, input: &str) -> ConverterForm {
    let mut form = ConverterForm::new();
    form.select_category(category);
    form.select_from(from);
    form.select_to(to);
    form.set_input(input);
    form
}

#[test]
fn catalog_lists_match_the_selection_controls() {
    assert_eq!(Category::labels(), ["Temperature", "Area", "Time"]);
    assert_eq!(
        Category::Temperature.from_units(),
        ["Fahrenheit", "Celsius"]
    );
    assert_eq!(Category::Temperature.to_units(), ["Fahrenheit", "Celsius"]);
    assert_eq!(Category::Area.from_units(), ["Square Feet"]);
    assert_eq!(
        Category::Area.to_units(),
        ["Square Meters", "Square Yards", "Square Acres"]
    );
    assert_eq!(Category::Time.from_units(), ["Seconds"]);
    assert_eq!(Category::Time.to_units(), ["Minutes", "Hours", "Days"]);
}

#[test]
fn empty_input_wins_over_everything_else() {
    let form = ConverterForm::new();
    assert_eq!(form.submit(), Err(FormError::EmptyInput));
    assert_eq!(form.result_text(), "Please enter a value to convert.");
}

#[test]
fn unparsable_input_is_reported_before_missing_selection() {
    let mut form = ConverterForm::new();
    form.set_input("abc");
    assert_eq!(form.submit(), Err(FormError::ParseError));
    assert_eq!(
        form.result_text(),
        "Invalid input. Please enter a valid number."
    );
}

#[test]
fn whitespace_only_is_a_parse_error_and_padding_is_trimmed() {
    assert_eq!(parse_value("   "), Err(FormError::ParseError));
    assert_eq!(parse_value(" 42.5 "), Ok(42.5));
    assert_eq!(parse_value("-1e3"), Ok(-1000.0));
}

#[test]
fn raw_input_text_is_kept_as_typed() {
    let mut form = ConverterForm::new();
    assert_eq!(form.input(), "");
    form.set_input(" 42 ");
    assert_eq!(form.input(), " 42 ");
    form.select_category(Category::Area);
    assert_eq!(form.input(), " 42 ");
}

#[test]
fn non_finite_values_are_rejected() {
    for text in ["NaN", "inf", "-infinity", "1e400"] {
        assert_eq!(parse_value(text), Err(FormError::ParseError), "{text}");
    }
}

#[test]
fn missing_selection_after_a_valid_number() {
    let mut form = ConverterForm::new();
    form.set_input("10");
    assert_eq!(form.submit(), Err(FormError::MissingSelection));

    form.select_category(Category::Time);
    form.select_from(Unit::Time(TimeUnit::Seconds));
    assert_eq!(
        form.result_text(),
        "Please select conversion type and units."
    );
}

#[test]
fn changing_category_clears_unit_selection() {
    let mut form = filled(
        Category::Temperature,
        Unit::Temperature(TemperatureUnit::Fahrenheit),
        Unit::Temperature(TemperatureUnit::Celsius),
        "50",
    );
    assert_eq!(form.from_choices().len(), 2);

    form.select_category(Category::Area);
    assert_eq!(form.unit_from(), None);
    assert_eq!(form.unit_to(), None);
    assert_eq!(form.from_choices(), [Unit::Area(AreaUnit::SquareFeet)]);
    assert_eq!(form.to_choices().len(), 3);
    assert_eq!(form.submit(), Err(FormError::MissingSelection));

    // 같은 카테고리를 다시 고르면 선택을 유지한다
    form.select_from(Unit::Area(AreaUnit::SquareFeet));
    form.select_category(Category::Area);
    assert_eq!(form.unit_from(), Some(Unit::Area(AreaUnit::SquareFeet)));
}

#[test]
fn no_category_means_no_unit_choices() {
    let form = ConverterForm::new();
    assert!(form.from_choices().is_empty());
    assert!(form.to_choices().is_empty());
}

#[test]
fn complete_form_produces_engine_sentence() {
    let form = filled(
        Category::Time,
        Unit::Time(TimeUnit::Seconds),
        Unit::Time(TimeUnit::Minutes),
        "125",
    );
    assert_eq!(
        form.result_text(),
        "125.0 seconds is equal to 2.0833333333333335 minutes and 5.0 seconds."
    );
}

#[test]
fn unsupported_pair_surfaces_engine_message() {
    let form = filled(
        Category::Temperature,
        Unit::Temperature(TemperatureUnit::Fahrenheit),
        Unit::Temperature(TemperatureUnit::Fahrenheit),
        "1",
    );
    assert_eq!(
        form.submit(),
        Err(FormError::Conversion(ConversionError::UnsupportedPair(
            Category::Temperature
        )))
    );
    assert_eq!(form.result_text(), "Invalid Temperature conversion.");
}

#[test]
fn command_line_accepts_aliases() {
    assert_eq!(
        run_convert(Some("temp"), Some("F"), Some("c"), "212").as_deref(),
        Ok("212.0 degrees Fahrenheit is 100.0 degrees Celsius.")
    );
    assert_eq!(
        run_convert(Some("area"), Some("sqft"), Some("yd2"), "27").as_deref(),
        Ok("27.0 square feet is equal to 3.0 square yards.")
    );
    assert_eq!(
        run_convert(Some("Time"), Some("Seconds"), Some("Hours"), "7200").as_deref(),
        Ok("7200.0 seconds is equal to 2.0 hours and 0.0 minutes.")
    );
}

#[test]
fn command_line_error_order() {
    let err = run_convert(None, None, None, "").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a value to convert.");

    let err = run_convert(Some("Area"), None, Some("m2"), "x").unwrap_err();
    assert_eq!(err.to_string(), "Invalid input. Please enter a valid number.");

    let err = run_convert(Some("Area"), None, Some("m2"), "4").unwrap_err();
    assert_eq!(err.to_string(), "Please select conversion type and units.");

    let err = run_convert(Some("Volume"), Some("l"), Some("m3"), "4").unwrap_err();
    assert_eq!(err.to_string(), "Invalid conversion type.");

    let err = run_convert(Some("Area"), Some("m2"), Some("sqft"), "4").unwrap_err();
    assert_eq!(err.to_string(), "Invalid Area conversion.");

    let err = run_convert(Some("Area"), Some("furlong"), Some("m2"), "4").unwrap_err();
    assert_eq!(err.to_string(), "Invalid Area conversion.");
}

#[test]
fn single_letter_t_is_not_a_category_alias() {
    // temperature 와 time 이 둘 다 t 로 시작한다
    assert_eq!(Category::parse_alias("t"), None);
    assert_eq!(Category::parse_alias("TEMP"), Some(Category::Temperature));
    assert_eq!(Category::parse_alias("a"), Some(Category::Area));
    assert_eq!(Category::parse_alias("time"), Some(Category::Time));

    let err = run_convert(Some("t"), Some("s"), Some("min"), "60").unwrap_err();
    assert_eq!(err.to_string(), "Invalid conversion type.");
}
