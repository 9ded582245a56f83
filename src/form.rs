//! 화면 입력 상태와 경계 검증.
//!
//! 입력 문자열과 카테고리/단위 선택을 위젯 대신 이 구조체가 들고 있고,
//! 변환 버튼에 해당하는 [`ConverterForm::submit`]이 빈 입력 → 숫자 파싱 → 선택 누락 → 엔진
//! 순서로 검사한다.

use crate::category::Category;
use crate::conversion::{self, ConversionError, ConversionRequest, Converted};
use crate::units::{Unit, UnitPair};

/// 입력 단계 오류. `Display` 문자열이 그대로 결과 영역에 표시된다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a value to convert.")]
    EmptyInput,
    #[error("Invalid input. Please enter a valid number.")]
    ParseError,
    #[error("Please select conversion type and units.")]
    MissingSelection,
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// 변환 화면의 상태.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConverterForm {
    input: String,
    category: Option<Category>,
    unit_from: Option<Unit>,
    unit_to: Option<Unit>,
}

impl ConverterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn unit_from(&self) -> Option<Unit> {
        self.unit_from
    }

    pub fn unit_to(&self) -> Option<Unit> {
        self.unit_to
    }

    /// 카테고리를 바꾸면 단위 목록이 새로 채워지므로 기존 단위 선택은 지운다.
    pub fn select_category(&mut self, category: Category) {
        if self.category != Some(category) {
            self.unit_from = None;
            self.unit_to = None;
        }
        self.category = Some(category);
    }

    pub fn select_from(&mut self, unit: Unit) {
        self.unit_from = Some(unit);
    }

    pub fn select_to(&mut self, unit: Unit) {
        self.unit_to = Some(unit);
    }

    /// 현재 카테고리의 "From" 목록. 카테고리 미선택 시 빈 목록.
    pub fn from_choices(&self) -> &'static [Unit] {
        self.category.map(Category::source_units).unwrap_or(&[])
    }

    /// 현재 카테고리의 "To" 목록. 카테고리 미선택 시 빈 목록.
    pub fn to_choices(&self) -> &'static [Unit] {
        self.category.map(Category::destination_units).unwrap_or(&[])
    }

    /// 현재 상태로 변환 요청을 만든다.
    pub fn request(&self) -> Result<ConversionRequest, FormError> {
        let value = parse_value(&self.input)?;
        match (self.category, self.unit_from, self.unit_to) {
            (Some(category), Some(from), Some(to)) => Ok(ConversionRequest::new(
                category,
                UnitPair::new(from, to),
                value,
            )),
            _ => Err(FormError::MissingSelection),
        }
    }

    pub fn submit(&self) -> Result<Converted, FormError> {
        let request = self.request()?;
        Ok(conversion::convert_request(&request)?)
    }

    /// 결과 영역에 표시할 문장. 성공이든 오류든 문자열 하나로 돌려준다.
    pub fn result_text(&self) -> String {
        match self.submit() {
            Ok(converted) => converted.to_string(),
            Err(err) => err.to_string(),
        }
    }
}

/// 입력 문자열을 숫자로 해석한다.
///
/// 완전히 빈 문자열만 [`FormError::EmptyInput`]이고, 공백만 있는 문자열은 앞뒤 공백 제거 후
/// 파싱에 실패하므로 [`FormError::ParseError`]가 된다. NaN/무한대는 거부한다.
pub fn parse_value(text: &str) -> Result<f64, FormError> {
    if text.is_empty() {
        return Err(FormError::EmptyInput);
    }
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormError::ParseError),
    }
}
