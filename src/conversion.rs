//! 변환 엔진. 허용된 (카테고리, 단위 쌍) 목록을 표로 두고 해당 공식만 적용한다.
//!
//! 내부 상태가 없는 순수 함수 모음이므로 어느 스레드에서 호출해도 된다.

use std::fmt;

use crate::category::{Category, UnknownCategory};
use crate::units::{area, temperature, time, AreaUnit, TemperatureUnit, TimeUnit, Unit, UnitPair};

/// 변환 시 발생 가능한 오류. `Display` 문자열이 그대로 사용자에게 표시된다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// 카테고리에 허용되지 않은 단위 쌍
    #[error("Invalid {0} conversion.")]
    UnsupportedPair(Category),
    /// 알 수 없는 카테고리 문자열
    #[error("Invalid conversion type.")]
    UnknownCategory(#[from] UnknownCategory),
}

/// 한 번의 변환 요청. 호출마다 새로 만들어 값으로 넘긴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub category: Category,
    pub pair: UnitPair,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(category: Category, pair: UnitPair, value: f64) -> Self {
        Self {
            category,
            pair,
            value,
        }
    }
}

/// 허용된 변환 목록. 변형 하나가 (카테고리, 입력 단위, 출력 단위) 하나에 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    FahrenheitToCelsius,
    CelsiusToFahrenheit,
    SquareFeetToSquareMeters,
    SquareFeetToSquareYards,
    SquareFeetToSquareAcres,
    SecondsToMinutes,
    SecondsToHours,
    SecondsToDays,
}

impl Conversion {
    pub const ALL: [Conversion; 8] = [
        Conversion::FahrenheitToCelsius,
        Conversion::CelsiusToFahrenheit,
        Conversion::SquareFeetToSquareMeters,
        Conversion::SquareFeetToSquareYards,
        Conversion::SquareFeetToSquareAcres,
        Conversion::SecondsToMinutes,
        Conversion::SecondsToHours,
        Conversion::SecondsToDays,
    ];

    pub fn pair(self) -> UnitPair {
        use Unit::{Area, Temperature, Time};
        let (source, destination) = match self {
            Conversion::FahrenheitToCelsius => (
                Temperature(TemperatureUnit::Fahrenheit),
                Temperature(TemperatureUnit::Celsius),
            ),
            Conversion::CelsiusToFahrenheit => (
                Temperature(TemperatureUnit::Celsius),
                Temperature(TemperatureUnit::Fahrenheit),
            ),
            Conversion::SquareFeetToSquareMeters => {
                (Area(AreaUnit::SquareFeet), Area(AreaUnit::SquareMeters))
            }
            Conversion::SquareFeetToSquareYards => {
                (Area(AreaUnit::SquareFeet), Area(AreaUnit::SquareYards))
            }
            Conversion::SquareFeetToSquareAcres => {
                (Area(AreaUnit::SquareFeet), Area(AreaUnit::SquareAcres))
            }
            Conversion::SecondsToMinutes => (Time(TimeUnit::Seconds), Time(TimeUnit::Minutes)),
            Conversion::SecondsToHours => (Time(TimeUnit::Seconds), Time(TimeUnit::Hours)),
            Conversion::SecondsToDays => (Time(TimeUnit::Seconds), Time(TimeUnit::Days)),
        };
        UnitPair::new(source, destination)
    }

    pub fn category(self) -> Category {
        self.pair().source.category()
    }

    /// 시간 변환에서 나머지를 표시하는 단위. 다른 카테고리는 `None`.
    pub fn remainder_unit(self) -> Option<Unit> {
        match self {
            Conversion::SecondsToMinutes => Some(Unit::Time(TimeUnit::Seconds)),
            Conversion::SecondsToHours => Some(Unit::Time(TimeUnit::Minutes)),
            Conversion::SecondsToDays => Some(Unit::Time(TimeUnit::Hours)),
            _ => None,
        }
    }

    /// 카테고리와 단위 쌍으로 허용 목록을 조회한다.
    pub fn resolve(category: Category, pair: UnitPair) -> Result<Self, ConversionError> {
        match Self::ALL
            .into_iter()
            .find(|c| c.category() == category && c.pair() == pair)
        {
            Some(conversion) => Ok(conversion),
            None => {
                log::debug!(
                    "rejected {category} conversion {} -> {}",
                    pair.source,
                    pair.destination
                );
                Err(ConversionError::UnsupportedPair(category))
            }
        }
    }

    /// 공식을 적용한다. 시간 변환의 몫은 내림하지 않는다.
    pub fn apply(self, value: f64) -> Converted {
        let (result, remainder) = match self {
            Conversion::FahrenheitToCelsius => (temperature::fahrenheit_to_celsius(value), None),
            Conversion::CelsiusToFahrenheit => (temperature::celsius_to_fahrenheit(value), None),
            Conversion::SquareFeetToSquareMeters => {
                (area::square_feet_to_square_meters(value), None)
            }
            Conversion::SquareFeetToSquareYards => (area::square_feet_to_square_yards(value), None),
            Conversion::SquareFeetToSquareAcres => (area::square_feet_to_acres(value), None),
            Conversion::SecondsToMinutes => split(time::seconds_to_minutes(value)),
            Conversion::SecondsToHours => split(time::seconds_to_hours(value)),
            Conversion::SecondsToDays => split(time::seconds_to_days(value)),
        };
        Converted {
            conversion: self,
            value,
            result,
            remainder,
        }
    }
}

fn split(t: time::TimeSplit) -> (f64, Option<f64>) {
    (t.quotient, Some(t.remainder))
}

/// 변환 성공 결과. `Display`가 화면에 표시할 문장을 만든다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converted {
    pub conversion: Conversion,
    pub value: f64,
    pub result: f64,
    /// 시간 변환의 나머지 성분
    pub remainder: Option<f64>,
}

impl fmt::Display for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair = self.conversion.pair();
        let verb = match self.conversion.category() {
            Category::Temperature => "is",
            Category::Area | Category::Time => "is equal to",
        };
        write!(
            f,
            "{} {} {verb} {} {}",
            Number(self.value),
            pair.source.phrase(),
            Number(self.result),
            pair.destination.phrase()
        )?;
        if let (Some(rem), Some(unit)) = (self.remainder, self.conversion.remainder_unit()) {
            write!(f, " and {} {}", Number(rem), unit.phrase())?;
        }
        f.write_str(".")
    }
}

/// 결과 문장의 숫자 표기. 정수값도 `32.0`처럼 소수부를 남기는 최단 왕복 표현.
#[derive(Debug, Clone, Copy)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// 타입이 정해진 요청을 변환한다.
pub fn convert_request(request: &ConversionRequest) -> Result<Converted, ConversionError> {
    let conversion = Conversion::resolve(request.category, request.pair)?;
    let converted = conversion.apply(request.value);
    log::debug!("{conversion:?}: {} -> {}", request.value, converted.result);
    Ok(converted)
}

/// 화면 목록에서 넘어온 문자열 그대로 변환하고 표시용 문장을 돌려준다.
///
/// 카테고리 이름이 목록에 없으면 [`ConversionError::UnknownCategory`],
/// 단위 이름이 없거나 허용되지 않은 쌍이면 [`ConversionError::UnsupportedPair`]를 반환한다.
pub fn convert(
    category: &str,
    source_unit: &str,
    dest_unit: &str,
    value: f64,
) -> Result<String, ConversionError> {
    let category: Category = category.parse()?;
    let (Some(source), Some(destination)) =
        (Unit::from_label(source_unit), Unit::from_label(dest_unit))
    else {
        log::debug!("unknown unit label in {category} conversion: {source_unit:?} -> {dest_unit:?}");
        return Err(ConversionError::UnsupportedPair(category));
    };
    let request = ConversionRequest::new(category, UnitPair::new(source, destination), value);
    convert_request(&request).map(|c| c.to_string())
}
