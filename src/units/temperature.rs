use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius];

    /// 화면에 표시되는 단위 이름.
    pub fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Celsius => "Celsius",
        }
    }

    /// 단위 이름을 정확히 일치하는 경우에만 해석한다.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }

    /// 결과 문장에 쓰이는 소문자 표현.
    pub fn phrase(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "degrees Fahrenheit",
            TemperatureUnit::Celsius => "degrees Celsius",
        }
    }

    pub(crate) fn from_alias(s: &str) -> Option<Self> {
        match s {
            "f" | "°f" | "degf" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "c" | "°c" | "degc" | "celsius" => Some(TemperatureUnit::Celsius),
            _ => None,
        }
    }
}

/// 화씨를 섭씨로 변환한다.
pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * 5.0 / 9.0
}

/// 섭씨를 화씨로 변환한다.
pub fn celsius_to_fahrenheit(value: f64) -> f64 {
    (value * 9.0 / 5.0) + 32.0
}
