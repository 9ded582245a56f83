use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::units::{AreaUnit, TemperatureUnit, TimeUnit, Unit};

/// 변환 카테고리를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Temperature,
    Area,
    Time,
}

/// 카테고리 이름이 목록에 없을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conversion type: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// 선택 목록에 나타나는 순서 그대로.
    pub const ALL: [Category; 3] = [Category::Temperature, Category::Area, Category::Time];

    pub fn name(self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Time => "Time",
        }
    }

    pub fn labels() -> [&'static str; 3] {
        Self::ALL.map(Category::name)
    }

    /// "From" 목록에 올라가는 단위들.
    pub fn source_units(self) -> &'static [Unit] {
        match self {
            Category::Temperature => &[
                Unit::Temperature(TemperatureUnit::Fahrenheit),
                Unit::Temperature(TemperatureUnit::Celsius),
            ],
            Category::Area => &[Unit::Area(AreaUnit::SquareFeet)],
            Category::Time => &[Unit::Time(TimeUnit::Seconds)],
        }
    }

    /// "To" 목록에 올라가는 단위들.
    pub fn destination_units(self) -> &'static [Unit] {
        match self {
            Category::Temperature => &[
                Unit::Temperature(TemperatureUnit::Fahrenheit),
                Unit::Temperature(TemperatureUnit::Celsius),
            ],
            Category::Area => &[
                Unit::Area(AreaUnit::SquareMeters),
                Unit::Area(AreaUnit::SquareYards),
                Unit::Area(AreaUnit::SquareAcres),
            ],
            Category::Time => &[
                Unit::Time(TimeUnit::Minutes),
                Unit::Time(TimeUnit::Hours),
                Unit::Time(TimeUnit::Days),
            ],
        }
    }

    pub fn from_units(self) -> Vec<&'static str> {
        self.source_units().iter().map(|u| u.label()).collect()
    }

    pub fn to_units(self) -> Vec<&'static str> {
        self.destination_units().iter().map(|u| u.label()).collect()
    }

    /// 명령행 입력용. 대소문자를 무시하고 `temp`, `a` 같은 약어를 허용한다.
    pub fn parse_alias(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" => Some(Category::Temperature),
            "area" | "a" => Some(Category::Area),
            "time" => Some(Category::Time),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// 정확한 이름만 허용한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
