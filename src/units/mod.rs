//! 카테고리별 단위 정의와 변환 공식 모음.

pub mod area;
pub mod temperature;
pub mod time;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

pub use area::AreaUnit;
pub use temperature::TemperatureUnit;
pub use time::{TimeSplit, TimeUnit};

/// 모든 카테고리의 단위를 하나로 묶은 태그 값.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Temperature(TemperatureUnit),
    Area(AreaUnit),
    Time(TimeUnit),
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Temperature(u) => u.label(),
            Unit::Area(u) => u.label(),
            Unit::Time(u) => u.label(),
        }
    }

    /// 결과 문장용 표현 (`degrees Celsius`, `square feet`, ...).
    pub fn phrase(self) -> &'static str {
        match self {
            Unit::Temperature(u) => u.phrase(),
            Unit::Area(u) => u.phrase(),
            Unit::Time(u) => u.phrase(),
        }
    }

    /// 이 단위가 속한 카테고리.
    pub fn category(self) -> Category {
        match self {
            Unit::Temperature(_) => Category::Temperature,
            Unit::Area(_) => Category::Area,
            Unit::Time(_) => Category::Time,
        }
    }

    /// 화면 표시 이름과 정확히 같은 문자열만 단위로 인정한다.
    pub fn from_label(label: &str) -> Option<Self> {
        TemperatureUnit::from_label(label)
            .map(Unit::Temperature)
            .or_else(|| AreaUnit::from_label(label).map(Unit::Area))
            .or_else(|| TimeUnit::from_label(label).map(Unit::Time))
    }

    /// 명령행 입력용 관대한 해석. 대소문자를 무시하고 `sqft`, `min` 같은 약어를 허용한다.
    ///
    /// 엔진 자체는 [`Unit::from_label`]의 정확한 이름만 받는다.
    pub fn parse_alias(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        TemperatureUnit::from_alias(&key)
            .map(Unit::Temperature)
            .or_else(|| AreaUnit::from_alias(&key).map(Unit::Area))
            .or_else(|| TimeUnit::from_alias(&key).map(Unit::Time))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 변환 요청의 (입력 단위, 출력 단위) 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitPair {
    pub source: Unit,
    pub destination: Unit,
}

impl UnitPair {
    pub fn new(source: Unit, destination: Unit) -> Self {
        Self {
            source,
            destination,
        }
    }
}
