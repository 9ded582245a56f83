use serde::{Deserialize, Serialize};

/// 1 ft² 당 m².
pub const SQUARE_METERS_PER_SQUARE_FOOT: f64 = 0.092903;
/// 1 yd² 당 ft².
pub const SQUARE_FEET_PER_SQUARE_YARD: f64 = 9.0;
/// 1 acre 당 ft².
pub const SQUARE_FEET_PER_ACRE: f64 = 43560.0;

/// 면적 단위. 입력은 제곱피트만 지원한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareFeet,
    SquareMeters,
    SquareYards,
    SquareAcres,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 4] = [
        AreaUnit::SquareFeet,
        AreaUnit::SquareMeters,
        AreaUnit::SquareYards,
        AreaUnit::SquareAcres,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "Square Feet",
            AreaUnit::SquareMeters => "Square Meters",
            AreaUnit::SquareYards => "Square Yards",
            AreaUnit::SquareAcres => "Square Acres",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }

    pub fn phrase(self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "square feet",
            AreaUnit::SquareMeters => "square meters",
            AreaUnit::SquareYards => "square yards",
            AreaUnit::SquareAcres => "square acres",
        }
    }

    pub(crate) fn from_alias(s: &str) -> Option<Self> {
        match s {
            "ft2" | "ft^2" | "sqft" | "square feet" => Some(AreaUnit::SquareFeet),
            "m2" | "m^2" | "sqm" | "square meters" => Some(AreaUnit::SquareMeters),
            "yd2" | "yd^2" | "sqyd" | "square yards" => Some(AreaUnit::SquareYards),
            "ac" | "acre" | "acres" | "square acres" => Some(AreaUnit::SquareAcres),
            _ => None,
        }
    }
}

pub fn square_feet_to_square_meters(value: f64) -> f64 {
    value * SQUARE_METERS_PER_SQUARE_FOOT
}

pub fn square_feet_to_square_yards(value: f64) -> f64 {
    value / SQUARE_FEET_PER_SQUARE_YARD
}

pub fn square_feet_to_acres(value: f64) -> f64 {
    value / SQUARE_FEET_PER_ACRE
}
