use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// 시간 단위. 입력은 초만 지원한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
            TimeUnit::Days => "Days",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }

    pub fn phrase(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }

    pub(crate) fn from_alias(s: &str) -> Option<Self> {
        match s {
            "s" | "sec" | "secs" | "second" | "seconds" => Some(TimeUnit::Seconds),
            "min" | "mins" | "minute" | "minutes" => Some(TimeUnit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Some(TimeUnit::Hours),
            "d" | "day" | "days" => Some(TimeUnit::Days),
            _ => None,
        }
    }
}

/// 초 값을 큰 단위 몫과 그 다음 단위의 나머지로 나눈 결과.
///
/// `quotient`는 내림하지 않은 실수 몫이고, `remainder`는 `%` 연산(피제수 부호)
/// 결과를 한 단계 작은 단위로 환산한 값이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSplit {
    pub quotient: f64,
    pub remainder: f64,
}

/// 초 → 분 + 남은 초
pub fn seconds_to_minutes(seconds: f64) -> TimeSplit {
    TimeSplit {
        quotient: seconds / SECONDS_PER_MINUTE,
        remainder: seconds % SECONDS_PER_MINUTE,
    }
}

/// 초 → 시간 + 남은 분
pub fn seconds_to_hours(seconds: f64) -> TimeSplit {
    TimeSplit {
        quotient: seconds / SECONDS_PER_HOUR,
        remainder: (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
    }
}

/// 초 → 일 + 남은 시간
pub fn seconds_to_days(seconds: f64) -> TimeSplit {
    TimeSplit {
        quotient: seconds / SECONDS_PER_DAY,
        remainder: (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
    }
}
