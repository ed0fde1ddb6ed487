use serde::{Deserialize, Serialize};
use tally_utils::iso_weekday_number;
use time::Date;

/// Expected-workload classification of a calendar date.
///
/// Pure function of the date's position in the week: the last ISO weekday
/// (Sunday) carries no expected work, the second-to-last (Saturday) a
/// reduced load, every other day the ordinary load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCategory {
    Ordinary,
    Reduced,
    Zero,
}

impl DayCategory {
    pub fn from_date(date: Date) -> Self {
        match iso_weekday_number(date) {
            7 => Self::Zero,
            6 => Self::Reduced,
            _ => Self::Ordinary,
        }
    }

    pub fn expected_hours(&self) -> f32 {
        match self {
            Self::Ordinary => 8.5,
            Self::Reduced => 4.0,
            Self::Zero => 0.0,
        }
    }
}
