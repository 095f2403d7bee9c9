use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// How `date` is written in the JSON output.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum DateFormat {
    /// Unix seconds at UTC midnight.
    #[default]
    Epoch,
    /// `dd-mm-yyyy`
    Calendar,
}

/// The four meals served on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub supper: String,
}

impl DayRecord {
    pub fn epoch_seconds(&self) -> i64 {
        self.date.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    pub fn formatted(&self, format: DateFormat) -> FormattedDay<'_> {
        let date = match format {
            DateFormat::Epoch => DateValue::Epoch(self.epoch_seconds()),
            DateFormat::Calendar => DateValue::Calendar(self.date.format("%d-%m-%Y").to_string()),
        };
        FormattedDay {
            date,
            breakfast: &self.breakfast,
            lunch: &self.lunch,
            dinner: &self.dinner,
            supper: &self.supper,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DateValue {
    Epoch(i64),
    Calendar(String),
}

/// Serialized shape of a `DayRecord`.
#[derive(Debug, Serialize)]
pub struct FormattedDay<'a> {
    date: DateValue,
    breakfast: &'a str,
    lunch: &'a str,
    dinner: &'a str,
    supper: &'a str,
}
