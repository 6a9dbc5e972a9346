///! Prayer times data types

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One calendar day's prayer times, column-mapped from the source table.
/// Time values are opaque display strings taken verbatim from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerRecord {
    /// Day of month (1-31)
    pub day: u32,
    pub midnight: String,
    pub maghrib: String,
    pub sunset: String,
    pub dhuhr: String,
    pub sunrise: String,
    pub fajr: String,
    pub imsaak: String,
}

/// A full month of prayer times, regenerated from scratch on every scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSnapshot {
    /// Full month name, e.g. "June"
    pub month: String,
    pub year: i32,
    /// When this snapshot was generated
    pub last_updated: DateTime<Local>,
    /// Day of month → record, ascending day order when serialized
    pub prayer_times: BTreeMap<u32, PrayerRecord>,
}

/// JSON body served by the on-demand lookup: either today's times or an
/// error message, never a process fault.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Found(TodayTimes),
    Error { error: String },
}

/// Today's times plus the echoed human-readable date. Field order matches
/// the served JSON; `day` itself is not part of the response.
#[derive(Debug, Clone, Serialize)]
pub struct TodayTimes {
    pub imsaak: String,
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub sunset: String,
    pub maghrib: String,
    pub midnight: String,
    pub date: String,
}

impl TodayTimes {
    pub fn from_record(record: PrayerRecord, date: String) -> Self {
        Self {
            imsaak: record.imsaak,
            fajr: record.fajr,
            sunrise: record.sunrise,
            dhuhr: record.dhuhr,
            sunset: record.sunset,
            maghrib: record.maghrib,
            midnight: record.midnight,
            date,
        }
    }
}
