use crate::month::Month;
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Columns the loader requires in the CSV header.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "hotel",
    "is_canceled",
    "lead_time",
    "adr",
    "arrival_date_month",
    "country",
    "reserved_room_type",
    "market_segment",
];

/// Cell contents treated as a missing value, matching the usual
/// spreadsheet/dataframe NA markers.
pub const MISSING_MARKERS: [&str; 14] = [
    "", "NA", "N/A", "n/a", "NULL", "null", "NaN", "nan", "-NaN", "-nan", "#N/A", "#NA",
    "<NA>", "None",
];

/// Whether a raw CSV cell holds a missing value.
pub fn is_missing_value(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw.trim())
}

/// A single hotel booking.
///
/// Only the columns the dashboard reads by name are typed here; every
/// other numeric column is kept by the table loader for the correlation
/// matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub hotel: String,
    /// Stored as 0/1 in the CSV
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_canceled: bool,
    /// Days between booking and arrival
    pub lead_time: u32,
    /// Average daily rate. Zero and negative rates are kept as-is.
    pub adr: f64,
    pub arrival_date_month: Month,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub arrival_date_year: Option<i32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub arrival_date_day_of_month: Option<u32>,
    #[serde(deserialize_with = "deserialize_missing_as_none")]
    pub country: Option<String>,
    pub reserved_room_type: String,
    pub market_segment: String,
}

impl BookingRecord {
    /// Build a record with the columns the dashboard aggregates over.
    /// Optional columns start empty.
    pub fn new(
        hotel: &str,
        is_canceled: bool,
        lead_time: u32,
        adr: f64,
        arrival_date_month: Month,
    ) -> Self {
        Self {
            hotel: hotel.to_string(),
            is_canceled,
            lead_time,
            adr,
            arrival_date_month,
            arrival_date_year: None,
            arrival_date_day_of_month: None,
            country: None,
            reserved_room_type: String::new(),
            market_segment: String::new(),
        }
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_room_type(mut self, room_type: &str) -> Self {
        self.reserved_room_type = room_type.to_string();
        self
    }

    pub fn with_market_segment(mut self, segment: &str) -> Self {
        self.market_segment = segment.to_string();
        self
    }

    pub fn with_arrival_day(mut self, year: i32, day_of_month: u32) -> Self {
        self.arrival_date_year = Some(year);
        self.arrival_date_day_of_month = Some(day_of_month);
        self
    }

    /// Cancellation flag as a number, for averaging.
    pub fn canceled_value(&self) -> f64 {
        if self.is_canceled {
            1.0
        } else {
            0.0
        }
    }

    /// Full arrival date, when year and day columns are present and valid.
    pub fn arrival_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.arrival_date_year?,
            self.arrival_date_month.number(),
            self.arrival_date_day_of_month?,
        )
    }
}

fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "0" | "false" | "False" => Ok(false),
        "1" | "true" | "True" => Ok(true),
        other => other
            .parse::<f64>()
            .map(|v| v != 0.0)
            .map_err(|_| de::Error::custom(format!("invalid 0/1 flag: {:?}", other))),
    }
}

fn deserialize_missing_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if is_missing_value(&raw) {
        Ok(None)
    } else {
        Ok(Some(raw.trim().to_string()))
    }
}
