//! JSON payloads for each dashboard chart.
//!
//! Every builder returns the `(data, config)` pair passed to the matching
//! D3 render function in [`crate::js_bridge`].

use hbd_data::aggregates::{CategoryCount, CategoryMean};
use hbd_data::DashboardData;
use serde::Serialize;
use serde_json::json;

pub const MONTHLY_BOOKINGS_ID: &str = "monthly-bookings-chart";
pub const HOTEL_SHARE_ID: &str = "hotel-share-chart";
pub const TOP_COUNTRIES_ID: &str = "top-countries-chart";
pub const ADR_BY_HOTEL_ID: &str = "adr-by-hotel-chart";
pub const ADR_BY_ROOM_ID: &str = "adr-by-room-chart";
pub const MONTHLY_CANCELLATION_ID: &str = "monthly-cancellation-chart";
pub const SEGMENT_CANCELLATION_ID: &str = "segment-cancellation-chart";
pub const CORRELATION_ID: &str = "correlation-heatmap";

/// Serialized data and config for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPayload {
    pub data_json: String,
    pub config_json: String,
}

#[derive(Serialize)]
struct LabelValue<'a> {
    label: &'a str,
    value: f64,
}

fn payload<T: Serialize>(data: &T, config: serde_json::Value) -> ChartPayload {
    ChartPayload {
        data_json: serde_json::to_string(data).unwrap_or_else(|_| "[]".to_string()),
        config_json: config.to_string(),
    }
}

fn counts(rows: &[CategoryCount]) -> Vec<LabelValue<'_>> {
    rows.iter()
        .map(|r| LabelValue {
            label: &r.label,
            value: r.bookings as f64,
        })
        .collect()
}

fn means(rows: &[CategoryMean]) -> Vec<LabelValue<'_>> {
    rows.iter()
        .map(|r| LabelValue {
            label: &r.label,
            value: r.value,
        })
        .collect()
}

pub fn monthly_bookings(data: &DashboardData) -> ChartPayload {
    let points: Vec<LabelValue> = data
        .monthly_bookings
        .iter()
        .map(|m| LabelValue {
            label: m.month.name(),
            value: m.bookings as f64,
        })
        .collect();
    payload(
        &points,
        json!({
            "title": "\u{1F4C5} Monthly Booking Volume",
            "xAxisLabel": "Month",
            "yAxisLabel": "Bookings",
            "curve": "step",
            "color": "blue",
            "fill": "rgba(0, 123, 255, 0.3)",
        }),
    )
}

pub fn hotel_share(data: &DashboardData) -> ChartPayload {
    payload(
        &counts(&data.bookings_by_hotel),
        json!({
            "title": "\u{1F3E8} Booking Distribution by Hotel Type",
            "hole": 0.4,
        }),
    )
}

pub fn top_countries(data: &DashboardData) -> ChartPayload {
    payload(
        &counts(&data.top_countries),
        json!({
            "title": "\u{1F30F} Top 10 Countries by Bookings",
            "xAxisLabel": "Country",
            "yAxisLabel": "Bookings",
            "colorScale": "blues",
            "orientation": "vertical",
        }),
    )
}

pub fn adr_by_hotel(data: &DashboardData) -> ChartPayload {
    let groups: Vec<serde_json::Value> = data
        .adr_by_hotel
        .iter()
        .map(|h| json!({ "label": h.hotel, "values": h.values, "stats": h.stats }))
        .collect();
    payload(
        &groups,
        json!({
            "title": "\u{1F4B0} ADR Distribution by Hotel Type",
            "xAxisLabel": "Hotel Type",
            "yAxisLabel": "Average Daily Rate",
        }),
    )
}

pub fn adr_by_room(data: &DashboardData) -> ChartPayload {
    payload(
        &means(&data.adr_by_room_type),
        json!({
            "title": "\u{1F4B0} ADR by Room Type",
            "xAxisLabel": "Room Type",
            "yAxisLabel": "Average Daily Rate",
            "colorScale": "tealgrn",
            "orientation": "vertical",
            "decimals": 2,
        }),
    )
}

pub fn monthly_cancellation(data: &DashboardData) -> ChartPayload {
    let points: Vec<LabelValue> = data
        .monthly_cancellation_rate
        .iter()
        .map(|m| LabelValue {
            label: m.month.name(),
            value: m.rate,
        })
        .collect();
    payload(
        &points,
        json!({
            "title": "\u{1F4C9} Monthly Cancellation Rate",
            "xAxisLabel": "Month",
            "yAxisLabel": "Cancellation Rate (%)",
            "markers": true,
            "decimals": 1,
        }),
    )
}

pub fn segment_cancellation(data: &DashboardData) -> ChartPayload {
    payload(
        &means(&data.cancellation_by_segment),
        json!({
            "title": "\u{1F4CA} Cancellation Rate by Market Segment",
            "xAxisLabel": "Cancellation Rate (%)",
            "yAxisLabel": "Market Segment",
            "colorScale": "reds",
            "orientation": "horizontal",
            "decimals": 1,
        }),
    )
}

pub fn correlation(data: &DashboardData) -> ChartPayload {
    payload(
        &data.correlation,
        json!({
            "title": "Heatmap of Correlations",
            "decimals": 1,
            "height": 620,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbd_core::{BookingRecord, HotelSelection, Month};
    use hbd_data::BookingTable;
    use serde_json::Value;

    fn sample() -> DashboardData {
        let table = BookingTable::from_records(vec![
            BookingRecord::new("Resort Hotel", false, 10, 100.0, Month::March)
                .with_country("PRT")
                .with_room_type("A")
                .with_market_segment("Direct"),
            BookingRecord::new("City Hotel", true, 20, 150.0, Month::January)
                .with_country("GBR")
                .with_room_type("D")
                .with_market_segment("Groups"),
            BookingRecord::new("City Hotel", false, 5, 80.0, Month::January)
                .with_country("GBR")
                .with_room_type("A")
                .with_market_segment("Groups"),
        ])
        .unwrap();
        DashboardData::build(&table, &HotelSelection::new(table.hotels())).unwrap()
    }

    fn parse(p: &ChartPayload) -> (Value, Value) {
        (
            serde_json::from_str(&p.data_json).unwrap(),
            serde_json::from_str(&p.config_json).unwrap(),
        )
    }

    #[test]
    fn test_monthly_bookings_payload_in_calendar_order() {
        let (data, config) = parse(&monthly_bookings(&sample()));
        assert_eq!(data.as_array().unwrap().len(), 12);
        assert_eq!(data[0]["label"], "January");
        assert_eq!(data[0]["value"], 2.0);
        assert_eq!(data[2]["label"], "March");
        assert_eq!(config["curve"], "step");
    }

    #[test]
    fn test_segment_payload_is_horizontal() {
        let (data, config) = parse(&segment_cancellation(&sample()));
        assert_eq!(config["orientation"], "horizontal");
        assert_eq!(data[0]["label"], "Groups");
        assert_eq!(data[0]["value"], 50.0);
    }

    #[test]
    fn test_box_plot_payload_carries_stats() {
        let (data, _) = parse(&adr_by_hotel(&sample()));
        assert_eq!(data[0]["label"], "Resort Hotel");
        assert_eq!(data[1]["values"].as_array().unwrap().len(), 2);
        assert_eq!(data[1]["stats"]["median"], 115.0);
    }

    #[test]
    fn test_heatmap_payload() {
        let (data, config) = parse(&correlation(&sample()));
        assert_eq!(data["columns"][0], "is_canceled");
        assert_eq!(data["values"][0][0], 1.0);
        assert_eq!(config["decimals"], 1);
    }

    #[test]
    fn test_count_payloads() {
        let sample = sample();
        let (hotels, config) = parse(&hotel_share(&sample));
        assert_eq!(hotels[0]["label"], "City Hotel");
        assert_eq!(config["hole"], 0.4);

        let (countries, _) = parse(&top_countries(&sample));
        assert_eq!(countries[0]["label"], "GBR");

        let (rooms, _) = parse(&adr_by_room(&sample));
        assert_eq!(rooms[0]["label"], "D");

        let (rates, _) = parse(&monthly_cancellation(&sample));
        assert_eq!(rates.as_array().unwrap().len(), 2);
    }
}
