//! Typed queries over the bookings table.
//!
//! Every query is restricted to a [`HotelSelection`] through
//! `WHERE hotel IN (?1, ?2, …)`, one bound parameter per selected hotel.
//! Descending orderings break ties by label so results are deterministic.

use crate::models::{CategoryCount, CategoryMean, HotelValues, KpiTotals, MonthCount, MonthRate};
use crate::Database;
use hbd_core::{HotelSelection, Month};
use rusqlite::params_from_iter;

/// SQL condition matching the selected hotels. An empty selection matches
/// nothing.
fn hotel_clause(selection: &HotelSelection) -> String {
    if selection.is_empty() {
        return "0".to_string();
    }
    let placeholders: Vec<String> = (1..=selection.len()).map(|i| format!("?{}", i)).collect();
    format!("hotel IN ({})", placeholders.join(", "))
}

impl Database {
    /// Positions (`row_id`) of the selected bookings, in file order.
    pub fn query_selected_rows(&self, selection: &HotelSelection) -> anyhow::Result<Vec<usize>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT row_id FROM bookings WHERE {} ORDER BY row_id",
            hotel_clause(selection)
        ))?;
        let rows = stmt
            .query_map(params_from_iter(selection.iter()), |row| {
                row.get::<_, i64>(0).map(|id| id as usize)
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[HBD] query: query_selected_rows returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Booking count plus the three KPI averages.
    pub fn query_kpi_totals(&self, selection: &HotelSelection) -> anyhow::Result<KpiTotals> {
        let conn = self.conn.borrow();
        let totals = conn.query_row(
            &format!(
                "SELECT COUNT(*), AVG(is_canceled) * 100.0, AVG(lead_time), AVG(adr)
                 FROM bookings
                 WHERE {}",
                hotel_clause(selection)
            ),
            params_from_iter(selection.iter()),
            |row| {
                Ok(KpiTotals {
                    bookings: row.get::<_, i64>(0)? as usize,
                    cancellation_rate: row.get(1)?,
                    avg_lead_time: row.get(2)?,
                    avg_daily_rate: row.get(3)?,
                })
            },
        )?;
        Ok(totals)
    }

    /// Bookings per arrival month, all twelve months in calendar order.
    ///
    /// Months absent from the selection are filled in with zero.
    pub fn query_monthly_bookings(
        &self,
        selection: &HotelSelection,
    ) -> anyhow::Result<Vec<MonthCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT arrival_month, COUNT(*)
             FROM bookings
             WHERE {}
             GROUP BY arrival_month",
            hotel_clause(selection)
        ))?;
        let grouped = stmt
            .query_map(params_from_iter(selection.iter()), |row| {
                Ok((row.get::<_, u32>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut counts = [0usize; 12];
        for (month, bookings) in grouped {
            if let Some(month) = Month::from_number(month) {
                counts[month.number() as usize - 1] = bookings as usize;
            }
        }
        Ok(Month::ALL
            .iter()
            .zip(counts)
            .map(|(&month, bookings)| MonthCount { month, bookings })
            .collect())
    }

    /// Bookings per hotel, most booked first.
    pub fn query_bookings_by_hotel(
        &self,
        selection: &HotelSelection,
    ) -> anyhow::Result<Vec<CategoryCount>> {
        self.query_counts(
            &format!(
                "SELECT hotel AS label, COUNT(*) AS bookings
                 FROM bookings
                 WHERE {}
                 GROUP BY hotel
                 ORDER BY bookings DESC, label",
                hotel_clause(selection)
            ),
            selection,
        )
    }

    /// The `limit` most frequent countries. Bookings without a country are
    /// not counted.
    pub fn query_top_countries(
        &self,
        selection: &HotelSelection,
        limit: usize,
    ) -> anyhow::Result<Vec<CategoryCount>> {
        self.query_counts(
            &format!(
                "SELECT country AS label, COUNT(*) AS bookings
                 FROM bookings
                 WHERE {} AND country IS NOT NULL
                 GROUP BY country
                 ORDER BY bookings DESC, label
                 LIMIT {}",
                hotel_clause(selection),
                limit
            ),
            selection,
        )
    }

    /// ADR values grouped per hotel, hotels in order of first appearance.
    pub fn query_adr_by_hotel(
        &self,
        selection: &HotelSelection,
    ) -> anyhow::Result<Vec<HotelValues>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT hotel, adr FROM bookings WHERE {} ORDER BY row_id",
            hotel_clause(selection)
        ))?;
        let rows = stmt
            .query_map(params_from_iter(selection.iter()), |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut groups: Vec<HotelValues> = Vec::new();
        for (hotel, adr) in rows {
            match groups.iter_mut().find(|g| g.hotel == hotel) {
                Some(group) => group.values.push(adr),
                None => groups.push(HotelValues {
                    hotel,
                    values: vec![adr],
                }),
            }
        }
        Ok(groups)
    }

    /// Mean ADR per reserved room type, highest first.
    pub fn query_adr_by_room_type(
        &self,
        selection: &HotelSelection,
    ) -> anyhow::Result<Vec<CategoryMean>> {
        self.query_means(
            &format!(
                "SELECT reserved_room_type AS label, AVG(adr) AS value
                 FROM bookings
                 WHERE {}
                 GROUP BY reserved_room_type
                 ORDER BY value DESC, label",
                hotel_clause(selection)
            ),
            selection,
        )
    }

    /// Cancellation rate per arrival month, calendar order. Only months
    /// with bookings appear.
    pub fn query_monthly_cancellation_rate(
        &self,
        selection: &HotelSelection,
    ) -> anyhow::Result<Vec<MonthRate>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT arrival_month, AVG(is_canceled) * 100.0
             FROM bookings
             WHERE {}
             GROUP BY arrival_month
             ORDER BY arrival_month",
            hotel_clause(selection)
        ))?;
        let rows = stmt
            .query_map(params_from_iter(selection.iter()), |row| {
                Ok((row.get::<_, u32>(0)?, row.get::<_, f64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows
            .into_iter()
            .filter_map(|(month, rate)| {
                Month::from_number(month).map(|month| MonthRate { month, rate })
            })
            .collect())
    }

    /// Cancellation rate per market segment, highest first.
    pub fn query_cancellation_by_market_segment(
        &self,
        selection: &HotelSelection,
    ) -> anyhow::Result<Vec<CategoryMean>> {
        self.query_means(
            &format!(
                "SELECT market_segment AS label, AVG(is_canceled) * 100.0 AS value
                 FROM bookings
                 WHERE {}
                 GROUP BY market_segment
                 ORDER BY value DESC, label",
                hotel_clause(selection)
            ),
            selection,
        )
    }

    fn query_counts(
        &self,
        sql: &str,
        selection: &HotelSelection,
    ) -> anyhow::Result<Vec<CategoryCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params_from_iter(selection.iter()), |row| {
                Ok(CategoryCount {
                    label: row.get(0)?,
                    bookings: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn query_means(
        &self,
        sql: &str,
        selection: &HotelSelection,
    ) -> anyhow::Result<Vec<CategoryMean>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params_from_iter(selection.iter()), |row| {
                Ok(CategoryMean {
                    label: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbd_core::BookingRecord;

    fn booking(hotel: &str, canceled: bool, adr: f64, month: Month) -> BookingRecord {
        BookingRecord::new(hotel, canceled, 0, adr, month)
    }

    fn db_with(records: &[BookingRecord]) -> Database {
        let db = Database::new().unwrap();
        db.load_bookings(records).unwrap();
        db
    }

    fn everyone(records: &[BookingRecord]) -> HotelSelection {
        records.iter().map(|r| r.hotel.clone()).collect()
    }

    #[test]
    fn test_hotel_clause() {
        assert_eq!(hotel_clause(&HotelSelection::none()), "0");
        assert_eq!(
            hotel_clause(&HotelSelection::new(["A", "B"])),
            "hotel IN (?1, ?2)"
        );
    }

    #[test]
    fn test_selected_rows_in_file_order() {
        let records = [
            booking("Resort Hotel", false, 1.0, Month::May),
            booking("City Hotel", false, 1.0, Month::May),
            booking("Resort Hotel", false, 1.0, Month::May),
        ];
        let db = db_with(&records);
        assert_eq!(
            db.query_selected_rows(&HotelSelection::new(["Resort Hotel"])).unwrap(),
            vec![0, 2]
        );
        assert!(db.query_selected_rows(&HotelSelection::none()).unwrap().is_empty());
        assert!(db
            .query_selected_rows(&HotelSelection::new(["Airport Hotel"]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_kpi_totals() {
        let records = [
            BookingRecord::new("Resort Hotel", false, 10, 100.0, Month::January),
            BookingRecord::new("City Hotel", true, 20, 150.0, Month::January),
            BookingRecord::new("Resort Hotel", true, 5, 80.0, Month::February),
        ];
        let db = db_with(&records);
        let totals = db
            .query_kpi_totals(&HotelSelection::new(["Resort Hotel"]))
            .unwrap();
        assert_eq!(
            totals,
            KpiTotals {
                bookings: 2,
                cancellation_rate: Some(50.0),
                avg_lead_time: Some(7.5),
                avg_daily_rate: Some(90.0),
            }
        );

        let none = db.query_kpi_totals(&HotelSelection::none()).unwrap();
        assert_eq!(none.bookings, 0);
        assert_eq!(none.cancellation_rate, None);
    }

    #[test]
    fn test_monthly_bookings_zero_filled() {
        let records = [
            booking("City Hotel", false, 1.0, Month::March),
            booking("City Hotel", false, 1.0, Month::January),
            booking("City Hotel", false, 1.0, Month::January),
        ];
        let db = db_with(&records);
        let monthly = db.query_monthly_bookings(&everyone(&records)).unwrap();
        assert_eq!(monthly.len(), 12);
        assert_eq!(monthly[0].bookings, 2);
        assert_eq!(monthly[1].bookings, 0);
        assert_eq!(monthly[2].bookings, 1);
        assert_eq!(monthly[11].month, Month::December);
    }

    #[test]
    fn test_counts_break_ties_by_label() {
        let records = [
            booking("City Hotel", false, 1.0, Month::May).with_country("PRT"),
            booking("City Hotel", false, 1.0, Month::May).with_country("GBR"),
            booking("City Hotel", false, 1.0, Month::May).with_country("FRA"),
            booking("City Hotel", false, 1.0, Month::May).with_country("PRT"),
            booking("City Hotel", false, 1.0, Month::May),
        ];
        let db = db_with(&records);
        let top = db.query_top_countries(&everyone(&records), 2).unwrap();
        let labels: Vec<&str> = top.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["PRT", "FRA"]);
        assert_eq!(top[0].bookings, 2);
    }

    #[test]
    fn test_adr_grouped_by_first_appearance() {
        let records = [
            booking("Resort Hotel", false, 100.0, Month::May),
            booking("City Hotel", false, 150.0, Month::May),
            booking("Resort Hotel", false, -6.38, Month::May),
        ];
        let db = db_with(&records);
        let groups = db.query_adr_by_hotel(&everyone(&records)).unwrap();
        assert_eq!(groups[0].hotel, "Resort Hotel");
        assert_eq!(groups[0].values, vec![100.0, -6.38]);
        assert_eq!(groups[1].values, vec![150.0]);
    }

    #[test]
    fn test_rates_per_month_and_segment() {
        let records = [
            booking("City Hotel", true, 1.0, Month::December).with_market_segment("Groups"),
            booking("City Hotel", false, 1.0, Month::April).with_market_segment("Direct"),
            booking("City Hotel", true, 1.0, Month::April).with_market_segment("Groups"),
        ];
        let db = db_with(&records);
        let selection = everyone(&records);

        let monthly = db.query_monthly_cancellation_rate(&selection).unwrap();
        assert_eq!(
            monthly,
            vec![
                MonthRate {
                    month: Month::April,
                    rate: 50.0
                },
                MonthRate {
                    month: Month::December,
                    rate: 100.0
                },
            ]
        );

        let segments = db.query_cancellation_by_market_segment(&selection).unwrap();
        assert_eq!(segments[0].label, "Groups");
        assert_eq!(segments[0].value, 100.0);
        assert_eq!(segments[1].value, 0.0);
    }

    #[test]
    fn test_hotel_names_are_bound_not_interpolated() {
        let records = [booking("O'Hare Inn", false, 1.0, Month::May)];
        let db = db_with(&records);
        let rows = db
            .query_selected_rows(&HotelSelection::new(["O'Hare Inn"]))
            .unwrap();
        assert_eq!(rows, vec![0]);
    }
}
