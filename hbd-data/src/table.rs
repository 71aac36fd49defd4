//! The in-memory bookings table and its CSV loader.
//!
//! # CSV Format
//!
//! Headers are required. The columns read by name are listed in
//! [`hbd_core::booking::REQUIRED_COLUMNS`]; any other column is kept only
//! if it is numeric, for the correlation matrix.
//!
//! A column is numeric when every cell either parses as a number or is a
//! missing-value marker (empty, `NA`, `NULL`, ...). Missing cells become
//! `None`.
//!
//! ```text
//! hotel,is_canceled,lead_time,arrival_date_month,adr,country,...
//! Resort Hotel,0,342,July,0,PRT,...
//! ```

use chrono::NaiveDate;
use hbd_core::booking::{is_missing_value, REQUIRED_COLUMNS};
use hbd_core::{BookingRecord, DataLoadError};
use hbd_db::Database;
use std::fs::File;
use std::io;
use std::path::Path;

/// One numeric CSV column, aligned with the table's records.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// All bookings loaded from one CSV file.
///
/// Immutable after load. The typed records are also indexed in an in-memory
/// SQLite [`Database`] that runs the hotel filter and the keyed aggregates.
#[derive(Debug, Clone)]
pub struct BookingTable {
    records: Vec<BookingRecord>,
    numeric_columns: Vec<NumericColumn>,
    db: Database,
}

impl BookingTable {
    /// Load bookings from a CSV file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(io::BufReader::new(file))?;
        log::info!(
            "[HBD] loader: Loaded {} bookings from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Load bookings from CSV text, typically embedded with `include_str!`.
    pub fn from_csv_str(csv_data: &str) -> Result<Self, DataLoadError> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load bookings from any CSV source.
    ///
    /// Month names are trimmed while parsing. Every row must have the
    /// same number of fields as the header.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|source| DataLoadError::Parse {
                record: None,
                source,
            })?
            .clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataLoadError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        // None once a column has shown a non-numeric cell
        let mut columns: Vec<Option<Vec<Option<f64>>>> = vec![Some(Vec::new()); headers.len()];

        for (idx, result) in rdr.records().enumerate() {
            let row = idx as u64 + 1;
            let record = result.map_err(|source| DataLoadError::Parse {
                record: Some(row),
                source,
            })?;
            let booking: BookingRecord =
                record
                    .deserialize(Some(&headers))
                    .map_err(|source| DataLoadError::Parse {
                        record: Some(row),
                        source,
                    })?;

            for (cell, column) in record.iter().zip(columns.iter_mut()) {
                if let Some(values) = column {
                    match parse_numeric_cell(cell) {
                        Some(value) => values.push(value),
                        None => *column = None,
                    }
                }
            }
            records.push(booking);
        }

        let numeric_columns: Vec<NumericColumn> = headers
            .iter()
            .zip(columns)
            .filter_map(|(name, values)| {
                values.map(|values| NumericColumn {
                    name: name.to_string(),
                    values,
                })
            })
            .collect();

        log::debug!(
            "[HBD] loader: Parsed {} records, {} numeric columns",
            records.len(),
            numeric_columns.len()
        );

        Self::index(records, numeric_columns)
    }

    /// Build a table from typed records.
    ///
    /// The numeric columns are the typed ones: `is_canceled`, `lead_time`
    /// and `adr`.
    pub fn from_records(records: Vec<BookingRecord>) -> Result<Self, DataLoadError> {
        let numeric_columns = vec![
            NumericColumn {
                name: "is_canceled".to_string(),
                values: records.iter().map(|r| Some(r.canceled_value())).collect(),
            },
            NumericColumn {
                name: "lead_time".to_string(),
                values: records.iter().map(|r| Some(r.lead_time as f64)).collect(),
            },
            NumericColumn {
                name: "adr".to_string(),
                values: records.iter().map(|r| Some(r.adr)).collect(),
            },
        ];
        Self::index(records, numeric_columns)
    }

    fn index(
        records: Vec<BookingRecord>,
        numeric_columns: Vec<NumericColumn>,
    ) -> Result<Self, DataLoadError> {
        let db = Database::new().map_err(|e| DataLoadError::Database(e.to_string()))?;
        db.load_bookings(&records)
            .map_err(|e| DataLoadError::Database(e.to_string()))?;
        Ok(Self {
            records,
            numeric_columns,
            db,
        })
    }

    /// The query database holding this table's records.
    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn numeric_columns(&self) -> &[NumericColumn] {
        &self.numeric_columns
    }

    /// Distinct hotel names in order of first appearance.
    pub fn hotels(&self) -> Vec<String> {
        let mut hotels: Vec<String> = Vec::new();
        for record in &self.records {
            if !hotels.iter().any(|h| h == &record.hotel) {
                hotels.push(record.hotel.clone());
            }
        }
        hotels
    }

    /// Earliest and latest arrival dates among records that carry one.
    pub fn arrival_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(BookingRecord::arrival_date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }
}

/// `Some(None)` for a missing cell, `Some(Some(v))` for a number, `None`
/// when the cell is text.
fn parse_numeric_cell(cell: &str) -> Option<Option<f64>> {
    if is_missing_value(cell) {
        return Some(None);
    }
    cell.trim().parse::<f64>().ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbd_core::{HotelSelection, Month};

    const SAMPLE_CSV: &str = "\
hotel,is_canceled,lead_time,arrival_date_year,arrival_date_month,arrival_date_day_of_month,children,country,market_segment,reserved_room_type,agent,adr,reservation_status_date
Resort Hotel,0,342,2015, July,1,0,PRT,Direct,C,NULL,0,2015-07-01
City Hotel,1,88,2016,February ,12,NA,,Online TA,A,9,76.5,2016-01-03
Resort Hotel,1,7,2017,December,30,2,GBR,Groups,A,240,110.25,2017-11-28
";

    #[test]
    fn test_load_records_and_trim_months() {
        let table = BookingTable::from_csv_str(SAMPLE_CSV).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[0].arrival_date_month, Month::July);
        assert_eq!(table.records()[1].arrival_date_month, Month::February);
        assert_eq!(table.records()[1].country, None);
    }

    #[test]
    fn test_numeric_column_detection() {
        let table = BookingTable::from_csv_str(SAMPLE_CSV).unwrap();
        let names: Vec<&str> = table
            .numeric_columns()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "is_canceled",
                "lead_time",
                "arrival_date_year",
                "arrival_date_day_of_month",
                "children",
                "agent",
                "adr"
            ]
        );

        let children = &table.numeric_columns()[4];
        assert_eq!(children.values, vec![Some(0.0), None, Some(2.0)]);
        let agent = &table.numeric_columns()[5];
        assert_eq!(agent.values, vec![None, Some(9.0), Some(240.0)]);
    }

    #[test]
    fn test_hotels_in_first_appearance_order() {
        let table = BookingTable::from_csv_str(SAMPLE_CSV).unwrap();
        assert_eq!(table.hotels(), vec!["Resort Hotel", "City Hotel"]);
    }

    #[test]
    fn test_arrival_span() {
        let table = BookingTable::from_csv_str(SAMPLE_CSV).unwrap();
        let (first, last) = table.arrival_span().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2015, 7, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2017, 12, 30).unwrap());
    }

    #[test]
    fn test_missing_required_column() {
        let csv_data = "hotel,is_canceled,lead_time,arrival_date_month\nCity Hotel,0,1,May\n";
        let err = BookingTable::from_csv_str(csv_data).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("adr")));
    }

    #[test]
    fn test_bad_month_reports_record_number() {
        let csv_data = "\
hotel,is_canceled,lead_time,adr,arrival_date_month,country,reserved_room_type,market_segment
City Hotel,0,1,10,May,PRT,A,Direct
City Hotel,0,1,10,Maytember,PRT,A,Direct
";
        let err = BookingTable::from_csv_str(csv_data).unwrap_err();
        match err {
            DataLoadError::Parse { record, .. } => assert_eq!(record, Some(2)),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = BookingTable::from_path("no/such/bookings.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
    }

    #[test]
    fn test_header_only_csv_is_empty_table() {
        let csv_data =
            "hotel,is_canceled,lead_time,adr,arrival_date_month,country,reserved_room_type,market_segment\n";
        let table = BookingTable::from_csv_str(csv_data).unwrap();
        assert!(table.is_empty());
        assert!(table.hotels().is_empty());
        assert_eq!(table.arrival_span(), None);
    }

    #[test]
    fn test_from_records() {
        let table = BookingTable::from_records(vec![
            BookingRecord::new("City Hotel", true, 20, 150.0, Month::January),
            BookingRecord::new("Resort Hotel", false, 10, 100.0, Month::January),
        ])
        .unwrap();
        assert_eq!(table.numeric_columns().len(), 3);
        assert_eq!(table.numeric_columns()[0].values, vec![Some(1.0), Some(0.0)]);
        assert_eq!(table.numeric_columns()[2].values, vec![Some(150.0), Some(100.0)]);
    }

    #[test]
    fn test_records_are_indexed_for_queries() {
        let table = BookingTable::from_csv_str(SAMPLE_CSV).unwrap();
        let resort = table
            .database()
            .query_selected_rows(&HotelSelection::new(["Resort Hotel"]))
            .unwrap();
        assert_eq!(resort, vec![0, 2]);

        let totals = table
            .database()
            .query_kpi_totals(&HotelSelection::new(table.hotels()))
            .unwrap();
        assert_eq!(totals.bookings, table.len());
    }

    #[test]
    fn test_arrival_span_skips_records_without_a_day() {
        let table = BookingTable::from_records(vec![
            BookingRecord::new("City Hotel", false, 1, 80.0, Month::March).with_arrival_day(2016, 14),
            BookingRecord::new("City Hotel", false, 1, 80.0, Month::May),
            BookingRecord::new("City Hotel", false, 1, 80.0, Month::July).with_arrival_day(2015, 3),
            BookingRecord::new("City Hotel", false, 1, 80.0, Month::February)
                .with_arrival_day(2017, 30),
        ])
        .unwrap();
        assert_eq!(
            table.arrival_span(),
            Some((
                NaiveDate::from_ymd_opt(2015, 7, 3).unwrap(),
                NaiveDate::from_ymd_opt(2016, 3, 14).unwrap()
            ))
        );
    }
}
