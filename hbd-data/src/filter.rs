//! Hotel filter: the row subset every aggregate is computed from.

use crate::table::{BookingTable, NumericColumn};
use hbd_core::{DashboardError, HotelSelection};

/// Rows of a [`BookingTable`] whose hotel is in a [`HotelSelection`],
/// in original row order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    table: &'a BookingTable,
    selection: HotelSelection,
    rows: Vec<usize>,
}

impl BookingTable {
    /// Select the bookings of the chosen hotels.
    ///
    /// An empty selection, or one naming no hotel in the table, gives an
    /// empty view.
    pub fn filter(&self, selection: &HotelSelection) -> Result<FilteredView<'_>, DashboardError> {
        let rows = self
            .database()
            .query_selected_rows(selection)
            .map_err(query_failed)?;
        Ok(FilteredView {
            table: self,
            selection: selection.clone(),
            rows,
        })
    }
}

/// Map a database error onto the dashboard error type.
pub(crate) fn query_failed(e: anyhow::Error) -> DashboardError {
    DashboardError::Query(format!("{:#}", e))
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Guard run before any aggregate is computed.
    pub fn ensure_not_empty(&self) -> Result<(), DashboardError> {
        if self.rows.is_empty() {
            Err(DashboardError::EmptyFilterResult)
        } else {
            Ok(())
        }
    }

    pub fn table(&self) -> &'a BookingTable {
        self.table
    }

    pub fn selection(&self) -> &HotelSelection {
        &self.selection
    }

    /// Indices into the underlying table.
    pub fn row_indices(&self) -> &[usize] {
        &self.rows
    }

    /// Values of a numeric column restricted to the selected rows.
    pub fn column_values(&self, column: &NumericColumn) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|&idx| column.values.get(idx).copied().flatten())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbd_core::{BookingRecord, Month};

    fn sample_table() -> BookingTable {
        BookingTable::from_records(vec![
            BookingRecord::new("Resort Hotel", false, 10, 100.0, Month::January),
            BookingRecord::new("City Hotel", true, 20, 150.0, Month::January),
            BookingRecord::new("Resort Hotel", true, 5, 80.0, Month::February),
            BookingRecord::new("City Hotel", false, 40, 95.0, Month::March),
            BookingRecord::new("City Hotel", false, 1, 60.0, Month::March),
        ])
        .unwrap()
    }

    #[test]
    fn test_filter_keeps_only_selected_hotels_in_order() {
        let table = sample_table();
        let view = table.filter(&HotelSelection::new(["Resort Hotel"])).unwrap();
        assert_eq!(view.row_indices(), &[0, 2]);
        assert!(view
            .row_indices()
            .iter()
            .all(|&idx| table.records()[idx].hotel == "Resort Hotel"));
        assert!(view.selection().contains("Resort Hotel"));
    }

    #[test]
    fn test_filter_count_is_sum_of_per_hotel_counts() {
        let table = sample_table();
        let hotels = table.hotels();
        let both = table.filter(&HotelSelection::new(hotels.clone())).unwrap();

        let per_hotel: usize = hotels
            .iter()
            .map(|h| table.filter(&HotelSelection::new([h.as_str()])).unwrap().len())
            .sum();
        assert_eq!(both.len(), per_hotel);
        assert_eq!(both.len(), table.len());
    }

    #[test]
    fn test_empty_and_disjoint_selections() {
        let table = sample_table();

        let empty = table.filter(&HotelSelection::none()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(
            empty.ensure_not_empty(),
            Err(DashboardError::EmptyFilterResult)
        );

        let disjoint = table.filter(&HotelSelection::new(["Airport Hotel"])).unwrap();
        assert!(disjoint.is_empty());
    }

    #[test]
    fn test_column_values_follow_rows() {
        let table = sample_table();
        let view = table.filter(&HotelSelection::new(["City Hotel"])).unwrap();
        let lead_time = &table.numeric_columns()[1];
        assert_eq!(
            view.column_values(lead_time),
            vec![Some(20.0), Some(40.0), Some(1.0)]
        );
    }

    #[test]
    fn test_query_failure_keeps_context() {
        let err = query_failed(anyhow::anyhow!("no such table: bookings").context("selected rows"));
        assert_eq!(
            err,
            DashboardError::Query("selected rows: no such table: bookings".to_string())
        );
    }
}
