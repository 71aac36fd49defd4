//! Populating the bookings table from typed records.

use crate::Database;
use hbd_core::BookingRecord;
use rusqlite::params;

impl Database {
    /// Insert bookings in one transaction. `row_id` is each record's index
    /// in `records`.
    pub fn load_bookings(&self, records: &[BookingRecord]) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO bookings (row_id, hotel, is_canceled, lead_time, adr,
                     arrival_month, country, reserved_room_type, market_segment)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for (row_id, r) in records.iter().enumerate() {
                stmt.execute(params![
                    row_id as i64,
                    r.hotel,
                    r.is_canceled,
                    r.lead_time,
                    r.adr,
                    r.arrival_date_month.number(),
                    r.country,
                    r.reserved_room_type,
                    r.market_segment,
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[HBD] db: Loaded {} bookings", records.len());
        Ok(records.len())
    }
}
