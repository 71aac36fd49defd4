//! SQL schema for the in-memory bookings database.

/// Returns the full SQL schema as a single batch string.
///
/// `bookings` holds one row per CSV record. `row_id` is the record's
/// 0-based position in the source file, so `ORDER BY row_id` restores file
/// order. `arrival_month` is 1 (January) to 12 (December); `country` is
/// NULL when the cell was missing.
pub fn create_schema() -> &'static str {
    "
    CREATE TABLE IF NOT EXISTS bookings (
        row_id             INTEGER PRIMARY KEY,
        hotel              TEXT    NOT NULL,
        is_canceled        INTEGER NOT NULL,
        lead_time          INTEGER NOT NULL,
        adr                REAL    NOT NULL,
        arrival_month      INTEGER NOT NULL,
        country            TEXT,
        reserved_room_type TEXT    NOT NULL,
        market_segment     TEXT    NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_bookings_hotel ON bookings(hotel);
    "
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_creates_bookings_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'bookings'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
