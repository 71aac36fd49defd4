//! In-memory SQLite layer for hotel bookings.
//!
//! Typed [`BookingRecord`](hbd_core::BookingRecord)s are inserted once into a
//! `bookings` table. Every dashboard query takes a
//! [`HotelSelection`](hbd_core::HotelSelection) and becomes a
//! `WHERE hotel IN (…)` clause, so the filter and all keyed aggregates run
//! as SQL. Results come back as serializable structs from [`models`].
//!
//! - `Rc<RefCell<Connection>>` wrapper for single-threaded use (WASM and CLI)
//! - In-memory SQLite via `rusqlite`
//! - Quartiles and correlation stay in Rust, after the query
//!
//! ```rust
//! use hbd_core::{BookingRecord, HotelSelection, Month};
//! use hbd_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_bookings(&[
//!     BookingRecord::new("Resort Hotel", false, 10, 100.0, Month::January),
//!     BookingRecord::new("City Hotel", true, 20, 150.0, Month::January),
//! ])
//! .unwrap();
//!
//! let totals = db.query_kpi_totals(&HotelSelection::new(["City Hotel"])).unwrap();
//! assert_eq!(totals.bookings, 1);
//! assert_eq!(totals.cancellation_rate, Some(100.0));
//! ```

mod loader;
pub mod models;
mod queries;
pub mod schema;

use rusqlite::Connection;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// In-memory SQLite database holding one bookings table.
///
/// Cheap to clone (via `Rc`); clones share the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create an empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}
