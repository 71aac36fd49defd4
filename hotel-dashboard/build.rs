//! Build script for hotel-dashboard.
//!
//! Copies the bookings CSV to OUT_DIR so it can be embedded via
//! `include_str!` at compile time. When the fixture is missing a
//! header-only placeholder is written, and the app shows its
//! no-data notice.

use std::env;
use std::fs;
use std::path::Path;

const BOOKINGS_HEADER: &str =
    "hotel,is_canceled,lead_time,adr,arrival_date_month,country,reserved_room_type,market_segment\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let src_path = "../fixtures/hotel_bookings.csv";
    let src = Path::new(src_path);
    let dest = Path::new(&out_dir).join("hotel_bookings.csv");

    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        fs::write(&dest, BOOKINGS_HEADER).unwrap();
        println!(
            "cargo:warning=Fixture file {} not found, using header-only placeholder",
            src_path
        );
    }

    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}
