//! Shared helpers for the demo binary that don't belong in any of the library crates.

use log::LevelFilter;
use simple_logger::SimpleLogger;


/// Initialize logging. By default, uses [info-level][LevelFilter::Info] logging. Change this with `RUST_LOG`.
pub fn init_logger() {
    SimpleLogger::new()
        .with_colors(true)
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .unwrap();
}
