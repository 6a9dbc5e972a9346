///! Najaf.org prayer times module
///!
///! Fetches the monthly prayer times page for Oxford, rebuilds the times
///! table from markup events, and serves the result either as an
///! on-demand "today" lookup or as a full-month snapshot file.

pub mod lookup;
pub mod parser;
pub mod scraper;
pub mod snapshot;
pub mod types;
pub mod updater;

pub use types::{MonthSnapshot, PrayerRecord};
pub use updater::SnapshotUpdater;
