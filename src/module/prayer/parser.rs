///! Prayer times table parser
///!
///! Walks the najaf.org prayer page markup as a stream of open/close/text
///! events and rebuilds the times table row by row, then maps each row
///! into a [`PrayerRecord`] by column position.

use ego_tree::iter::Edge;
use scraper::{Html, Node};
use tracing::warn;

use super::types::PrayerRecord;

/// Rows narrower than this are layout noise, not prayer times.
const MIN_COLUMNS: usize = 8;

/// Tag-level state machine that rebuilds table rows from markup events.
///
/// Only `table`/`tr`/`td` affect state. Nesting depth is not tracked; a
/// closing tag simply clears its flag.
#[derive(Debug, Default)]
struct RowCollector {
    in_table: bool,
    in_row: bool,
    in_cell: bool,
    current_row: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RowCollector {
    fn open_tag(&mut self, name: &str) {
        match name {
            "table" => self.in_table = true,
            "tr" if self.in_table => {
                self.in_row = true;
                self.current_row.clear();
            }
            "td" if self.in_row => {
                self.in_cell = true;
                // one entry per cell, even if the cell never yields text
                self.current_row.push(String::new());
            }
            _ => {}
        }
    }

    fn close_tag(&mut self, name: &str) {
        match name {
            "table" => self.in_table = false,
            "tr" => {
                if self.in_row && self.current_row.len() >= MIN_COLUMNS {
                    self.rows.push(std::mem::take(&mut self.current_row));
                }
                self.in_row = false;
            }
            "td" => self.in_cell = false,
            _ => {}
        }
    }

    fn text(&mut self, data: &str) {
        if self.in_cell {
            if let Some(cell) = self.current_row.last_mut() {
                // a cell split across several text nodes concatenates in
                // document order, each fragment trimmed on its own
                cell.push_str(data.trim());
            }
        }
    }
}

/// Extract every table row with at least 8 cells from the page, as trimmed
/// cell texts in document order. Narrower rows are dropped silently.
pub fn extract_rows(html: &str) -> Vec<Vec<String>> {
    let document = Html::parse_document(html);

    let mut collector = RowCollector::default();
    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) => collector.open_tag(element.name()),
                Node::Text(text) => collector.text(text),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    collector.close_tag(element.name());
                }
            }
        }
    }

    collector.rows
}

/// Map one extracted row into a [`PrayerRecord`] by column position.
///
/// The day number lives in column index 7; indexes 0-6 run from midnight
/// backwards to imsaak. Columns beyond index 7 are ignored. Returns `None`
/// when the day column is not a plain integer, so callers skip the row.
pub fn to_record(row: &[String]) -> Option<PrayerRecord> {
    if row.len() < MIN_COLUMNS {
        return None;
    }

    let day: u32 = match row[7].parse() {
        Ok(day) => day,
        Err(_) => {
            warn!("Skipping row with non-numeric day column: {:?}", row[7]);
            return None;
        }
    };

    Some(PrayerRecord {
        day,
        midnight: row[0].clone(),
        maghrib: row[1].clone(),
        sunset: row[2].clone(),
        dhuhr: row[3].clone(),
        sunrise: row[4].clone(),
        fajr: row[5].clone(),
        imsaak: row[6].clone(),
    })
}
