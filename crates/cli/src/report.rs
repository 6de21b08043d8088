//! Day-by-day rendering.

use serde::Serialize;

use gilded_rose_inventory::Item;

pub const HEADER: &str = "name, sellIn, quality";

/// One day's block: banner, header, one line per item, blank line.
pub fn render_text(day: u64, items: &[Item]) -> String {
    let mut out = format!("-------- day {day} --------\n{HEADER}\n");
    for item in items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}

#[derive(Serialize)]
struct DayReport<'a> {
    day: u64,
    items: &'a [Item],
}

/// One day as a single JSON line.
pub fn render_json(day: u64, items: &[Item]) -> serde_json::Result<String> {
    serde_json::to_string(&DayReport { day, items })
}
