//! Table rendering for the two reports.

use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;

use accesscount_core::date::ReportWindow;
use accesscount_core::tally::PvRow;

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table
}

/// Single-row table: one column per date plus a trailing average.
pub fn pv(window: &ReportWindow, row: &PvRow) -> Table {
    let mut header: Vec<String> = window.dates().iter().map(|d| d.display()).collect();
    header.push("average".to_string());

    let mut cells: Vec<String> = row.counts.iter().map(u64::to_string).collect();
    cells.push(row.average.to_string());

    let mut table = base_table();
    table.set_header(header);
    table.add_row(cells);
    table
}

/// Single-row table whose cells are nested per-day rankings.
pub fn endpoints(window: &ReportWindow, ranked: &[Vec<(String, u64)>]) -> Table {
    let header: Vec<String> = window.dates().iter().map(|d| d.display()).collect();

    let cells: Vec<String> = ranked
        .iter()
        .map(|rows| {
            let mut inner = base_table();
            inner.set_header(vec!["endpoint", "count"]);
            for (endpoint, count) in rows {
                inner.add_row(vec![endpoint.clone(), count.to_string()]);
            }
            inner.to_string()
        })
        .collect();

    let mut table = base_table();
    table.set_header(header);
    table.add_row(cells);
    table
}
