use crate::table::TableStats;

// stdout carries the generated table, diagnostics go to stderr
pub fn print_debug(msg: impl AsRef<str>) {
    eprintln!("[DEBUG] {}", msg.as_ref());
}

pub fn print_table_stats(stats: &TableStats) -> String {
    format!(
        "lines: {}, matched: {}, filtered: {}, overwritten: {}, entries: {}",
        stats.lines,
        stats.matched,
        stats.filtered,
        stats.overwritten,
        stats.entries,
    )
}
