use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use reelshelf_core::genre_labels;
use reelshelf_models::{MediaItem, SearchResult, WatchStateEntry};

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(
        header
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

pub fn year(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn rating(vote_average: f32) -> String {
    if vote_average > 0.0 {
        format!("{:.1}", vote_average)
    } else {
        "-".to_string()
    }
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

pub fn runtime(minutes: Option<u32>) -> Option<String> {
    let minutes = minutes?;
    Some(match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    })
}

pub fn media_table(items: &[MediaItem]) -> Table {
    let mut table = new_table(vec!["#", "Kind", "ID", "Title", "Year", "Rating", "Genres"]);
    for (index, item) in items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(item.kind()),
            Cell::new(item.id()),
            Cell::new(truncate(item.title(), 48)).fg(Color::Cyan),
            Cell::new(year(item.year())),
            Cell::new(rating(item.vote_average())),
            Cell::new(genre_labels(item).join(", ")),
        ]);
    }
    table
}

pub fn search_table(results: &[SearchResult]) -> Table {
    let mut table = new_table(vec!["Kind", "ID", "Title", "Year"]);
    for hit in results {
        table.add_row(vec![
            Cell::new(hit.kind),
            Cell::new(hit.id),
            Cell::new(truncate(&hit.title, 56)).fg(Color::Cyan),
            Cell::new(year(hit.year)),
        ]);
    }
    table
}

pub fn entry_table(entries: &[WatchStateEntry]) -> Table {
    let mut table = new_table(vec!["#", "Kind", "ID", "Title", "Year"]);
    for (index, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(entry.kind),
            Cell::new(entry.id),
            Cell::new(truncate(&entry.title, 56)).fg(Color::Cyan),
            Cell::new(year(entry.year())),
        ]);
    }
    table
}

pub fn heading(text: &str) -> String {
    format!("\n{}", text.bright_cyan().bold())
}

pub fn check(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}
