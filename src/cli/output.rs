//! Output formatting utilities

use crate::domain::day::local_day;
use crate::domain::DiaryEntry;

/// Longest image reference shown before eliding the middle
const IMAGE_PREVIEW_CHARS: usize = 48;

/// Format entries as one line each: day, id and the first line of text
pub fn format_entry_list(entries: &[DiaryEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}  {}\n",
            local_day(&entry.date).format("%Y-%m-%d"),
            entry.id,
            first_line(&entry.content)
        ));
    }
    output
}

/// Format a single entry in full
pub fn format_entry(entry: &DiaryEntry) -> String {
    format!(
        "{}\nid: {}\nimage: {}\n\n{}\n",
        local_day(&entry.date).format("%A, %B %-d, %Y"),
        entry.id,
        preview_image(&entry.image_url),
        entry.content.trim_end()
    )
}

/// Summary line for a search
pub fn format_search_summary(count: usize) -> String {
    match count {
        0 => "No memories found. Try a different search term or date.".to_string(),
        1 => "Found 1 memory".to_string(),
        n => format!("Found {} memories", n),
    }
}

fn first_line(content: &str) -> &str {
    content.trim_start().lines().next().unwrap_or("")
}

fn preview_image(image_url: &str) -> String {
    let chars = image_url.chars().count();
    if chars <= IMAGE_PREVIEW_CHARS {
        return image_url.to_string();
    }
    let head: String = image_url.chars().take(IMAGE_PREVIEW_CHARS).collect();
    format!("{}... ({} chars)", head, chars)
}
