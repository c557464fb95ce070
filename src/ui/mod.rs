//! Terminal output for run progress and the topic distribution.
//!
//! Colors and tables are only used when stdout is a terminal; piped output
//! stays plain text, one fact per line.

use comfy_table::{presets, Attribute, Cell, CellAlignment, Table};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::catalog::RunSummary;
use crate::models::CategorySummary;

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

fn colors_enabled() -> bool {
    is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Info,
}

/// Status icons for different outcomes.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
    }
}

/// Print a status line, colored on terminals.
pub fn print_status(status: Status, msg: &str) {
    if !colors_enabled() {
        println!("{}", msg);
        return;
    }

    let icon = status_icon(status);
    match status {
        Status::Success => println!("{} {}", icon.green().bold(), msg),
        Status::Warning => println!("{} {}", icon.yellow().bold(), msg),
        Status::Info => println!("{} {}", icon.cyan().bold(), msg),
    }
}

/// Format a number with commas.
pub fn format_number(n: usize) -> String {
    n.to_string()
        .chars()
        .rev()
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect()
}

/// Topic distribution as a table, in catalog order.
pub fn category_table(categories: &[CategorySummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["Key", "Category", "Papers"]);

    for category in categories {
        table.add_row(vec![
            Cell::new(category.key.key()),
            Cell::new(&category.name).add_attribute(Attribute::Bold),
            Cell::new(format_number(category.count)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Print the summary of a finished run.
pub fn print_summary(summary: &RunSummary) {
    print_status(
        Status::Info,
        &format!("Loaded {} papers from source.", format_number(summary.loaded)),
    );

    match &summary.output {
        Some(path) => print_status(Status::Success, &format!("Output: {}", path.display())),
        None => print_status(Status::Warning, "Dry run: no output written"),
    }

    let meta = &summary.document.meta;
    println!(
        "Total: {} papers ({} multi-tagged)",
        format_number(meta.total_papers),
        format_number(summary.stats.multi_tagged)
    );
    println!("Years: {}–{}", meta.year_range[0], meta.year_range[1]);

    println!();
    println!("Topic distribution (papers may appear in multiple categories):");
    if is_terminal() {
        println!("{}", category_table(&summary.document.categories));
    } else {
        for category in &summary.document.categories {
            println!("  {}: {}", category.name, category.count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Topic;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(585), "585");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_category_table_lists_every_row() {
        let categories: Vec<CategorySummary> = Topic::ALL
            .iter()
            .map(|&t| CategorySummary::new(t, 3))
            .collect();
        let rendered = category_table(&categories).to_string();
        for topic in Topic::ALL {
            assert!(rendered.contains(topic.name()));
        }
    }
}
