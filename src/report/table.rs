use crate::migration::MigrationReportRow;
use console::{Alignment, measure_text_width, pad_str, style};

pub const TABLE_TITLE: &str = "New Alembic Migrations";
const HEADERS: [&str; 2] = ["Revision", "Message"];

/// Render rows as a box-drawn table with a heavy header
pub fn render_table(rows: &[MigrationReportRow]) -> String {
    let revision_width = column_width(HEADERS[0], rows.iter().map(|r| r.revision.as_str()));
    let message_width = column_width(HEADERS[1], rows.iter().map(|r| r.message.as_str()));
    let widths = [revision_width, message_width];

    // Two cells of padding per column plus one border per column and the closing edge
    let table_width: usize = widths.iter().map(|w| w + 2).sum::<usize>() + widths.len() + 1;
    let title_width = measure_text_width(TABLE_TITLE);

    let mut lines = Vec::with_capacity(rows.len() + 5);
    lines.push(format!(
        "{}{}",
        " ".repeat(table_width.saturating_sub(title_width) / 2),
        style(TABLE_TITLE).italic()
    ));
    lines.push(rule(&widths, '┏', '━', '┳', '┓'));
    lines.push(format!(
        "┃ {} ┃ {} ┃",
        style(pad(HEADERS[0], revision_width)).bold().cyan(),
        style(pad(HEADERS[1], message_width)).bold().cyan()
    ));
    lines.push(rule(&widths, '┡', '━', '╇', '┩'));
    for row in rows {
        lines.push(format!(
            "│ {} │ {} │",
            style(pad(&row.revision, revision_width)).green(),
            style(pad(&row.message, message_width)).magenta()
        ));
    }
    lines.push(rule(&widths, '└', '─', '┴', '┘'));

    lines.join("\n")
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(measure_text_width)
        .chain(std::iter::once(measure_text_width(header)))
        .max()
        .unwrap_or_default()
}

fn pad(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Left, None).into_owned()
}

fn rule(widths: &[usize], left: char, fill: char, join: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("{}{}{}", left, segments.join(&join.to_string()), right)
}
