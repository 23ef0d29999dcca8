//! Shared printing utilities for the CCL CLI

use ccl_facts::Cell;
use owo_colors::Style;

use crate::stylesheet;

/// Gap between table columns.
const COLUMN_GAP: &str = "  ";

/// A table cell's plain text and the style it is printed with.
#[derive(Debug, Clone)]
pub struct StyledText {
    text: String,
    style: Style,
}

impl StyledText {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::new())
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Styles an amount cell by kind.
pub fn cell_text(cell: &Cell) -> StyledText {
    let style = match cell {
        Cell::Value(_) => stylesheet::AMOUNT,
        Cell::Missing => stylesheet::MISSING_CELL,
        Cell::Invalid => stylesheet::INVALID_CELL,
    };
    StyledText::new(cell.to_string(), style)
}

/// Lays out rows as left-aligned columns.
///
/// Widths are measured on the plain text so that styles do not affect
/// alignment. The last column is not padded.
pub fn layout_columns(rows: &[Vec<StyledText>]) -> Vec<String> {
    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths = (0..column_count)
        .map(|column| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(StyledText::width)
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    rows.iter()
        .map(|row| {
            let last = row.len().saturating_sub(1);
            let mut line = String::new();
            for (column, cell) in row.iter().enumerate() {
                line.push_str(&cell.style.style(&cell.text).to_string());
                if column < last {
                    let padding = widths[column] - cell.width();
                    line.push_str(&" ".repeat(padding));
                    line.push_str(COLUMN_GAP);
                }
            }
            line
        })
        .collect()
}

/// Returns the display width of the widest line, ignoring styles.
pub fn max_width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| anstream::adapter::strip_str(line).to_string().chars().count())
        .max()
        .unwrap_or(0)
}
