//! Print supplement facts panels.

use anstream::println;
use ccl_facts::facts::{self, FactsPanel, FactsRow, PercentDv};

use crate::{
    print_utils::{self, StyledText},
    stylesheet,
};

/// Prints a facts panel to stdout.
pub fn print(panel: &FactsPanel, print_debug: bool) {
    if print_debug {
        println!("{panel:#?}");
        return;
    }

    println!("{}", panel_to_string(panel));
}

fn panel_to_string(panel: &FactsPanel) -> String {
    let mut lines = vec![
        stylesheet::TITLE.style(facts::TITLE).to_string(),
        stylesheet::SECTION_HEADER.style(panel.brand()).to_string(),
    ];
    lines.extend(panel.serving_size_line());
    lines.extend(panel.servings_per_container_line());
    lines.push(String::new());

    let mut rows = vec![vec![
        StyledText::plain(""),
        StyledText::new(facts::AMOUNT_HEADER, stylesheet::COLUMN_HEADER),
        StyledText::new(facts::PERCENT_DV_HEADER, stylesheet::COLUMN_HEADER),
    ]];
    rows.extend(panel.nutrients().iter().map(facts_row));
    let separator_at = rows.len();
    rows.extend(panel.supplements().iter().map(facts_row));

    let mut table = print_utils::layout_columns(&rows);
    if panel.has_separator() {
        let separator = "-".repeat(print_utils::max_width(&table));
        table.insert(separator_at, separator);
    }
    lines.extend(table);

    if !panel.footnotes().is_empty() || panel.other_ingredients_line().is_some() {
        lines.push(String::new());
    }
    lines.extend(
        panel
            .footnotes()
            .iter()
            .map(|footnote| stylesheet::FOOTNOTE.style(footnote).to_string()),
    );
    lines.extend(panel.other_ingredients_line());

    lines.join("\n")
}

fn facts_row(row: &FactsRow) -> Vec<StyledText> {
    let percent_dv_style = match row.percent_dv() {
        PercentDv::Invalid => stylesheet::INVALID_CELL,
        PercentDv::Supplied(_)
        | PercentDv::Percent(_)
        | PercentDv::NotEstablished
        | PercentDv::Unavailable => stylesheet::AMOUNT,
    };

    vec![
        StyledText::new(row.name(), stylesheet::INGREDIENT_NAME),
        print_utils::cell_text(row.amount()),
        StyledText::new(row.percent_dv().to_string(), percent_dv_style),
    ]
}
