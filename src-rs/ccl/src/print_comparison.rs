//! Print cross-brand comparison tables.

use anstream::println;
use ccl_facts::comparison::{ComparisonTable, Row};

use crate::{
    print_utils::{self, StyledText},
    stylesheet,
};

/// Prints a comparison table to stdout.
///
/// Warnings are not printed here; they go to the error printer.
pub fn print(table: &ComparisonTable, print_debug: bool) {
    if print_debug {
        println!("{table:#?}");
        return;
    }

    println!("{}", table_to_string(table));
}

/// Renders the table as one block of aligned columns.
///
/// Each section starts with its own header row listing the brand names,
/// followed by one row per ingredient:
///
/// ```text
/// Nutrients   Units  Acme   Zenith
/// Vitamin C   mg     50 mg  -
/// ```
fn table_to_string(table: &ComparisonTable) -> String {
    let sections = [
        ("Nutrients", table.nutrients()),
        ("Supplements", table.supplements()),
    ];

    let mut rows = Vec::new();
    for (title, section) in sections {
        if section.is_empty() {
            continue;
        }
        if !rows.is_empty() {
            rows.push(Vec::new());
        }
        rows.push(header_row(title, table));
        rows.extend(section.iter().map(ingredient_row));
    }

    if rows.is_empty() {
        return stylesheet::MISSING_CELL
            .style("no ingredients to compare")
            .to_string();
    }

    print_utils::layout_columns(&rows).join("\n")
}

fn header_row(title: &str, table: &ComparisonTable) -> Vec<StyledText> {
    let mut header = vec![
        StyledText::new(title, stylesheet::SECTION_HEADER),
        StyledText::new("Units", stylesheet::COLUMN_HEADER),
    ];
    header.extend(
        table
            .columns()
            .iter()
            .map(|column| StyledText::new(column.name(), stylesheet::COLUMN_HEADER)),
    );
    header
}

fn ingredient_row(row: &Row) -> Vec<StyledText> {
    let units = row.units().map_or_else(
        || StyledText::new(ccl_facts::INVALID, stylesheet::INVALID_CELL),
        |units| StyledText::new(units.to_string(), stylesheet::UNITS),
    );

    let mut line = vec![
        StyledText::new(row.name(), stylesheet::INGREDIENT_NAME),
        units,
    ];
    line.extend(row.cells().iter().map(print_utils::cell_text));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use anstream::adapter::strip_str;
    use ccl_facts::{Brand, NutrientDb, compare};
    use serde_json::json;

    fn render(table: &ComparisonTable) -> String {
        strip_str(&table_to_string(table)).to_string()
    }

    #[test]
    fn both_sections() {
        let db = NutrientDb::from_value(&json!({ "vitaminC": { "dv": "90 mg" } }))
            .expect("database should parse");
        let brands = [
            Brand::from_value(
                "a",
                json!({
                    "name": "Acme",
                    "nutrition": { "vitaminC": "50 mg" },
                    "supplements": { "melatonin": "3 mg" }
                }),
            )
            .expect("brand should parse"),
            Brand::from_value(
                "z",
                json!({ "name": "Zenith", "nutrition": { "vitaminC": "50 mcg" } }),
            )
            .expect("brand should parse"),
        ];

        let table = compare(&db, &brands);

        assert_eq!(
            render(&table),
            "Nutrients    Units  Acme   Zenith\n\
             Vitamin C    mg     50 mg  ERR\n\
             \n\
             Supplements  Units  Acme   Zenith\n\
             Melatonin    mg     3 mg   -"
        );
    }

    #[test]
    fn empty_table() {
        let table = compare(&NutrientDb::default(), &[]);
        assert_eq!(render(&table), "no ingredients to compare");
    }
}
