//! Print parser and normalizer results for debugging.

use anstream::println;
use ccl_ingredients::{Ingredient, IngredientList};
use ccl_serving::Serving;

use crate::{
    print_utils::{self, StyledText},
    stylesheet,
};

/// Prints a parsed serving.
pub fn print_serving(serving: &Serving, print_debug: bool) {
    if print_debug {
        println!("{serving:#?}");
        return;
    }

    println!("{}", serving_to_string(serving));
}

/// Prints a normalized ingredient list.
pub fn print_list(list: &IngredientList, print_debug: bool) {
    if print_debug {
        println!("{list:#?}");
        return;
    }

    println!("{}", list_to_string(list));
}

fn serving_to_string(serving: &Serving) -> String {
    let units = serving.units();
    let value = serving
        .value()
        .map_or_else(none_text, |value| value.to_string());
    let mass = units
        .mass_unit()
        .map_or_else(none_text, |mass| stylesheet::UNITS.style(mass.symbol()).to_string());
    let equivalence = units.equivalence().map_or_else(
        none_text,
        |equivalence| stylesheet::UNITS.style(equivalence.symbol()).to_string(),
    );

    [
        format!("value: {value}"),
        format!("mass: {mass}"),
        format!("equivalence: {equivalence}"),
    ]
    .join("\n")
}

fn none_text() -> String {
    stylesheet::MISSING_CELL.style("none").to_string()
}

fn list_to_string(list: &IngredientList) -> String {
    if list.is_empty() {
        return stylesheet::MISSING_CELL.style("empty list").to_string();
    }

    let rows = list.iter().map(ingredient_row).collect::<Vec<_>>();
    print_utils::layout_columns(&rows).join("\n")
}

fn ingredient_row(ingredient: &Ingredient) -> Vec<StyledText> {
    let serving = match ingredient.serving_result() {
        Ok(serving) if serving.is_empty() => {
            StyledText::new(ccl_facts::MISSING, stylesheet::MISSING_CELL)
        }
        Ok(serving) => StyledText::new(serving.to_string(), stylesheet::AMOUNT),
        Err(_) => StyledText::new(ccl_facts::INVALID, stylesheet::INVALID_CELL),
    };

    vec![
        StyledText::new(ingredient.id(), stylesheet::INGREDIENT_ID),
        StyledText::new(ingredient.name(), stylesheet::INGREDIENT_NAME),
        serving,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use anstream::adapter::strip_str;
    use ccl_ingredients::{ListOptions, parse_list};
    use serde_json::json;

    #[test]
    fn serving_fields() {
        let serving = ccl_serving::parse("1,000 mcg DFE").expect("serving should parse");
        assert_eq!(
            strip_str(&serving_to_string(&serving)).to_string(),
            "value: 1000\nmass: mcg\nequivalence: DFE"
        );
    }

    #[test]
    fn empty_serving_fields() {
        assert_eq!(
            strip_str(&serving_to_string(&Serving::empty())).to_string(),
            "value: none\nmass: none\nequivalence: none"
        );
    }

    #[test]
    fn list_rows() {
        let list = parse_list(
            &json!([
                { "name": "Vitamin C", "serving": "90 mg" },
                "Gelatin",
                { "name": "Zinc", "serving": "lots" }
            ]),
            &ListOptions::default(),
        )
        .expect("list should parse");

        assert_eq!(
            strip_str(&list_to_string(&list)).to_string(),
            "vitaminC  Vitamin C  90 mg\n\
             gelatin   Gelatin    -\n\
             zinc      Zinc       ERR"
        );
    }
}
