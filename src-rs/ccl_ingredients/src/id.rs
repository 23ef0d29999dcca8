//! Conversions between ingredient ids and display names.
//!
//! Ids are camel-case ASCII identifiers such as `vitaminB12`. Names are free
//! text such as `Vitamin B-12`. The conversions are lossy and are not
//! inverses of each other.

/// Derives an id from a display name.
///
/// The name is lower-cased, every run of characters other than ASCII letters
/// and digits becomes a single word break, leading digits are dropped, and
/// the words are joined in camel case.
///
/// The result is either empty or a valid id according to [`verify_id`].
///
/// ```rust
/// use ccl_ingredients::name_to_id;
///
/// assert_eq!(name_to_id("Vitamin B-12"), "vitaminB12");
/// assert_eq!(name_to_id("5-HTP"), "htp");
/// assert_eq!(name_to_id("--"), "");
/// ```
#[must_use]
pub fn name_to_id(name: &str) -> String {
    let lowered = name.to_lowercase();
    let words = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let trimmed = words.trim_start_matches(|c: char| c.is_ascii_digit() || c == ' ');

    let mut id = String::with_capacity(trimmed.len());
    let mut upper_next = false;
    for c in trimmed.chars() {
        if c == ' ' {
            upper_next = true;
        } else if upper_next {
            id.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            id.push(c);
        }
    }

    id
}

/// Returns true if `id` starts with a lowercase ASCII letter followed only by
/// ASCII letters and digits.
#[must_use]
pub fn verify_id(id: &str) -> bool {
    let mut chars = id.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Derives a fallback display name from an id.
///
/// The first character is capitalized and a space is inserted before every
/// later uppercase character.
///
/// ```rust
/// use ccl_ingredients::id_to_name;
///
/// assert_eq!(id_to_name("vitaminB12"), "Vitamin B12");
/// ```
#[must_use]
pub fn id_to_name(id: &str) -> String {
    let mut name = String::with_capacity(id.len() + 4);
    let mut chars = id.chars();

    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
    }

    for c in chars {
        if c.is_uppercase() {
            name.push(' ');
        }
        name.push(c);
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name_to_id_tests {
        use super::*;

        #[test]
        fn punctuation_run_becomes_word_break() {
            assert_eq!(name_to_id("Vitamin B-12"), "vitaminB12");
        }

        #[test]
        fn single_word() {
            assert_eq!(name_to_id("Biotin"), "biotin");
        }

        #[test]
        fn many_separators() {
            assert_eq!(name_to_id("  Omega-3 (Fish Oil)  "), "omega3FishOil");
        }

        #[test]
        fn leading_digits_are_dropped() {
            assert_eq!(name_to_id("5-HTP"), "htp");
            assert_eq!(name_to_id("123 Go"), "go");
        }

        #[test]
        fn non_ascii_letters_are_separators() {
            assert_eq!(name_to_id("Açaí Berry"), "aABerry");
        }

        #[test]
        fn nothing_left() {
            assert_eq!(name_to_id(""), "");
            assert_eq!(name_to_id("1,000"), "");
            assert_eq!(name_to_id("-- !"), "");
        }

        #[test]
        fn derived_ids_verify() {
            for name in ["Vitamin D3", "Folic Acid (as DFE)", "9 Lives", "CoQ10"] {
                let id = name_to_id(name);
                assert!(verify_id(&id), "'{id}' from '{name}' should verify");
            }
        }
    }

    mod verify_id_tests {
        use super::*;

        #[test]
        fn valid_ids() {
            assert!(verify_id("vitaminC"));
            assert!(verify_id("b12"));
            assert!(verify_id("x"));
        }

        #[test]
        fn invalid_ids() {
            assert!(!verify_id(""));
            assert!(!verify_id("VitaminC"));
            assert!(!verify_id("12b"));
            assert!(!verify_id("vitamin c"));
            assert!(!verify_id("vitamin-c"));
            assert!(!verify_id("vitamin_c"));
        }
    }

    mod id_to_name_tests {
        use super::*;

        #[test]
        fn camel_case_expands() {
            assert_eq!(id_to_name("vitaminB12"), "Vitamin B12");
            assert_eq!(id_to_name("omega3FishOil"), "Omega3 Fish Oil");
        }

        #[test]
        fn single_character() {
            assert_eq!(id_to_name("x"), "X");
        }

        #[test]
        fn empty() {
            assert_eq!(id_to_name(""), "");
        }

        #[test]
        fn consecutive_capitals() {
            let name = id_to_name("vitaminDHA");
            assert_eq!(name, "Vitamin D H A");
            assert_eq!(name_to_id(&name), "vitaminDHA");

            let name = id_to_name("coQ10");
            assert_eq!(name, "Co Q10");
            assert_eq!(name_to_id(&name), "coQ10");
        }
    }
}
