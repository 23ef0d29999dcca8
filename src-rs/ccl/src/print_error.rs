//! Error and warning message formatting
//!
//! ```text
//! error: Supplement [1] has duplicate id 'a'.
//!  --> 'brands.json'[acme]
//!   = help: give each entry a distinct name or 'id'
//!
//! warning: Brand 'acme' ingredient 'vitaminC' must be supplied in units of 'mg'.
//! ```

use anstream::eprintln;
use ccl_facts::Warning;
use ccl_shared::{CclError, Context};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// Prints a formatted error message to stderr
pub fn print(error: &CclError, print_debug: bool) {
    if print_debug {
        eprintln!("{error:?}");
    } else {
        let error_string = error_to_string(error);
        eprintln!("{error_string}");
    }
}

/// Prints a formatted warning message to stderr
pub fn print_warning(warning: &Warning, print_debug: bool) {
    if print_debug {
        eprintln!("{warning:?}");
    } else {
        let warning_string =
            get_message_line("warning", stylesheet::WARNING_COLOR, &warning.to_string());
        eprintln!("{warning_string}");
    }
}

/// Prints a serving failure that was contained inside its list entry
pub fn print_entry_warning(message: &str) {
    let warning_string = get_message_line("warning", stylesheet::WARNING_COLOR, message);
    eprintln!("{warning_string}");
}

/// Converts an error to a formatted string representation
fn error_to_string(error: &CclError) -> String {
    let message_line = get_message_line("error", stylesheet::ERROR_COLOR, error.message());
    let source_line = get_source_line(error.source());
    let context_lines = error.context().iter().map(get_context_line);

    let mut lines = vec![message_line, source_line];
    lines.extend(context_lines);
    lines.push(String::new());

    lines.join("\n")
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}

/// Formats the line naming the failed source
fn get_source_line(source: &str) -> String {
    //  --> <source>
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");
    format!(" {arrow} {source}")
}

fn get_context_line(context: &Context) -> String {
    //   = note: <message>
    let (equals, context_message) = match context {
        Context::Note(message) => (
            stylesheet::NOTE_COLOR.bold().style("="),
            get_message_line("note", stylesheet::NOTE_COLOR, message),
        ),
        Context::Help(message) => (
            stylesheet::HELP_COLOR.bold().style("="),
            get_message_line("help", stylesheet::HELP_COLOR, message),
        ),
    };
    format!("  {equals} {context_message}")
}
