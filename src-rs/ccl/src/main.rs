//! Command-line tools for CCL comparison tables and supplement facts panels

use std::process::ExitCode;

use ccl_facts::{FsLoader, SourceRef, Warning};
use ccl_ingredients::{Ingredient, ListOptions};
use ccl_shared::CclError;
use clap::Parser;

use crate::command::{CliCommand, Commands, DevCommands};

mod command;
mod loading;
mod logging;
mod print_comparison;
mod print_dev;
mod print_error;
mod print_facts;
mod print_utils;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();
    let output = cli.output;

    if output.no_colors {
        anstream::ColorChoice::Never.write_global();
    }
    logging::init(output.verbose, !output.no_colors);

    let print_debug = output.print_debug;
    let succeeded = match cli.command {
        Commands::Compare { nutrients, brands } => run_compare(&nutrients, &brands, print_debug),
        Commands::Facts { brand, nutrients } => {
            run_facts(&brand, nutrients.as_ref(), print_debug)
        }
        Commands::Dev { command } => match command {
            DevCommands::ParseServing { text } => run_parse_serving(&text, print_debug),
            DevCommands::ParseList {
                source,
                serving_key,
                error_prefix,
            } => run_parse_list(
                &source,
                &ListOptions::new(serving_key, error_prefix),
                print_debug,
            ),
        },
    };

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_compare(nutrients: &SourceRef, brands: &[SourceRef], print_debug: bool) -> bool {
    let db = match loading::load_nutrients(nutrients, &FsLoader) {
        Ok(db) => db,
        Err(error) => {
            print_error::print(&error, print_debug);
            return false;
        }
    };

    let (brands, errors) = loading::load_brands(brands, &FsLoader);
    print_errors(&errors, print_debug);

    let table = ccl_facts::compare(&db, &brands);
    print_comparison::print(&table, print_debug);
    print_warnings(table.warnings(), print_debug);

    errors.is_empty()
}

fn run_facts(brand: &SourceRef, nutrients: Option<&SourceRef>, print_debug: bool) -> bool {
    let brand = match loading::load_brand(brand, &FsLoader) {
        Ok(brand) => brand,
        Err(error) => {
            print_error::print(&error, print_debug);
            return false;
        }
    };

    let db = nutrients.map(|source| loading::load_nutrients(source, &FsLoader));
    let (db, succeeded) = match db {
        Some(Ok(db)) => (Some(db), true),
        Some(Err(error)) => {
            print_error::print(&error, print_debug);
            (None, false)
        }
        None => (None, true),
    };

    let panel = ccl_facts::assemble(&brand, db.as_ref());
    print_facts::print(&panel, print_debug);
    print_warnings(panel.warnings(), print_debug);

    succeeded
}

fn run_parse_serving(text: &str, print_debug: bool) -> bool {
    match ccl_serving::parse(text) {
        Ok(serving) => {
            print_dev::print_serving(&serving, print_debug);
            true
        }
        Err(error) => {
            let error = CclError::from_error(&error, format!("'{text}'"));
            print_error::print(&error, print_debug);
            false
        }
    }
}

fn run_parse_list(source: &SourceRef, options: &ListOptions, print_debug: bool) -> bool {
    let raw = match ccl_facts::source::load(source, &FsLoader) {
        Ok(raw) => raw,
        Err(error) => {
            let error = CclError::from_error(&error, source.to_string());
            print_error::print(&error, print_debug);
            return false;
        }
    };

    match ccl_ingredients::parse_list(&raw, options) {
        Ok(list) => {
            print_dev::print_list(&list, print_debug);
            for message in list.errors().filter_map(Ingredient::error) {
                print_error::print_entry_warning(message);
            }
            true
        }
        Err(error) => {
            let error = CclError::from_error(&error, source.to_string());
            print_error::print(&error, print_debug);
            false
        }
    }
}

fn print_errors(errors: &[CclError], print_debug: bool) {
    for error in errors {
        print_error::print(error, print_debug);
    }
}

fn print_warnings(warnings: &[Warning], print_debug: bool) {
    for warning in warnings {
        print_error::print_warning(warning, print_debug);
    }
}
