use ccl_facts::SourceRef;
use clap::{ArgAction, Args, Parser, Subcommand};

/// CCL facts CLI
#[derive(Parser)]
#[command(name = "ccl")]
#[command(version, about = "Comparison tables and supplement facts panels", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Flags shared by every command
#[derive(Args)]
pub struct OutputArgs {
    /// Disable colors in the output
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Print the output in debug format
    #[arg(long, global = true)]
    pub print_debug: bool,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare the ingredients of several brands
    Compare {
        /// The nutrient database, as `FILE` or `FILE#PROPERTY`
        #[arg(long, value_name = "SOURCE")]
        nutrients: SourceRef,

        /// The brands to compare, in column order
        #[arg(value_name = "BRAND_SOURCE", required = true)]
        brands: Vec<SourceRef>,
    },
    /// Print the supplement facts panel of one brand
    Facts {
        /// The brand, as `FILE` or `FILE#PROPERTY`
        #[arg(value_name = "SOURCE")]
        brand: SourceRef,

        /// The nutrient database used for percent daily values
        #[arg(long, value_name = "SOURCE")]
        nutrients: Option<SourceRef>,
    },
    /// Development tools for debugging and testing
    Dev {
        #[command(subcommand)]
        command: DevCommands,
    },
}

#[derive(Subcommand)]
pub enum DevCommands {
    /// Parse a serving size and print its value and units
    ParseServing {
        /// The serving text, such as "200 mcg RAE"
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Normalize an ingredient list and print its entries
    ParseList {
        /// The list, as `FILE` or `FILE#PROPERTY`
        #[arg(value_name = "SOURCE")]
        source: SourceRef,

        /// The entry field holding the serving text
        #[arg(long, default_value = "serving")]
        serving_key: String,

        /// The label that starts each error message
        #[arg(long, default_value = "Ingredient")]
        error_prefix: String,
    },
}

