use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const WARNING_COLOR: Style = Style::new().yellow();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().blue();
pub const SOURCE_ANNOTATION: Style = Style::new().blue().bold();

pub const TITLE: Style = Style::new().bold();
pub const SECTION_HEADER: Style = Style::new().bold().underline();
pub const COLUMN_HEADER: Style = Style::new().bold();
pub const INGREDIENT_NAME: Style = Style::new().cyan();
pub const INGREDIENT_ID: Style = Style::new().dimmed();
pub const UNITS: Style = Style::new().green();
pub const AMOUNT: Style = Style::new();
pub const MISSING_CELL: Style = Style::new().dimmed();
pub const INVALID_CELL: Style = Style::new().red().bold();
pub const FOOTNOTE: Style = Style::new().italic();
