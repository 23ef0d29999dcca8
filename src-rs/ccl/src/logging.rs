//! Diagnostic logging to stderr.

use tracing::Level;

/// Maps the `-v` count to the most verbose level that is logged.
///
/// Warnings found while assembling are already printed by the error
/// printer, so they are only logged from `-v` up.
pub const fn level(verbose: u8) -> Level {
    match verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Installs the global `fmt` subscriber.
pub fn init(verbose: u8, use_colors: bool) {
    tracing_subscriber::fmt()
        .with_max_level(level(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(use_colors)
        .without_time()
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), Level::ERROR);
        assert_eq!(level(1), Level::WARN);
        assert_eq!(level(2), Level::INFO);
        assert_eq!(level(3), Level::DEBUG);
        assert_eq!(level(9), Level::DEBUG);
    }
}
