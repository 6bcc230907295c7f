//! stderr log subscriber for the binary.

use tracing::Level;

/// Verbosity from the `-d` count: 0 → warn, 1 → debug, 2+ → trace.
pub fn level_for(debug: u8) -> Level {
    match debug {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(debug: u8) {
    // try_init: a second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(debug))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
