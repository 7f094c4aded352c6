//! Logger initialization for the stencil binary.

/// Configures env_logger for one run. `verbose` lifts the filter to debug,
/// which makes the engine's per-entry walk logging visible.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();
}
