//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable.
///
/// # Example
/// ```
/// rkedit::core::logging::init();
/// log::info!("Edit session started");
/// ```
pub fn init() {
    // Doc tests and embedding hosts may already own the global logger.
    let _ = try_init();
}

/// Initialize logging, reporting failure if a logger is already installed.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).try_init()
}
