use log::Level;

/// Route the `log` macros to the browser console. Safe to call repeatedly;
/// only the first call wins.
pub fn init_logging() {
    let _ = console_log::init_with_level(Level::Debug);
}
