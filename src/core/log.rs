//! Console logging
//!
//! In the browser messages go to `console.log` / `console.warn` through web-sys.
//! Native builds (tests, tools) have no JS console, so they print to stderr.
//!
//! Usage:
//! ```rust
//! sandfall_engine::console_log!("world {}x{} ready", 64, 32);
//! sandfall_engine::console_warn!("settings rejected: {}", "width must be > 0");
//! ```

/// Log an informational message
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::log::log(&format!($($arg)*))
    };
}

/// Log a warning
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::log::warn(&format!($($arg)*))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    eprintln!("[sandfall] {}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    eprintln!("[sandfall] WARN {}", message);
}
