//! Platform abstraction layer
//!
//! Logging goes to the browser console on wasm32 and through `env_logger`
//! (controlled by `RUST_LOG`) everywhere else.

/// Install the logger for the current target; safe to call more than once
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
