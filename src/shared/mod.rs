pub mod constants;
pub mod errors;

// Server-only logging module
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
