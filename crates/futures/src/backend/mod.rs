//! Schedulers backed by real async runtimes.
#[cfg(all(feature = "tokio", not(target_arch = "wasm32")))]
pub mod tokio;
