#![doc(test(attr(deny(warnings))))]

//! Grocery Core owns the state engine behind an interactive grocery list:
//! a categorized item store, a compact share-link codec, and JSON
//! persistence, plus the CLI shell that fronts them.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod list;
pub mod share;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Grocery Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
