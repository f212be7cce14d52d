//! Crate includes reusable utils for the vault binaries that handle common behavior.
//! Such as initializing the tracing framework and reading env overrides.

pub mod env;
pub mod logging;
