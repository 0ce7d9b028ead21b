//! Command implementations for i18n-cli

pub mod completions;
pub mod status;
pub mod sync;

pub use completions::run_completions;
pub use status::{StatusOptions, run_status};
pub use sync::{SyncArgs, run_sync};
