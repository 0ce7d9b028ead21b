//! Filesystem access for i18n-sync
//!
//! Provides normalized path handling, atomic locked writes and
//! format-agnostic configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigFormat;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
