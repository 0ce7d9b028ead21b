//! SyncEngine for reconciling target files with the source file
//!
//! This module provides:
//! - **engine**: concurrent creation of missing tokens through a
//!   [`TokenProvider`](crate::provider::TokenProvider), removal of obsolete
//!   tokens, and persistence
//! - **report**: what a sync run did, including isolated failures

mod engine;
mod report;

pub use engine::{SyncEngine, SyncOptions};
pub use report::{CreatedToken, DeletedToken, SyncFailure, SyncReport};
