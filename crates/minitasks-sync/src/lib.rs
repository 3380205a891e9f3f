/*
[INPUT]:  Public API exports for minitasks-sync crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod status;
pub mod synchronizer;

// Re-export main types for convenience
pub use config::SyncConfig;
pub use status::{Activity, Operation, OperationFailed, SyncSnapshot, TaskStats};
pub use synchronizer::TaskSync;
