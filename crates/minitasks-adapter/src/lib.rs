/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task service adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod api;
pub mod http;
pub mod types;

pub use api::TaskApi;

// Re-export commonly used types from http
pub use http::{ClientConfig, DEFAULT_BASE_URL, Result, TasksClient, TasksError};

// Re-export all types
pub use types::*;
