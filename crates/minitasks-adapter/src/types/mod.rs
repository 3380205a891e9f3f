/*
[INPUT]:  Task service schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for task service communication
[UPDATE]: When the task service schema changes or new types added
*/

pub mod models;
pub mod requests;

pub use models::*;
pub use requests::*;
