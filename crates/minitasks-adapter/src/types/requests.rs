/*
[INPUT]:  Task service request schema
[OUTPUT]: Typed request bodies with serialization support
[POS]:    Data layer - bodies sent to the task service
[UPDATE]: When the task service request schema changes
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
}

impl CreateTaskRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
