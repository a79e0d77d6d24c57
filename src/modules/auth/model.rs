use serde::{Deserialize, Serialize};

/// Body of a successful `GET /auth/test`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub data: String,
}
