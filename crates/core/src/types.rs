use serde::{Deserialize, Serialize};

use crate::selector::Selection;

/// Body accepted by the compute endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeRequest {
    pub tokens: Vec<String>,
}

/// Body returned by the compute endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeResponse {
    pub token: String,
    pub index: usize,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op_id: Option<String>,
}

impl ComputeResponse {
    pub fn from_selection<S: AsRef<str>>(selection: Selection<'_, S>) -> Self {
        Self {
            token: selection.token.as_ref().to_string(),
            index: selection.index,
            length: selection.length,
            op_id: None,
        }
    }

    pub fn with_op_id(mut self, op_id: impl Into<String>) -> Self {
        self.op_id = Some(op_id.into());
        self
    }
}
