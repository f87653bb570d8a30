use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub mod receipt;

pub use receipt::{Item, Receipt};

/// Opaque identifier handed out on submission.
pub type ModelId = String;

/// Anything the workflow can park in the ephemeral store and read back.
pub trait Importable: Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> Importable for T where T: Serialize + DeserializeOwned + Send + Sync + 'static {}

/// Contribution of a single scoring rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerResult {
    pub name: String,
    pub score: i64,
}

impl ScorerResult {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ModelId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
