use serde::{Deserialize, Serialize};

/// Wire shape of one transition within an entitlements sequence. `duration`
/// is an ISO 8601 period and is absent only on the final transition.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementsSequenceTransitionWire {
    pub entitlements_set_name: String,
    #[serde(default)]
    pub duration: Option<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementsSequenceWire {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub transitions: Vec<EntitlementsSequenceTransitionWire>,
    pub version: i64,
    pub created_at_epoch_ms: i64,
    pub updated_at_epoch_ms: i64,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementsSequencesConnectionWire {
    pub items: Vec<EntitlementsSequenceWire>,
    #[serde(default)]
    pub next_token: Option<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEntitlementsSequenceInput {
    pub name: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEntitlementsSequenceInput {
    pub name: String,
    pub description: Option<String>,
    pub transitions: Vec<EntitlementsSequenceTransitionWire>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntitlementsSequenceInput {
    pub name: String,
    pub description: Option<String>,
    pub transitions: Vec<EntitlementsSequenceTransitionWire>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEntitlementsSequenceInput {
    pub name: String,
}
