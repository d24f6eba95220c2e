use serde::{Deserialize, Serialize};

use crate::api::types::entitlement::EntitlementWire;

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementsSetWire {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub entitlements: Vec<EntitlementWire>,
    pub version: i64,
    pub created_at_epoch_ms: i64,
    pub updated_at_epoch_ms: i64,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementsSetsConnectionWire {
    pub items: Vec<EntitlementsSetWire>,
    #[serde(default)]
    pub next_token: Option<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEntitlementsSetInput {
    pub name: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEntitlementsSetInput {
    pub name: String,
    pub description: Option<String>,
    pub entitlements: Vec<EntitlementWire>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntitlementsSetInput {
    pub name: String,
    pub description: Option<String>,
    pub entitlements: Vec<EntitlementWire>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEntitlementsSetInput {
    pub name: String,
}
