use serde::{Deserialize, Serialize};

/// Wire shape of an entitlement definition. `type` is an opaque server
/// defined token, currently `numeric` or `boolean`.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementDefinitionWire {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub definition_type: String,
    pub expendable: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementDefinitionConnectionWire {
    pub items: Vec<EntitlementDefinitionWire>,
    #[serde(default)]
    pub next_token: Option<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEntitlementDefinitionInput {
    pub name: String,
}
