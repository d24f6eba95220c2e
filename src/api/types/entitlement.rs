use serde::{Deserialize, Serialize};

/// Wire shape of a single entitlement. The same shape is used for the
/// `Entitlement` output type and the `EntitlementInput` input type.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementWire {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub value: i64,
}
