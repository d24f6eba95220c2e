use serde::{Deserialize, Serialize};

use crate::api::types::entitlement::EntitlementWire;

/// Wire shape of a user's effective entitlements.
///
/// `version` is fractional: the integer part is the user entitlements
/// version and the fractional part encodes the entitlements set version
/// divided by 100000. It is transcoded verbatim and never interpreted here.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUserEntitlementsWire {
    pub external_id: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub entitlements_set_name: Option<String>,
    #[serde(default)]
    pub entitlements_sequence_name: Option<String>,
    pub entitlements: Vec<EntitlementWire>,
    #[serde(default)]
    pub expendable_entitlements: Vec<EntitlementWire>,
    #[serde(default)]
    pub transitions_relative_to_epoch_ms: Option<i64>,
    pub version: f64,
    pub created_at_epoch_ms: i64,
    pub updated_at_epoch_ms: i64,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUserEntitlementsErrorWire {
    pub error: String,
}

/// Element of a bulk apply result. Error elements are recognized by their
/// `error` field; the `__typename` discriminator, when sent, is ignored by
/// serde and agrees with that shape.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalUserEntitlementsResultWire {
    Error(ExternalUserEntitlementsErrorWire),
    Entitlements(ExternalUserEntitlementsWire),
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementConsumptionWire {
    pub name: String,
    pub value: i64,
    pub available: i64,
    pub consumed: i64,
    #[serde(default)]
    pub first_consumed_at_epoch_ms: Option<i64>,
    #[serde(default)]
    pub last_consumed_at_epoch_ms: Option<i64>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalEntitlementsConsumptionWire {
    pub entitlements: ExternalUserEntitlementsWire,
    pub consumption: Vec<EntitlementConsumptionWire>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitledUserWire {
    pub external_id: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEntitlementsForUserInput {
    pub external_id: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyEntitlementsToUserInput {
    pub external_id: String,
    pub entitlements: Vec<EntitlementWire>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyEntitlementsToUsersInput {
    pub operations: Vec<ApplyEntitlementsToUserInput>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyEntitlementsSetToUserInput {
    pub external_id: String,
    pub entitlements_set_name: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyEntitlementsSetToUsersInput {
    pub operations: Vec<ApplyEntitlementsSetToUserInput>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyEntitlementsSequenceToUserInput {
    pub external_id: String,
    pub entitlements_sequence_name: String,
    #[serde(default)]
    pub transitions_relative_to_epoch_ms: Option<i64>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyEntitlementsSequenceToUsersInput {
    pub operations: Vec<ApplyEntitlementsSequenceToUserInput>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyExpendableEntitlementsToUserInput {
    pub external_id: String,
    pub expendable_entitlements: Vec<EntitlementWire>,
    pub request_id: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEntitledUserInput {
    pub external_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_element_with_typename_decodes_as_error() {
        let json = r#"{
            "__typename": "ExternalUserEntitlementsError",
            "error": "sudoplatform.entitlements.InvalidEntitlementsError"
        }"#;
        let result: ExternalUserEntitlementsResultWire = serde_json::from_str(json).unwrap();
        assert_eq!(
            result,
            ExternalUserEntitlementsResultWire::Error(ExternalUserEntitlementsErrorWire {
                error: "sudoplatform.entitlements.InvalidEntitlementsError".to_string(),
            })
        );
    }

    #[test]
    fn result_element_without_typename_decodes_by_error_field() {
        let json = r#"{"error": "sudoplatform.ServiceError"}"#;
        let result: ExternalUserEntitlementsResultWire = serde_json::from_str(json).unwrap();
        assert!(matches!(
            result,
            ExternalUserEntitlementsResultWire::Error(_)
        ));
    }

    #[test]
    fn result_element_with_entitlements_decodes_as_success() {
        let json = r#"{
            "__typename": "ExternalUserEntitlements",
            "externalId": "user-1",
            "entitlements": [{"name": "storage", "value": 10}],
            "version": 1.00001,
            "createdAtEpochMs": 0,
            "updatedAtEpochMs": 0
        }"#;
        let result: ExternalUserEntitlementsResultWire = serde_json::from_str(json).unwrap();
        match result {
            ExternalUserEntitlementsResultWire::Entitlements(entitlements) => {
                assert_eq!(entitlements.external_id, "user-1");
                assert!(entitlements.expendable_entitlements.is_empty());
                assert_eq!(entitlements.entitlements[0].value, 10);
            }
            ExternalUserEntitlementsResultWire::Error(_) => panic!("decoded as error"),
        }
    }
}
