use serde_json::json;

use crate::api::error::AdminApiError;
use crate::api::types::entitlements_set::{
    AddEntitlementsSetInput, EntitlementsSetWire, EntitlementsSetsConnectionWire,
    GetEntitlementsSetInput, RemoveEntitlementsSetInput, SetEntitlementsSetInput,
};
use crate::api::AdminApi;

const GET_ENTITLEMENTS_SET: &str = "\
query GetEntitlementsSet($input: GetEntitlementsSetInput!) {
  getEntitlementsSet(input: $input) {
    name
    description
    entitlements { name description value }
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const LIST_ENTITLEMENTS_SETS: &str = "\
query ListEntitlementsSets($nextToken: String) {
  listEntitlementsSets(nextToken: $nextToken) {
    items {
      name
      description
      entitlements { name description value }
      version
      createdAtEpochMs
      updatedAtEpochMs
    }
    nextToken
  }
}";

const ADD_ENTITLEMENTS_SET: &str = "\
mutation AddEntitlementsSet($input: AddEntitlementsSetInput!) {
  addEntitlementsSet(input: $input) {
    name
    description
    entitlements { name description value }
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const SET_ENTITLEMENTS_SET: &str = "\
mutation SetEntitlementsSet($input: SetEntitlementsSetInput!) {
  setEntitlementsSet(input: $input) {
    name
    description
    entitlements { name description value }
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const REMOVE_ENTITLEMENTS_SET: &str = "\
mutation RemoveEntitlementsSet($input: RemoveEntitlementsSetInput!) {
  removeEntitlementsSet(input: $input) {
    name
    description
    entitlements { name description value }
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

impl AdminApi {
    pub(crate) async fn get_entitlements_set(
        &self,
        input: GetEntitlementsSetInput,
    ) -> Result<Option<EntitlementsSetWire>, AdminApiError> {
        self.query_optional(
            "getEntitlementsSet",
            GET_ENTITLEMENTS_SET,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn list_entitlements_sets(
        &self,
        next_token: Option<String>,
    ) -> Result<EntitlementsSetsConnectionWire, AdminApiError> {
        self.query_required(
            "listEntitlementsSets",
            LIST_ENTITLEMENTS_SETS,
            json!({ "nextToken": next_token }),
        )
        .await
    }

    pub(crate) async fn add_entitlements_set(
        &self,
        input: AddEntitlementsSetInput,
    ) -> Result<EntitlementsSetWire, AdminApiError> {
        self.mutate_required(
            "addEntitlementsSet",
            ADD_ENTITLEMENTS_SET,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn set_entitlements_set(
        &self,
        input: SetEntitlementsSetInput,
    ) -> Result<EntitlementsSetWire, AdminApiError> {
        self.mutate_required(
            "setEntitlementsSet",
            SET_ENTITLEMENTS_SET,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn remove_entitlements_set(
        &self,
        input: RemoveEntitlementsSetInput,
    ) -> Result<Option<EntitlementsSetWire>, AdminApiError> {
        self.mutate_optional(
            "removeEntitlementsSet",
            REMOVE_ENTITLEMENTS_SET,
            json!({ "input": input }),
        )
        .await
    }
}
