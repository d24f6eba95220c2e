use serde_json::json;

use crate::api::error::AdminApiError;
use crate::api::types::entitlement_definition::{
    EntitlementDefinitionConnectionWire, EntitlementDefinitionWire, GetEntitlementDefinitionInput,
};
use crate::api::AdminApi;

const GET_ENTITLEMENT_DEFINITION: &str = "\
query GetEntitlementDefinition($input: GetEntitlementDefinitionInput!) {
  getEntitlementDefinition(input: $input) {
    name
    description
    type
    expendable
  }
}";

const LIST_ENTITLEMENT_DEFINITIONS: &str = "\
query ListEntitlementDefinitions($limit: Int, $nextToken: String) {
  listEntitlementDefinitions(limit: $limit, nextToken: $nextToken) {
    items {
      name
      description
      type
      expendable
    }
    nextToken
  }
}";

impl AdminApi {
    pub(crate) async fn get_entitlement_definition(
        &self,
        input: GetEntitlementDefinitionInput,
    ) -> Result<Option<EntitlementDefinitionWire>, AdminApiError> {
        self.query_optional(
            "getEntitlementDefinition",
            GET_ENTITLEMENT_DEFINITION,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn list_entitlement_definitions(
        &self,
        limit: Option<i32>,
        next_token: Option<String>,
    ) -> Result<EntitlementDefinitionConnectionWire, AdminApiError> {
        self.query_required(
            "listEntitlementDefinitions",
            LIST_ENTITLEMENT_DEFINITIONS,
            json!({ "limit": limit, "nextToken": next_token }),
        )
        .await
    }
}
