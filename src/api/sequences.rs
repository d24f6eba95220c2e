use serde_json::json;

use crate::api::error::AdminApiError;
use crate::api::types::entitlements_sequence::{
    AddEntitlementsSequenceInput, EntitlementsSequenceWire, EntitlementsSequencesConnectionWire,
    GetEntitlementsSequenceInput, RemoveEntitlementsSequenceInput, SetEntitlementsSequenceInput,
};
use crate::api::AdminApi;

const GET_ENTITLEMENTS_SEQUENCE: &str = "\
query GetEntitlementsSequence($input: GetEntitlementsSequenceInput!) {
  getEntitlementsSequence(input: $input) {
    name
    description
    transitions { entitlementsSetName duration }
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const LIST_ENTITLEMENTS_SEQUENCES: &str = "\
query ListEntitlementsSequences($nextToken: String) {
  listEntitlementsSequences(nextToken: $nextToken) {
    items {
      name
      description
      transitions { entitlementsSetName duration }
      version
      createdAtEpochMs
      updatedAtEpochMs
    }
    nextToken
  }
}";

const ADD_ENTITLEMENTS_SEQUENCE: &str = "\
mutation AddEntitlementsSequence($input: AddEntitlementsSequenceInput!) {
  addEntitlementsSequence(input: $input) {
    name
    description
    transitions { entitlementsSetName duration }
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const SET_ENTITLEMENTS_SEQUENCE: &str = "\
mutation SetEntitlementsSequence($input: SetEntitlementsSequenceInput!) {
  setEntitlementsSequence(input: $input) {
    name
    description
    transitions { entitlementsSetName duration }
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const REMOVE_ENTITLEMENTS_SEQUENCE: &str = "\
mutation RemoveEntitlementsSequence($input: RemoveEntitlementsSequenceInput!) {
  removeEntitlementsSequence(input: $input) {
    name
    description
    transitions { entitlementsSetName duration }
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

impl AdminApi {
    pub(crate) async fn get_entitlements_sequence(
        &self,
        input: GetEntitlementsSequenceInput,
    ) -> Result<Option<EntitlementsSequenceWire>, AdminApiError> {
        self.query_optional(
            "getEntitlementsSequence",
            GET_ENTITLEMENTS_SEQUENCE,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn list_entitlements_sequences(
        &self,
        next_token: Option<String>,
    ) -> Result<EntitlementsSequencesConnectionWire, AdminApiError> {
        self.query_required(
            "listEntitlementsSequences",
            LIST_ENTITLEMENTS_SEQUENCES,
            json!({ "nextToken": next_token }),
        )
        .await
    }

    pub(crate) async fn add_entitlements_sequence(
        &self,
        input: AddEntitlementsSequenceInput,
    ) -> Result<EntitlementsSequenceWire, AdminApiError> {
        self.mutate_required(
            "addEntitlementsSequence",
            ADD_ENTITLEMENTS_SEQUENCE,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn set_entitlements_sequence(
        &self,
        input: SetEntitlementsSequenceInput,
    ) -> Result<EntitlementsSequenceWire, AdminApiError> {
        self.mutate_required(
            "setEntitlementsSequence",
            SET_ENTITLEMENTS_SEQUENCE,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn remove_entitlements_sequence(
        &self,
        input: RemoveEntitlementsSequenceInput,
    ) -> Result<Option<EntitlementsSequenceWire>, AdminApiError> {
        self.mutate_optional(
            "removeEntitlementsSequence",
            REMOVE_ENTITLEMENTS_SEQUENCE,
            json!({ "input": input }),
        )
        .await
    }
}
