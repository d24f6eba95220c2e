use serde_json::json;

use crate::api::error::AdminApiError;
use crate::api::types::user_entitlements::{
    ApplyEntitlementsSequenceToUserInput, ApplyEntitlementsSequenceToUsersInput,
    ApplyEntitlementsSetToUserInput, ApplyEntitlementsSetToUsersInput,
    ApplyEntitlementsToUserInput, ApplyEntitlementsToUsersInput,
    ApplyExpendableEntitlementsToUserInput, EntitledUserWire,
    ExternalEntitlementsConsumptionWire, ExternalUserEntitlementsResultWire,
    ExternalUserEntitlementsWire, GetEntitlementsForUserInput, RemoveEntitledUserInput,
};
use crate::api::AdminApi;

// The user entitlements selection is shared verbatim by every operation
// below; the bulk operations add the union error arm on top of it.

const GET_ENTITLEMENTS_FOR_USER: &str = "\
query GetEntitlementsForUser($input: GetEntitlementsForUserInput!) {
  getEntitlementsForUser(input: $input) {
    entitlements {
      externalId
      owner
      entitlementsSetName
      entitlementsSequenceName
      entitlements { name description value }
      expendableEntitlements { name description value }
      transitionsRelativeToEpochMs
      version
      createdAtEpochMs
      updatedAtEpochMs
    }
    consumption {
      name
      value
      available
      consumed
      firstConsumedAtEpochMs
      lastConsumedAtEpochMs
    }
  }
}";

const APPLY_ENTITLEMENTS_TO_USER: &str = "\
mutation ApplyEntitlementsToUser($input: ApplyEntitlementsToUserInput!) {
  applyEntitlementsToUser(input: $input) {
    externalId
    owner
    entitlementsSetName
    entitlementsSequenceName
    entitlements { name description value }
    expendableEntitlements { name description value }
    transitionsRelativeToEpochMs
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const APPLY_ENTITLEMENTS_TO_USERS: &str = "\
mutation ApplyEntitlementsToUsers($input: ApplyEntitlementsToUsersInput!) {
  applyEntitlementsToUsers(input: $input) {
    ... on ExternalUserEntitlements {
      __typename
      externalId
      owner
      entitlementsSetName
      entitlementsSequenceName
      entitlements { name description value }
      expendableEntitlements { name description value }
      transitionsRelativeToEpochMs
      version
      createdAtEpochMs
      updatedAtEpochMs
    }
    ... on ExternalUserEntitlementsError {
      __typename
      error
    }
  }
}";

const APPLY_ENTITLEMENTS_SET_TO_USER: &str = "\
mutation ApplyEntitlementsSetToUser($input: ApplyEntitlementsSetToUserInput!) {
  applyEntitlementsSetToUser(input: $input) {
    externalId
    owner
    entitlementsSetName
    entitlementsSequenceName
    entitlements { name description value }
    expendableEntitlements { name description value }
    transitionsRelativeToEpochMs
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const APPLY_ENTITLEMENTS_SET_TO_USERS: &str = "\
mutation ApplyEntitlementsSetToUsers($input: ApplyEntitlementsSetToUsersInput!) {
  applyEntitlementsSetToUsers(input: $input) {
    ... on ExternalUserEntitlements {
      __typename
      externalId
      owner
      entitlementsSetName
      entitlementsSequenceName
      entitlements { name description value }
      expendableEntitlements { name description value }
      transitionsRelativeToEpochMs
      version
      createdAtEpochMs
      updatedAtEpochMs
    }
    ... on ExternalUserEntitlementsError {
      __typename
      error
    }
  }
}";

const APPLY_ENTITLEMENTS_SEQUENCE_TO_USER: &str = "\
mutation ApplyEntitlementsSequenceToUser($input: ApplyEntitlementsSequenceToUserInput!) {
  applyEntitlementsSequenceToUser(input: $input) {
    externalId
    owner
    entitlementsSetName
    entitlementsSequenceName
    entitlements { name description value }
    expendableEntitlements { name description value }
    transitionsRelativeToEpochMs
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const APPLY_ENTITLEMENTS_SEQUENCE_TO_USERS: &str = "\
mutation ApplyEntitlementsSequenceToUsers($input: ApplyEntitlementsSequenceToUsersInput!) {
  applyEntitlementsSequenceToUsers(input: $input) {
    ... on ExternalUserEntitlements {
      __typename
      externalId
      owner
      entitlementsSetName
      entitlementsSequenceName
      entitlements { name description value }
      expendableEntitlements { name description value }
      transitionsRelativeToEpochMs
      version
      createdAtEpochMs
      updatedAtEpochMs
    }
    ... on ExternalUserEntitlementsError {
      __typename
      error
    }
  }
}";

const APPLY_EXPENDABLE_ENTITLEMENTS_TO_USER: &str = "\
mutation ApplyExpendableEntitlementsToUser($input: ApplyExpendableEntitlementsToUserInput!) {
  applyExpendableEntitlementsToUser(input: $input) {
    externalId
    owner
    entitlementsSetName
    entitlementsSequenceName
    entitlements { name description value }
    expendableEntitlements { name description value }
    transitionsRelativeToEpochMs
    version
    createdAtEpochMs
    updatedAtEpochMs
  }
}";

const REMOVE_ENTITLED_USER: &str = "\
mutation RemoveEntitledUser($input: RemoveEntitledUserInput!) {
  removeEntitledUser(input: $input) {
    externalId
  }
}";

impl AdminApi {
    pub(crate) async fn get_entitlements_for_user(
        &self,
        input: GetEntitlementsForUserInput,
    ) -> Result<ExternalEntitlementsConsumptionWire, AdminApiError> {
        self.query_required(
            "getEntitlementsForUser",
            GET_ENTITLEMENTS_FOR_USER,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn apply_entitlements_to_user(
        &self,
        input: ApplyEntitlementsToUserInput,
    ) -> Result<ExternalUserEntitlementsWire, AdminApiError> {
        self.mutate_required(
            "applyEntitlementsToUser",
            APPLY_ENTITLEMENTS_TO_USER,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn apply_entitlements_to_users(
        &self,
        input: ApplyEntitlementsToUsersInput,
    ) -> Result<Vec<ExternalUserEntitlementsResultWire>, AdminApiError> {
        self.mutate_required(
            "applyEntitlementsToUsers",
            APPLY_ENTITLEMENTS_TO_USERS,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn apply_entitlements_set_to_user(
        &self,
        input: ApplyEntitlementsSetToUserInput,
    ) -> Result<ExternalUserEntitlementsWire, AdminApiError> {
        self.mutate_required(
            "applyEntitlementsSetToUser",
            APPLY_ENTITLEMENTS_SET_TO_USER,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn apply_entitlements_set_to_users(
        &self,
        input: ApplyEntitlementsSetToUsersInput,
    ) -> Result<Vec<ExternalUserEntitlementsResultWire>, AdminApiError> {
        self.mutate_required(
            "applyEntitlementsSetToUsers",
            APPLY_ENTITLEMENTS_SET_TO_USERS,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn apply_entitlements_sequence_to_user(
        &self,
        input: ApplyEntitlementsSequenceToUserInput,
    ) -> Result<ExternalUserEntitlementsWire, AdminApiError> {
        self.mutate_required(
            "applyEntitlementsSequenceToUser",
            APPLY_ENTITLEMENTS_SEQUENCE_TO_USER,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn apply_entitlements_sequence_to_users(
        &self,
        input: ApplyEntitlementsSequenceToUsersInput,
    ) -> Result<Vec<ExternalUserEntitlementsResultWire>, AdminApiError> {
        self.mutate_required(
            "applyEntitlementsSequenceToUsers",
            APPLY_ENTITLEMENTS_SEQUENCE_TO_USERS,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn apply_expendable_entitlements_to_user(
        &self,
        input: ApplyExpendableEntitlementsToUserInput,
    ) -> Result<ExternalUserEntitlementsWire, AdminApiError> {
        self.mutate_required(
            "applyExpendableEntitlementsToUser",
            APPLY_EXPENDABLE_ENTITLEMENTS_TO_USER,
            json!({ "input": input }),
        )
        .await
    }

    pub(crate) async fn remove_entitled_user(
        &self,
        input: RemoveEntitledUserInput,
    ) -> Result<Option<EntitledUserWire>, AdminApiError> {
        self.mutate_optional(
            "removeEntitledUser",
            REMOVE_ENTITLED_USER,
            json!({ "input": input }),
        )
        .await
    }
}
