//! Administrative client for the entitlements service.
//!
//! Entitlements control what a user is allowed to do and how much of it.
//! They are administered as named sets, as sequences of sets that change
//! over time, and as direct per user assignments. This crate wraps the
//! service's GraphQL admin API behind typed methods, normalizing its
//! error reporting into the single [`AdminApiError`] taxonomy.
//!
//! ```no_run
//! use entitlements_admin::{ClientConfig, Credentials, EntitlementsAdmin};
//!
//! # async fn run() -> Result<(), entitlements_admin::AdminApiError> {
//! let config = ClientConfig::new("https://entitlements.example.com/graphql", "us-east-1")?;
//! let credentials = Credentials::from_api_key("admin-api-key");
//! let client = EntitlementsAdmin::new(&config, &credentials)?;
//!
//! let set = client.get_entitlements_set("basic").await?;
//! println!("{:?}", set);
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Transport facing API module
pub mod api;

/// Domain types
pub mod types;

pub use crate::api::error::AdminApiError;
pub use crate::api::transport::GraphQlTransport;
pub use crate::api::{ClientConfig, Credentials, IamCredentials};
pub use crate::types::connection::Connection;
pub use crate::types::entitlement::Entitlement;
pub use crate::types::entitlement_definition::EntitlementDefinition;
pub use crate::types::entitlements_sequence::{
    EntitlementsSequence, EntitlementsSequenceTransition, NewEntitlementsSequence,
};
pub use crate::types::entitlements_set::{EntitlementsSet, NewEntitlementsSet};
pub use crate::types::user_entitlements::{
    ApplyEntitlementsSequenceToUserOperation, ApplyEntitlementsSetToUserOperation,
    ApplyEntitlementsToUserOperation, EntitledUser, EntitlementConsumption,
    ExternalEntitlementsConsumption, ExternalUserEntitlements, ExternalUserEntitlementsResult,
};

use crate::api::types::entitlement::EntitlementWire;
use crate::api::types::entitlement_definition::GetEntitlementDefinitionInput;
use crate::api::types::entitlements_sequence::{
    AddEntitlementsSequenceInput, EntitlementsSequenceTransitionWire, GetEntitlementsSequenceInput,
    RemoveEntitlementsSequenceInput, SetEntitlementsSequenceInput,
};
use crate::api::types::entitlements_set::{
    AddEntitlementsSetInput, GetEntitlementsSetInput, RemoveEntitlementsSetInput,
    SetEntitlementsSetInput,
};
use crate::api::types::user_entitlements::{
    ApplyEntitlementsSequenceToUserInput, ApplyEntitlementsSequenceToUsersInput,
    ApplyEntitlementsSetToUserInput, ApplyEntitlementsSetToUsersInput,
    ApplyEntitlementsToUserInput, ApplyEntitlementsToUsersInput,
    ApplyExpendableEntitlementsToUserInput, GetEntitlementsForUserInput, RemoveEntitledUserInput,
};
use crate::api::AdminApi;

/// Administrative entitlements client.
///
/// All methods are fallible and report through [`AdminApiError`]. Lookups
/// of records that do not exist succeed with `None`; so do removals of
/// records that do not exist.
#[derive(Clone)]
pub struct EntitlementsAdmin {
    api: AdminApi,
}

impl EntitlementsAdmin {
    /// Creates a client talking HTTP to the configured endpoint.
    pub fn new(
        config: &ClientConfig,
        credentials: &Credentials,
    ) -> Result<EntitlementsAdmin, AdminApiError> {
        Ok(EntitlementsAdmin {
            api: AdminApi::new(config, credentials)?,
        })
    }

    /// Creates a client over a caller supplied transport. This is the seam
    /// for request signing transports and for tests.
    pub fn with_transport(transport: Arc<dyn GraphQlTransport>) -> EntitlementsAdmin {
        EntitlementsAdmin {
            api: AdminApi::with_transport(transport),
        }
    }

    /// Gets an entitlements set by name. Returns `None` when no set with
    /// that name exists.
    pub async fn get_entitlements_set(
        &self,
        name: &str,
    ) -> Result<Option<EntitlementsSet>, AdminApiError> {
        self.api
            .get_entitlements_set(GetEntitlementsSetInput {
                name: name.to_string(),
            })
            .await?
            .map(EntitlementsSet::try_from)
            .transpose()
    }

    /// Lists one page of entitlements sets.
    pub async fn list_entitlements_sets(
        &self,
        next_token: Option<String>,
    ) -> Result<Connection<EntitlementsSet>, AdminApiError> {
        let connection = self.api.list_entitlements_sets(next_token).await?;
        Ok(Connection {
            items: connection
                .items
                .into_iter()
                .map(EntitlementsSet::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            next_token: connection.next_token,
        })
    }

    /// Creates a new entitlements set.
    pub async fn add_entitlements_set(
        &self,
        set: NewEntitlementsSet,
    ) -> Result<EntitlementsSet, AdminApiError> {
        self.api
            .add_entitlements_set(AddEntitlementsSetInput {
                name: set.name,
                description: set.description,
                entitlements: set.entitlements.into_iter().map(EntitlementWire::from).collect(),
            })
            .await?
            .try_into()
    }

    /// Replaces the contents of an existing entitlements set.
    pub async fn set_entitlements_set(
        &self,
        set: NewEntitlementsSet,
    ) -> Result<EntitlementsSet, AdminApiError> {
        self.api
            .set_entitlements_set(SetEntitlementsSetInput {
                name: set.name,
                description: set.description,
                entitlements: set.entitlements.into_iter().map(EntitlementWire::from).collect(),
            })
            .await?
            .try_into()
    }

    /// Removes an entitlements set, returning it. Returns `None` when no
    /// set with that name exists.
    pub async fn remove_entitlements_set(
        &self,
        name: &str,
    ) -> Result<Option<EntitlementsSet>, AdminApiError> {
        self.api
            .remove_entitlements_set(RemoveEntitlementsSetInput {
                name: name.to_string(),
            })
            .await?
            .map(EntitlementsSet::try_from)
            .transpose()
    }

    /// Gets an entitlements sequence by name. Returns `None` when no
    /// sequence with that name exists.
    pub async fn get_entitlements_sequence(
        &self,
        name: &str,
    ) -> Result<Option<EntitlementsSequence>, AdminApiError> {
        self.api
            .get_entitlements_sequence(GetEntitlementsSequenceInput {
                name: name.to_string(),
            })
            .await?
            .map(EntitlementsSequence::try_from)
            .transpose()
    }

    /// Lists one page of entitlements sequences.
    pub async fn list_entitlements_sequences(
        &self,
        next_token: Option<String>,
    ) -> Result<Connection<EntitlementsSequence>, AdminApiError> {
        let connection = self.api.list_entitlements_sequences(next_token).await?;
        Ok(Connection {
            items: connection
                .items
                .into_iter()
                .map(EntitlementsSequence::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            next_token: connection.next_token,
        })
    }

    /// Creates a new entitlements sequence.
    pub async fn add_entitlements_sequence(
        &self,
        sequence: NewEntitlementsSequence,
    ) -> Result<EntitlementsSequence, AdminApiError> {
        self.api
            .add_entitlements_sequence(AddEntitlementsSequenceInput {
                name: sequence.name,
                description: sequence.description,
                transitions: sequence
                    .transitions
                    .into_iter()
                    .map(EntitlementsSequenceTransitionWire::from)
                    .collect(),
            })
            .await?
            .try_into()
    }

    /// Replaces the transitions of an existing entitlements sequence.
    pub async fn set_entitlements_sequence(
        &self,
        sequence: NewEntitlementsSequence,
    ) -> Result<EntitlementsSequence, AdminApiError> {
        self.api
            .set_entitlements_sequence(SetEntitlementsSequenceInput {
                name: sequence.name,
                description: sequence.description,
                transitions: sequence
                    .transitions
                    .into_iter()
                    .map(EntitlementsSequenceTransitionWire::from)
                    .collect(),
            })
            .await?
            .try_into()
    }

    /// Removes an entitlements sequence, returning it. Returns `None`
    /// when no sequence with that name exists.
    pub async fn remove_entitlements_sequence(
        &self,
        name: &str,
    ) -> Result<Option<EntitlementsSequence>, AdminApiError> {
        self.api
            .remove_entitlements_sequence(RemoveEntitlementsSequenceInput {
                name: name.to_string(),
            })
            .await?
            .map(EntitlementsSequence::try_from)
            .transpose()
    }

    /// Gets an entitlement definition by name. Returns `None` when the
    /// service defines no entitlement with that name.
    pub async fn get_entitlement_definition(
        &self,
        name: &str,
    ) -> Result<Option<EntitlementDefinition>, AdminApiError> {
        Ok(self
            .api
            .get_entitlement_definition(GetEntitlementDefinitionInput {
                name: name.to_string(),
            })
            .await?
            .map(EntitlementDefinition::from))
    }

    /// Lists one page of entitlement definitions.
    pub async fn list_entitlement_definitions(
        &self,
        limit: Option<i32>,
        next_token: Option<String>,
    ) -> Result<Connection<EntitlementDefinition>, AdminApiError> {
        let connection = self
            .api
            .list_entitlement_definitions(limit, next_token)
            .await?;
        Ok(Connection {
            items: connection
                .items
                .into_iter()
                .map(EntitlementDefinition::from)
                .collect(),
            next_token: connection.next_token,
        })
    }

    /// Gets a user's effective entitlements together with their
    /// consumption.
    pub async fn get_entitlements_for_user(
        &self,
        external_id: &str,
    ) -> Result<ExternalEntitlementsConsumption, AdminApiError> {
        self.api
            .get_entitlements_for_user(GetEntitlementsForUserInput {
                external_id: external_id.to_string(),
            })
            .await?
            .try_into()
    }

    /// Applies explicit entitlements to a user, replacing any set or
    /// sequence based assignment.
    pub async fn apply_entitlements_to_user(
        &self,
        external_id: &str,
        entitlements: Vec<Entitlement>,
    ) -> Result<ExternalUserEntitlements, AdminApiError> {
        self.api
            .apply_entitlements_to_user(ApplyEntitlementsToUserInput {
                external_id: external_id.to_string(),
                entitlements: entitlements.into_iter().map(EntitlementWire::from).collect(),
            })
            .await?
            .try_into()
    }

    /// Applies explicit entitlements to many users in one call. Elements
    /// fail independently; inspect each returned element.
    pub async fn apply_entitlements_to_users(
        &self,
        operations: Vec<ApplyEntitlementsToUserOperation>,
    ) -> Result<Vec<ExternalUserEntitlementsResult>, AdminApiError> {
        self.api
            .apply_entitlements_to_users(ApplyEntitlementsToUsersInput {
                operations: operations.into_iter().map(Into::into).collect(),
            })
            .await?
            .into_iter()
            .map(ExternalUserEntitlementsResult::try_from)
            .collect()
    }

    /// Entitles a user by entitlements set name.
    pub async fn apply_entitlements_set_to_user(
        &self,
        external_id: &str,
        entitlements_set_name: &str,
    ) -> Result<ExternalUserEntitlements, AdminApiError> {
        self.api
            .apply_entitlements_set_to_user(ApplyEntitlementsSetToUserInput {
                external_id: external_id.to_string(),
                entitlements_set_name: entitlements_set_name.to_string(),
            })
            .await?
            .try_into()
    }

    /// Entitles many users by entitlements set name in one call. Elements
    /// fail independently; inspect each returned element.
    pub async fn apply_entitlements_set_to_users(
        &self,
        operations: Vec<ApplyEntitlementsSetToUserOperation>,
    ) -> Result<Vec<ExternalUserEntitlementsResult>, AdminApiError> {
        self.api
            .apply_entitlements_set_to_users(ApplyEntitlementsSetToUsersInput {
                operations: operations.into_iter().map(Into::into).collect(),
            })
            .await?
            .into_iter()
            .map(ExternalUserEntitlementsResult::try_from)
            .collect()
    }

    /// Entitles a user by entitlements sequence name. Transitions are
    /// timed relative to `transitions_relative_to`, defaulting to the
    /// time of the call.
    pub async fn apply_entitlements_sequence_to_user(
        &self,
        external_id: &str,
        entitlements_sequence_name: &str,
        transitions_relative_to: Option<DateTime<Utc>>,
    ) -> Result<ExternalUserEntitlements, AdminApiError> {
        self.api
            .apply_entitlements_sequence_to_user(ApplyEntitlementsSequenceToUserInput {
                external_id: external_id.to_string(),
                entitlements_sequence_name: entitlements_sequence_name.to_string(),
                transitions_relative_to_epoch_ms: transitions_relative_to
                    .map(|at| at.timestamp_millis()),
            })
            .await?
            .try_into()
    }

    /// Entitles many users by entitlements sequence name in one call.
    /// Elements fail independently; inspect each returned element.
    pub async fn apply_entitlements_sequence_to_users(
        &self,
        operations: Vec<ApplyEntitlementsSequenceToUserOperation>,
    ) -> Result<Vec<ExternalUserEntitlementsResult>, AdminApiError> {
        self.api
            .apply_entitlements_sequence_to_users(ApplyEntitlementsSequenceToUsersInput {
                operations: operations.into_iter().map(Into::into).collect(),
            })
            .await?
            .into_iter()
            .map(ExternalUserEntitlementsResult::try_from)
            .collect()
    }

    /// Grants or revokes expendable entitlements for a user. Negative
    /// values revoke. `request_id` deduplicates retries of the same
    /// logical grant.
    pub async fn apply_expendable_entitlements_to_user(
        &self,
        external_id: &str,
        expendable_entitlements: Vec<Entitlement>,
        request_id: &str,
    ) -> Result<ExternalUserEntitlements, AdminApiError> {
        self.api
            .apply_expendable_entitlements_to_user(ApplyExpendableEntitlementsToUserInput {
                external_id: external_id.to_string(),
                expendable_entitlements: expendable_entitlements
                    .into_iter()
                    .map(EntitlementWire::from)
                    .collect(),
                request_id: request_id.to_string(),
            })
            .await?
            .try_into()
    }

    /// Removes a user and all of their entitlements. Returns `None` when
    /// the user is unknown to the entitlements service.
    pub async fn remove_entitled_user(
        &self,
        external_id: &str,
    ) -> Result<Option<EntitledUser>, AdminApiError> {
        Ok(self
            .api
            .remove_entitled_user(RemoveEntitledUserInput {
                external_id: external_id.to_string(),
            })
            .await?
            .map(EntitledUser::from))
    }
}
