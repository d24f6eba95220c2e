use chrono::{DateTime, Utc};

use crate::api::error::AdminApiError;
use crate::api::types::entitlement::EntitlementWire;
use crate::api::types::user_entitlements::{
    ApplyEntitlementsSequenceToUserInput, ApplyEntitlementsSetToUserInput,
    ApplyEntitlementsToUserInput, EntitlementConsumptionWire, EntitledUserWire,
    ExternalEntitlementsConsumptionWire, ExternalUserEntitlementsResultWire,
    ExternalUserEntitlementsWire,
};
use crate::types::datetime_from_epoch_ms;
use crate::types::entitlement::Entitlement;

/// Entitlements in effect for a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalUserEntitlements {
    /// External identity provider identifier of the user
    pub external_id: String,
    /// Internal owner id, present once the user has redeemed
    pub owner: Option<String>,
    /// Name of the entitlements set applied, if entitled by set
    pub entitlements_set_name: Option<String>,
    /// Name of the entitlements sequence applied, if entitled by sequence
    pub entitlements_sequence_name: Option<String>,
    /// Effective entitlements
    pub entitlements: Vec<Entitlement>,
    /// Accumulated expendable entitlements
    pub expendable_entitlements: Vec<Entitlement>,
    /// Reference point for sequence transitions, when entitled by sequence
    pub transitions_relative_to: Option<DateTime<Utc>>,
    /// Combined version. The integer part is the user entitlements version;
    /// the fractional part is the applied set's version divided by 100000.
    pub version: f64,
    /// When the user's entitlements were first assigned
    pub created_at: DateTime<Utc>,
    /// When the user's entitlements were last changed
    pub updated_at: DateTime<Utc>,
}

/// Consumption state of one entitlement for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementConsumption {
    /// Name of the consumed entitlement
    pub name: String,
    /// Entitled quantity
    pub value: i64,
    /// Remaining quantity
    pub available: i64,
    /// Consumed quantity
    pub consumed: i64,
    /// When the entitlement was first consumed
    pub first_consumed_at: Option<DateTime<Utc>>,
    /// When the entitlement was most recently consumed
    pub last_consumed_at: Option<DateTime<Utc>>,
}

/// A user's entitlements together with their consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalEntitlementsConsumption {
    /// The user's effective entitlements
    pub entitlements: ExternalUserEntitlements,
    /// Consumption of those entitlements. Entitlements that have never
    /// been consumed have no entry here.
    pub consumption: Vec<EntitlementConsumption>,
}

/// A user removed from the entitlements service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitledUser {
    /// External identity provider identifier of the user
    pub external_id: String,
}

/// Outcome of one element of a bulk apply operation. Elements fail
/// independently; a failed element never aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalUserEntitlementsResult {
    /// The element succeeded
    Entitlements(ExternalUserEntitlements),
    /// The element failed with a service reported error
    Error(AdminApiError),
}

/// One element of a bulk entitlements apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyEntitlementsToUserOperation {
    /// User to update
    pub external_id: String,
    /// Entitlements to apply
    pub entitlements: Vec<Entitlement>,
}

/// One element of a bulk entitlements set apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyEntitlementsSetToUserOperation {
    /// User to update
    pub external_id: String,
    /// Entitlements set to apply
    pub entitlements_set_name: String,
}

/// One element of a bulk entitlements sequence apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyEntitlementsSequenceToUserOperation {
    /// User to update
    pub external_id: String,
    /// Entitlements sequence to apply
    pub entitlements_sequence_name: String,
    /// Reference point for the sequence's transitions. Defaults to the
    /// time of the call when absent.
    pub transitions_relative_to: Option<DateTime<Utc>>,
}

impl TryFrom<ExternalUserEntitlementsWire> for ExternalUserEntitlements {
    type Error = AdminApiError;

    fn try_from(wire: ExternalUserEntitlementsWire) -> Result<ExternalUserEntitlements, AdminApiError> {
        let transitions_relative_to = wire
            .transitions_relative_to_epoch_ms
            .map(|ms| datetime_from_epoch_ms(ms, "transitionsRelativeToEpochMs"))
            .transpose()?;
        Ok(ExternalUserEntitlements {
            external_id: wire.external_id,
            owner: wire.owner,
            entitlements_set_name: wire.entitlements_set_name,
            entitlements_sequence_name: wire.entitlements_sequence_name,
            entitlements: wire.entitlements.into_iter().map(Entitlement::from).collect(),
            expendable_entitlements: wire
                .expendable_entitlements
                .into_iter()
                .map(Entitlement::from)
                .collect(),
            transitions_relative_to,
            version: wire.version,
            created_at: datetime_from_epoch_ms(wire.created_at_epoch_ms, "createdAtEpochMs")?,
            updated_at: datetime_from_epoch_ms(wire.updated_at_epoch_ms, "updatedAtEpochMs")?,
        })
    }
}

impl TryFrom<EntitlementConsumptionWire> for EntitlementConsumption {
    type Error = AdminApiError;

    fn try_from(wire: EntitlementConsumptionWire) -> Result<EntitlementConsumption, AdminApiError> {
        let first_consumed_at = wire
            .first_consumed_at_epoch_ms
            .map(|ms| datetime_from_epoch_ms(ms, "firstConsumedAtEpochMs"))
            .transpose()?;
        let last_consumed_at = wire
            .last_consumed_at_epoch_ms
            .map(|ms| datetime_from_epoch_ms(ms, "lastConsumedAtEpochMs"))
            .transpose()?;
        Ok(EntitlementConsumption {
            name: wire.name,
            value: wire.value,
            available: wire.available,
            consumed: wire.consumed,
            first_consumed_at,
            last_consumed_at,
        })
    }
}

impl TryFrom<ExternalEntitlementsConsumptionWire> for ExternalEntitlementsConsumption {
    type Error = AdminApiError;

    fn try_from(
        wire: ExternalEntitlementsConsumptionWire,
    ) -> Result<ExternalEntitlementsConsumption, AdminApiError> {
        Ok(ExternalEntitlementsConsumption {
            entitlements: ExternalUserEntitlements::try_from(wire.entitlements)?,
            consumption: wire
                .consumption
                .into_iter()
                .map(EntitlementConsumption::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl From<EntitledUserWire> for EntitledUser {
    fn from(wire: EntitledUserWire) -> EntitledUser {
        EntitledUser {
            external_id: wire.external_id,
        }
    }
}

impl TryFrom<ExternalUserEntitlementsResultWire> for ExternalUserEntitlementsResult {
    type Error = AdminApiError;

    fn try_from(
        wire: ExternalUserEntitlementsResultWire,
    ) -> Result<ExternalUserEntitlementsResult, AdminApiError> {
        match wire {
            ExternalUserEntitlementsResultWire::Entitlements(entitlements) => Ok(
                ExternalUserEntitlementsResult::Entitlements(entitlements.try_into()?),
            ),
            ExternalUserEntitlementsResultWire::Error(error) => {
                Ok(ExternalUserEntitlementsResult::Error(
                    AdminApiError::from_error_code(Some(&error.error)),
                ))
            }
        }
    }
}

impl From<ApplyEntitlementsToUserOperation> for ApplyEntitlementsToUserInput {
    fn from(operation: ApplyEntitlementsToUserOperation) -> ApplyEntitlementsToUserInput {
        ApplyEntitlementsToUserInput {
            external_id: operation.external_id,
            entitlements: operation
                .entitlements
                .into_iter()
                .map(EntitlementWire::from)
                .collect(),
        }
    }
}

impl From<ApplyEntitlementsSetToUserOperation> for ApplyEntitlementsSetToUserInput {
    fn from(operation: ApplyEntitlementsSetToUserOperation) -> ApplyEntitlementsSetToUserInput {
        ApplyEntitlementsSetToUserInput {
            external_id: operation.external_id,
            entitlements_set_name: operation.entitlements_set_name,
        }
    }
}

impl From<ApplyEntitlementsSequenceToUserOperation> for ApplyEntitlementsSequenceToUserInput {
    fn from(
        operation: ApplyEntitlementsSequenceToUserOperation,
    ) -> ApplyEntitlementsSequenceToUserInput {
        ApplyEntitlementsSequenceToUserInput {
            external_id: operation.external_id,
            entitlements_sequence_name: operation.entitlements_sequence_name,
            transitions_relative_to_epoch_ms: operation
                .transitions_relative_to
                .map(|at| at.timestamp_millis()),
        }
    }
}
