use chrono::{DateTime, Utc};

use crate::api::error::AdminApiError;
use crate::api::types::entitlements_sequence::{
    EntitlementsSequenceTransitionWire, EntitlementsSequenceWire,
};
use crate::types::datetime_from_epoch_ms;

/// One step in an entitlements sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementsSequenceTransition {
    /// Name of the entitlements set active during this step
    pub entitlements_set_name: String,
    /// ISO 8601 period the step lasts. Absent on the final step, which
    /// holds indefinitely.
    pub duration: Option<String>,
}

/// A named, versioned ordered list of entitlements set transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementsSequence {
    /// Unique name of the sequence
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Ordered transitions making up the sequence
    pub transitions: Vec<EntitlementsSequenceTransition>,
    /// Version, incremented by the service on every update
    pub version: i64,
    /// When the sequence was created
    pub created_at: DateTime<Utc>,
    /// When the sequence was last updated
    pub updated_at: DateTime<Utc>,
}

/// Definition of an entitlements sequence to create or replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntitlementsSequence {
    /// Unique name of the sequence
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Ordered transitions making up the sequence
    pub transitions: Vec<EntitlementsSequenceTransition>,
}

impl From<EntitlementsSequenceTransitionWire> for EntitlementsSequenceTransition {
    fn from(wire: EntitlementsSequenceTransitionWire) -> EntitlementsSequenceTransition {
        EntitlementsSequenceTransition {
            entitlements_set_name: wire.entitlements_set_name,
            duration: wire.duration,
        }
    }
}

impl From<EntitlementsSequenceTransition> for EntitlementsSequenceTransitionWire {
    fn from(transition: EntitlementsSequenceTransition) -> EntitlementsSequenceTransitionWire {
        EntitlementsSequenceTransitionWire {
            entitlements_set_name: transition.entitlements_set_name,
            duration: transition.duration,
        }
    }
}

impl TryFrom<EntitlementsSequenceWire> for EntitlementsSequence {
    type Error = AdminApiError;

    fn try_from(wire: EntitlementsSequenceWire) -> Result<EntitlementsSequence, AdminApiError> {
        Ok(EntitlementsSequence {
            name: wire.name,
            description: wire.description,
            transitions: wire
                .transitions
                .into_iter()
                .map(EntitlementsSequenceTransition::from)
                .collect(),
            version: wire.version,
            created_at: datetime_from_epoch_ms(wire.created_at_epoch_ms, "createdAtEpochMs")?,
            updated_at: datetime_from_epoch_ms(wire.updated_at_epoch_ms, "updatedAtEpochMs")?,
        })
    }
}
