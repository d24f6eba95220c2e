use chrono::{DateTime, Utc};

use crate::api::error::AdminApiError;
use crate::api::types::entitlements_set::EntitlementsSetWire;
use crate::types::datetime_from_epoch_ms;
use crate::types::entitlement::Entitlement;

/// A named, versioned set of entitlements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementsSet {
    /// Unique name of the set
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Entitlements granted by the set
    pub entitlements: Vec<Entitlement>,
    /// Version, incremented by the service on every update
    pub version: i64,
    /// When the set was created
    pub created_at: DateTime<Utc>,
    /// When the set was last updated
    pub updated_at: DateTime<Utc>,
}

/// Definition of an entitlements set to create or replace. Version and
/// timestamps are assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntitlementsSet {
    /// Unique name of the set
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Entitlements granted by the set
    pub entitlements: Vec<Entitlement>,
}

impl TryFrom<EntitlementsSetWire> for EntitlementsSet {
    type Error = AdminApiError;

    fn try_from(wire: EntitlementsSetWire) -> Result<EntitlementsSet, AdminApiError> {
        Ok(EntitlementsSet {
            name: wire.name,
            description: wire.description,
            entitlements: wire.entitlements.into_iter().map(Entitlement::from).collect(),
            version: wire.version,
            created_at: datetime_from_epoch_ms(wire.created_at_epoch_ms, "createdAtEpochMs")?,
            updated_at: datetime_from_epoch_ms(wire.updated_at_epoch_ms, "updatedAtEpochMs")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::entitlement::EntitlementWire;

    #[test]
    fn wire_set_converts_with_timestamps() {
        let wire = EntitlementsSetWire {
            name: "basic".to_string(),
            description: Some("basic tier".to_string()),
            entitlements: vec![EntitlementWire {
                name: "storage".to_string(),
                description: None,
                value: 5,
            }],
            version: 2,
            created_at_epoch_ms: 1_700_000_000_000,
            updated_at_epoch_ms: 1_700_000_100_000,
        };
        let set = EntitlementsSet::try_from(wire).unwrap();
        assert_eq!(set.name, "basic");
        assert_eq!(set.entitlements[0].value, 5);
        assert_eq!(set.created_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(set.updated_at.timestamp_millis(), 1_700_000_100_000);
    }
}
