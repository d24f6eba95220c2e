use crate::api::types::entitlement::EntitlementWire;

/// A single named entitlement with its granted quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entitlement {
    /// Name of the entitlement
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Granted quantity
    pub value: i64,
}

impl From<EntitlementWire> for Entitlement {
    fn from(wire: EntitlementWire) -> Entitlement {
        Entitlement {
            name: wire.name,
            description: wire.description,
            value: wire.value,
        }
    }
}

impl From<Entitlement> for EntitlementWire {
    fn from(entitlement: Entitlement) -> EntitlementWire {
        EntitlementWire {
            name: entitlement.name,
            description: entitlement.description,
            value: entitlement.value,
        }
    }
}
