use crate::api::types::entitlement_definition::EntitlementDefinitionWire;

/// Service side definition of an entitlement that may be granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementDefinition {
    /// Name of the entitlement
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Value type of the entitlement. Kept opaque so new server side
    /// types do not break decoding; currently `numeric` or `boolean`.
    pub definition_type: String,
    /// Whether the entitlement is expendable, consumed by explicit
    /// expenditure rather than by ongoing use
    pub expendable: bool,
}

impl From<EntitlementDefinitionWire> for EntitlementDefinition {
    fn from(wire: EntitlementDefinitionWire) -> EntitlementDefinition {
        EntitlementDefinition {
            name: wire.name,
            description: wire.description,
            definition_type: wire.definition_type,
            expendable: wire.expendable,
        }
    }
}
