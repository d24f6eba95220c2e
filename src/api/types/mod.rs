/// Entitlement wire shapes
pub mod entitlement;

/// Entitlements set wire shapes
pub mod entitlements_set;

/// Entitlements sequence wire shapes
pub mod entitlements_sequence;

/// Entitlement definition wire shapes
pub mod entitlement_definition;

/// Per-user entitlements wire shapes
pub mod user_entitlements;
