use chrono::{DateTime, Utc};

use crate::api::error::AdminApiError;

/// Generic paginated page of results
pub mod connection;

/// Single entitlement
pub mod entitlement;

/// Named entitlements sets
pub mod entitlements_set;

/// Sequences of entitlements sets
pub mod entitlements_sequence;

/// Entitlement definitions
pub mod entitlement_definition;

/// Per-user entitlements, consumption and bulk operation results
pub mod user_entitlements;

/// Converts an epoch milliseconds timestamp from the wire into a UTC
/// datetime. Out of range values are a contract bug on the server side.
pub(crate) fn datetime_from_epoch_ms(
    epoch_ms: i64,
    field: &str,
) -> Result<DateTime<Utc>, AdminApiError> {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms).ok_or_else(|| {
        AdminApiError::Fatal(format!("{} is not a valid timestamp: {}", field, epoch_ms))
    })
}
