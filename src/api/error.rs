use std::error::Error;
use std::fmt;

use crate::api::transport::TransportError;

/// Namespace prefix of the entitlements service's own error codes.
const ENTITLEMENTS_ERROR_PREFIX: &str = "sudoplatform.entitlements.";

/// Error enum for the entitlements admin API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminApiError {
    /// One or more entitlement names in the request are not recognized
    InvalidEntitlements,
    /// The named entitlements set does not exist
    EntitlementsSetNotFound,
    /// An entitlements set with that name already exists
    EntitlementsSetAlreadyExists,
    /// The entitlements set is protected and cannot be modified
    EntitlementsSetImmutable,
    /// The entitlements set is referenced by an entitlements sequence
    EntitlementsSetInUse,
    /// The named entitlements sequence does not exist
    EntitlementsSequenceNotFound,
    /// An entitlements sequence with that name already exists
    EntitlementsSequenceAlreadyExists,
    /// The entitlements sequence is already being updated
    EntitlementsSequenceUpdateInProgress,
    /// The record was updated with a later version by another caller
    AlreadyUpdated,
    /// The same user is targeted more than once in a bulk call
    BulkOperationDuplicateUsers,
    /// The same entitlement name is repeated within a single request
    DuplicateEntitlement,
    /// An expendable entitlement balance would become negative
    NegativeEntitlement,
    /// An expendable entitlement balance would overflow
    OverflowedEntitlement,
    /// The user has no entitlements defined
    NoEntitlements,
    /// A service limit would be exceeded
    LimitExceeded,
    /// The user's entitlements do not permit the operation
    InsufficientEntitlements,
    /// The service failed internally
    Service,
    /// The service could not decode the request
    Decode,
    /// An argument was rejected by the service
    InvalidArgument,
    /// Protocol violation - see the contents. Not recoverable
    Fatal(String),
    /// Unrecognized GraphQL error - carries the original code or message
    UnknownGraphQl(String),
    /// Network level failure, distinct from any service response
    Network(String),
    /// The client configuration is unusable
    Configuration(String),
}

impl fmt::Display for AdminApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AdminApiError::InvalidEntitlements => {
                write!(f, "Invalid entitlements")
            }
            AdminApiError::EntitlementsSetNotFound => {
                write!(f, "Entitlements set not found")
            }
            AdminApiError::EntitlementsSetAlreadyExists => {
                write!(f, "Entitlements set already exists")
            }
            AdminApiError::EntitlementsSetImmutable => {
                write!(f, "Entitlements set is immutable")
            }
            AdminApiError::EntitlementsSetInUse => {
                write!(f, "Entitlements set is in use")
            }
            AdminApiError::EntitlementsSequenceNotFound => {
                write!(f, "Entitlements sequence not found")
            }
            AdminApiError::EntitlementsSequenceAlreadyExists => {
                write!(f, "Entitlements sequence already exists")
            }
            AdminApiError::EntitlementsSequenceUpdateInProgress => {
                write!(f, "Entitlements sequence update is in progress")
            }
            AdminApiError::AlreadyUpdated => {
                write!(f, "Record has already been updated with a later version")
            }
            AdminApiError::BulkOperationDuplicateUsers => {
                write!(f, "Bulk operation targets the same user more than once")
            }
            AdminApiError::DuplicateEntitlement => {
                write!(f, "Duplicate entitlement in request")
            }
            AdminApiError::NegativeEntitlement => {
                write!(f, "Entitlement balance would be negative")
            }
            AdminApiError::OverflowedEntitlement => {
                write!(f, "Entitlement balance would overflow")
            }
            AdminApiError::NoEntitlements => {
                write!(f, "No entitlements defined for user")
            }
            AdminApiError::LimitExceeded => {
                write!(f, "Limit exceeded")
            }
            AdminApiError::InsufficientEntitlements => {
                write!(f, "Insufficient entitlements")
            }
            AdminApiError::Service => {
                write!(f, "Service error")
            }
            AdminApiError::Decode => {
                write!(f, "Decoding error")
            }
            AdminApiError::InvalidArgument => {
                write!(f, "Invalid argument")
            }
            AdminApiError::Fatal(m) => {
                write!(f, "Fatal error: {}", m)
            }
            AdminApiError::UnknownGraphQl(m) => {
                write!(f, "Unknown GraphQL error: {}", m)
            }
            AdminApiError::Network(m) => {
                write!(f, "Network error: {}", m)
            }
            AdminApiError::Configuration(m) => {
                write!(f, "Configuration error: {}", m)
            }
        }
    }
}

impl Error for AdminApiError {}

impl AdminApiError {
    /// Maps a wire error code to its client error.
    ///
    /// Total and deterministic: a code inside the entitlements namespace maps
    /// to its dedicated variant, any other recognized platform code maps to
    /// the shared cross-service variant, anything else becomes
    /// [`AdminApiError::UnknownGraphQl`] carrying the original code. A
    /// missing code maps to [`AdminApiError::Fatal`].
    pub fn from_error_code(code: Option<&str>) -> AdminApiError {
        let code = match code {
            Some(code) => code,
            None => return AdminApiError::Fatal("no error to map".to_string()),
        };
        if let Some(kind) = code.strip_prefix(ENTITLEMENTS_ERROR_PREFIX) {
            match kind {
                "AlreadyUpdatedError" => return AdminApiError::AlreadyUpdated,
                "BulkOperationDuplicateUsersError" => {
                    return AdminApiError::BulkOperationDuplicateUsers
                }
                "DuplicateEntitlementError" => return AdminApiError::DuplicateEntitlement,
                "EntitlementsSequenceAlreadyExistsError" => {
                    return AdminApiError::EntitlementsSequenceAlreadyExists
                }
                "EntitlementsSequenceNotFoundError" => {
                    return AdminApiError::EntitlementsSequenceNotFound
                }
                "EntitlementsSequenceUpdateInProgressError" => {
                    return AdminApiError::EntitlementsSequenceUpdateInProgress
                }
                "EntitlementsSetAlreadyExistsError" => {
                    return AdminApiError::EntitlementsSetAlreadyExists
                }
                "EntitlementsSetImmutableError" => return AdminApiError::EntitlementsSetImmutable,
                "EntitlementsSetInUseError" => return AdminApiError::EntitlementsSetInUse,
                "EntitlementsSetNotFoundError" => return AdminApiError::EntitlementsSetNotFound,
                "InvalidEntitlementsError" => return AdminApiError::InvalidEntitlements,
                "NegativeEntitlementError" => return AdminApiError::NegativeEntitlement,
                "OverflowedEntitlementError" => return AdminApiError::OverflowedEntitlement,
                _ => {}
            }
        }
        AdminApiError::from_platform_code(code)
    }

    /// Cross-service mapping shared by all platform service clients.
    fn from_platform_code(code: &str) -> AdminApiError {
        match code {
            "sudoplatform.ServiceError" => AdminApiError::Service,
            "sudoplatform.DecodingError" => AdminApiError::Decode,
            "sudoplatform.InvalidArgumentError" => AdminApiError::InvalidArgument,
            "sudoplatform.LimitExceededError" => AdminApiError::LimitExceeded,
            "sudoplatform.NoEntitlementsError" => AdminApiError::NoEntitlements,
            "sudoplatform.InsufficientEntitlementsError" => {
                AdminApiError::InsufficientEntitlements
            }
            other => AdminApiError::UnknownGraphQl(other.to_string()),
        }
    }
}

/// Classifies a transport failure into a client error.
///
/// Fixed priority: network marker, then batched GraphQL errors, then a
/// direct error code, then unknown. This is the single conversion point for
/// anything the transport raises.
pub(crate) fn classify_transport_error(error: TransportError) -> AdminApiError {
    match error {
        TransportError::Network { message } => AdminApiError::Network(message),
        TransportError::GraphQl { errors } => match errors.first() {
            Some(detail) => AdminApiError::from_error_code(Some(detail.code())),
            None => AdminApiError::Fatal("no error to map".to_string()),
        },
        TransportError::ErrorType { error_type, .. } => {
            AdminApiError::from_error_code(Some(&error_type))
        }
        TransportError::Other { message } => AdminApiError::UnknownGraphQl(message),
    }
}
