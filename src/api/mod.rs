use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::error::{classify_transport_error, AdminApiError};
use crate::api::transport::{GraphQlRequest, GraphQlTransport, HttpGraphQlTransport};

/// Module holding the wire types
pub mod types;

/// Error type
pub mod error;

/// GraphQL transport collaborator
pub mod transport;

/// Entitlements set methods
pub mod sets;

/// Entitlements sequence methods
pub mod sequences;

/// Entitlement definition methods
pub mod definitions;

/// User entitlements methods
pub mod users;

/// Client configuration for reaching the entitlements admin API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint of the admin API.
    pub api_url: Url,
    /// Service region the endpoint lives in. Unused by the default
    /// transport; request-signing transports need it.
    pub region: String,
}

impl ClientConfig {
    /// Builds a configuration, validating the endpoint URL.
    pub fn new(api_url: &str, region: &str) -> Result<ClientConfig, AdminApiError> {
        let api_url = Url::parse(api_url)
            .map_err(|e| AdminApiError::Configuration(format!("invalid api url: {}", e)))?;
        Ok(ClientConfig {
            api_url,
            region: region.to_string(),
        })
    }
}

/// Access keys for IAM style authentication.
#[derive(Debug, Clone, Default)]
pub struct IamCredentials {
    /// Access key id
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Optional session token
    pub session_token: Option<String>,
}

/// Credentials used to authenticate admin API calls.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Shared administrative API key
    ApiKey(String),
    /// IAM style credentials, normally sourced from the environment
    Iam(IamCredentials),
}

impl Credentials {
    /// Resolve credentials from an API key value.
    ///
    /// The literal value `IAM` selects IAM style credentials read from
    /// `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`.
    /// This exists primarily for system tests against private deployments.
    pub fn from_api_key(api_key: &str) -> Credentials {
        if api_key == "IAM" {
            Credentials::Iam(IamCredentials {
                access_key_id: std::env::var("AWS_ACCESS_KEY_ID").unwrap_or_default(),
                secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
                session_token: std::env::var("AWS_SESSION_TOKEN").ok(),
            })
        } else {
            Credentials::ApiKey(api_key.to_string())
        }
    }
}

/// Transport-facing client issuing one GraphQL operation per method call.
///
/// Methods live in the per-resource modules. Every one of them delegates to
/// a shared helper below so the error classification contract is specified
/// exactly once.
#[derive(Clone)]
pub(crate) struct AdminApi {
    transport: Arc<dyn GraphQlTransport>,
}

impl AdminApi {
    pub fn new(config: &ClientConfig, credentials: &Credentials) -> Result<AdminApi, AdminApiError> {
        let transport = HttpGraphQlTransport::new(config, credentials)?;
        Ok(AdminApi {
            transport: Arc::new(transport),
        })
    }

    pub fn with_transport(transport: Arc<dyn GraphQlTransport>) -> AdminApi {
        AdminApi { transport }
    }

    /// Runs a query and returns the operation's field, which may be null.
    pub(crate) async fn query_optional<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        document: &'static str,
        variables: Value,
    ) -> Result<Option<T>, AdminApiError> {
        let response = self
            .transport
            .query(GraphQlRequest {
                operation,
                document,
                variables,
            })
            .await
            .map_err(classify_transport_error)?;
        // Errors take precedence over any data also present.
        if let Some(detail) = response.errors.first() {
            return Err(AdminApiError::from_error_code(Some(detail.code())));
        }
        extract_field(response.data, operation)
    }

    /// Runs a query whose field is always present on success.
    pub(crate) async fn query_required<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        document: &'static str,
        variables: Value,
    ) -> Result<T, AdminApiError> {
        self.query_optional(operation, document, variables)
            .await?
            .ok_or_else(|| missing_result(operation))
    }

    /// Runs a mutation whose field is always present on success. Absent
    /// data without errors is a protocol violation, not a business outcome.
    pub(crate) async fn mutate_required<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        document: &'static str,
        variables: Value,
    ) -> Result<T, AdminApiError> {
        self.mutate_optional(operation, document, variables)
            .await?
            .ok_or_else(|| missing_result(operation))
    }

    /// Runs a mutation where a null field is a valid outcome, as for the
    /// `remove*` operations targeting records that do not exist.
    pub(crate) async fn mutate_optional<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        document: &'static str,
        variables: Value,
    ) -> Result<Option<T>, AdminApiError> {
        let response = self
            .transport
            .mutate(GraphQlRequest {
                operation,
                document,
                variables,
            })
            .await
            .map_err(classify_transport_error)?;
        if let Some(detail) = response.errors.first() {
            return Err(AdminApiError::from_error_code(Some(detail.code())));
        }
        match response.data {
            Some(data) => extract_field(Some(data), operation),
            None => Err(missing_result(operation)),
        }
    }
}

/// Pulls the operation's field out of a response `data` object. A missing
/// or null field becomes `None`; an undecodable field is a contract bug.
fn extract_field<T: DeserializeOwned>(
    data: Option<Value>,
    operation: &'static str,
) -> Result<Option<T>, AdminApiError> {
    let mut data = match data {
        Some(data) => data,
        None => return Ok(None),
    };
    let field = match data.get_mut(operation) {
        Some(field) => field.take(),
        None => Value::Null,
    };
    if field.is_null() {
        return Ok(None);
    }
    serde_json::from_value(field).map(Some).map_err(|e| {
        AdminApiError::Fatal(format!("{} returned an undecodable result: {}", operation, e))
    })
}

fn missing_result(operation: &str) -> AdminApiError {
    AdminApiError::Fatal(format!("{} did not return any result", operation))
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;

    use crate::api::transport::{
        GraphQlRequest, GraphQlResponse, GraphQlTransport, TransportError,
    };

    /// Transport double replaying a fixed outcome for every operation.
    pub(crate) struct StaticTransport {
        pub result: Result<GraphQlResponse, TransportError>,
    }

    impl StaticTransport {
        pub fn ok(body: &str) -> StaticTransport {
            StaticTransport {
                result: Ok(serde_json::from_str(body).expect("fixture must parse")),
            }
        }

        pub fn err(error: TransportError) -> StaticTransport {
            StaticTransport { result: Err(error) }
        }
    }

    #[async_trait]
    impl GraphQlTransport for StaticTransport {
        async fn query(
            &self,
            _request: GraphQlRequest,
        ) -> Result<GraphQlResponse, TransportError> {
            self.result.clone()
        }

        async fn mutate(
            &self,
            _request: GraphQlRequest,
        ) -> Result<GraphQlResponse, TransportError> {
            self.result.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::testing::StaticTransport;
    use super::*;
    use crate::api::transport::{GraphQlErrorDetail, TransportError};
    use crate::api::types::entitlements_set::EntitlementsSetWire;

    fn api(transport: StaticTransport) -> AdminApi {
        AdminApi::with_transport(Arc::new(transport))
    }

    const SET_BODY: &str = r#"{
        "data": {
            "getEntitlementsSet": {
                "name": "basic",
                "entitlements": [{"name": "storage", "value": 5}],
                "version": 1,
                "createdAtEpochMs": 0,
                "updatedAtEpochMs": 0
            }
        }
    }"#;

    #[tokio::test]
    async fn query_optional_returns_decoded_field() {
        let api = api(StaticTransport::ok(SET_BODY));
        let set: Option<EntitlementsSetWire> = api
            .query_optional("getEntitlementsSet", "query", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(set.unwrap().name, "basic");
    }

    #[tokio::test]
    async fn query_optional_coerces_null_field_to_none() {
        let api = api(StaticTransport::ok(r#"{"data": {"getEntitlementsSet": null}}"#));
        let set: Option<EntitlementsSetWire> = api
            .query_optional("getEntitlementsSet", "query", serde_json::json!({}))
            .await
            .unwrap();
        assert!(set.is_none());
    }

    #[tokio::test]
    async fn query_optional_coerces_missing_field_to_none() {
        let api = api(StaticTransport::ok(r#"{"data": {}}"#));
        let set: Option<EntitlementsSetWire> = api
            .query_optional("getEntitlementsSet", "query", serde_json::json!({}))
            .await
            .unwrap();
        assert!(set.is_none());
    }

    #[tokio::test]
    async fn returned_error_wins_over_populated_data() {
        let body = r#"{
            "data": {"getEntitlementsSet": {"name": "basic", "entitlements": [], "version": 1, "createdAtEpochMs": 0, "updatedAtEpochMs": 0}},
            "errors": [{"errorType": "sudoplatform.entitlements.EntitlementsSetNotFoundError", "message": "not found"}]
        }"#;
        let api = api(StaticTransport::ok(body));
        let result: Result<Option<EntitlementsSetWire>, _> = api
            .query_optional("getEntitlementsSet", "query", serde_json::json!({}))
            .await;
        assert_eq!(result.unwrap_err(), AdminApiError::EntitlementsSetNotFound);
    }

    #[tokio::test]
    async fn thrown_and_returned_errors_map_identically() {
        let error_type = "sudoplatform.entitlements.AlreadyUpdatedError";

        let returned = api(StaticTransport::ok(&format!(
            r#"{{"errors": [{{"errorType": "{}", "message": "conflict"}}]}}"#,
            error_type
        )));
        let returned_err = returned
            .query_optional::<EntitlementsSetWire>(
                "getEntitlementsSet",
                "query",
                serde_json::json!({}),
            )
            .await
            .unwrap_err();

        let thrown = api(StaticTransport::err(TransportError::GraphQl {
            errors: vec![GraphQlErrorDetail {
                error_type: Some(error_type.to_string()),
                message: "conflict".to_string(),
            }],
        }));
        let thrown_err = thrown
            .query_optional::<EntitlementsSetWire>(
                "getEntitlementsSet",
                "query",
                serde_json::json!({}),
            )
            .await
            .unwrap_err();

        assert_eq!(returned_err, thrown_err);
        assert_eq!(returned_err.to_string(), thrown_err.to_string());
    }

    #[tokio::test]
    async fn mutation_with_absent_data_is_fatal_and_names_operation() {
        let api = api(StaticTransport::ok(r#"{"data": null}"#));
        let result: Result<EntitlementsSetWire, _> = api
            .mutate_required("addEntitlementsSet", "mutation", serde_json::json!({}))
            .await;
        assert_eq!(
            result.unwrap_err(),
            AdminApiError::Fatal("addEntitlementsSet did not return any result".to_string())
        );
    }

    #[tokio::test]
    async fn mutation_with_null_field_is_none_for_removals() {
        let api = api(StaticTransport::ok(r#"{"data": {"removeEntitlementsSet": null}}"#));
        let removed: Option<EntitlementsSetWire> = api
            .mutate_optional("removeEntitlementsSet", "mutation", serde_json::json!({}))
            .await
            .unwrap();
        assert!(removed.is_none());
    }

    #[tokio::test]
    async fn mutation_with_null_field_is_fatal_when_result_is_required() {
        let api = api(StaticTransport::ok(r#"{"data": {"addEntitlementsSet": null}}"#));
        let result: Result<EntitlementsSetWire, _> = api
            .mutate_required("addEntitlementsSet", "mutation", serde_json::json!({}))
            .await;
        assert_eq!(
            result.unwrap_err(),
            AdminApiError::Fatal("addEntitlementsSet did not return any result".to_string())
        );
    }

    #[tokio::test]
    async fn network_failure_maps_to_network_error() {
        let api = api(StaticTransport::err(TransportError::Network {
            message: "connection reset".to_string(),
        }));
        let result: Result<Option<EntitlementsSetWire>, _> = api
            .query_optional("getEntitlementsSet", "query", serde_json::json!({}))
            .await;
        assert_eq!(
            result.unwrap_err(),
            AdminApiError::Network("connection reset".to_string())
        );
    }

    #[tokio::test]
    async fn undecodable_field_is_fatal() {
        let api = api(StaticTransport::ok(
            r#"{"data": {"getEntitlementsSet": {"name": 42}}}"#,
        ));
        let result: Result<Option<EntitlementsSetWire>, _> = api
            .query_optional("getEntitlementsSet", "query", serde_json::json!({}))
            .await;
        assert!(matches!(result.unwrap_err(), AdminApiError::Fatal(_)));
    }
}
