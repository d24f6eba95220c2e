//! End to end tests running the client against a mock GraphQL endpoint.

use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use entitlements_admin::{
    AdminApiError, ApplyEntitlementsSetToUserOperation, ClientConfig, Credentials, Entitlement,
    EntitlementsAdmin, ExternalUserEntitlementsResult, NewEntitlementsSet,
};

async fn client_for(server: &MockServer) -> EntitlementsAdmin {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = ClientConfig::new(&server.uri(), "us-east-1").unwrap();
    let credentials = Credentials::from_api_key("test-api-key");
    EntitlementsAdmin::new(&config, &credentials).unwrap()
}

fn set_body(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": "test set",
        "entitlements": [{"name": "storage", "description": null, "value": 10}],
        "version": 1,
        "createdAtEpochMs": 1_700_000_000_000i64,
        "updatedAtEpochMs": 1_700_000_100_000i64
    })
}

#[tokio::test]
async fn get_entitlements_set_decodes_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getEntitlementsSet": set_body("basic")}
        })))
        .mount(&server)
        .await;

    let set = client_for(&server)
        .await
        .get_entitlements_set("basic")
        .await
        .unwrap()
        .expect("set should exist");

    assert_eq!(set.name, "basic");
    assert_eq!(set.entitlements[0].value, 10);
    assert_eq!(set.created_at.timestamp_millis(), 1_700_000_000_000);
}

#[tokio::test]
async fn get_missing_entitlements_set_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getEntitlementsSet": null}
        })))
        .mount(&server)
        .await;

    let set = client_for(&server)
        .await
        .get_entitlements_set("missing")
        .await
        .unwrap();

    assert!(set.is_none());
}

#[tokio::test]
async fn listing_follows_next_token_until_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"variables": {"nextToken": null}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"listEntitlementsSets": {
                "items": [set_body("page-1")],
                "nextToken": "token-2"
            }}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"variables": {"nextToken": "token-2"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"listEntitlementsSets": {
                "items": [set_body("page-2")],
                "nextToken": null
            }}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut names = Vec::new();
    let mut next_token = None;
    loop {
        let page = client.list_entitlements_sets(next_token).await.unwrap();
        names.extend(page.items.into_iter().map(|set| set.name));
        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    assert_eq!(names, vec!["page-1", "page-2"]);
}

#[tokio::test]
async fn returned_error_wins_over_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getEntitlementsSet": set_body("basic")},
            "errors": [{
                "errorType": "sudoplatform.entitlements.EntitlementsSetNotFoundError",
                "message": "not found"
            }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_entitlements_set("basic")
        .await
        .unwrap_err();

    assert_eq!(err, AdminApiError::EntitlementsSetNotFound);
}

#[tokio::test]
async fn rejected_request_maps_like_a_returned_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{
                "errorType": "sudoplatform.entitlements.AlreadyUpdatedError",
                "message": "conflicting update"
            }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .set_entitlements_set(NewEntitlementsSet {
            name: "basic".to_string(),
            description: None,
            entitlements: vec![],
        })
        .await
        .unwrap_err();

    assert_eq!(err, AdminApiError::AlreadyUpdated);
}

#[tokio::test]
async fn add_without_result_is_fatal_and_names_the_operation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .add_entitlements_set(NewEntitlementsSet {
            name: "basic".to_string(),
            description: None,
            entitlements: vec![Entitlement {
                name: "storage".to_string(),
                description: None,
                value: 10,
            }],
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AdminApiError::Fatal("addEntitlementsSet did not return any result".to_string())
    );
}

#[tokio::test]
async fn removing_a_missing_set_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("removeEntitlementsSet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"removeEntitlementsSet": null}
        })))
        .mount(&server)
        .await;

    let removed = client_for(&server)
        .await
        .remove_entitlements_set("missing")
        .await
        .unwrap();

    assert!(removed.is_none());
}

#[tokio::test]
async fn bulk_apply_reports_per_element_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"applyEntitlementsSetToUsers": [
                {
                    "__typename": "ExternalUserEntitlements",
                    "externalId": "user-1",
                    "entitlements": [{"name": "storage", "value": 10}],
                    "version": 1.00001,
                    "createdAtEpochMs": 0,
                    "updatedAtEpochMs": 0
                },
                {
                    "__typename": "ExternalUserEntitlementsError",
                    "error": "sudoplatform.entitlements.InvalidEntitlementsError"
                },
                {
                    "__typename": "ExternalUserEntitlements",
                    "externalId": "user-3",
                    "entitlements": [{"name": "storage", "value": 10}],
                    "version": 1.00001,
                    "createdAtEpochMs": 0,
                    "updatedAtEpochMs": 0
                }
            ]}
        })))
        .mount(&server)
        .await;

    let operations = ["user-1", "user-2", "user-3"]
        .iter()
        .map(|id| ApplyEntitlementsSetToUserOperation {
            external_id: id.to_string(),
            entitlements_set_name: "basic".to_string(),
        })
        .collect();
    let results = client_for(&server)
        .await
        .apply_entitlements_set_to_users(operations)
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    assert!(matches!(
        results[0],
        ExternalUserEntitlementsResult::Entitlements(_)
    ));
    assert_eq!(
        results[1],
        ExternalUserEntitlementsResult::Error(AdminApiError::InvalidEntitlements)
    );
    assert!(matches!(
        results[2],
        ExternalUserEntitlementsResult::Entitlements(_)
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let config = ClientConfig::new("http://127.0.0.1:9", "us-east-1").unwrap();
    let credentials = Credentials::from_api_key("test-api-key");
    let client = EntitlementsAdmin::new(&config, &credentials).unwrap();

    let err = client.get_entitlements_set("basic").await.unwrap_err();

    assert!(matches!(err, AdminApiError::Network(_)));
}

#[tokio::test]
async fn unrecognized_error_code_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{
                "errorType": "sudoplatform.entitlements.BrandNewError",
                "message": "new failure mode"
            }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_entitlements_set("basic")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AdminApiError::UnknownGraphQl("sudoplatform.entitlements.BrandNewError".to_string())
    );
}

#[tokio::test]
async fn get_entitlements_for_user_decodes_consumption() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"getEntitlementsForUser": {
                "entitlements": {
                    "externalId": "user-1",
                    "owner": "owner-1",
                    "entitlementsSetName": "basic",
                    "entitlements": [{"name": "storage", "value": 10}],
                    "expendableEntitlements": [{"name": "credits", "value": 3}],
                    "version": 2.00001,
                    "createdAtEpochMs": 0,
                    "updatedAtEpochMs": 0
                },
                "consumption": [{
                    "name": "storage",
                    "value": 10,
                    "available": 7,
                    "consumed": 3,
                    "firstConsumedAtEpochMs": 1_700_000_000_000i64,
                    "lastConsumedAtEpochMs": 1_700_000_100_000i64
                }]
            }}
        })))
        .mount(&server)
        .await;

    let consumption = client_for(&server)
        .await
        .get_entitlements_for_user("user-1")
        .await
        .unwrap();

    assert_eq!(consumption.entitlements.external_id, "user-1");
    assert_eq!(consumption.entitlements.expendable_entitlements[0].value, 3);
    assert_eq!(consumption.consumption[0].consumed, 3);
    assert_eq!(
        consumption.consumption[0]
            .first_consumed_at
            .unwrap()
            .timestamp_millis(),
        1_700_000_000_000
    );
}
