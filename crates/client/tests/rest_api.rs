// REST facade integration tests against a mock server.
#![allow(missing_docs)]

use milvus_client::monitor::ServerMonitor;
use milvus_client::request::{
    CreateCollectionRequest, HasCollectionRequest, InsertRequest, QueryVectors, SearchRequest,
    SelectRoleRequest,
};
use milvus_client::schema::{CollectionSchema, DataType, FieldSchema};
use milvus_client::{
    ConnectConfig, Error, Field, IdList, MilvusClient, MilvusRestClient, RequestContext, Result,
    wait_for_collection_loaded, wait_for_index_built,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ConnectConfig {
    let mut config = ConnectConfig::new("127.0.0.1");
    config.port = server.address().port();
    config
}

fn films_schema() -> CollectionSchema {
    CollectionSchema::new("films")
        .field(FieldSchema::new("film_id", DataType::Int64).primary_key())
        .field(FieldSchema::new("embedding", DataType::FloatVector).dim(2))
}

#[tokio::test]
async fn create_collection_round_trips_status() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/collection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": {} })))
        .mount(&server)
        .await;

    let client = MilvusRestClient::new(&config_for(&server))?;
    let ctx = RequestContext::new_request();
    client
        .create_collection(&ctx, CreateCollectionRequest::new(films_schema()))
        .await
}

#[tokio::test]
async fn server_error_surfaces_code_and_reason() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/collection/existence"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "error_code": "CollectionNotExists", "reason": "collection films does not exist" }
        })))
        .mount(&server)
        .await;

    let client = MilvusRestClient::new(&config_for(&server))?;
    let ctx = RequestContext::new_request();
    let error = match client
        .has_collection(&ctx, HasCollectionRequest::new("films"))
        .await
    {
        Err(error) => error,
        Ok(value) => {
            assert!(false, "expected a server error, got {value}");
            return Ok(());
        }
    };
    match error {
        Error::Server { code, reason, .. } => {
            assert_eq!(code, 4);
            assert_eq!(reason, "collection films does not exist");
        }
        other => assert!(false, "expected Server variant, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn has_collection_reads_bool_value() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/collection/existence"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": {}, "value": true })),
        )
        .mount(&server)
        .await;

    let client = MilvusRestClient::new(&config_for(&server))?;
    let ctx = RequestContext::new_request();
    let exists = client
        .has_collection(&ctx, HasCollectionRequest::new("films"))
        .await?;
    assert!(exists);
    Ok(())
}

#[tokio::test]
async fn insert_parses_mutation_ids() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/entities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {},
            "ids": { "int_id": { "data": [1, 2] } },
            "insert_cnt": 2,
            "timestamp": 99
        })))
        .mount(&server)
        .await;

    let fields = vec![
        Field::int64_values("film_id", vec![1, 2]),
        Field::float_vectors("embedding", 2, vec![vec![0.1, 0.2], vec![0.3, 0.4]])?,
    ];
    let client = MilvusRestClient::new(&config_for(&server))?;
    let ctx = RequestContext::new_request();
    let result = client
        .insert(&ctx, InsertRequest::new("films", fields))
        .await?;
    assert_eq!(result.ids, IdList::Long(vec![1, 2]));
    assert_eq!(result.insert_count, 2);
    assert_eq!(result.timestamp, 99);
    Ok(())
}

#[tokio::test]
async fn search_slices_hits_per_query() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {},
            "results": {
                "num_queries": 2,
                "top_k": 2,
                "topks": [2, 1],
                "scores": [0.1, 0.2, 0.3],
                "ids": { "int_id": { "data": [7, 8, 9] } },
                "fields_data": [],
                "output_fields": []
            }
        })))
        .mount(&server)
        .await;

    let vectors = QueryVectors::Float(vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
    let client = MilvusRestClient::new(&config_for(&server))?;
    let ctx = RequestContext::new_request();
    let result = client
        .search(&ctx, SearchRequest::new("films", "embedding", vectors, 2))
        .await?;
    assert_eq!(result.hits.len(), 2);
    assert_eq!(result.hits[0].ids, IdList::Long(vec![7, 8]));
    assert_eq!(result.hits[1].ids, IdList::Long(vec![9]));
    assert_eq!(result.hits[1].scores, vec![0.3]);
    Ok(())
}

#[tokio::test]
async fn rbac_reports_not_supported_without_touching_the_network() -> Result<()> {
    // Port 1 is never listening; a network attempt would fail as transport.
    let mut config = ConnectConfig::new("127.0.0.1");
    config.port = 1;
    let client = MilvusRestClient::new(&config)?;
    let ctx = RequestContext::new_request();
    let error = match client.select_role(&ctx, SelectRoleRequest::all()).await {
        Err(error) => error,
        Ok(_) => {
            assert!(false, "expected a not-supported error");
            return Ok(());
        }
    };
    assert!(matches!(error, Error::NotSupported { transport: "REST", .. }));
    Ok(())
}

#[tokio::test]
async fn version_probe_sends_auth_header() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/version"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": {}, "version": "v2.2.9" })),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.token = Box::from("secret-token");
    let client = MilvusRestClient::new(&config)?;
    let ctx = RequestContext::new_request();
    let version = client.get_version(&ctx).await?;
    assert_eq!(version, "v2.2.9");
    Ok(())
}

#[tokio::test]
async fn basic_credentials_send_a_basic_scheme_header() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/version"))
        .and(header("authorization", "Basic cm9vdDpNaWx2dXM="))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": {}, "version": "v2.2.9" })),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.username = Box::from("root");
    config.password = Box::from("Milvus");
    let client = MilvusRestClient::new(&config)?;
    let ctx = RequestContext::new_request();
    let version = client.get_version(&ctx).await?;
    assert_eq!(version, "v2.2.9");
    Ok(())
}

#[tokio::test]
async fn monitor_reports_healthy_after_first_probe() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/version"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": {}, "version": "v2.2.9" })),
        )
        .mount(&server)
        .await;

    let client = Arc::new(MilvusRestClient::new(&config_for(&server))?);
    let monitor = ServerMonitor::start(client, Duration::from_millis(50));
    let mut updates = monitor.subscribe();
    if updates.changed().await.is_err() {
        assert!(false, "monitor task dropped its sender");
        return Ok(());
    }
    let status = monitor.current();
    assert!(status.healthy);
    assert_eq!(status.version.as_deref(), Some("v2.2.9"));
    monitor.shutdown();
    Ok(())
}

#[tokio::test]
async fn wait_for_index_built_returns_on_finished() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/index/state"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": {}, "state": "Finished" })),
        )
        .mount(&server)
        .await;

    let client = MilvusRestClient::new(&config_for(&server))?;
    let ctx = RequestContext::new_request();
    wait_for_index_built(
        &client,
        &ctx,
        "films",
        "embedding",
        Duration::from_millis(10),
        Duration::from_secs(5),
    )
    .await
}

#[tokio::test]
async fn wait_for_collection_loaded_times_out_on_stalled_progress() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/collection/load/progress"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": {}, "progress": 40 })),
        )
        .mount(&server)
        .await;

    let client = MilvusRestClient::new(&config_for(&server))?;
    let ctx = RequestContext::new_request();
    let outcome = wait_for_collection_loaded(
        &client,
        &ctx,
        "films",
        Duration::from_millis(5),
        Duration::from_millis(20),
    )
    .await;
    assert!(matches!(outcome, Err(Error::Timeout(_))));
    Ok(())
}

#[tokio::test]
async fn cancelled_context_short_circuits() -> Result<()> {
    let server = MockServer::start().await;
    let client = MilvusRestClient::new(&config_for(&server))?;
    let ctx = RequestContext::new_request();
    ctx.cancel();
    let outcome = client
        .create_collection(&ctx, CreateCollectionRequest::new(films_schema()))
        .await;
    assert!(matches!(outcome, Err(Error::Cancelled(_))));
    Ok(())
}
