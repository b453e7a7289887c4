use altinitycloud_provider::{
    AltinityCloudProvider, ProviderConfig, ProviderError, TolerationModel,
    UsersDataSourceModel,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn configured_provider(server: &MockServer) -> AltinityCloudProvider {
    let mut provider = AltinityCloudProvider::new("test");
    provider
        .configure(&ProviderConfig::new(
            Some(server.uri()),
            Some("test-token".to_string()),
        ))
        .unwrap();
    provider
}

#[tokio::test]
async fn test_read_node_type_data_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environment/652/nodetypes"))
        .and(header("X-Auth-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": "101",
                    "scope": "ClickHouse",
                    "code": "m5.large",
                    "name": "m5.large",
                    "pool": "default",
                    "storageClass": "gp3",
                    "cpu": "1.8",
                    "memory": "7Gi",
                    "id_environment": "652",
                    "tolerations": [
                        {"key": "dedicated", "operator": "Equal", "value": "clickhouse", "effect": "NoSchedule"}
                    ],
                    "nodeSelector": "disktype=ssd",
                    "cpu_alloc": "2",
                    "memory_alloc": "8Gi"
                },
                {
                    "id": "102",
                    "scope": "Zookeeper",
                    "code": "t3.small",
                    "name": "t3.small",
                    "storageClass": "gp3",
                    "cpu": "0.5",
                    "memory": "1Gi"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = configured_provider(&server);
    let ds = provider.data_source("altinitycloud_node_type").unwrap();

    let state = ds.read(json!({ "env_id": "652" })).await.unwrap();

    assert_eq!(state["env_id"], "652");
    assert_eq!(state["id"], "node_type_652");
    assert_eq!(state["data"].as_array().unwrap().len(), 2);

    let first = &state["data"][0];
    assert_eq!(first["id"], 101);
    assert_eq!(first["storage_class"], "gp3");
    assert_eq!(first["id_environment"], "652");
    assert_eq!(first["node_selector"], "disktype=ssd");
    assert_eq!(first["cpu_alloc"], "2");
    assert_eq!(first["memory_alloc"], "8Gi");

    let tolerations: Vec<TolerationModel> =
        serde_json::from_value(first["tolerations"].clone()).unwrap();
    assert_eq!(
        tolerations,
        vec![TolerationModel {
            key: "dedicated".to_string(),
            operator: "Equal".to_string(),
            effect: "NoSchedule".to_string(),
            value: "clickhouse".to_string(),
        }]
    );

    let second = &state["data"][1];
    assert_eq!(second["pool"], "");
    assert_eq!(second["extra_spec"], "");
    assert_eq!(second["tolerations"], json!([]));
}

#[tokio::test]
async fn test_read_users_data_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cluster/1234/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": "1",
                    "login": "admin",
                    "password": "pw",
                    "networks": "0.0.0.0/0\n::/0",
                    "databases": "default",
                    "id_cluster": "1234",
                    "id_profile": "10",
                    "id_quota": "20",
                    "accessManagement": true,
                    "system": false
                }
            ]
        })))
        .mount(&server)
        .await;

    let provider = configured_provider(&server);
    let ds = provider.data_source("altinitycloud_users").unwrap();

    let state = ds.read(json!({ "cluster_id": "1234" })).await.unwrap();
    let state: UsersDataSourceModel = serde_json::from_value(state).unwrap();

    assert_eq!(state.cluster_id, "1234");
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].login, "admin");
    assert_eq!(state.users[0].networks, "0.0.0.0/0\n::/0");
    assert_eq!(state.users[0].profile_id, "10");
    assert_eq!(state.users[0].quota_id, "20");
    assert!(state.users[0].access_management);
    assert!(!state.users[0].system);
}

#[tokio::test]
async fn test_read_data_source_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cluster/1234/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let provider = configured_provider(&server);
    let ds = provider.data_source("altinitycloud_users").unwrap();

    let err = ds.read(json!({ "cluster_id": "1234" })).await.unwrap_err();
    assert!(matches!(err, ProviderError::Client(_)));

    let diag = err.to_diagnostic();
    assert_eq!(diag.summary, "Client Error");
    assert!(diag.detail.contains("500"));
    assert!(diag.detail.contains("server error"));
}

#[tokio::test]
async fn test_read_data_source_invalid_config() {
    let server = MockServer::start().await;

    let provider = configured_provider(&server);
    let ds = provider.data_source("altinitycloud_node_type").unwrap();

    let err = ds.read(json!({ "cluster_id": "1234" })).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidState(_)));
}
