use altinitycloud_client::{AltinityCloudClient, AltinityCloudError, NodeType, Toleration};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> AltinityCloudClient {
    AltinityCloudClient::new(Some(server.uri()), Some("test-token".to_string())).unwrap()
}

fn test_node(suffix: &str) -> NodeType {
    NodeType {
        id: format!("10{}", suffix),
        name: format!("test-node{}", suffix),
        scope: format!("test-scope{}", suffix),
        code: format!("test-code{}", suffix),
        pool: format!("test-pool{}", suffix),
        storage_class: format!("test-storage{}", suffix),
        cpu: format!("test-cpu{}", suffix),
        memory: format!("test-memory{}", suffix),
        ..Default::default()
    }
}

fn node_types_body() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": "101",
                "name": "test-node1",
                "scope": "test-scope1",
                "code": "test-code1",
                "pool": "test-pool1",
                "storageClass": "test-storage1",
                "cpu": "test-cpu1",
                "memory": "test-memory1",
                "tolerations": []
            },
            {
                "id": "102",
                "name": "test-node2",
                "scope": "test-scope2",
                "code": "test-code2",
                "pool": "test-pool2",
                "storageClass": "test-storage2",
                "cpu": "test-cpu2",
                "memory": "test-memory2",
                "tolerations": [
                    {"key": "dedicated", "operator": "Equal", "value": "clickhouse", "effect": "NoSchedule"}
                ]
            }
        ]
    })
}

async fn mount_node_types(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/environment/test/nodetypes"))
        .and(header("X-Auth-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_types_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_node_types() {
    let server = MockServer::start().await;
    mount_node_types(&server).await;

    let node_types = client(&server).list_node_types("test").await.unwrap();

    let mut second = test_node("2");
    second.tolerations = vec![Toleration {
        key: "dedicated".to_string(),
        operator: "Equal".to_string(),
        value: "clickhouse".to_string(),
        effect: "NoSchedule".to_string(),
    }];
    assert_eq!(node_types, vec![test_node("1"), second]);
}

#[tokio::test]
async fn test_list_node_types_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environment/empty/nodetypes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let node_types = client(&server).list_node_types("empty").await.unwrap();
    assert!(node_types.is_empty());
}

#[tokio::test]
async fn test_get_node_type() {
    let server = MockServer::start().await;
    mount_node_types(&server).await;

    let node_type = client(&server)
        .get_node_type("test", "test-node1")
        .await
        .unwrap();

    assert_eq!(node_type, Some(test_node("1")));
}

#[tokio::test]
async fn test_get_node_type_not_found() {
    let server = MockServer::start().await;
    mount_node_types(&server).await;

    let node_type = client(&server)
        .get_node_type("test", "does-not-exist")
        .await
        .unwrap();

    assert_eq!(node_type, None);
}

#[tokio::test]
async fn test_get_node_type_first_match_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environment/dup/nodetypes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "1", "name": "same"},
                {"id": "2", "name": "same"}
            ]
        })))
        .mount(&server)
        .await;

    let node_type = client(&server).get_node_type("dup", "same").await.unwrap();
    assert_eq!(node_type.map(|nt| nt.id), Some("1".to_string()));
}

#[tokio::test]
async fn test_create_node_type_required_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/environment/test/nodetypes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {"changed": true},
            "data": {
                "id": "555",
                "name": "test-node",
                "scope": "test-scope",
                "code": "test-code",
                "storageClass": "test-storage",
                "cpu": "test-cpu",
                "memory": "test-memory"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let node_type = NodeType {
        name: "test-node".to_string(),
        scope: "test-scope".to_string(),
        code: "test-code".to_string(),
        storage_class: "test-storage".to_string(),
        cpu: "test-cpu".to_string(),
        memory: "test-memory".to_string(),
        ..Default::default()
    };

    let created = client(&server)
        .create_node_type("test", &node_type)
        .await
        .unwrap();

    assert_eq!(created.id, "555");
    assert_eq!(created.name, "test-node");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("name=test-node&scope=test-scope&code=test-code&storageClass=test-storage&cpu=test-cpu&memory=test-memory")
    );
    assert_eq!(requests[0].headers["X-Auth-Token"], "test-token");
}

#[tokio::test]
async fn test_create_node_type_optional_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/environment/test/nodetypes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {"changed": true},
            "data": {"id": "556", "name": "tainted"}
        })))
        .mount(&server)
        .await;

    let node_type = NodeType {
        name: "tainted".to_string(),
        scope: "ClickHouse".to_string(),
        code: "m5.large".to_string(),
        pool: "clickhouse".to_string(),
        storage_class: "gp3".to_string(),
        cpu: "2".to_string(),
        memory: "8Gi".to_string(),
        node_selector: Some("disktype=ssd".to_string()),
        tolerations: vec![Toleration {
            key: "dedicated".to_string(),
            operator: "Equal".to_string(),
            value: "clickhouse".to_string(),
            effect: "NoSchedule".to_string(),
        }],
        ..Default::default()
    };

    client(&server)
        .create_node_type("test", &node_type)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "name",
            "scope",
            "code",
            "storageClass",
            "cpu",
            "memory",
            "pool",
            "nodeSelector",
            "tolerations"
        ]
    );
    assert_eq!(pairs[6].1, "clickhouse");
    assert_eq!(pairs[7].1, "disktype=ssd");
    assert_eq!(
        pairs[8].1,
        r#"[{"key":"dedicated","operator":"Equal","value":"clickhouse","effect":"NoSchedule"}]"#
    );
}

#[tokio::test]
async fn test_update_node_type() {
    let server = MockServer::start().await;
    mount_node_types(&server).await;
    Mock::given(method("POST"))
        .and(path("/nodetype/102"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {"changed": true},
            "data": {"id": "102", "name": "test-node2", "cpu": "4"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut node_type = test_node("2");
    node_type.id = String::new();
    node_type.cpu = "4".to_string();

    let updated = client(&server)
        .update_node_type("test", &node_type)
        .await
        .unwrap();

    assert_eq!(updated.id, "102");
    assert_eq!(updated.cpu, "4");

    let requests = server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .unwrap();
    assert_eq!(
        post.url.query(),
        Some("name=test-node2&scope=test-scope2&code=test-code2&storageClass=test-storage2&cpu=4&memory=test-memory2&pool=test-pool2")
    );
}

#[tokio::test]
async fn test_update_node_type_not_found() {
    let server = MockServer::start().await;
    mount_node_types(&server).await;

    let mut node_type = test_node("1");
    node_type.name = "missing".to_string();

    let err = client(&server)
        .update_node_type("test", &node_type)
        .await
        .unwrap_err();

    match err {
        AltinityCloudError::NodeTypeNotFound { env_id, name } => {
            assert_eq!(env_id, "test");
            assert_eq!(name, "missing");
        }
        other => panic!("Expected NodeTypeNotFound, got {:?}", other),
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.as_str() == "GET"));
}

#[tokio::test]
async fn test_delete_node_type() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/nodetype/101"))
        .and(header("X-Auth-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not even json"))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).delete_node_type("101").await.unwrap();
}

#[tokio::test]
async fn test_api_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environment/test/nodetypes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let err = client(&server).list_node_types("test").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    let message = err.to_string();
    assert!(message.contains("500"), "{}", message);
    assert!(message.contains("server error"), "{}", message);
}

#[tokio::test]
async fn test_non_ok_success_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/nodetype/101"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client(&server).delete_node_type("101").await.unwrap_err();
    assert_eq!(err.status(), Some(204));
}

#[tokio::test]
async fn test_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environment/test/nodetypes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server).list_node_types("test").await.unwrap_err();
    assert!(matches!(err, AltinityCloudError::Decode(_)));
}
