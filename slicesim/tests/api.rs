use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use slicesim::{ServiceConfig, SimContext, router};
use std::sync::Arc;
use tower::ServiceExt as _;

fn app() -> (Arc<SimContext>, Router) {
    let context = Arc::new(SimContext::new(&ServiceConfig {
        seed: Some(7),
        ..ServiceConfig::default()
    }));
    (Arc::clone(&context), router(context))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |body| Body::from(body.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn campus() -> Value {
    json!({
        "nodes": [
            {"id": "bs1", "type": "baseStation", "x": 10, "y": 20},
            {"id": "ue1", "type": "userEquipment"},
            {"id": "iot1", "type": "iotDevice"}
        ],
        "links": [
            {"source": "bs1", "target": "ue1"},
            {"source": {"id": "bs1"}, "target": {"id": "iot1"}}
        ]
    })
}

#[tokio::test]
async fn simulate_returns_a_full_result() {
    let (_, app) = app();

    let (status, result) = call(
        &app,
        Method::POST,
        "/api/simulate",
        Some(json!({
            "protocol": "5G",
            "users": 100,
            "iotDevices": 50,
            "topologyId": "campus",
            "topology": campus()
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["protocol"], "5G");
    assert_eq!(result["userCount"], 100);
    assert_eq!(result["iotCount"], 50);
    assert_eq!(result["topologyId"], "campus");
    assert_eq!(result["iotWarning"], Value::Null);
    assert!(result["timestamp"].is_u64());

    let latency = result["latency"].as_array().unwrap();
    assert_eq!(latency.len(), 3);
    for entry in latency {
        let ms = entry["latency"].as_f64().unwrap();
        match entry["radio"].as_str().unwrap() {
            "mmWave" => assert!((5.0..10.0).contains(&ms), "{ms}"),
            "sub-6GHz" => assert!((10.0..15.0).contains(&ms), "{ms}"),
            other => panic!("unexpected radio {other}"),
        }
    }

    let bandwidth = result["bandwidth"].as_array().unwrap();
    assert_eq!(bandwidth.len(), 2);
    assert_eq!(bandwidth[1]["source"], "bs1");
    assert_eq!(bandwidth[1]["target"], "iot1");

    assert_eq!(
        result["slices"],
        json!([
            {"name": "eMBB", "users": 50, "iot": 10},
            {"name": "URLLC", "users": 20, "iot": 15},
            {"name": "mMTC", "users": 30, "iot": 25}
        ])
    );
    assert_eq!(
        result["throughput"][0],
        json!({"slice": "eMBB", "average": 800.0, "max": 1000.0, "min": 600.0})
    );
}

#[tokio::test]
async fn results_are_most_recent_first() {
    let (_, app) = app();

    for users in [1, 2, 3] {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/simulate",
            Some(json!({"protocol": "6G", "users": users, "iotDevices": 0, "topology": campus()})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, results) = call(&app, Method::GET, "/api/results", None).await;
    assert_eq!(status, StatusCode::OK);

    let results = results.as_array().unwrap();
    let users: Vec<_> = results.iter().map(|r| r["userCount"].as_u64().unwrap()).collect();
    assert_eq!(users, [3, 2, 1]);

    let timestamps: Vec<_> = results.iter().map(|r| r["timestamp"].as_u64().unwrap()).collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn empty_history() {
    let (_, app) = app();

    let (status, results) = call(&app, Method::GET, "/api/results", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results, json!([]));
}

#[tokio::test]
async fn malformed_requests_are_rejected() {
    let (context, app) = app();

    for body in [
        json!({"protocol": "5G", "users": -1, "iotDevices": 0, "topology": campus()}),
        json!({"protocol": "5G", "users": "ten", "iotDevices": 0, "topology": campus()}),
        json!({"protocol": "4G", "users": 1, "iotDevices": 0, "topology": campus()}),
        json!({"protocol": "5G", "users": 1, "iotDevices": 0, "topology": {"links": []}}),
        json!({"protocol": "5G", "users": 1, "iotDevices": 0, "topology": {"nodes": []}}),
    ] {
        let (status, error) = call(&app, Method::POST, "/api/simulate", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(error["error"].is_string(), "{body}");
    }

    assert!(context.results().is_empty());
}

#[tokio::test]
async fn dangling_endpoint_is_rejected() {
    let (context, app) = app();

    let (status, error) = call(
        &app,
        Method::POST,
        "/api/simulate",
        Some(json!({
            "protocol": "5G",
            "users": 1,
            "iotDevices": 0,
            "topology": {
                "nodes": [{"id": "bs1"}],
                "links": [{"source": "bs1", "target": "ghost"}]
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error["error"].as_str().unwrap().contains("ghost"));
    assert!(context.results().is_empty());
}

#[tokio::test]
async fn iot_warning_over_capacity() {
    let (_, app) = app();

    let (_, result) = call(
        &app,
        Method::POST,
        "/api/simulate",
        Some(json!({"protocol": "5G", "users": 0, "iotDevices": 601, "topology": campus()})),
    )
    .await;
    assert!(result["iotWarning"].as_str().unwrap().contains("200"));

    let (_, result) = call(
        &app,
        Method::POST,
        "/api/simulate",
        Some(json!({"protocol": "6G", "users": 0, "iotDevices": 601, "topology": campus()})),
    )
    .await;
    assert_eq!(result["iotWarning"], Value::Null);
}

#[tokio::test]
async fn omitted_topology_uses_the_current_one() {
    let (_, app) = app();

    let (status, message) = call(&app, Method::POST, "/api/topology", Some(campus())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(message["message"].is_string());

    let (status, result) = call(
        &app,
        Method::POST,
        "/api/simulate",
        Some(json!({"protocol": "6G", "users": 10, "iotDevices": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["latency"].as_array().unwrap().len(), 3);
    assert_eq!(result["bandwidth"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_current_topology_is_rejected() {
    let (_, app) = app();

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/topology",
        Some(json!({"nodes": [{"id": "a"}], "links": [{"source": "a", "target": "b"}]})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn saved_topology_by_id() {
    let (_, app) = app();

    let mut body = json!({"name": "pair", "description": "two nodes"});
    body["nodes"] = json!([{"id": 1}, {"id": 2}]);
    body["links"] = json!([{"source": 1, "target": 2}]);

    let (status, saved) = call(&app, Method::POST, "/api/topologies", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["_id"], "topology-1");
    assert_eq!(saved["name"], "pair");
    assert!(saved["createdAt"].is_u64());

    let (_, list) = call(&app, Method::GET, "/api/topologies", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (_, result) = call(
        &app,
        Method::POST,
        "/api/simulate",
        Some(json!({"protocol": "5G", "users": 1, "iotDevices": 0, "topologyId": "topology-1"})),
    )
    .await;
    assert_eq!(result["topologyId"], "topology-1");
    assert_eq!(result["bandwidth"][0]["source"], "1");
    assert_eq!(result["bandwidth"][0]["target"], "2");
}

#[tokio::test]
async fn saved_topology_keeps_client_id() {
    let (_, app) = app();

    let (status, saved) = call(
        &app,
        Method::POST,
        "/api/topologies",
        Some(json!({
            "_id": "star",
            "name": "Star",
            "nodes": [{"id": "center"}, {"id": "a"}],
            "links": [{"source": "center", "target": "a"}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["_id"], "star");

    let (_, list) = call(&app, Method::GET, "/api/topologies", None).await;
    assert_eq!(list[0]["_id"], "star");

    let (status, result) = call(
        &app,
        Method::POST,
        "/api/simulate",
        Some(json!({"protocol": "6G", "users": 4, "iotDevices": 2, "topologyId": "star"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["topologyId"], "star");
    assert_eq!(result["latency"].as_array().unwrap().len(), 2);
    assert_eq!(result["bandwidth"][0]["source"], "center");
    assert_eq!(result["bandwidth"][0]["target"], "a");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (_, app) = app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/results")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
