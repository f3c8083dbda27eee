use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use fleet_registry::{create_router, serve, Animal, InMemoryRegistry, SharedRepository};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn rex() -> Animal {
    Animal {
        id: 1,
        name: "Rex".to_string(),
        category: "Dog".to_string(),
        weight: 24.5,
        fur_color: "Brown".to_string(),
    }
}

fn app_with(animals: Vec<Animal>) -> Router {
    let repo: SharedRepository = Arc::new(InMemoryRegistry::with_records(animals, vec![]));
    create_router(repo)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_list_and_get_animals() -> Result<()> {
    let app = app_with(vec![rex()]);

    let response = app.clone().oneshot(empty_request(Method::GET, "/animals")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body[0]["name"], "Rex");
    assert_eq!(body[0]["furColor"], "Brown");

    let response = app.clone().oneshot(empty_request(Method::GET, "/animals/1")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await?["id"], 1);

    let response = app.oneshot(empty_request(Method::GET, "/animals/42")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await?["error"], "Animal 42 not found");
    Ok(())
}

#[tokio::test]
async fn test_create_animal_returns_location() -> Result<()> {
    let app = app_with(vec![]);
    let payload = json!({
        "id": 7,
        "name": "Tom",
        "category": "Cat",
        "weight": 4.2,
        "furColor": "Grey"
    });

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/animals", payload.clone()))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/animals/7");
    assert_eq!(body_json(response).await?["name"], "Tom");

    let response = app
        .oneshot(json_request(Method::POST, "/animals", payload))
        .await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn test_update_animal() -> Result<()> {
    let app = app_with(vec![rex()]);
    let update = json!({
        "name": "Rexy",
        "category": "Dog",
        "weight": 26.0,
        "furColor": "Black"
    });

    let response = app
        .clone()
        .oneshot(json_request(Method::PUT, "/animals/1", update.clone()))
        .await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(empty_request(Method::GET, "/animals/1")).await?;
    let body = body_json(response).await?;
    assert_eq!(body["name"], "Rexy");
    assert_eq!(body["furColor"], "Black");

    let response = app
        .oneshot(json_request(Method::PUT, "/animals/9", update))
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_delete_animal_returns_record() -> Result<()> {
    let app = app_with(vec![rex()]);

    let response = app.clone().oneshot(empty_request(Method::DELETE, "/animals/1")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await?["name"], "Rex");

    let response = app.clone().oneshot(empty_request(Method::DELETE, "/animals/1")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request(Method::GET, "/animals")).await?;
    assert_eq!(body_json(response).await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_visits_are_filtered_by_animal() -> Result<()> {
    let app = app_with(vec![rex()]);

    for (id, animal_id) in [(1, 1), (2, 5), (3, 1)] {
        let visit = json!({
            "id": id,
            "animalId": animal_id,
            "dateOfVisit": "2024-06-01",
            "description": "Checkup",
            "price": 95.0
        });
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/visits", visit))
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::LOCATION],
            format!("/visits/{}", id).as_str()
        );
    }

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/animals/1/visits"))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let ids: Vec<i64> = body_json(response)
        .await?
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let response = app.oneshot(empty_request(Method::GET, "/animals/77/visits")).await?;
    assert_eq!(body_json(response).await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_health_and_malformed_requests() -> Result<()> {
    let app = app_with(vec![]);

    let response = app.clone().oneshot(empty_request(Method::GET, "/health")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(empty_request(Method::GET, "/animals/abc")).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let body = body_json(response).await?;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid input for path"));

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/animals", json!({ "id": 1 })))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let body = body_json(response).await?;
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid input for body"));
    assert!(message.contains("name"));

    let response = app.oneshot(empty_request(Method::GET, "/animals")).await?;
    assert_eq!(body_json(response).await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_over_tcp() -> Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let repo: SharedRepository = Arc::new(InMemoryRegistry::new());
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(serve(listener, repo, async move {
        let _ = shutdown_rx.await;
    }));

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let created = client
        .post(format!("{}/animals", base))
        .json(&rex())
        .send()
        .await?;
    assert_eq!(created.status(), reqwest::StatusCode::CREATED);

    let animals: Vec<Animal> = client
        .get(format!("{}/animals", base))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(animals, vec![rex()]);

    drop(client);
    let _ = shutdown_tx.send(());
    server.await??;
    Ok(())
}
