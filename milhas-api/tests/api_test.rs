use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use milhas_api::{app, AppState};
use milhas_shared::{MileageGoal, ScrapedPromotion};
use milhas_store::app_config::MatcherConfig;
use milhas_store::InMemoryStore;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn state_with(store: Arc<InMemoryStore>, max_suggestions: usize) -> AppState {
    AppState {
        promotion_repo: store.clone(),
        goal_repo: store,
        matcher: MatcherConfig { max_suggestions },
    }
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn promotion_json(destino: &str, milhas_min: u32) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "programa": "Smiles",
        "destino": destino,
        "milhas_min": milhas_min,
    })
}

fn goal_json(name: &str, description: Option<&str>) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "name": name,
        "description": description,
        "target_miles": 50000,
        "current_miles": 0,
    })
}

#[tokio::test]
async fn test_health() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let (status, body) = send(state, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_match_promotions_ranks_results() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let request = post_json(
        "/v1/promotions/matches",
        json!({
            "promotions": [
                promotion_json("Lisboa", 15000),
                promotion_json("Paris", 12000),
                promotion_json("Orlando", 30000),
            ],
            "goals": [
                goal_json("Economizar", Some("sonho de conhecer a Europa")),
                goal_json("Quero ir para os EUA", None),
            ],
        }),
    );

    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::OK);

    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0]["promotion"]["destino"], "Paris");
    assert_eq!(matches[0]["matchScore"], 80);
    assert_eq!(matches[1]["promotion"]["destino"], "Lisboa");
    assert_eq!(matches[2]["promotion"]["destino"], "Orlando");
    assert_eq!(matches[2]["matchScore"], 70);
    assert_eq!(matches[2]["matchTier"], "REGION");
}

#[tokio::test]
async fn test_match_promotions_with_empty_lists() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let (status, body) = send(state, post_json("/v1/promotions/matches", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_malformed_miles_only_drop_that_promotion() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let request = post_json(
        "/v1/promotions/matches",
        json!({
            "promotions": [
                promotion_json("Miami", 20000),
                { "id": Uuid::new_v4(), "programa": "Smiles", "destino": "Miami", "milhas_min": null },
                { "id": Uuid::new_v4(), "programa": "Smiles", "destino": "Miami", "milhas_min": "barato" },
            ],
            "goals": [goal_json("Viagem para Miami", None)],
        }),
    );

    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::OK);

    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["promotion"]["milhas_min"], 20000.0);
    assert_eq!(matches[0]["matchScore"], 100);
}

#[tokio::test]
async fn test_malformed_body_returns_json_error() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let request = Request::builder()
        .method("POST")
        .uri("/v1/promotions/matches")
        .header("content-type", "application/json")
        .body(Body::from("{\"promotions\": ["))
        .unwrap();

    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_shape_returns_json_error() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let request = post_json("/v1/promotions/best", json!({ "promotions": [] }));

    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_bad_path_and_query_return_json_errors() {
    let (status, body) = send(
        state_with(Arc::new(InMemoryStore::new()), 10),
        get("/v1/goals/not-a-uuid/best-promotion"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let uri = format!("/v1/users/{}/suggestions?user_miles=lots", Uuid::new_v4());
    let (status, body) = send(state_with(Arc::new(InMemoryStore::new()), 10), get(&uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_best_promotion_prefers_redeemable() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let request = post_json(
        "/v1/promotions/best",
        json!({
            "promotions": [promotion_json("Miami", 20000), promotion_json("Orlando", 8000)],
            "goal": goal_json("Viagem para Miami", Some("ou a Disney")),
            "user_miles": 10000,
        }),
    );

    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["promotion"]["destino"], "Orlando");
}

#[tokio::test]
async fn test_best_promotion_without_match_is_null() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let request = post_json(
        "/v1/promotions/best",
        json!({
            "promotions": [promotion_json("Miami", 20000)],
            "goal": goal_json("Trocar de carro", None),
            "user_miles": 10000,
        }),
    );

    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_best_promotion_rejects_negative_miles() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let request = post_json(
        "/v1/promotions/best",
        json!({
            "promotions": [],
            "goal": goal_json("Miami", None),
            "user_miles": -1,
        }),
    );

    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("user_miles"));
}

#[tokio::test]
async fn test_stored_goal_best_promotion_defaults_to_goal_balance() {
    let store = Arc::new(InMemoryStore::new());
    let mut goal = MileageGoal::new("Aruba ou qualquer lugar no Caribe", None, 60000.0);
    goal.current_miles = 26000.0;
    let goal_id = goal.id;

    store.insert_goal(Uuid::new_v4(), goal).await;
    store.insert_promotion(ScrapedPromotion::new("LATAM Pass", "Aruba", 40000.0)).await;
    store.insert_promotion(ScrapedPromotion::new("LATAM Pass", "Punta Cana", 25000.0)).await;
    store.insert_promotion(ScrapedPromotion::new("LATAM Pass", "Paris", 10000.0)).await;

    // The goal's 26000 miles cover Punta Cana but not the stronger Aruba match
    let uri = format!("/v1/goals/{}/best-promotion", goal_id);
    let (status, body) = send(state_with(store.clone(), 10), get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["promotion"]["destino"], "Punta Cana");
    assert_eq!(body["matchTier"], "REGION");

    let uri = format!("/v1/goals/{}/best-promotion?user_miles=0", goal_id);
    let (status, body) = send(state_with(store, 10), get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["promotion"]["destino"], "Aruba");
    assert_eq!(body["matchScore"], 100);
}

#[tokio::test]
async fn test_stored_goal_not_found() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let uri = format!("/v1/goals/{}/best-promotion", Uuid::new_v4());
    let (status, body) = send(state, get(&uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().starts_with("Goal"));
}

#[tokio::test]
async fn test_user_suggestions_are_capped() {
    let store = Arc::new(InMemoryStore::new());
    let user_id = Uuid::new_v4();

    for name in ["Roma", "Madrid", "Londres"] {
        store.insert_goal(user_id, MileageGoal::new(name, None, 50000.0)).await;
        store.insert_promotion(ScrapedPromotion::new("Smiles", name, 30000.0)).await;
    }
    store.insert_goal(Uuid::new_v4(), MileageGoal::new("Dubai", None, 50000.0)).await;

    let state = state_with(store, 2);
    let uri = format!("/v1/users/{}/suggestions?user_miles=35000", user_id);
    let (status, body) = send(state, get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    let suggestions = body.as_array().unwrap();
    assert_eq!(suggestions.len(), 2);
    assert!(suggestions.iter().all(|s| s["redeemable"] == true));
    assert!(suggestions.iter().all(|s| s["bestMatch"]["matchScore"] == 100));
}

#[tokio::test]
async fn test_user_without_goals_gets_empty_suggestions() {
    let state = state_with(Arc::new(InMemoryStore::new()), 10);
    let uri = format!("/v1/users/{}/suggestions", Uuid::new_v4());
    let (status, body) = send(state, get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
