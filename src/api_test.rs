use super::*;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

// =============================================================
// URL handling
// =============================================================

#[test]
fn base_url_trailing_slash_is_normalized() {
    let api = ApiClient::new("http://localhost:8000/");
    assert_eq!(api.url("/undo"), "http://localhost:8000/undo");

    let api = ApiClient::new("http://localhost:8000");
    assert_eq!(api.url("/undo"), "http://localhost:8000/undo");
}

// =============================================================
// Mock game server
// =============================================================

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn start_new_game_then_fetch_board() {
    let router = Router::new()
        .route("/start_new_game", post(|| async { Json(json!({})) }))
        .route(
            "/get_board_state",
            get(|| async { Json(json!({"board": [[0, 2], [4, 0]]})) }),
        );
    let base = serve(router).await;
    let api = ApiClient::new(&base);

    let settings = GameSettings {
        height: 2,
        width: 2,
        win: 2048,
    };
    api.start_new_game(&settings).await.unwrap();
    let board = api.get_board_state().await.unwrap();
    assert_eq!(board, vec![vec![0, 2], vec![4, 0]]);
}

#[tokio::test]
async fn start_failure_carries_the_server_message() {
    let router = Router::new().route(
        "/start_new_game",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"message": "Board too small"})),
            )
        }),
    );
    let base = serve(router).await;
    let api = ApiClient::new(&base);

    let err = api
        .start_new_game(&GameSettings::default())
        .await
        .unwrap_err();
    match &err {
        ApiError::Status { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message.as_str(), "Board too small");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.server_message(), Some("Board too small"));
}

#[tokio::test]
async fn user_move_sends_the_direction_string() {
    let router = Router::new().route(
        "/make_user_move",
        post(|Json(body): Json<Value>| async move {
            let direction = body["direction"].as_str().unwrap_or("?").to_string();
            Json(json!({"status": "success", "message": format!("Moved {direction}")}))
        }),
    );
    let base = serve(router).await;
    let api = ApiClient::new(&base);

    let response = api.make_user_move(Direction::Up).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.message.as_deref(), Some("Moved Up"));
}

#[tokio::test]
async fn rejected_move_is_a_verdict_not_an_error() {
    let router = Router::new().route(
        "/make_user_move",
        post(|| async { Json(json!({"status": "error", "message": "No valid move"})) }),
    );
    let base = serve(router).await;
    let api = ApiClient::new(&base);

    let response = api.make_user_move(Direction::Left).await.unwrap();
    assert!(!response.is_success());
    assert_eq!(response.message.as_deref(), Some("No valid move"));
}

#[tokio::test]
async fn ai_move_and_undo_share_the_move_contract() {
    let router = Router::new()
        .route(
            "/make_ai_move",
            post(|| async { Json(json!({"status": "success", "message": "AI moved Up"})) }),
        )
        .route(
            "/undo",
            post(|| async { Json(json!({"status": "error", "message": "No moves to undo!"})) }),
        );
    let base = serve(router).await;
    let api = ApiClient::new(&base);

    let ai = api.make_ai_move().await.unwrap();
    assert!(ai.is_success());
    assert_eq!(ai.message.as_deref(), Some("AI moved Up"));

    let undo = api.undo().await.unwrap();
    assert!(!undo.is_success());
}

#[tokio::test]
async fn game_state_reports_terminal_flags() {
    let router = Router::new().route(
        "/get_game_state",
        get(|| async { Json(json!({"is_win": true, "is_gameover": true})) }),
    );
    let base = serve(router).await;
    let api = ApiClient::new(&base);

    let state = api.get_game_state().await.unwrap();
    assert!(state.is_win);
    assert!(state.is_gameover);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Reserved port with nothing listening
    let api = ApiClient::new("http://127.0.0.1:1");
    let err = api.restart_game().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
