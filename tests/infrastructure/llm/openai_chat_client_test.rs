use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use fluency_coach::application::ports::{ChatMessage, ChatProfile, LlmClient, LlmClientError};
use fluency_coach::infrastructure::llm::OpenAiChatClient;

type ReceivedBodies = Arc<Mutex<Vec<serde_json::Value>>>;

async fn start_mock_chat_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, ReceivedBodies, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let received: ReceivedBodies = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/chat/completions",
            post(
                move |State(received): State<ReceivedBodies>,
                      Json(body): Json<serde_json::Value>| async move {
                    received.lock().unwrap().push(body);
                    let status = StatusCode::from_u16(response_status).unwrap();
                    (
                        status,
                        [(axum::http::header::CONTENT_TYPE, "application/json")],
                        response_body,
                    )
                        .into_response()
                },
            ),
        )
        .with_state(received.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, received, shutdown_tx)
}

const COMPLETION: &str = r#"{"choices":[{"message":{"role":"assistant","content":"Sounds great!"}}]}"#;

#[tokio::test]
async fn given_conversation_profile_when_completing_then_sends_model_temperature_and_roles() {
    let (base_url, received, shutdown_tx) = start_mock_chat_server(200, COMPLETION).await;
    let client = OpenAiChatClient::new(
        reqwest::Client::new(),
        &base_url,
        "test-key".to_string(),
        ChatProfile::conversation("gpt-4o-mini".to_string(), 0.5, 1000),
    );

    let reply = client
        .complete(&[ChatMessage::system("Be kind."), ChatMessage::user("Hi")])
        .await
        .unwrap();

    assert_eq!(reply, "Sounds great!");
    let body = received.lock().unwrap()[0].clone();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["temperature"], 0.5);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Hi");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_two_profiles_sharing_one_client_when_completing_then_each_uses_own_temperature() {
    let (base_url, received, shutdown_tx) = start_mock_chat_server(200, COMPLETION).await;
    let http = reqwest::Client::new();
    let conversation = OpenAiChatClient::new(
        http.clone(),
        &base_url,
        "test-key".to_string(),
        ChatProfile::conversation("gpt-4o-mini".to_string(), 0.5, 1000),
    );
    let evaluation = OpenAiChatClient::new(
        http,
        &base_url,
        "test-key".to_string(),
        ChatProfile::evaluation("gpt-4o-mini".to_string(), 0.0),
    );

    conversation.complete(&[ChatMessage::user("a")]).await.unwrap();
    evaluation.complete(&[ChatMessage::user("b")]).await.unwrap();

    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies[0]["temperature"], 0.5);
    assert_eq!(bodies[1]["temperature"], 0.0);
    assert_eq!(evaluation.profile().name, ChatProfile::EVALUATION);
    assert_eq!(evaluation.profile().max_history_tokens(), None);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_completing_then_returns_rate_limited() {
    let (base_url, _, shutdown_tx) = start_mock_chat_server(429, r#"{"error":"slow down"}"#).await;
    let client = OpenAiChatClient::new(
        reqwest::Client::new(),
        &base_url,
        "test-key".to_string(),
        ChatProfile::evaluation("gpt-4o-mini".to_string(), 0.0),
    );

    let result = client.complete(&[ChatMessage::user("Hi")]).await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_returns_invalid_response() {
    let (base_url, _, shutdown_tx) = start_mock_chat_server(200, r#"{"choices":[]}"#).await;
    let client = OpenAiChatClient::new(
        reqwest::Client::new(),
        &base_url,
        "test-key".to_string(),
        ChatProfile::evaluation("gpt-4o-mini".to_string(), 0.0),
    );

    let result = client.complete(&[ChatMessage::user("Hi")]).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_api_error() {
    let (base_url, _, shutdown_tx) = start_mock_chat_server(500, r#"{"error":"boom"}"#).await;
    let client = OpenAiChatClient::new(
        reqwest::Client::new(),
        &base_url,
        "test-key".to_string(),
        ChatProfile::evaluation("gpt-4o-mini".to_string(), 0.0),
    );

    let result = client.complete(&[ChatMessage::user("Hi")]).await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}
