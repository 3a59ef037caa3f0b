use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use fluency_coach::application::ports::{TranscriptionEngine, TranscriptionError};
use fluency_coach::infrastructure::audio::OpenAiWhisperEngine;

type ReceivedFields = Arc<Mutex<Vec<(String, String)>>>;

async fn start_mock_whisper_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, ReceivedFields, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let received: ReceivedFields = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/audio/transcriptions",
            post(
                move |State(received): State<ReceivedFields>, mut multipart: Multipart| async move {
                    while let Ok(Some(field)) = multipart.next_field().await {
                        let name = field.name().unwrap_or_default().to_string();
                        let value = if name == "file" {
                            field.file_name().unwrap_or_default().to_string()
                        } else {
                            field.text().await.unwrap_or_default()
                        };
                        received.lock().unwrap().push((name, value));
                    }
                    let status = StatusCode::from_u16(response_status).unwrap();
                    (status, response_body).into_response()
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

fn engine(base_url: String) -> OpenAiWhisperEngine {
    OpenAiWhisperEngine::new(
        reqwest::Client::new(),
        "test-key".to_string(),
        Some(base_url),
        None,
        None,
    )
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_trimmed_text() {
    let (base_url, _, shutdown_tx) = start_mock_whisper_server(200, "  Hello from Whisper\n").await;

    let result = engine(base_url).transcribe(b"fake audio bytes").await;

    assert_eq!(result.unwrap(), "Hello from Whisper");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_default_settings_when_transcribing_then_sends_model_language_and_text_format() {
    let (base_url, received, shutdown_tx) = start_mock_whisper_server(200, "ok").await;

    engine(base_url).transcribe(b"fake audio").await.unwrap();

    let fields = received.lock().unwrap().clone();
    assert!(fields.contains(&("model".to_string(), "whisper-1".to_string())));
    assert!(fields.contains(&("language".to_string(), "en".to_string())));
    assert!(fields.contains(&("response_format".to_string(), "text".to_string())));
    assert!(fields.contains(&("file".to_string(), "audio.wav".to_string())));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_transcribing_then_returns_api_error() {
    let (base_url, _, shutdown_tx) =
        start_mock_whisper_server(400, r#"{"error": {"message": "bad audio"}}"#).await;

    let result = engine(base_url).transcribe(b"bad audio").await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}
